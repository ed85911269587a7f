use chrono::{DateTime, Utc};
use rocket::serde::{Deserialize, Serialize};
use sqlx::Row;

use crate::identity::PlayerId;

pub type ScoreId = i64;

/// Time format sent to clients, e.g. "Aug 07, 2026 03:04:05 PM".
pub const TIME_FORMAT_STRING: &str = "%b %d, %Y %I:%M:%S %p";

/// A persisted game outcome attributed to one player.
///
/// `played` documents the moment of insertion and never changes afterwards;
/// `player` is always the caller that inserted the record.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Score {
    pub id: ScoreId,
    pub outcome: String,
    pub played: DateTime<Utc>,
    pub player: PlayerId,
}

impl Score {
    /// Decodes one row of the `scores` table.
    pub fn from_row(row: &sqlx::any::AnyRow) -> Self {
        let id = row.get_unchecked::<ScoreId, usize>(0);
        let outcome = row.get_unchecked::<String, usize>(1);
        let played = row.get_unchecked::<i64, usize>(2);
        let player = row.get_unchecked::<String, usize>(3);

        Self {
            id,
            outcome,
            played: DateTime::from_timestamp_millis(played)
                .expect("invalid timestamp in the scores table"),
            player: PlayerId::new(player),
        }
    }

    /// Formats the insertion time in the fixed human-readable form.
    pub fn timestamp(&self) -> String {
        self.played.format(TIME_FORMAT_STRING).to_string()
    }

    /// Translates the record into its wire form. The owning player is never
    /// reported back to the caller.
    pub fn to_message(&self) -> ScoreMessage {
        ScoreMessage {
            id: self.id,
            outcome: self.outcome.clone(),
            played: self.timestamp(),
        }
    }
}

/// Wire form of a persisted score.
#[derive(Clone, Serialize, Deserialize, PartialEq, Debug)]
#[serde(crate = "rocket::serde")]
pub struct ScoreMessage {
    pub id: ScoreId,
    pub outcome: String,
    pub played: String,
}

/// Wire form of a score about to be inserted. `outcome` is the only field a
/// caller supplies; id, player and insertion time are assigned by the server.
#[derive(Clone, Serialize, Deserialize, PartialEq, Debug)]
#[serde(crate = "rocket::serde")]
pub struct NewScoreMessage {
    pub outcome: Option<String>,
}
