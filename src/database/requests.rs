use chrono::Utc;
use rocket::serde::json::Json;
use rocket::*;
use sqlx::Row;

use crate::identity::{self, CurrentPlayer, PlayerId};
use crate::request_error::{RequestError, RequestResult};

use super::*;

/// Appends one score record owned by `caller` and returns it together with
/// the id and insertion time the store assigned. Identical calls append
/// distinct records.
pub async fn insert_score(
    caller: &PlayerId,
    outcome: &str,
    database: &DatabasePool,
) -> RequestResult<Score> {
    let played = Utc::now();

    let row =
        sqlx::query("INSERT INTO scores (outcome, played, player) VALUES (?, ?, ?) RETURNING id")
            .bind(outcome.to_owned())
            .bind(played.timestamp_millis())
            .bind(caller.to_string())
            .fetch_one(database)
            .await?;
    let id = row.get_unchecked::<ScoreId, usize>(0);

    ::log::info!("player {} recorded a score (id {})", caller, id);

    Ok(Score {
        id,
        outcome: outcome.to_owned(),
        played,
        player: caller.clone(),
    })
}

/// Fetches all scores owned by `caller` in the requested order.
pub async fn list_scores(
    caller: &PlayerId,
    order: ScoreOrder,
    database: &DatabasePool,
) -> RequestResult<Vec<Score>> {
    let query = ScoreQuery::for_player(caller.clone(), order);

    let rows = sqlx::query(&query.to_sql())
        .bind(query.filter.player.to_string())
        .fetch_all(database)
        .await?;

    Ok(rows.iter().map(Score::from_row).collect())
}

/// Lists the scores of the current player. `order=when` (the default) gives
/// the most recent records first, `order=text` sorts by the outcome string.
#[get("/scores?<order>", format = "json")]
pub async fn scores_list(
    order: Option<ScoreOrder>,
    player: CurrentPlayer,
    database: &State<DatabasePool>,
) -> RequestResult<Json<Vec<ScoreMessage>>> {
    let caller = identity::require_player(player)?;

    let scores = list_scores(&caller, order.unwrap_or_default(), database.inner()).await?;
    Ok(Json(scores.iter().map(Score::to_message).collect()))
}

/// Records a game outcome for the current player.
#[post("/scores", format = "json", data = "<score>")]
pub async fn scores_insert(
    score: Json<NewScoreMessage>,
    player: CurrentPlayer,
    database: &State<DatabasePool>,
) -> RequestResult<Json<ScoreMessage>> {
    let caller = identity::require_player(player)?;

    let outcome = match score.0.outcome {
        Some(outcome) if !outcome.is_empty() => outcome,
        _ => return Err(RequestError::MissingOutcome),
    };

    let score = insert_score(&caller, &outcome, database.inner()).await?;
    Ok(Json(score.to_message()))
}
