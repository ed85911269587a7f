use rocket::FromFormField;

use crate::identity::PlayerId;

/// Client-facing ordering selector for score listings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, FromFormField)]
pub enum ScoreOrder {
    /// Most recently played first (the default).
    #[field(value = "when")]
    When,
    /// Ascending by outcome text.
    #[field(value = "text")]
    Text,
}

impl Default for ScoreOrder {
    fn default() -> Self {
        ScoreOrder::When
    }
}

/// Columns a score listing can be ordered by.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OrderField {
    Played,
    Outcome,
}

impl OrderField {
    fn column(self) -> &'static str {
        match self {
            OrderField::Played => "played",
            OrderField::Outcome => "outcome",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OrderDirection {
    Ascending,
    Descending,
}

impl OrderDirection {
    fn keyword(self) -> &'static str {
        match self {
            OrderDirection::Ascending => "ASC",
            OrderDirection::Descending => "DESC",
        }
    }
}

/// Equality filter on the owning player. Every score query carries one:
/// a caller only ever sees its own records.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlayerFilter {
    pub player: PlayerId,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScoreOrdering {
    pub field: OrderField,
    pub direction: OrderDirection,
}

/// The full parameter set of a score query, kept separate from the store's
/// own query types.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScoreQuery {
    pub filter: PlayerFilter,
    pub order: ScoreOrdering,
}

impl ScoreQuery {
    /// Builds the query for one player's scores with the requested ordering:
    /// `When` lists the most recent records first, `Text` sorts by the
    /// outcome string.
    pub fn for_player(player: PlayerId, order: ScoreOrder) -> Self {
        let order = match order {
            ScoreOrder::When => ScoreOrdering {
                field: OrderField::Played,
                direction: OrderDirection::Descending,
            },
            ScoreOrder::Text => ScoreOrdering {
                field: OrderField::Outcome,
                direction: OrderDirection::Ascending,
            },
        };
        Self {
            filter: PlayerFilter { player },
            order,
        }
    }

    /// Renders the query as SQL. The player value itself is bound as a
    /// parameter, never interpolated into the statement.
    pub fn to_sql(&self) -> String {
        format!(
            "SELECT id, outcome, played, player FROM scores WHERE player = ? ORDER BY {} {}",
            self.order.field.column(),
            self.order.direction.keyword(),
        )
    }
}
