mod query;
pub mod requests;
mod score;

pub use query::{OrderDirection, OrderField, PlayerFilter, ScoreOrder, ScoreOrdering, ScoreQuery};
pub use score::{NewScoreMessage, Score, ScoreId, ScoreMessage, TIME_FORMAT_STRING};

pub type DatabasePool = sqlx::any::AnyPool;

/// Creates the `scores` table when the database does not have it yet.
pub async fn init_scores_table(database: &DatabasePool) -> Result<(), sqlx::Error> {
    sqlx::query(
        "CREATE TABLE IF NOT EXISTS scores ( \
            id INTEGER PRIMARY KEY, \
            outcome TEXT NOT NULL, \
            played BIGINT NOT NULL, \
            player TEXT NOT NULL \
        )",
    )
    .execute(database)
    .await?;
    Ok(())
}
