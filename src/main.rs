use rocket::*;

mod board;
mod database;
mod identity;
mod request_error;

use database::DatabasePool;

#[launch]
async fn rocket() -> _ {
    // Connect to a database
    dotenv::dotenv().ok();
    let database_url =
        dotenv::var("DATABASE_URL").expect("DATABASE_URL environment variable is not set");

    // An in-memory SQLite database only lives as long as its one connection,
    // so the pool must not spread requests over several of them.
    let database_pool = sqlx::any::AnyPoolOptions::new()
        .max_connections(1)
        .connect(&database_url)
        .await
        .expect("failed to connect to a database");

    database::init_scores_table(&database_pool)
        .await
        .expect("failed to prepare the scores table");

    // Build the rocket
    rocket::build()
        .mount(
            "/",
            routes![
                index,
                board::board_get_move,
                database::requests::scores_list,
                database::requests::scores_insert
            ],
        )
        .manage::<DatabasePool>(database_pool)
}

#[get("/")]
fn index() -> &'static str {
    "This is the tic-tac-toe API server!"
}
