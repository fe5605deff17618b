//! Postgres pool for the bike repository.
//!
//! The schema (owners, bikes, parts) lives in `src/db/migrations` and is
//! embedded at compile time. `init_pool` applies any pending migration before
//! returning, so a pool handed to `PgBikeRepository` always sees the current
//! tables.

use sqlx::PgPool;
use sqlx::migrate::Migrator;
use sqlx::postgres::PgPoolOptions;

static MIGRATOR: Migrator = sqlx::migrate!("src/db/migrations");

/// Connect to `database_url` with at most `max_connections` connections and
/// bring the schema up to date.
///
/// # Errors
///
/// Returns an error if the connection fails or a migration cannot be applied.
pub async fn init_pool(database_url: &str, max_connections: u32) -> Result<PgPool, sqlx::Error> {
    let pool = PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await?;

    MIGRATOR.run(&pool).await?;
    tracing::info!(migrations = MIGRATOR.iter().count(), "schema up to date");

    Ok(pool)
}
