//! Demo data for local development.
//!
//! Inserts two owners with a few bikes so the bike modal has something to
//! show. Every statement is idempotent; re-running the seed adds nothing.

use sqlx::PgPool;
use tracing::info;

pub struct DemoOwner {
    pub username: &'static str,
    pub email: &'static str,
    pub bikes: &'static [&'static str],
}

pub const DEMO_OWNERS: &[DemoOwner] = &[
    DemoOwner { username: "bob", email: "bob@bob.com", bikes: &["Roadster", "Cruiser"] },
    DemoOwner { username: "joe", email: "joe@joe.com", bikes: &["Gravel Grinder"] },
];

/// Insert the demo owners and their bikes. Returns the number of bikes added.
///
/// # Errors
///
/// Returns a database error if any insert fails.
pub async fn seed_demo_data(pool: &PgPool) -> Result<u64, sqlx::Error> {
    info!("seeding demo data");
    let mut added = 0;
    for owner in DEMO_OWNERS {
        sqlx::query("INSERT INTO owners (username, email) VALUES ($1, $2) ON CONFLICT (username) DO NOTHING")
            .bind(owner.username)
            .bind(owner.email)
            .execute(pool)
            .await?;

        for bike in owner.bikes {
            let result = sqlx::query(
                "INSERT INTO bikes (name, owner_id)
                 SELECT $1, o.id FROM owners o
                 WHERE o.username = $2
                   AND NOT EXISTS (SELECT 1 FROM bikes b WHERE b.owner_id = o.id AND b.name = $1)",
            )
            .bind(*bike)
            .bind(owner.username)
            .execute(pool)
            .await?;
            added += result.rows_affected();
        }
    }
    info!(added, "demo data seeded");
    Ok(added)
}

#[cfg(test)]
#[path = "seed_test.rs"]
mod tests;
