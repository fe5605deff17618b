//! Bike service — listing bikes and marking selections as tracked.
//!
//! DESIGN
//! ======
//! Routes talk to a `BikeRepository` trait object held in `AppState`. The
//! Postgres implementation is used in production; tests swap in an in-memory
//! one.
//!
//! ERROR HANDLING
//! ==============
//! `mark_tracked` is all-or-nothing: if any requested id does not exist, no
//! bike is updated and the missing ids are reported.

use std::collections::BTreeSet;

use sqlx::PgPool;
use tracing::info;

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum BikeError {
    #[error("bikes not found: {0:?}")]
    NotFound(Vec<i64>),
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Row returned from bike queries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BikeRow {
    pub id: i64,
    pub name: String,
    pub tracked: bool,
}

/// Storage seam for bikes.
#[async_trait::async_trait]
pub trait BikeRepository: Send + Sync {
    /// List all bikes ordered by id.
    ///
    /// # Errors
    ///
    /// Returns a database error if the query fails.
    async fn list_bikes(&self) -> Result<Vec<BikeRow>, BikeError>;

    /// Mark the given bikes as tracked. Duplicate ids are ignored.
    /// Returns the number of distinct bikes marked.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` with the unknown ids if any id does not exist, or a
    /// database error.
    async fn mark_tracked(&self, ids: &[i64]) -> Result<u64, BikeError>;
}

// =============================================================================
// HELPERS
// =============================================================================

/// Sorted, de-duplicated copy of `ids`.
#[must_use]
pub fn dedup_ids(ids: &[i64]) -> Vec<i64> {
    ids.iter().copied().collect::<BTreeSet<_>>().into_iter().collect()
}

/// Ids in `requested` that do not appear in `found`, in `requested` order.
#[must_use]
pub fn missing_ids(requested: &[i64], found: &[i64]) -> Vec<i64> {
    let found: BTreeSet<i64> = found.iter().copied().collect();
    requested
        .iter()
        .copied()
        .filter(|id| !found.contains(id))
        .collect()
}

// =============================================================================
// POSTGRES
// =============================================================================

pub struct PgBikeRepository {
    pool: PgPool,
}

impl PgBikeRepository {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl BikeRepository for PgBikeRepository {
    async fn list_bikes(&self) -> Result<Vec<BikeRow>, BikeError> {
        let rows = sqlx::query_as::<_, (i64, String, bool)>(
            "SELECT id, name, tracked
             FROM bikes
             ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|(id, name, tracked)| BikeRow { id, name, tracked })
            .collect())
    }

    async fn mark_tracked(&self, ids: &[i64]) -> Result<u64, BikeError> {
        let ids = dedup_ids(ids);
        if ids.is_empty() {
            return Ok(0);
        }

        let mut tx = self.pool.begin().await?;
        let found: Vec<i64> = sqlx::query_scalar("SELECT id FROM bikes WHERE id = ANY($1) FOR UPDATE")
            .bind(ids.clone())
            .fetch_all(&mut *tx)
            .await?;

        let missing = missing_ids(&ids, &found);
        if !missing.is_empty() {
            tx.rollback().await?;
            return Err(BikeError::NotFound(missing));
        }

        let result = sqlx::query("UPDATE bikes SET tracked = TRUE WHERE id = ANY($1)")
            .bind(ids)
            .execute(&mut *tx)
            .await?;
        tx.commit().await?;

        info!(count = result.rows_affected(), "bikes marked tracked");
        Ok(result.rows_affected())
    }
}

#[cfg(test)]
#[path = "bike_test.rs"]
mod tests;
