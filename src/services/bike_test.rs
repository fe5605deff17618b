use super::*;
use crate::state::test_helpers::{MemoryBikeRepository, bike_row};

// =============================================================================
// Helpers
// =============================================================================

#[test]
fn dedup_ids_sorts_and_removes_duplicates() {
    assert_eq!(dedup_ids(&[3, 1, 3, 2, 1]), vec![1, 2, 3]);
    assert!(dedup_ids(&[]).is_empty());
}

#[test]
fn missing_ids_preserves_request_order() {
    assert_eq!(missing_ids(&[5, 1, 9, 2], &[1, 2]), vec![5, 9]);
    assert!(missing_ids(&[1, 2], &[2, 1]).is_empty());
}

#[test]
fn bike_error_messages() {
    assert_eq!(BikeError::NotFound(vec![4, 7]).to_string(), "bikes not found: [4, 7]");
    let db = BikeError::from(sqlx::Error::PoolTimedOut);
    assert!(db.to_string().starts_with("database error:"));
}

// =============================================================================
// In-memory repository contract
// =============================================================================

#[tokio::test]
async fn list_bikes_orders_by_id() {
    let repo = MemoryBikeRepository::with_bikes(vec![bike_row(3, "Tandem"), bike_row(1, "Roadster")]);
    let ids: Vec<i64> = repo.list_bikes().await.unwrap().into_iter().map(|b| b.id).collect();
    assert_eq!(ids, vec![1, 3]);
}

#[tokio::test]
async fn mark_tracked_sets_flag_on_each_distinct_bike() {
    let repo = MemoryBikeRepository::with_bikes(vec![bike_row(1, "Roadster"), bike_row(2, "Cruiser"), bike_row(3, "Tandem")]);

    let marked = repo.mark_tracked(&[1, 3, 1]).await.unwrap();
    assert_eq!(marked, 2);

    let tracked: Vec<i64> = repo
        .list_bikes()
        .await
        .unwrap()
        .into_iter()
        .filter(|b| b.tracked)
        .map(|b| b.id)
        .collect();
    assert_eq!(tracked, vec![1, 3]);
}

#[tokio::test]
async fn mark_tracked_with_unknown_id_changes_nothing() {
    let repo = MemoryBikeRepository::with_bikes(vec![bike_row(1, "Roadster")]);

    let err = repo.mark_tracked(&[1, 42]).await.unwrap_err();
    assert!(matches!(err, BikeError::NotFound(ref ids) if ids == &vec![42]));
    assert!(repo.list_bikes().await.unwrap().iter().all(|b| !b.tracked));
}

#[tokio::test]
async fn mark_tracked_empty_selection_is_noop() {
    let repo = MemoryBikeRepository::with_bikes(vec![bike_row(1, "Roadster")]);
    assert_eq!(repo.mark_tracked(&[]).await.unwrap(), 0);
}

// =============================================================================
// Postgres (requires DATABASE_URL)
// =============================================================================

#[cfg(feature = "live-db-tests")]
#[tokio::test]
async fn pg_repository_lists_and_marks_bikes() {
    let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required for live-db tests");
    let pool = crate::db::init_pool(&url, 2).await.expect("database init failed");
    let inserted: i64 = sqlx::query_scalar("INSERT INTO bikes (name) VALUES ('live-db-test') RETURNING id")
        .fetch_one(&pool)
        .await
        .unwrap();

    let repo = PgBikeRepository::new(pool.clone());
    assert!(repo.list_bikes().await.unwrap().iter().any(|b| b.id == inserted));
    assert_eq!(repo.mark_tracked(&[inserted]).await.unwrap(), 1);
    assert!(matches!(repo.mark_tracked(&[inserted, -1]).await, Err(BikeError::NotFound(_))));

    sqlx::query("DELETE FROM bikes WHERE id = $1")
        .bind(inserted)
        .execute(&pool)
        .await
        .unwrap();
}
