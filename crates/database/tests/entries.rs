//! Integration tests for entry persistence.
//!
//! These tests require a running Postgres with `DATABASE_URL` set
//! (a scratch database: the tests insert rows and do not clean up,
//! since the table is append-only by design).
//!
//! Run the offline tests:
//!   cargo test --test entries
//!
//! Run the live tests (require Postgres):
//!   cargo test --test entries -- --ignored

use std::env;

use database::{entry, Database, DatabaseError, NewEntry, ValidationError};
use serde_json::json;

async fn test_db() -> Database {
    let _ = dotenvy::dotenv();
    let url = env::var("DATABASE_URL").expect("DATABASE_URL not set");
    let db = Database::connect(&url).await.unwrap();
    db.migrate().await.unwrap();
    db
}

#[tokio::test]
#[ignore = "requires a running Postgres (DATABASE_URL)"]
async fn test_insert_ids_strictly_increase() {
    let db = test_db().await;

    let first = entry::insert_entry(
        db.pool(),
        &NewEntry::new(9001, "finance", json!({"amount": 47, "note": "dinner"})),
    )
    .await
    .unwrap();

    let second = entry::insert_entry(
        db.pool(),
        &NewEntry::new(9001, "fitness", json!({"exercise": "squats"})),
    )
    .await
    .unwrap();

    assert!(second.id > first.id);
    assert_eq!(first.category, "finance");
    assert_eq!(first.data["amount"], 47);
}

#[tokio::test]
#[ignore = "requires a running Postgres (DATABASE_URL)"]
async fn test_newest_entry_comes_back_first() {
    let db = test_db().await;

    entry::insert_entry(db.pool(), &NewEntry::new(9002, "trips", json!({"destination": "Tokyo"})))
        .await
        .unwrap();
    let newest = entry::insert_entry(
        db.pool(),
        &NewEntry::new(9002, "finance", json!({"amount": 47, "note": "dinner"})),
    )
    .await
    .unwrap();

    let all = entry::list_entries(db.pool()).await.unwrap();
    assert_eq!(all.first().map(|e| e.id), Some(newest.id));

    let for_user = entry::list_entries_for_user(db.pool(), 9002).await.unwrap();
    assert_eq!(for_user.first().map(|e| e.id), Some(newest.id));
}

#[tokio::test]
#[ignore = "requires a running Postgres (DATABASE_URL)"]
async fn test_same_category_stays_distinct() {
    let db = test_db().await;

    let a = entry::insert_entry(
        db.pool(),
        &NewEntry::new(9003, "todos", json!({"task": "buy milk"})),
    )
    .await
    .unwrap();
    let b = entry::insert_entry(
        db.pool(),
        &NewEntry::new(9003, "todos", json!({"task": "call bank"})),
    )
    .await
    .unwrap();

    // Two inserts with the same category are two records, never merged
    assert_ne!(a.id, b.id);

    let todos = entry::list_entries_by_category(db.pool(), "todos").await.unwrap();
    assert!(todos.iter().any(|e| e.id == a.id));
    assert!(todos.iter().any(|e| e.id == b.id));

    let counts = entry::count_by_category(db.pool(), 9003).await.unwrap();
    let todo_count = counts
        .iter()
        .find(|(category, _)| category == "todos")
        .map(|(_, n)| *n)
        .unwrap();
    assert!(todo_count >= 2);
}

#[tokio::test]
#[ignore = "requires a running Postgres (DATABASE_URL)"]
async fn test_timestamps_populated_by_default() {
    let db = test_db().await;

    let stored = entry::insert_entry(
        db.pool(),
        &NewEntry::new(9004, "fitness", json!({"exercise": "bench"})),
    )
    .await
    .unwrap();

    // Both columns default to NOW(); neither is ever null in practice
    assert!(stored.created_at.timestamp() > 0);
    assert!(stored.timestamp.timestamp() > 0);
}

// ============================================================================
// Offline tests (no database required)
// ============================================================================

#[tokio::test]
async fn test_insert_rejects_empty_category() {
    // Validation fires before any connection is used, so a lazy pool that
    // never connects is enough here.
    let pool = sqlx::postgres::PgPoolOptions::new()
        .connect_lazy("postgres://localhost/unused")
        .unwrap();

    let result = entry::insert_entry(&pool, &NewEntry::new(1, "  ", json!({}))).await;
    assert!(matches!(
        result,
        Err(DatabaseError::Validation(ValidationError::Empty(_)))
    ));
}

#[tokio::test]
async fn test_insert_rejects_null_data() {
    let pool = sqlx::postgres::PgPoolOptions::new()
        .connect_lazy("postgres://localhost/unused")
        .unwrap();

    let result = entry::insert_entry(&pool, &NewEntry::new(1, "finance", json!(null))).await;
    assert!(matches!(
        result,
        Err(DatabaseError::Validation(ValidationError::NullData))
    ));
}
