//! Dashboard entry persistence.

use sqlx::PgPool;

use crate::models::{DashboardEntry, NewEntry};
use crate::validation::validate_new_entry;
use crate::Result;

/// Insert one entry and return the stored row.
pub async fn insert_entry(pool: &PgPool, entry: &NewEntry) -> Result<DashboardEntry> {
    validate_new_entry(entry)?;

    let row = sqlx::query_as::<_, DashboardEntry>(
        r#"
        INSERT INTO dashboard_entries (user_id, category, data)
        VALUES ($1, $2, $3)
        RETURNING id, user_id, category, data, created_at, timestamp
        "#,
    )
    .bind(entry.user_id)
    .bind(entry.category.trim())
    .bind(&entry.data)
    .fetch_one(pool)
    .await?;

    Ok(row)
}

/// Fetch all entries, newest first.
///
/// Ordered by `created_at DESC` with `id DESC` as tiebreak, so inserts
/// landing in the same timestamp tick still come back newest first.
pub async fn list_entries(pool: &PgPool) -> Result<Vec<DashboardEntry>> {
    let rows = sqlx::query_as::<_, DashboardEntry>(
        r#"
        SELECT id, user_id, category, data, created_at, timestamp
        FROM dashboard_entries
        ORDER BY created_at DESC, id DESC
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

/// Fetch all entries in one category, newest first.
pub async fn list_entries_by_category(
    pool: &PgPool,
    category: &str,
) -> Result<Vec<DashboardEntry>> {
    let rows = sqlx::query_as::<_, DashboardEntry>(
        r#"
        SELECT id, user_id, category, data, created_at, timestamp
        FROM dashboard_entries
        WHERE category = $1
        ORDER BY created_at DESC, id DESC
        "#,
    )
    .bind(category)
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

/// Fetch all entries for one user, newest first.
pub async fn list_entries_for_user(pool: &PgPool, user_id: i64) -> Result<Vec<DashboardEntry>> {
    let rows = sqlx::query_as::<_, DashboardEntry>(
        r#"
        SELECT id, user_id, category, data, created_at, timestamp
        FROM dashboard_entries
        WHERE user_id = $1
        ORDER BY created_at DESC, id DESC
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

/// Count entries per category for one user, most active category first.
pub async fn count_by_category(pool: &PgPool, user_id: i64) -> Result<Vec<(String, i64)>> {
    let rows = sqlx::query_as::<_, (String, i64)>(
        r#"
        SELECT category, COUNT(*)
        FROM dashboard_entries
        WHERE user_id = $1
        GROUP BY category
        ORDER BY COUNT(*) DESC, category
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

/// Count all stored entries.
pub async fn count_entries(pool: &PgPool) -> Result<i64> {
    let count: i64 = sqlx::query_scalar(
        r#"
        SELECT COUNT(*)
        FROM dashboard_entries
        "#,
    )
    .fetch_one(pool)
    .await?;

    Ok(count)
}
