//! Database models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;

/// A stored dashboard entry: one interpreted message.
///
/// Entries are append-only; nothing updates or deletes them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct DashboardEntry {
    /// Auto-incrementing ID.
    pub id: i64,
    /// Telegram user id of the sender.
    pub user_id: i64,
    /// Life domain (e.g. "finance", "fitness"). Open-ended set.
    pub category: String,
    /// Category-specific fields extracted from the message.
    pub data: Value,
    /// Insertion time.
    pub created_at: DateTime<Utc>,
    /// Logical event time. The schema defines it identically to
    /// `created_at`; the application orders by `created_at` only.
    pub timestamp: DateTime<Utc>,
}

/// A dashboard entry waiting to be stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewEntry {
    /// Telegram user id of the sender.
    pub user_id: i64,
    /// Life domain label.
    pub category: String,
    /// Category-specific fields.
    pub data: Value,
}

impl NewEntry {
    /// Create a new entry.
    pub fn new(user_id: i64, category: impl Into<String>, data: Value) -> Self {
        Self {
            user_id,
            category: category.into(),
            data,
        }
    }
}
