//! Dashboard routes: the grouped entries page, its refresh partial, and
//! the JSON API.

use askama::Template;
use axum::extract::State;
use axum::Json;
use database::{entry, DashboardEntry};
use parser_core::category_emoji;
use serde::Serialize;

use crate::error::Result;
use crate::state::AppState;

/// Full dashboard page template.
#[derive(Template)]
#[template(path = "dashboard.html")]
pub struct DashboardTemplate {
    pub total: usize,
    pub groups: Vec<CategoryGroup>,
}

/// Entries fragment template, re-fetched by htmx every 30 seconds.
#[derive(Template)]
#[template(path = "entries.html")]
pub struct EntriesTemplate {
    pub groups: Vec<CategoryGroup>,
}

/// One category section of the dashboard.
#[derive(Clone, Serialize)]
pub struct CategoryGroup {
    pub category: String,
    pub emoji: &'static str,
    pub entries: Vec<EntryView>,
}

/// One entry, prepared for display.
#[derive(Clone, Serialize)]
pub struct EntryView {
    pub id: i64,
    pub created_at: String,
    pub data: String,
}

impl From<DashboardEntry> for EntryView {
    fn from(entry: DashboardEntry) -> Self {
        Self {
            id: entry.id,
            created_at: entry.created_at.format("%Y-%m-%d %H:%M UTC").to_string(),
            data: entry.data.to_string(),
        }
    }
}

/// Render the dashboard page.
pub async fn dashboard_page(State(state): State<AppState>) -> Result<DashboardTemplate> {
    let entries = entry::list_entries(state.db.pool()).await?;
    let total = entries.len();
    let groups = group_by_category(entries);

    Ok(DashboardTemplate { total, groups })
}

/// Render just the grouped entries fragment (htmx refresh target).
pub async fn entries_partial(State(state): State<AppState>) -> Result<EntriesTemplate> {
    let entries = entry::list_entries(state.db.pool()).await?;
    let groups = group_by_category(entries);

    Ok(EntriesTemplate { groups })
}

/// Get all entries as JSON, newest first.
pub async fn entries_api(State(state): State<AppState>) -> Result<Json<Vec<DashboardEntry>>> {
    let entries = entry::list_entries(state.db.pool()).await?;
    Ok(Json(entries))
}

/// Group a newest-first entry list into category sections.
///
/// Every entry lands in exactly one group. Entries keep their order inside
/// each group, and groups are ordered by their newest entry, so the most
/// recently active category comes first.
fn group_by_category(entries: Vec<DashboardEntry>) -> Vec<CategoryGroup> {
    let mut groups: Vec<CategoryGroup> = Vec::new();

    for entry in entries {
        match groups.iter_mut().find(|g| g.category == entry.category) {
            Some(group) => group.entries.push(entry.into()),
            None => groups.push(CategoryGroup {
                emoji: category_emoji(&entry.category),
                category: entry.category.clone(),
                entries: vec![entry.into()],
            }),
        }
    }

    groups
}
