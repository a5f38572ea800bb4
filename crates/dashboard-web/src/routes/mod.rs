//! Route handlers for the dashboard web interface.

pub mod dashboard;
pub mod health;

use axum::routing::get;
use axum::Router;

use crate::state::AppState;

/// Build the router with all routes.
pub fn router() -> Router<AppState> {
    Router::new()
        // HTML pages
        .route("/", get(dashboard::dashboard_page))
        .route("/partials/entries", get(dashboard::entries_partial))
        // Health check
        .route("/health", get(health::health))
        // API endpoints
        .route("/api/entries", get(dashboard::entries_api))
}
