//! Route definitions for alerts.

use axum::routing::get;
use axum::Router;

use crate::handlers::alerts;
use crate::state::AppState;

/// Routes mounted at `/alerts`.
///
/// ```text
/// GET  /       -> list_recent
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(alerts::list_recent))
}
