//! Route definitions for the data freshness signal.

use axum::routing::get;
use axum::Router;

use crate::handlers::refresh_status;
use crate::state::AppState;

/// Routes mounted at `/refresh-status`.
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(refresh_status::get_status))
}
