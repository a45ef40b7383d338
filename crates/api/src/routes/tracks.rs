//! Route definitions for tracks.

use axum::routing::get;
use axum::Router;

use crate::handlers::tracks;
use crate::state::AppState;

/// Routes mounted at `/tracks`.
///
/// ```text
/// GET  /         -> list
/// GET  /{slug}   -> get_page
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(tracks::list))
        .route("/{slug}", get(tracks::get_page))
}
