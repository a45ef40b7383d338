pub mod alerts;
pub mod events;
pub mod health;
pub mod refresh_status;
pub mod tracks;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /events                 active events (?days=&track=)
/// /alerts                 current cancellation/weather alerts
/// /refresh-status         data freshness signal
/// /tracks                 track listing
/// /tracks/{slug}          track page with its events
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/events", events::router())
        .nest("/alerts", alerts::router())
        .nest("/refresh-status", refresh_status::router())
        .nest("/tracks", tracks::router())
}
