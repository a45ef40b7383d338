//! Handlers for the `/events` resource.

use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::Json;

use crate::error::AppResult;
use crate::query::EventsParams;
use crate::response::EventsResponse;
use crate::state::AppState;

/// GET /api/v1/events?days=7&track=mile-high-bmx
///
/// Active events from the start of today (civil timezone) through `days`
/// days ahead, optionally for one track.
pub async fn list_active(
    State(state): State<AppState>,
    params: Result<Query<EventsParams>, QueryRejection>,
) -> AppResult<impl IntoResponse> {
    let Query(params) = params?;
    let events = state
        .calendar
        .active_events(params.days, params.track_slug())
        .await?;
    Ok(Json(EventsResponse { events }))
}
