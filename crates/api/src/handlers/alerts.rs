//! Handlers for the `/alerts` resource.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /api/v1/alerts
///
/// Cancellation and weather alerts posted since yesterday, newest first.
pub async fn list_recent(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let recent = state.calendar.recent_alerts().await?;
    Ok(Json(recent))
}
