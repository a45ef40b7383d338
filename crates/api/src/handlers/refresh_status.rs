//! Handler for the `/refresh-status` resource.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /api/v1/refresh-status
pub async fn get_status(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let freshness = state.calendar.refresh_status().await?;
    Ok(Json(freshness))
}
