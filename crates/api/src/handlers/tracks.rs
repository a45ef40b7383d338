//! Handlers for the `/tracks` resource.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;

use crate::error::AppResult;
use crate::response::TracksResponse;
use crate::state::AppState;

/// GET /api/v1/tracks
///
/// List all tracks, sorted by name.
pub async fn list(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let tracks = state.calendar.tracks().await?;
    Ok(Json(TracksResponse { tracks }))
}

/// GET /api/v1/tracks/{slug}
///
/// A track and its active events for the default window.
pub async fn get_page(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<impl IntoResponse> {
    let page = state.calendar.track_page(&slug).await?;
    Ok(Json(page))
}
