//! Query parameter types for API handlers.

use serde::Deserialize;

/// Parameters for `GET /events` (`?days=&track=`).
#[derive(Debug, Default, Deserialize)]
pub struct EventsParams {
    /// Window length in civil days. Out-of-range values are silently clamped
    /// to `1..=90`, so `days=0` behaves like `days=1`.
    pub days: Option<i64>,
    /// Track slug. Blank or unknown slugs do not filter.
    pub track: Option<String>,
}

impl EventsParams {
    /// The track slug, if one was given and is not blank.
    pub fn track_slug(&self) -> Option<&str> {
        self.track
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }
}
