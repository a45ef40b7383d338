//! Response envelopes for the calendar endpoints.
//!
//! The presentation layer expects named top-level keys (`events`, `tracks`)
//! rather than a generic `data` wrapper.

use bmx_db::models::event::EventWithTrack;
use bmx_db::models::track::Track;
use serde::Serialize;

/// `{ "events": [...] }`
#[derive(Debug, Serialize)]
pub struct EventsResponse {
    pub events: Vec<EventWithTrack>,
}

/// `{ "tracks": [...] }`
#[derive(Debug, Serialize)]
pub struct TracksResponse {
    pub tracks: Vec<Track>,
}
