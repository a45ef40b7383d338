//! Event entity model.

use bmx_core::relevance::{EventListing, EventStatus};
use bmx_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

use super::track::Track;

/// A row from the `events` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Event {
    pub id: DbId,
    pub track_id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub start_at: Timestamp,
    pub end_at: Option<Timestamp>,
    /// Stored as text under `ck_events_status`; an unknown value fails the
    /// row decode.
    #[sqlx(try_from = "String")]
    pub status: EventStatus,
    pub url: Option<String>,
    pub fee: Option<String>,
    pub class: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// An event joined with its owning track, serialized as the event's fields
/// plus a nested `track` object.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct EventWithTrack {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub event: Event,
    #[sqlx(json)]
    pub track: Track,
}

impl EventListing for EventWithTrack {
    fn title(&self) -> &str {
        &self.event.title
    }

    fn description(&self) -> Option<&str> {
        self.event.description.as_deref()
    }

    fn starts_at(&self) -> Timestamp {
        self.event.start_at
    }

    fn track_slug(&self) -> &str {
        &self.track.slug
    }

    fn status(&self) -> EventStatus {
        self.event.status
    }
}
