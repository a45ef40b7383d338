//! Selection rules for active events, current alerts and the track listing.
//!
//! These functions take already-fetched candidates and decide what is shown
//! and in which order. Fetching is the caller's job.

use std::cmp::Ordering;

use serde::Serialize;

use crate::keywords::KeywordSet;
use crate::priority::PriorityTable;
use crate::types::Timestamp;

/// Lifecycle status of an event as written by the ingestion process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EventStatus {
    Scheduled,
    Updated,
    Cancelled,
}

impl EventStatus {
    /// Statuses that may appear on the calendar.
    pub const ACTIVE: [EventStatus; 2] = [EventStatus::Scheduled, EventStatus::Updated];

    pub fn as_str(self) -> &'static str {
        match self {
            EventStatus::Scheduled => "scheduled",
            EventStatus::Updated => "updated",
            EventStatus::Cancelled => "cancelled",
        }
    }

    pub fn is_active(self) -> bool {
        Self::ACTIVE.contains(&self)
    }
}

/// A status string outside the `ck_events_status` set.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown event status '{0}'")]
pub struct UnknownEventStatus(pub String);

impl TryFrom<String> for EventStatus {
    type Error = UnknownEventStatus;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        match s.as_str() {
            "scheduled" => Ok(EventStatus::Scheduled),
            "updated" => Ok(EventStatus::Updated),
            "cancelled" => Ok(EventStatus::Cancelled),
            _ => Err(UnknownEventStatus(s)),
        }
    }
}

/// An event candidate as seen by the selection rules.
pub trait EventListing {
    fn title(&self) -> &str;
    fn description(&self) -> Option<&str>;
    fn starts_at(&self) -> Timestamp;
    fn track_slug(&self) -> &str;
    fn status(&self) -> EventStatus;
}

/// An alert candidate as seen by the selection rules.
pub trait AlertPost {
    fn body(&self) -> &str;
    fn posted_at(&self) -> Timestamp;
}

/// A track as seen by the listing order.
pub trait TrackEntry {
    fn name(&self) -> &str;
    fn slug(&self) -> &str;
}

/// Drop inactive and cancelled-looking events and order the rest by start
/// time, breaking exact ties with `ranks` (lower first, unranked last).
/// Equal keys keep their input order.
pub fn select_active_events<E: EventListing>(
    candidates: Vec<E>,
    cancellation: &KeywordSet,
    ranks: &PriorityTable,
) -> Vec<E> {
    let mut events: Vec<E> = candidates
        .into_iter()
        .filter(|e| e.status().is_active())
        .filter(|e| !cancellation.matches_listing(e.title(), e.description()))
        .collect();

    events.sort_by(|a, b| compare_events(a, b, ranks));
    events
}

fn compare_events<E: EventListing>(a: &E, b: &E, ranks: &PriorityTable) -> Ordering {
    a.starts_at()
        .cmp(&b.starts_at())
        .then_with(|| ranks.rank(a.track_slug()).cmp(&ranks.rank(b.track_slug())))
}

/// Keep relevant alerts, newest first, capped at `limit`.
pub fn select_recent_alerts<A: AlertPost>(
    candidates: Vec<A>,
    relevance: &KeywordSet,
    limit: usize,
) -> Vec<A> {
    let mut alerts: Vec<A> = candidates
        .into_iter()
        .filter(|a| relevance.matches(a.body()))
        .collect();

    // The cap keeps the newest posts whatever order the candidates came in.
    alerts.sort_by(|a, b| b.posted_at().cmp(&a.posted_at()));
    alerts.truncate(limit);
    alerts
}

/// Order tracks by name (case-insensitive), then by `ranks`.
pub fn order_tracks<T: TrackEntry>(tracks: &mut [T], ranks: &PriorityTable) {
    tracks.sort_by(|a, b| {
        a.name()
            .to_lowercase()
            .cmp(&b.name().to_lowercase())
            .then_with(|| ranks.rank(a.slug()).cmp(&ranks.rank(b.slug())))
    });
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
