//! Track priority tables used as secondary sort keys.
//!
//! The event-ordering table and the track-listing table have different
//! members and different values. Keep them separate.

use std::collections::HashMap;

/// Rank assigned to slugs missing from a table. Sorts after every known slug.
pub const UNRANKED: i32 = 999;

const EVENT_ORDERING: &[(&str, i32)] = &[
    ("mile-high-bmx", 1),
    ("dacono-bmx", 2),
    ("county-line-bmx", 3),
    ("bear-creek-bmx", 4),
];

const TRACK_LISTING: &[(&str, i32)] = &[
    ("mile-high-bmx", 1),
    ("county-line-bmx", 2),
    ("bear-creek-bmx", 3),
    ("dacono-bmx", 4),
    ("golden-bmx", 5),
];

/// A fixed mapping from track slug to sort order (lower sorts first).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PriorityTable {
    ranks: HashMap<String, i32>,
}

impl PriorityTable {
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, i32)>,
        S: Into<String>,
    {
        Self {
            ranks: entries.into_iter().map(|(s, r)| (s.into(), r)).collect(),
        }
    }

    /// Tie-breaker for events sharing the exact same start time.
    pub fn event_ordering() -> Self {
        Self::new(EVENT_ORDERING.iter().copied())
    }

    /// Tie-breaker for the track listing page.
    pub fn track_listing() -> Self {
        Self::new(TRACK_LISTING.iter().copied())
    }

    /// Rank for `slug`, or [`UNRANKED`] when the slug is unknown.
    pub fn rank(&self, slug: &str) -> i32 {
        self.ranks.get(slug).copied().unwrap_or(UNRANKED)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
