//! Data freshness signal derived from the newest alert and source check.
//!
//! Tracks post several times a week, so a quiet feed for longer than the
//! threshold points at the ingestion pipeline rather than at the tracks.

use chrono::Duration;
use serde::Serialize;

use crate::types::Timestamp;

/// Default staleness threshold in hours.
pub const DEFAULT_STALE_AFTER_HOURS: i64 = 48;

/// Freshness signal returned by `GET /refresh-status`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Freshness {
    /// Posted-at of the newest alert, if any.
    pub last_refresh: Option<Timestamp>,
    /// Newest `last_checked_at` across all sources, if any.
    pub last_scrape: Option<Timestamp>,
    pub is_stale: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FreshnessPolicy {
    pub stale_after: Duration,
}

impl Default for FreshnessPolicy {
    fn default() -> Self {
        Self {
            stale_after: Duration::hours(DEFAULT_STALE_AFTER_HOURS),
        }
    }
}

impl FreshnessPolicy {
    /// Stale when no alert has ever been recorded, or when more than
    /// `stale_after` has elapsed since the newest one.
    pub fn evaluate(
        &self,
        last_alert_at: Option<Timestamp>,
        last_scrape_at: Option<Timestamp>,
        now: Timestamp,
    ) -> Freshness {
        let is_stale = match last_alert_at {
            Some(posted_at) => now.signed_duration_since(posted_at) > self.stale_after,
            None => true,
        };

        Freshness {
            last_refresh: last_alert_at,
            last_scrape: last_scrape_at,
            is_stale,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
