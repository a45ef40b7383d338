//! Tables and thresholds that drive event and alert selection.

use chrono_tz::Tz;

use crate::freshness::FreshnessPolicy;
use crate::keywords::KeywordSet;
use crate::priority::PriorityTable;

/// Civil timezone all day boundaries are computed in.
pub const DEFAULT_TIMEZONE: Tz = chrono_tz::America::Denver;

/// Default length of the events window in civil days.
pub const DEFAULT_WINDOW_DAYS: i64 = 7;

/// Maximum number of alerts shown in the banner.
pub const ALERT_BANNER_LIMIT: usize = 5;

/// Everything the selection rules read, passed in explicitly so tests can
/// swap tables without touching the query service.
#[derive(Debug, Clone)]
pub struct RelevanceConfig {
    pub timezone: Tz,
    pub default_window_days: i64,
    pub alert_limit: usize,
    pub alert_keywords: KeywordSet,
    pub cancellation_keywords: KeywordSet,
    pub event_ranks: PriorityTable,
    pub listing_ranks: PriorityTable,
    pub freshness: FreshnessPolicy,
}

impl Default for RelevanceConfig {
    fn default() -> Self {
        Self {
            timezone: DEFAULT_TIMEZONE,
            default_window_days: DEFAULT_WINDOW_DAYS,
            alert_limit: ALERT_BANNER_LIMIT,
            alert_keywords: KeywordSet::alert_relevance(),
            cancellation_keywords: KeywordSet::event_cancellation(),
            event_ranks: PriorityTable::event_ordering(),
            listing_ranks: PriorityTable::track_listing(),
            freshness: FreshnessPolicy::default(),
        }
    }
}

impl RelevanceConfig {
    /// Defaults with a different civil timezone.
    pub fn with_timezone(timezone: Tz) -> Self {
        Self {
            timezone,
            ..Self::default()
        }
    }
}
