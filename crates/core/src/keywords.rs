//! Keyword classification for cancellation and disruption notices.
//!
//! Matching is case-insensitive substring containment with no stemming and
//! no word boundaries, so "cancel" also matches "cancellation".

/// Terms that make a posted alert worth showing in the banner.
pub const ALERT_RELEVANCE_KEYWORDS: &[&str] = &[
    "cancel",
    "canceled",
    "cancelled",
    "postpone",
    "postponed",
    "reschedule",
    "rescheduled",
    "rain",
    "weather",
    "lightning",
    "thunder",
    "storm",
    "wind",
    "snow",
    "mud",
    "wet track",
    "closed",
    "closure",
    "delay",
    "delayed",
    "no practice",
    "no race",
    "no racing",
    "short staffed",
    "understaffed",
    "need volunteers",
];

/// Terms that hide a scheduled event from the calendar.
pub const EVENT_CANCELLATION_KEYWORDS: &[&str] = &[
    "cancel",
    "canceled",
    "cancelled",
    "postpone",
    "postponed",
    "rained out",
    "rainout",
    "no practice",
    "no racing",
    "no race",
    "track closed",
    "closed today",
];

/// A set of lowercase keyword substrings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordSet {
    keywords: Vec<String>,
}

impl KeywordSet {
    /// Build a set from arbitrary keywords. Entries are trimmed and
    /// lowercased; empty entries are dropped since they would match any text.
    pub fn new<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let keywords = keywords
            .into_iter()
            .map(|k| k.as_ref().trim().to_lowercase())
            .filter(|k| !k.is_empty())
            .collect();
        Self { keywords }
    }

    /// The broader set used to decide whether an alert reaches the banner.
    pub fn alert_relevance() -> Self {
        Self::new(ALERT_RELEVANCE_KEYWORDS)
    }

    /// The narrower set used to hide cancelled or postponed events.
    pub fn event_cancellation() -> Self {
        Self::new(EVENT_CANCELLATION_KEYWORDS)
    }

    /// Returns `true` if the lowercased `text` contains any keyword.
    pub fn matches(&self, text: &str) -> bool {
        let text = text.to_lowercase();
        self.keywords.iter().any(|k| text.contains(k.as_str()))
    }

    /// Classify an event listing by its title and optional description.
    pub fn matches_listing(&self, title: &str, description: Option<&str>) -> bool {
        match description {
            Some(description) => self.matches(&format!("{title} {description}")),
            None => self.matches(title),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rained_out_notice_matches_event_set() {
        let set = KeywordSet::event_cancellation();
        assert!(set.matches("Rained out, NO PRACTICE today"));
    }

    #[test]
    fn ordinary_notice_matches_neither_set() {
        assert!(!KeywordSet::event_cancellation().matches("Gates open at 6pm"));
        assert!(!KeywordSet::alert_relevance().matches("Gates open at 6pm"));
    }

    #[test]
    fn every_keyword_matches_in_any_case() {
        for set in [KeywordSet::alert_relevance(), KeywordSet::event_cancellation()] {
            for keyword in &set.keywords {
                let upper = format!("Heads up: {} tonight", keyword.to_uppercase());
                assert!(set.matches(&upper), "expected '{upper}' to match");
            }
        }
    }

    #[test]
    fn matching_is_substring_not_word_based() {
        let set = KeywordSet::new(["cancel"]);
        assert!(set.matches("Practice CANCELLATION notice"));
        assert!(set.matches("uncancelled"));
    }

    #[test]
    fn alert_set_covers_weather_terms_event_set_does_not() {
        let text = "Lightning in the area, holding gate drops";
        assert!(KeywordSet::alert_relevance().matches(text));
        assert!(!KeywordSet::event_cancellation().matches(text));
    }

    #[test]
    fn listing_checks_description_too() {
        let set = KeywordSet::event_cancellation();
        assert!(set.matches_listing("Thursday practice", Some("Postponed to Friday")));
        assert!(!set.matches_listing("Thursday practice", None));
        assert!(!set.matches_listing("Thursday practice", Some("Bring water")));
    }

    #[test]
    fn blank_keywords_are_dropped() {
        let set = KeywordSet::new(["", "  ", "Closed"]);
        assert_eq!(set.keywords, vec!["closed".to_string()]);
        assert!(!set.matches("Open as usual"));
    }

    #[test]
    fn empty_set_matches_nothing() {
        let set = KeywordSet::new(Vec::<String>::new());
        assert!(set.keywords.is_empty());
        assert!(!set.matches("cancelled"));
    }
}
