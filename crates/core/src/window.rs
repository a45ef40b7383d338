//! Civil-day window math.
//!
//! Day boundaries are local midnights in a named timezone, independent of
//! the server's own timezone. All returned instants are UTC.

use chrono::{Days, NaiveDate, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;

use crate::error::CoreError;
use crate::types::Timestamp;

/// Upper bound for the `days` query parameter.
pub const MAX_WINDOW_DAYS: i64 = 90;

/// A closed time range `[start, end]`; both ends are inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    pub start: Timestamp,
    pub end: Timestamp,
}

/// Clamp a user-provided window length to `1..=MAX_WINDOW_DAYS`.
pub fn clamp_window_days(days: Option<i64>, default: i64) -> i64 {
    days.unwrap_or(default).clamp(1, MAX_WINDOW_DAYS)
}

/// Local midnight of the civil day `day_offset` days from the day containing
/// `now` in `tz`. Negative offsets walk backwards.
pub fn civil_day_start(now: Timestamp, tz: Tz, day_offset: i64) -> Result<Timestamp, CoreError> {
    let today = now.with_timezone(&tz).date_naive();
    let day = shift_date(today, day_offset).ok_or_else(|| {
        CoreError::Internal(format!("day offset {day_offset} out of range from {today}"))
    })?;
    local_midnight(tz, day)
}

/// Events window: today's local midnight through the local midnight `days`
/// civil days later.
pub fn event_window(now: Timestamp, tz: Tz, days: i64) -> Result<Window, CoreError> {
    Ok(Window {
        start: civil_day_start(now, tz, 0)?,
        end: civil_day_start(now, tz, days)?,
    })
}

/// Alerts window: yesterday's local midnight through `now`.
pub fn alert_window(now: Timestamp, tz: Tz) -> Result<Window, CoreError> {
    Ok(Window {
        start: civil_day_start(now, tz, -1)?,
        end: now,
    })
}

fn shift_date(date: NaiveDate, offset: i64) -> Option<NaiveDate> {
    let magnitude = Days::new(offset.unsigned_abs());
    if offset >= 0 {
        date.checked_add_days(magnitude)
    } else {
        date.checked_sub_days(magnitude)
    }
}

fn local_midnight(tz: Tz, day: NaiveDate) -> Result<Timestamp, CoreError> {
    let midnight = day.and_time(NaiveTime::MIN);
    // Zones that spring forward at midnight have no 00:00; the day then
    // starts at the first valid local instant, an hour later.
    let local = tz
        .from_local_datetime(&midnight)
        .earliest()
        .or_else(|| {
            tz.from_local_datetime(&(midnight + chrono::Duration::hours(1)))
                .earliest()
        })
        .ok_or_else(|| CoreError::Internal(format!("no local midnight for {day} in {tz}")))?;
    Ok(local.with_timezone(&Utc))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use chrono::Duration;
    use chrono_tz::America::Denver;

    use super::*;

    fn utc(y: i32, m: u32, d: u32, h: u32, min: u32) -> Timestamp {
        Utc.with_ymd_and_hms(y, m, d, h, min, 0).unwrap()
    }

    #[test]
    fn day_start_uses_denver_midnight_not_utc() {
        // 2025-06-15 03:00 UTC is still June 14 in Denver (MDT, UTC-6).
        let now = utc(2025, 6, 15, 3, 0);
        let start = civil_day_start(now, Denver, 0).unwrap();
        assert_eq!(start, utc(2025, 6, 14, 6, 0));
    }

    #[test]
    fn winter_day_start_uses_standard_offset() {
        let now = utc(2025, 1, 10, 20, 0);
        let start = civil_day_start(now, Denver, 0).unwrap();
        assert_eq!(start, utc(2025, 1, 10, 7, 0));
    }

    #[test]
    fn yesterday_start_is_one_civil_day_back() {
        let now = utc(2025, 6, 14, 18, 0);
        let window = alert_window(now, Denver).unwrap();
        assert_eq!(window.start, utc(2025, 6, 13, 6, 0));
        assert_eq!(window.end, now);
    }

    #[test]
    fn event_window_spans_civil_days_across_dst_change() {
        // DST ends 2025-11-02 in Denver; the window is 7 civil days, 169 hours.
        let now = utc(2025, 10, 30, 18, 0);
        let window = event_window(now, Denver, 7).unwrap();
        assert_eq!(window.start, utc(2025, 10, 30, 6, 0));
        assert_eq!(window.end, utc(2025, 11, 6, 7, 0));
        assert_eq!(window.end - window.start, Duration::hours(169));
    }

    #[test]
    fn midnight_in_a_dst_gap_starts_an_hour_later() {
        // Santiago springs forward at 00:00 on 2025-09-07 (-04 to -03); the
        // first local instant of that day is 01:00 -03.
        let now = utc(2025, 9, 7, 15, 0);
        let start = civil_day_start(now, chrono_tz::America::Santiago, 0).unwrap();
        assert_eq!(start, utc(2025, 9, 7, 4, 0));

        // The day before has an ordinary midnight at -04.
        let yesterday = civil_day_start(now, chrono_tz::America::Santiago, -1).unwrap();
        assert_eq!(yesterday, utc(2025, 9, 6, 4, 0));
    }

    #[test]
    fn window_end_is_inclusive() {
        let now = utc(2025, 6, 14, 18, 0);
        let window = event_window(now, Denver, 7).unwrap();
        let inside = |at: Timestamp| (window.start..=window.end).contains(&at);
        assert!(inside(window.start));
        assert!(inside(window.end));
        assert!(!inside(window.end + Duration::microseconds(1)));
        assert!(!inside(window.start - Duration::microseconds(1)));
    }

    #[test]
    fn window_days_are_clamped() {
        assert_eq!(clamp_window_days(None, 7), 7);
        assert_eq!(clamp_window_days(Some(0), 7), 1);
        assert_eq!(clamp_window_days(Some(-3), 7), 1);
        assert_eq!(clamp_window_days(Some(30), 7), 30);
        assert_eq!(clamp_window_days(Some(5000), 7), MAX_WINDOW_DAYS);
    }
}
