//! Date and time checks
//!
//! Formats use chrono's strftime-style specifiers (`%Y-%m-%d %H:%M:%S`).
//! The future/past checks read the system clock; the `_at` variants take the
//! current instant as an argument instead.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};

/// True if the whole string parses under `format`.
///
/// The format may describe a date and time, a date alone, a time alone, or a
/// date and time with a UTC offset. Out-of-range components (month 13,
/// February 30) and trailing input both make the check fail, as does a
/// malformed format.
///
/// # Example
///
/// ```rust
/// use tollgate::check::datetime_is_valid;
///
/// assert!(datetime_is_valid("2022-01-01 12:00:00", "%Y-%m-%d %H:%M:%S"));
/// assert!(datetime_is_valid("2022-01-01", "%Y-%m-%d"));
/// assert!(!datetime_is_valid("invalid-datetime", "%Y-%m-%d %H:%M:%S"));
/// ```
pub fn datetime_is_valid(value: &str, format: &str) -> bool {
    NaiveDateTime::parse_from_str(value, format).is_ok()
        || NaiveDate::parse_from_str(value, format).is_ok()
        || NaiveTime::parse_from_str(value, format).is_ok()
        || DateTime::parse_from_str(value, format).is_ok()
}

/// True if `value` is strictly later than the current system time.
///
/// # Example
///
/// ```rust
/// use chrono::{Duration, Utc};
/// use tollgate::check::datetime_is_future;
///
/// assert!(datetime_is_future(&(Utc::now() + Duration::hours(1))));
/// ```
pub fn datetime_is_future<Tz: TimeZone>(value: &DateTime<Tz>) -> bool {
    datetime_is_future_at(value, Utc::now())
}

/// True if `value` is strictly later than `now`.
pub fn datetime_is_future_at<Tz: TimeZone>(value: &DateTime<Tz>, now: DateTime<Utc>) -> bool {
    *value > now
}

/// True if `value` is strictly earlier than the current system time.
///
/// # Example
///
/// ```rust
/// use chrono::{Duration, Utc};
/// use tollgate::check::datetime_is_past;
///
/// assert!(datetime_is_past(&(Utc::now() - Duration::hours(1))));
/// ```
pub fn datetime_is_past<Tz: TimeZone>(value: &DateTime<Tz>) -> bool {
    datetime_is_past_at(value, Utc::now())
}

/// True if `value` is strictly earlier than `now`.
pub fn datetime_is_past_at<Tz: TimeZone>(value: &DateTime<Tz>, now: DateTime<Utc>) -> bool {
    *value < now
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, FixedOffset};

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_valid_datetime() {
        assert!(datetime_is_valid("2022-01-01 12:00:00", "%Y-%m-%d %H:%M:%S"));
    }

    #[test]
    fn test_invalid_datetime() {
        assert!(!datetime_is_valid("invalid-datetime", "%Y-%m-%d %H:%M:%S"));
    }

    #[test]
    fn test_date_only_and_time_only() {
        assert!(datetime_is_valid("2022-01-01", "%Y-%m-%d"));
        assert!(datetime_is_valid("23:59:59", "%H:%M:%S"));
    }

    #[test]
    fn test_with_offset() {
        assert!(datetime_is_valid("2022-01-01T12:00:00+0200", "%Y-%m-%dT%H:%M:%S%z"));
    }

    #[test]
    fn test_out_of_range_components() {
        assert!(!datetime_is_valid("2022-13-01", "%Y-%m-%d"));
        assert!(!datetime_is_valid("2022-02-30", "%Y-%m-%d"));
        assert!(!datetime_is_valid("25:00:00", "%H:%M:%S"));
    }

    #[test]
    fn test_trailing_input() {
        assert!(!datetime_is_valid("2022-01-01 extra", "%Y-%m-%d"));
    }

    #[test]
    fn test_incomplete_input() {
        assert!(!datetime_is_valid("2022-01", "%Y-%m-%d"));
    }

    #[test]
    fn test_future_at() {
        let now = fixed_now();
        assert!(datetime_is_future_at(&(now + Duration::hours(1)), now));
        assert!(!datetime_is_future_at(&(now - Duration::hours(1)), now));
        assert!(!datetime_is_future_at(&now, now)); // strict
    }

    #[test]
    fn test_past_at() {
        let now = fixed_now();
        assert!(datetime_is_past_at(&(now - Duration::hours(1)), now));
        assert!(!datetime_is_past_at(&(now + Duration::hours(1)), now));
        assert!(!datetime_is_past_at(&now, now)); // strict
    }

    #[test]
    fn test_compares_instants_across_offsets() {
        let now = fixed_now();
        let tz = FixedOffset::east_opt(5 * 3600).unwrap();
        // 16:00 at +05:00 is 11:00 UTC, one hour before `now`
        let local = tz.with_ymd_and_hms(2024, 6, 1, 16, 0, 0).unwrap();
        assert!(datetime_is_past_at(&local, now));
        assert!(!datetime_is_future_at(&local, now));
    }

    #[test]
    fn test_system_clock() {
        assert!(datetime_is_future(&(Utc::now() + Duration::days(1))));
        assert!(datetime_is_past(&(Utc::now() - Duration::days(1))));
        assert!(!datetime_is_future(&(Utc::now() - Duration::days(1))));
        assert!(!datetime_is_past(&(Utc::now() + Duration::days(1))));
    }
}
