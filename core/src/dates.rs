//! Date/time parsing for the formats Windows collectors emit.

use chrono::{DateTime, Datelike, FixedOffset, NaiveDateTime, TimeZone, Timelike};
use serde::{Deserialize, Deserializer};

/// Offset-less layouts, tried in order after RFC 3339.
const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%m/%d/%Y %I:%M:%S %p",
    "%m/%d/%Y %H:%M:%S",
];

/// Parse a report timestamp.
///
/// Values without an offset are taken as UTC.
pub fn parse_report_time(text: &str) -> Option<DateTime<FixedOffset>> {
    let text = text.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt);
    }
    let naive = parse_naive(text)?;
    let utc = FixedOffset::east_opt(0)?;
    Some(utc.from_utc_datetime(&naive))
}

/// Parse a wall-clock date/time. An explicit offset is dropped, keeping the
/// time as written.
pub fn parse_naive(text: &str) -> Option<NaiveDateTime> {
    let text = text.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.naive_local());
    }
    NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(text, fmt).ok())
}

/// True for `0001-01-01T00:00:00`, the value a collector sends for "never".
pub fn is_unset(dt: &NaiveDateTime) -> bool {
    dt.year() == 1
        && dt.ordinal() == 1
        && dt.num_seconds_from_midnight() == 0
        && dt.nanosecond() == 0
}

/// Deserialize an optional wall-clock date/time from a string or `null`.
pub(crate) fn deserialize_naive<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        None => Ok(None),
        Some(text) if text.trim().is_empty() => Ok(None),
        Some(text) => parse_naive(&text)
            .map(Some)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid date/time {text:?}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn naive(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, s)
            .unwrap()
    }

    #[test]
    fn test_rfc3339_keeps_offset() {
        let dt = parse_report_time("2024-03-01T10:15:00+02:00").unwrap();
        assert_eq!(dt.offset().local_minus_utc(), 2 * 3600);
        assert_eq!(dt.naive_local(), naive(2024, 3, 1, 10, 15, 0));
    }

    #[test]
    fn test_naive_iso_is_utc() {
        let dt = parse_report_time("2024-03-01T10:15:00").unwrap();
        assert_eq!(dt.offset().local_minus_utc(), 0);
        assert_eq!(dt.naive_utc(), naive(2024, 3, 1, 10, 15, 0));
    }

    #[test]
    fn test_us_format_with_meridiem() {
        let dt = parse_report_time("3/1/2024 1:05:09 PM").unwrap();
        assert_eq!(dt.naive_utc(), naive(2024, 3, 1, 13, 5, 9));
    }

    #[test]
    fn test_space_separated() {
        let dt = parse_report_time("2024-03-01 23:59:59").unwrap();
        assert_eq!(dt.naive_utc(), naive(2024, 3, 1, 23, 59, 59));
    }

    #[test]
    fn test_garbage_is_rejected() {
        assert!(parse_report_time("yesterday").is_none());
        assert!(parse_report_time("").is_none());
    }

    #[test]
    fn test_unset_sentinel() {
        assert!(is_unset(&parse_naive("0001-01-01T00:00:00").unwrap()));
        assert!(!is_unset(&naive(2024, 3, 1, 0, 0, 0)));
        assert!(!is_unset(&naive(1, 1, 1, 0, 0, 1)));
    }
}
