//! .NET `TimeSpan` text (`[-][d.]hh:mm[:ss[.fffffff]]`).

use std::time::Duration;

use serde::{Deserialize, Deserializer, Serializer};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid time span {0:?}")]
pub struct TimeSpanError(String);

/// Parse a time span. Negative spans clamp to zero.
pub fn parse_timespan(text: &str) -> Result<Duration, TimeSpanError> {
    let invalid = || TimeSpanError(text.to_string());
    let trimmed = text.trim();
    let (negative, body) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed),
    };

    let parts: Vec<&str> = body.split(':').collect();
    let (days, hours, minutes, seconds) = match parts.as_slice() {
        // A bare number is a day count.
        [days] => (number(days).ok_or_else(invalid)?, 0, 0, "0"),
        [head, minutes] => {
            let (days, hours) = split_days(head).ok_or_else(invalid)?;
            (days, hours, number(minutes).ok_or_else(invalid)?, "0")
        }
        [head, minutes, seconds] => {
            let (days, hours) = split_days(head).ok_or_else(invalid)?;
            (days, hours, number(minutes).ok_or_else(invalid)?, *seconds)
        }
        _ => return Err(invalid()),
    };

    let (whole_seconds, fraction) = match seconds.split_once('.') {
        Some((whole, fraction)) => (whole, fraction),
        None => (seconds, ""),
    };
    let whole_seconds = number(whole_seconds).ok_or_else(invalid)?;
    let nanos = fraction_nanos(fraction).ok_or_else(invalid)?;

    if hours > 23 || minutes > 59 || whole_seconds > 59 {
        return Err(invalid());
    }

    if negative {
        return Ok(Duration::ZERO);
    }

    let total = days
        .checked_mul(86_400)
        .and_then(|secs| secs.checked_add(hours * 3_600 + minutes * 60 + whole_seconds))
        .ok_or_else(invalid)?;
    Ok(Duration::new(total, nanos))
}

fn number(text: &str) -> Option<u64> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}

fn split_days(head: &str) -> Option<(u64, u64)> {
    match head.split_once('.') {
        Some((days, hours)) => Some((number(days)?, number(hours)?)),
        None => Some((0, number(head)?)),
    }
}

// Up to seven digits (100ns ticks).
fn fraction_nanos(fraction: &str) -> Option<u32> {
    if fraction.is_empty() {
        return Some(0);
    }
    if fraction.len() > 7 || !fraction.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let padded = format!("{fraction:0<9}");
    padded.parse().ok()
}

/// Deserialize an optional time span from a string or `null`. Blank text
/// counts as absent.
pub(crate) fn deserialize_opt<'de, D>(deserializer: D) -> Result<Option<Duration>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        None => Ok(None),
        Some(text) if text.trim().is_empty() => Ok(None),
        Some(text) => parse_timespan(&text)
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}

/// Serialize a duration as human-readable text, e.g. `1day 2h 3m 4s`.
pub(crate) fn serialize_human<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_str(&humantime::format_duration(*duration))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hours_minutes_seconds() {
        assert_eq!(
            parse_timespan("01:02:03").unwrap(),
            Duration::from_secs(3_723)
        );
    }

    #[test]
    fn test_days_and_fraction() {
        assert_eq!(
            parse_timespan("3.04:05:06.5000000").unwrap(),
            Duration::new(3 * 86_400 + 4 * 3_600 + 5 * 60 + 6, 500_000_000)
        );
    }

    #[test]
    fn test_short_fraction() {
        assert_eq!(
            parse_timespan("00:00:01.25").unwrap(),
            Duration::from_millis(1_250)
        );
    }

    #[test]
    fn test_bare_days_and_hours_minutes() {
        assert_eq!(
            parse_timespan("2").unwrap(),
            Duration::from_secs(2 * 86_400)
        );
        assert_eq!(
            parse_timespan("10:30").unwrap(),
            Duration::from_secs(10 * 3_600 + 30 * 60)
        );
    }

    #[test]
    fn test_negative_clamps_to_zero() {
        assert_eq!(parse_timespan("-00:00:05").unwrap(), Duration::ZERO);
    }

    #[test]
    fn test_out_of_range_components() {
        assert!(parse_timespan("24:00:00").is_err());
        assert!(parse_timespan("00:60:00").is_err());
        assert!(parse_timespan("00:00:60").is_err());
    }

    #[test]
    fn test_garbage() {
        assert!(parse_timespan("").is_err());
        assert!(parse_timespan("abc").is_err());
        assert!(parse_timespan("1:2:3:4").is_err());
        assert!(parse_timespan("00:00:01.12345678").is_err());
        assert!(parse_timespan("+01:00:00").is_err());
        assert!(parse_timespan("99999999999999999.00:00:00").is_err());
    }

    #[test]
    fn test_human_serialization() {
        #[derive(serde::Serialize)]
        struct Wrapper {
            #[serde(serialize_with = "serialize_human")]
            uptime: Duration,
        }
        let json = serde_json::to_value(Wrapper {
            uptime: Duration::from_secs(90_061),
        })
        .unwrap();
        assert_eq!(json["uptime"], "1day 1h 1m 1s");
    }
}
