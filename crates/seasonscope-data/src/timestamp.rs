//! Purchase timestamp parsing.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};
use seasonscope_core::Season;

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
];

/// Parse a purchase timestamp.
///
/// Accepts `YYYY-MM-DD HH:MM:SS[.fff]`, the same with a `T` separator,
/// minute precision, RFC 3339 with an offset (kept as local wall time), and a
/// bare `YYYY-MM-DD` (midnight). Returns `None` for anything else, including
/// empty input.
///
/// # Examples
///
/// ```
/// use seasonscope_data::timestamp::parse_timestamp;
///
/// let ts = parse_timestamp("2017-10-02 10:56:33").unwrap();
/// assert_eq!(ts.to_string(), "2017-10-02 10:56:33");
/// assert!(parse_timestamp("2023-01-15").is_some());
/// assert!(parse_timestamp("last tuesday").is_none());
/// ```
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }

    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt);
        }
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.naive_local());
    }

    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

/// Season (calendar quarter) and month of a timestamp.
///
/// # Examples
///
/// ```
/// use seasonscope_core::Season;
/// use seasonscope_data::timestamp::{parse_timestamp, season_and_month};
///
/// let ts = parse_timestamp("2023-07-10").unwrap();
/// assert_eq!(season_and_month(&ts), (Season::Winter, 7));
/// ```
pub fn season_and_month(ts: &NaiveDateTime) -> (Season, u32) {
    let month = ts.month();
    // chrono months are always 1..=12
    let season = Season::from_month(month).unwrap_or(Season::Summer);
    (season, month)
}
