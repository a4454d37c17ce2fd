// src/core/time.rs
//! Timestamp parsing for the formats the site and the CLI use.
//!
//! Timestamps are naive wall-clock values. An explicit UTC offset is parsed
//! and then dropped; nothing is converted between zones.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Timelike};

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%m/%d/%Y %I:%M:%S %p",
    "%m/%d/%Y %I:%M %p",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
];

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%m/%d/%Y"];

/// ISO-8601 rendering used in report headers.
pub const ISO_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";
/// Same, with microseconds. Used only when the value has a sub-second part.
pub const ISO_FORMAT_MICROS: &str = "%Y-%m-%dT%H:%M:%S%.6f";

pub fn parse_timestamp(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.naive_local());
    }
    DATETIME_FORMATS
        .iter()
        .find_map(|f| NaiveDateTime::parse_from_str(s, f).ok())
        .or_else(|| {
            DATE_FORMATS
                .iter()
                .find_map(|f| NaiveDate::parse_from_str(s, f).ok())
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
}

pub fn to_iso(ts: &NaiveDateTime) -> String {
    let fmt = if ts.nanosecond() == 0 { ISO_FORMAT } else { ISO_FORMAT_MICROS };
    ts.format(fmt).to_string()
}
