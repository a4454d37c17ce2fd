// src/filter.rs
//! Resource and reservation filtering. Pure functions, no I/O.
//!
//! Resource filters compose with AND across axes and OR within an axis.
//! Reservations survive only inside the time range and only when their
//! resource survived.

use std::collections::HashSet;

use chrono::{Duration, NaiveDate, NaiveDateTime};
use tracing::warn;

use crate::config::options::ResourceFilter;
use crate::core::time::to_iso;
use crate::data::{Reservation, Resource};

/// Inclusive on both ends.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimeRange {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl TimeRange {
    /// Defaults: `[today 00:00, today+1 00:00]`. An explicit start moves the
    /// end to start + 1 day; an explicit end alone leaves the start on today.
    pub fn resolve(
        start: Option<NaiveDateTime>,
        end: Option<NaiveDateTime>,
        today: NaiveDate,
    ) -> Self {
        let midnight = today.and_time(chrono::NaiveTime::MIN);
        let (start, default_end) = match start {
            Some(s) => (s, s + Duration::days(1)),
            None => (midnight, midnight + Duration::days(1)),
        };
        Self { start, end: end.unwrap_or(default_end) }
    }

    pub fn contains(&self, start: NaiveDateTime, end: NaiveDateTime) -> bool {
        start >= self.start && end <= self.end
    }

    /// `<start ISO-8601> -> <end ISO-8601>`
    pub fn header(&self) -> String {
        format!("{} -> {}", to_iso(&self.start), to_iso(&self.end))
    }
}

/// Keep resources passing every configured axis. Order is preserved.
pub fn filter_resources(resources: &[Resource], criteria: &ResourceFilter) -> Vec<Resource> {
    resources
        .iter()
        .filter(|r| matches_resource(r, criteria))
        .cloned()
        .collect()
}

pub fn matches_resource(r: &Resource, c: &ResourceFilter) -> bool {
    by_name(r, c.resources.as_deref())
        && by_model(r, c.models.as_deref())
        && by_location(r, c.locations.as_deref())
        && c.statuses.contains(r.status().as_deref())
}

/// Tokens are lower-case. A token equal to title, code or id matches.
fn by_name(r: &Resource, tokens: Option<&[String]>) -> bool {
    let Some(tokens) = tokens else { return true };
    let fields = [r.title.to_lowercase(), r.code.to_lowercase(), r.id.to_lowercase()];
    tokens.iter().any(|t| fields.contains(t))
}

fn by_model(r: &Resource, tokens: Option<&[String]>) -> bool {
    let Some(tokens) = tokens else { return true };
    r.model_tags().any(|tag| tokens.contains(&tag.to_lowercase()))
}

fn by_location(r: &Resource, tokens: Option<&[String]>) -> bool {
    let Some(tokens) = tokens else { return true };
    let loc = r.location.to_lowercase();
    tokens.iter().any(|t| loc.contains(t.as_str()))
}

/// Keep reservations inside `range` whose resource is in `resources`.
/// Unparseable start/end drops the reservation.
pub fn filter_reservations(
    reservations: &[Reservation],
    resources: &[Resource],
    range: &TimeRange,
) -> Vec<Reservation> {
    let ids: HashSet<&str> = resources.iter().map(|r| r.id.as_str()).collect();
    reservations
        .iter()
        .filter(|res| {
            let (Some(start), Some(end)) = (res.start_time(), res.end_time()) else {
                warn!(resource = %res.resource_id, start = %res.start, end = %res.end,
                    "dropping reservation with unparseable time");
                return false;
            };
            range.contains(start, end) && ids.contains(res.resource_id.as_str())
        })
        .cloned()
        .collect()
}

/// Both sides at once: `(resources, reservations)`.
pub fn apply(
    resources: &[Resource],
    reservations: &[Reservation],
    criteria: &ResourceFilter,
    range: &TimeRange,
) -> (Vec<Resource>, Vec<Reservation>) {
    let kept = filter_resources(resources, criteria);
    let res = filter_reservations(reservations, &kept, range);
    (kept, res)
}
