// src/report.rs
//! Join filtered resources with filtered reservations and render the text
//! report.
//!
//! Reservations are grouped under their resource in first-occurrence order of
//! the sorted reservation list; resources without reservations follow, in
//! resource-list order, each marked `no reservations`.

use std::collections::{HashMap, HashSet};
use std::io::{self, Write};

use crate::data::{Reservation, Resource};
use crate::filter::TimeRange;

pub const NO_RESERVATIONS: &str = "no reservations";

/// Sort key is `(resource_id, raw start string)`; string order, not time order.
pub fn sort_reservations(reservations: &mut [Reservation]) {
    reservations.sort_by(|a, b| {
        (a.resource_id.as_str(), a.start.as_str()).cmp(&(b.resource_id.as_str(), b.start.as_str()))
    });
}

/// Report lines, range header first. Reservations whose resource is not in
/// `resources` are skipped.
pub fn build(range: &TimeRange, resources: &[Resource], reservations: &[Reservation]) -> Vec<String> {
    let mut lines = vec![range.header()];
    lines.extend(join(resources, reservations));
    lines
}

/// The grouped body without the range line.
pub fn join(resources: &[Resource], reservations: &[Reservation]) -> Vec<String> {
    let by_id: HashMap<&str, &Resource> = resources.iter().map(|r| (r.id.as_str(), r)).collect();

    let mut sorted = reservations.to_vec();
    sort_reservations(&mut sorted);

    let mut lines = Vec::new();
    let mut seen: HashSet<&str> = HashSet::new();

    for res in &sorted {
        let Some(&resource) = by_id.get(res.resource_id.as_str()) else { continue };
        if seen.insert(resource.id.as_str()) {
            lines.push(s!());
            lines.push(resource.header());
        }
        lines.push(res.line());
    }

    for resource in resources {
        if seen.insert(resource.id.as_str()) {
            lines.push(s!());
            lines.push(resource.header());
            lines.push(s!(NO_RESERVATIONS));
        }
    }
    lines
}

/// `listres`: one header per resource, list order.
pub fn resource_list(resources: &[Resource]) -> Vec<String> {
    resources.iter().map(Resource::header).collect()
}

pub fn write_lines<W: Write + ?Sized>(out: &mut W, lines: &[String]) -> io::Result<()> {
    for line in lines {
        writeln!(out, "{line}")?;
    }
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resource(id: &str) -> Resource {
        Resource { id: s!(id), title: join!("R", id), ..Default::default() }
    }

    fn booking(rid: &str, start: &str) -> Reservation {
        Reservation {
            resource_id: s!(rid),
            start: s!(start),
            end: s!("E"),
            title: s!("T"),
            destination: s!("D"),
        }
    }

    fn day() -> TimeRange {
        let today = chrono::NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        TimeRange::resolve(None, None, today)
    }

    #[test]
    fn no_resources_is_just_the_range_line() {
        let header = s!("2024-01-15T00:00:00 -> 2024-01-16T00:00:00");
        assert_eq!(build(&day(), &[], &[]), vec![header.clone()]);
        assert_eq!(build(&day(), &[], &[booking("1", "09:00")]), vec![header]);
    }

    #[test]
    fn no_reservations_marks_every_resource() {
        let rs = vec![resource("1"), resource("2")];
        assert_eq!(
            build(&day(), &rs, &[]),
            vec![
                "2024-01-15T00:00:00 -> 2024-01-16T00:00:00",
                "",
                "#1 unk  R1  @   ()",
                NO_RESERVATIONS,
                "",
                "#2 unk  R2  @   ()",
                NO_RESERVATIONS,
            ]
        );
    }

    #[test]
    fn booked_resource_first_then_unbooked() {
        let rs = vec![resource("1"), resource("2")];
        let lines = join(&rs, &[booking("2", "09:00")]);
        assert_eq!(
            lines,
            vec![
                "",
                "#2 unk  R2  @   ()",
                "09:00 E T D",
                "",
                "#1 unk  R1  @   ()",
                NO_RESERVATIONS,
            ]
        );
    }

    #[test]
    fn start_sorted_as_string() {
        // "10:00" < "9:00" as strings.
        let rs = vec![resource("1")];
        let lines = join(&rs, &[booking("1", "9:00"), booking("1", "10:00")]);
        assert_eq!(lines[2], "10:00 E T D");
        assert_eq!(lines[3], "9:00 E T D");
    }

    #[test]
    fn orphans_never_shown() {
        let rs = vec![resource("1")];
        let lines = join(&rs, &[booking("9", "08:00")]);
        assert_eq!(lines.len(), 3);
        assert!(!lines.iter().any(|l| l.starts_with("08:00")));
    }

    #[test]
    fn groups_contiguous_by_sorted_resource_id() {
        let rs = vec![resource("b"), resource("a")];
        let lines = join(&rs, &[booking("b", "1"), booking("a", "2"), booking("b", "0")]);
        assert_eq!(
            lines,
            vec!["", "#a unk  Ra  @   ()", "2 E T D", "", "#b unk  Rb  @   ()", "0 E T D", "1 E T D"]
        );
    }
}
