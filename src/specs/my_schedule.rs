// src/specs/my_schedule.rs
//! Personal schedule from `SchedList.aspx?mysched=1`.
//!
//! Every `td.Item` / `td.AltItem` cell holding exactly seven `div`s is one
//! booking laid out as `_, start, end, resource, _, notes, _`. Cells with any
//! other shape are skipped.

use tracing::debug;

use crate::config::consts::{MY_SCHEDULE_OWNER, SCHEDULE_CELL_CLASSES, SCHEDULE_CELL_DIVS};
use crate::core::html;
use crate::core::sanitize::strip_trailing_dash;
use crate::core::time::parse_timestamp;
use crate::data::ScheduleEntry;
use crate::error::{Error, Result};

pub fn parse(doc: &str) -> Result<Vec<ScheduleEntry>> {
    let mut out = Vec::new();
    for td in html::elements(doc, "td") {
        if !SCHEDULE_CELL_CLASSES.iter().any(|c| td.has_class(c)) {
            continue;
        }
        let texts: Vec<String> = td.descendants("div").iter().map(|d| d.text()).collect();
        if texts.len() != SCHEDULE_CELL_DIVS {
            debug!(divs = texts.len(), "skipping schedule cell");
            continue;
        }
        let start = strip_trailing_dash(&texts[1]);
        out.push(ScheduleEntry {
            owner: Some(s!(MY_SCHEDULE_OWNER)),
            start_time: Some(timestamp(&start)?),
            end_time: Some(timestamp(&texts[2])?),
            resource: Some(texts[3].clone()),
            notes: Some(texts[5].clone()),
        });
    }
    Ok(out)
}

fn timestamp(s: &str) -> Result<chrono::NaiveDateTime> {
    parse_timestamp(s).ok_or_else(|| Error::parse("schedule time", s))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn cell(class: &str, start: &str, end: &str) -> String {
        format!(
            r#"<td class="{class}"><div>Mon</div><div>{start}</div><div>{end}</div>
               <div>N123AB&nbsp;Cessna</div><div>x</div><div> cross country </div><div></div></td>"#
        )
    }

    #[test]
    fn seven_div_cells_become_entries() {
        let doc = format!(
            "<table><tr>{}</tr><tr>{}</tr><tr><td class=\"Item\"><div>short</div></td></tr></table>",
            cell("Item", "1/15/2024 9:00 AM -", "1/15/2024 11:00 AM"),
            cell("AltItem", "1/16/2024 1:00 PM-", "1/16/2024 2:30 PM"),
        );
        let v = parse(&doc).unwrap();
        assert_eq!(v.len(), 2);
        assert_eq!(v[0].owner.as_deref(), Some("you"));
        assert_eq!(v[0].resource.as_deref(), Some("N123AB Cessna"));
        assert_eq!(v[0].notes.as_deref(), Some("cross country"));
        assert_eq!(
            v[0].start_time,
            NaiveDate::from_ymd_opt(2024, 1, 15).unwrap().and_hms_opt(9, 0, 0)
        );
        assert_eq!(
            v[1].end_time,
            NaiveDate::from_ymd_opt(2024, 1, 16).unwrap().and_hms_opt(14, 30, 0)
        );
    }

    #[test]
    fn other_cells_ignored() {
        let doc = format!("<table><tr>{}</tr></table>", cell("Header", "x", "y"));
        assert!(parse(&doc).unwrap().is_empty());
    }

    #[test]
    fn bad_time_is_parse_error() {
        let doc = cell("Item", "whenever", "1/15/2024 11:00 AM");
        assert!(matches!(parse(&doc), Err(Error::Parse { .. })));
    }
}
