// src/data.rs
//
// Records fetched from the site. Resources and reservations are immutable
// snapshots per fetch; nothing here talks to the network.

use std::fmt;

use chrono::NaiveDateTime;
use serde::{Deserialize, Deserializer, Serialize};

use crate::core::time::{parse_timestamp, to_iso};
use crate::status;

/// Opaque identity tokens attached to every authenticated call.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub userid: String,
    pub sessionid: String,
}

/// A bookable entity. Identified by `id`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct Resource {
    #[serde(alias = "ID", alias = "Id", alias = "resourceId", deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(default, alias = "Title", alias = "name", deserialize_with = "string_or_number")]
    pub title: String,
    #[serde(default, alias = "Code", alias = "short", deserialize_with = "string_or_number")]
    pub code: String,
    /// Comma-separated model tags.
    #[serde(default, alias = "Model", deserialize_with = "string_or_number")]
    pub model: String,
    #[serde(default, alias = "Location", alias = "loc", deserialize_with = "string_or_number")]
    pub location: String,
    #[serde(default, alias = "status", alias = "Status", alias = "badge", deserialize_with = "opt_string")]
    pub status_badge: Option<String>,
}

impl Resource {
    /// Derived from the badge; `None` when there is no badge.
    pub fn status(&self) -> Option<String> {
        status::derive(self.status_badge.as_deref())
    }

    pub fn model_tags(&self) -> impl Iterator<Item = &str> {
        self.model.split(',').map(str::trim).filter(|t| !t.is_empty())
    }

    /// `#<id> <status>  <title>  @ <location>  (<model>)`
    pub fn header(&self) -> String {
        let status = self.status();
        format!(
            "#{} {}  {}  @ {}  ({})",
            self.id,
            status::display(status.as_deref()),
            self.title,
            self.location,
            self.model,
        )
    }
}

/// One booking of a resource. Start/end keep the site's raw strings.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct Reservation {
    #[serde(
        alias = "resourceId",
        alias = "resource",
        alias = "resId",
        alias = "ResourceID",
        deserialize_with = "string_or_number"
    )]
    pub resource_id: String,
    #[serde(default, alias = "Start", deserialize_with = "string_or_number")]
    pub start: String,
    #[serde(default, alias = "End", deserialize_with = "string_or_number")]
    pub end: String,
    #[serde(default, alias = "Title", deserialize_with = "string_or_number")]
    pub title: String,
    #[serde(default, alias = "dest", alias = "Destination", deserialize_with = "string_or_number")]
    pub destination: String,
}

impl Reservation {
    pub fn start_time(&self) -> Option<NaiveDateTime> {
        parse_timestamp(&self.start)
    }

    pub fn end_time(&self) -> Option<NaiveDateTime> {
        parse_timestamp(&self.end)
    }

    /// `start end title destination`
    pub fn line(&self) -> String {
        [self.start.as_str(), &self.end, &self.title, &self.destination].join(" ")
    }
}

/// A row from the personal schedule page. Every field may be missing.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScheduleEntry {
    pub owner: Option<String>,
    pub start_time: Option<NaiveDateTime>,
    pub end_time: Option<NaiveDateTime>,
    pub resource: Option<String>,
    pub notes: Option<String>,
}

impl fmt::Display for ScheduleEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ts = |t: &Option<NaiveDateTime>| t.as_ref().map(to_iso).unwrap_or_else(|| s!("-"));
        let or_dash = |v: &Option<String>| v.clone().unwrap_or_else(|| s!("-"));
        write!(
            f,
            "{} -> {}  {}  [{}]  {}",
            ts(&self.start_time),
            ts(&self.end_time),
            or_dash(&self.resource),
            or_dash(&self.owner),
            or_dash(&self.notes),
        )
    }
}

/// The site is loose about ids: `17` and `"17"` both occur.
pub(crate) fn string_or_number<'de, D>(d: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(opt_string(d)?.unwrap_or_default())
}

pub(crate) fn opt_string<'de, D>(d: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde_json::Value;
    Ok(match Value::deserialize(d)? {
        Value::Null => None,
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        other => Some(other.to_string()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn resource_from_site_json() {
        let js = r#"{"ID": 17, "Title": "Cessna 172", "Code": "N123AB",
                     "Model": "C172, laptop", "Location": "North Lab", "status": "warn_yel.jpg"}"#;
        let r: Resource = serde_json::from_str(js).unwrap();
        assert_eq!(r.id, "17");
        assert_eq!(r.code, "N123AB");
        assert_eq!(r.model_tags().collect::<Vec<_>>(), vec!["C172", "laptop"]);
        assert_eq!(r.status().as_deref(), Some("yel"));
        assert_eq!(r.header(), "#17 yel  Cessna 172  @ North Lab  (C172, laptop)");
    }

    #[test]
    fn missing_badge_renders_unk() {
        let r: Resource = serde_json::from_str(r#"{"id": "2", "title": "Sim", "status": null}"#).unwrap();
        assert_eq!(r.status_badge, None);
        assert_eq!(r.header(), "#2 unk  Sim  @   ()");
    }

    #[test]
    fn reservation_aliases_and_line() {
        let js = r#"{"resourceId": 2, "start": "2024-01-15T09:00:00",
                     "end": "2024-01-15T10:00:00", "title": "Smith", "dest": "KBOS"}"#;
        let r: Reservation = serde_json::from_str(js).unwrap();
        assert_eq!(r.resource_id, "2");
        assert_eq!(r.line(), "2024-01-15T09:00:00 2024-01-15T10:00:00 Smith KBOS");
        assert_eq!(
            r.start_time(),
            NaiveDate::from_ymd_opt(2024, 1, 15).unwrap().and_hms_opt(9, 0, 0)
        );
    }

    #[test]
    fn schedule_entry_defaults_to_absent() {
        let e = ScheduleEntry { notes: Some(s!("x-c")), ..Default::default() };
        assert_eq!(e.owner, None);
        assert_eq!(e.to_string(), "- -> -  -  [-]  x-c");
    }
}
