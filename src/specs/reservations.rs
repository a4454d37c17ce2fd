// src/specs/reservations.rs
//! Reservation records from the `SchedData.aspx` calendar feed.
//!
//! The feed answers with a JSON array of events. Some deployments wrap it in
//! an object (`{"events": [...]}` or `{"data": [...]}`); both are accepted.

use serde::Deserialize;

use crate::data::Reservation;
use crate::error::{Error, Result};

#[derive(Deserialize)]
#[serde(untagged)]
enum Feed {
    List(Vec<Reservation>),
    Wrapped {
        #[serde(alias = "data", alias = "d")]
        events: Vec<Reservation>,
    },
}

pub fn parse(body: &str) -> Result<Vec<Reservation>> {
    let feed: Feed = serde_json::from_str(body)
        .map_err(|e| Error::parse("reservation feed", e.to_string()))?;
    Ok(match feed {
        Feed::List(v) => v,
        Feed::Wrapped { events } => events,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_list() {
        let body = r#"[{"resourceId":"2","start":"2024-01-15T09:00:00","end":"2024-01-15T11:00:00",
                        "title":"Smith","destination":"KBOS"}]"#;
        let v = parse(body).unwrap();
        assert_eq!(v.len(), 1);
        assert_eq!(v[0].resource_id, "2");
        assert_eq!(v[0].destination, "KBOS");
    }

    #[test]
    fn wrapped_list() {
        let body = r#"{"events":[{"resource_id":5,"start":"a","end":"b"}]}"#;
        let v = parse(body).unwrap();
        assert_eq!(v[0].resource_id, "5");
        assert_eq!(v[0].title, "");
    }

    #[test]
    fn html_instead_of_json_is_parse_error() {
        assert!(matches!(parse("<html>"), Err(Error::Parse { .. })));
    }
}
