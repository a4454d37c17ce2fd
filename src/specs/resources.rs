// src/specs/resources.rs
//! Resource list from `Schedule3.aspx`.
//!
//! The page embeds the resource metadata as a JSON array in the `value` of a
//! hidden input (`#ctl00_CPL1_h_jsonRes`), HTML-escaped.

use crate::config::consts::RESOURCES_INPUT_ID;
use crate::core::html;
use crate::data::Resource;
use crate::error::{Error, Result};

pub fn parse(doc: &str) -> Result<Vec<Resource>> {
    let input = html::element_by_id(doc, "input", RESOURCES_INPUT_ID)
        .ok_or_else(|| Error::parse("resource list", "hidden resource input not found"))?;
    let value = input.attr("value").unwrap_or_default();
    if value.trim().is_empty() {
        return Ok(Vec::new());
    }
    serde_json::from_str(&value).map_err(|e| Error::parse("resource list", e.to_string()))
}
