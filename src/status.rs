// src/status.rs
//! Resource status derived from the site's badge image name.
//!
//! The badge is a file-like token such as `warn_yel.jpg`. The status is what
//! remains after one known prefix and one known suffix are stripped.

use crate::config::consts::{BADGE_PREFIXES, BADGE_SUFFIXES, UNKNOWN_STATUS};

#[derive(Clone, Copy, Debug)]
pub struct BadgeRule {
    pub prefixes: &'static [&'static str],
    pub suffixes: &'static [&'static str],
}

pub const BADGE_RULE: BadgeRule = BadgeRule {
    prefixes: BADGE_PREFIXES,
    suffixes: BADGE_SUFFIXES,
};

impl BadgeRule {
    /// Strip at most one prefix and one suffix. Empty result means no status.
    pub fn apply(&self, badge: &str) -> Option<String> {
        let mut s = badge.trim();
        if let Some(p) = self.prefixes.iter().find(|p| s.starts_with(*p)) {
            s = &s[p.len()..];
        }
        if let Some(x) = self.suffixes.iter().find(|x| s.ends_with(*x)) {
            s = &s[..s.len() - x.len()];
        }
        if s.is_empty() { None } else { Some(s.to_string()) }
    }
}

pub fn derive(badge: Option<&str>) -> Option<String> {
    badge.and_then(|b| BADGE_RULE.apply(b))
}

/// Printable form; the null status is `unk`.
pub fn display(status: Option<&str>) -> &str {
    status.unwrap_or(UNKNOWN_STATUS)
}
