// src/config/options.rs
use std::path::PathBuf;

use super::consts::*;

/// Runtime settings shared by every command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    pub state_path: PathBuf,
    pub root: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            state_path: default_state_path(),
            root: std::env::var(ROOT_ENV).unwrap_or_else(|_| s!(ROOT)),
        }
    }
}

impl Settings {
    pub fn with_state_path(mut self, path: Option<PathBuf>) -> Self {
        if let Some(p) = path {
            self.state_path = p;
        }
        self
    }
}

/// `~/.schedulemaster-api.json`, or the bare file name when no home dir is known.
pub fn default_state_path() -> PathBuf {
    dirs::home_dir()
        .map(|home| home.join(DEFAULT_STATE_FILE))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_STATE_FILE))
}

/// Split a comma-separated CLI value into trimmed, non-empty tokens.
pub fn split_tokens(s: &str) -> Vec<String> {
    s.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(String::from)
        .collect()
}

/// Allowed computed statuses. `None` is the null status (no badge).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatusSet {
    allowed: Vec<Option<String>>,
}

impl Default for StatusSet {
    fn default() -> Self {
        Self::parse(DEFAULT_STATUSES)
    }
}

impl StatusSet {
    /// Only `None` names the null status; every other token, `unk` included,
    /// is a literal status.
    pub fn parse(s: &str) -> Self {
        let allowed = split_tokens(s)
            .into_iter()
            .map(|t| if t == NULL_STATUS_TOKEN { None } else { Some(t) })
            .collect();
        Self { allowed }
    }

    pub fn contains(&self, status: Option<&str>) -> bool {
        self.allowed.iter().any(|a| a.as_deref() == status)
    }
}

/// Resource-side filter criteria. `None` on an axis means no restriction.
/// Token lists are stored lower-cased.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResourceFilter {
    pub resources: Option<Vec<String>>,
    pub models: Option<Vec<String>>,
    pub locations: Option<Vec<String>>,
    pub statuses: StatusSet,
}

impl ResourceFilter {
    pub fn from_args(
        resources: Option<&str>,
        models: Option<&str>,
        locations: Option<&str>,
        statuses: Option<&str>,
    ) -> Self {
        let lower = |v: Option<&str>| {
            v.map(|s| split_tokens(&s.to_lowercase()))
        };
        Self {
            resources: lower(resources),
            models: lower(models),
            locations: lower(locations),
            statuses: statuses.map(StatusSet::parse).unwrap_or_default(),
        }
    }
}
