// src/store.rs
//! Session state persisted as a flat JSON object.
//!
//! `userid` and `sessionid` are projected into [`Credentials`]; any other key
//! found on load is kept as-is and written back on the next save. Loading
//! never fails. Saving drops individual fields that cannot be serialized.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use reqwest::Url;
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::{debug, info};

use crate::data::Credentials;
use crate::error::{Error, Result};

const USERID_KEY: &str = "userid";
const SESSIONID_KEY: &str = "sessionid";

#[derive(Clone, Debug)]
pub struct SessionStore {
    path: PathBuf,
    credentials: Option<Credentials>,
    extra: Map<String, Value>,
}

impl SessionStore {
    /// Read `path`. Missing or malformed files yield an empty store.
    pub fn load(path: &Path) -> Self {
        let mut store = Self { path: path.to_path_buf(), credentials: None, extra: Map::new() };

        let mut map = match read_map(path) {
            Ok(m) => m,
            Err(e) => {
                debug!(path = %path.display(), error = %e, "no usable session state");
                return store;
            }
        };

        // A lone or non-scalar id stays in `extra` and is written back as found.
        let userid = map.get(USERID_KEY).cloned().and_then(scalar_string);
        let sessionid = map.get(SESSIONID_KEY).cloned().and_then(scalar_string);
        if let (Some(userid), Some(sessionid)) = (userid, sessionid) {
            map.remove(USERID_KEY);
            map.remove(SESSIONID_KEY);
            store.credentials = Some(Credentials { userid, sessionid });
        }
        store.extra = map;
        store
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn credentials(&self) -> Option<&Credentials> {
        self.credentials.as_ref()
    }

    /// Keys found on load other than the credentials.
    pub fn extra(&self) -> &Map<String, Value> {
        &self.extra
    }

    /// Persist credentials, retained keys, and `extra` fields.
    /// Fields that fail to serialize are left out.
    pub fn save<T: Serialize>(&self, extra: &BTreeMap<String, T>) -> Result<()> {
        let mut out = self.extra.clone();
        for (k, v) in extra {
            match serde_json::to_value(v) {
                Ok(value) => { out.insert(k.clone(), value); }
                Err(e) => debug!(field = %k, error = %e, "dropping unserializable field"),
            }
        }
        if let Some(c) = &self.credentials {
            out.insert(s!(USERID_KEY), Value::String(c.userid.clone()));
            out.insert(s!(SESSIONID_KEY), Value::String(c.sessionid.clone()));
        }

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|source| self.io_err(source))?;
            }
        }
        let text = serde_json::to_string(&Value::Object(out))?;
        fs::write(&self.path, text).map_err(|source| self.io_err(source))?;
        info!(path = %self.path.display(), "session state saved");
        Ok(())
    }

    pub fn adopt(&mut self, userid: &str, sessionid: &str) -> Result<()> {
        self.credentials = Some(Credentials { userid: s!(userid), sessionid: s!(sessionid) });
        self.save::<Value>(&BTreeMap::new())
    }

    /// Take `userid` and `session` from a redirect URL's query string.
    /// The whole URL is lower-cased first; relative URLs resolve against `root`.
    pub fn adopt_from_url(&mut self, url: &str, root: &str) -> Result<()> {
        let (userid, session) = parse_redirect(url, root)?;
        self.adopt(&userid, &session)
    }

    fn io_err(&self, source: std::io::Error) -> Error {
        Error::Io { path: self.path.clone(), source }
    }
}

fn read_map(path: &Path) -> std::result::Result<Map<String, Value>, Box<dyn std::error::Error>> {
    let text = fs::read_to_string(path)?;
    match serde_json::from_str::<Value>(&text)? {
        Value::Object(m) => Ok(m),
        other => Err(format!("expected a JSON object, found {other}").into()),
    }
}

/// Ids were historically written as numbers; accept both.
fn scalar_string(v: Value) -> Option<String> {
    match v {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

pub fn parse_redirect(url: &str, root: &str) -> Result<(String, String)> {
    let malformed = || Error::MalformedRedirect(s!(url));
    let lower = url.to_lowercase();
    let base = Url::parse(root).map_err(|_| malformed())?;
    let parsed = base.join(&lower).map_err(|_| malformed())?;

    let mut userid = None;
    let mut session = None;
    // Blank values count as absent.
    for (k, v) in parsed.query_pairs().filter(|(_, v)| !v.is_empty()) {
        match k.as_ref() {
            "userid" => userid = Some(v.into_owned()),
            "session" => session = Some(v.into_owned()),
            _ => {}
        }
    }
    match (userid, session) {
        (Some(u), Some(s)) => Ok((u, s)),
        _ => Err(malformed()),
    }
}
