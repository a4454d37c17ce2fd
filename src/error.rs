// src/error.rs
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Login was rejected: the redirect carried no identity markers.
    #[error("Login failed")]
    Auth,

    #[error("Redirect URL is missing userid/session: {0}")]
    MalformedRedirect(String),

    #[error("Login information expired")]
    SessionExpired,

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Not logged in; run `login` or `adopt` first")]
    NotLoggedIn,

    #[error("Could not parse {what}: {detail}")]
    Parse { what: &'static str, detail: String },

    #[error("Invalid time: {0}")]
    InvalidTime(String),

    #[error("Could not write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not write output: {0}")]
    Output(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        Error::Transport(e.to_string())
    }
}

impl Error {
    pub(crate) fn parse(what: &'static str, detail: impl Into<String>) -> Self {
        Error::Parse { what, detail: detail.into() }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
