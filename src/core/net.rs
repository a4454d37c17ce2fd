// src/core/net.rs
// Blocking HTTP against the Schedule Master root. One client per run,
// fixed timeout, redirects not followed (login reads `Location` itself).

use std::time::Duration;

use reqwest::StatusCode;
use reqwest::blocking::{Client, Response};
use reqwest::redirect::Policy;
use tracing::debug;

use crate::config::consts::{SESSION_INVALID_MARKER, TIMEOUT_SECS, USER_AGENT};
use crate::error::{Error, Result};

pub struct Http {
    client: Client,
    root: String,
}

impl Http {
    pub fn new(root: &str) -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(TIMEOUT_SECS))
            .redirect(Policy::none())
            .build()?;
        let root = if root.ends_with('/') { s!(root) } else { join!(root, "/") };
        Ok(Self { client, root })
    }

    pub fn root(&self) -> &str {
        &self.root
    }

    /// GET `root + path` and return the checked body.
    pub fn get(&self, path: &str, params: &[(&str, &str)]) -> Result<String> {
        let url = join!(&self.root, path);
        debug!(%url, "GET");
        let resp = self.client.get(&url).query(params).send()?;
        read_checked(resp)
    }

    /// POST a form; the raw response is returned so the caller can read headers.
    pub fn post_form(&self, path: &str, form: &[(&str, &str)]) -> Result<Response> {
        let url = join!(&self.root, path);
        debug!(%url, "POST");
        Ok(self.client.post(&url).form(form).send()?)
    }
}

fn read_checked(resp: Response) -> Result<String> {
    let status = resp.status();
    let body = resp.text()?;
    check_body(status, body)
}

/// The session marker wins over the status code: the server sometimes
/// reports an invalid session with a 200, sometimes with an error page.
pub fn check_body(status: StatusCode, body: String) -> Result<String> {
    if body.contains(SESSION_INVALID_MARKER) {
        return Err(Error::SessionExpired);
    }
    if !status.is_success() {
        return Err(Error::Transport(format!("HTTP error: {status}")));
    }
    Ok(body)
}
