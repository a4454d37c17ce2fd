// src/gateway.rs
//! The remote side. [`Gateway`] is the seam the runner talks to;
//! [`ScheduleMaster`] is the live implementation over `core::net::Http`.

use chrono::NaiveDate;
use reqwest::header::LOCATION;
use tracing::debug;

use crate::config::consts::{
    LOGIN_PAGE, LOGIN_PAGENAME, MY_SCHEDULE_PAGE, SCHED_DATA_PAGE, SCHED_DATA_VERSION,
    SCHEDULE_PAGE, USER_INFO_PAGE,
};
use crate::core::net::Http;
use crate::data::{Credentials, Reservation, Resource, ScheduleEntry};
use crate::error::{Error, Result};
use crate::specs;

pub trait Gateway {
    /// Log in and return the redirect URL carrying the new session.
    fn authenticate(&self, username: &str, password: &str) -> Result<String>;

    fn fetch_resources(&self) -> Result<Vec<Resource>>;

    /// Resources plus the reservations between two calendar days.
    fn fetch_resources_and_reservations(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<(Vec<Resource>, Vec<Reservation>)>;

    fn fetch_my_schedule(&self) -> Result<Vec<ScheduleEntry>>;

    fn fetch_profile_name(&self) -> Result<String>;
}

pub struct ScheduleMaster {
    http: Http,
    credentials: Option<Credentials>,
}

impl ScheduleMaster {
    pub fn new(root: &str, credentials: Option<Credentials>) -> Result<Self> {
        Ok(Self { http: Http::new(root)?, credentials })
    }

    fn creds(&self) -> Result<&Credentials> {
        self.credentials.as_ref().ok_or(Error::NotLoggedIn)
    }

    /// GET with `userid`/`session` appended to `params`.
    fn request(&self, path: &str, params: &[(&str, &str)]) -> Result<String> {
        let c = self.creds()?;
        let mut all = params.to_vec();
        all.push(("userid", c.userid.as_str()));
        all.push(("session", c.sessionid.as_str()));
        self.http.get(path, &all)
    }
}

impl Gateway for ScheduleMaster {
    fn authenticate(&self, username: &str, password: &str) -> Result<String> {
        let resp = self.http.post_form(
            LOGIN_PAGE,
            &[
                ("USERID", username),
                ("DATA", password),
                ("CMD", "LOGIN"),
                ("pagename", LOGIN_PAGENAME),
            ],
        )?;
        let status = resp.status();
        if status.is_client_error() || status.is_server_error() {
            return Err(Error::Transport(format!("HTTP error: {status}")));
        }
        let location = resp
            .headers()
            .get(LOCATION)
            .and_then(|v| v.to_str().ok())
            .map(String::from);
        debug!(?location, "login redirect");
        match location {
            Some(loc) if loc.contains("USERID=") => Ok(loc),
            _ => Err(Error::Auth),
        }
    }

    fn fetch_resources(&self) -> Result<Vec<Resource>> {
        let doc = self.request(SCHEDULE_PAGE, &[])?;
        specs::resources::parse(&doc)
    }

    fn fetch_resources_and_reservations(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<(Vec<Resource>, Vec<Reservation>)> {
        let resources = self.fetch_resources()?;

        let c = self.creds()?;
        let start = start.format("%Y-%m-%d").to_string();
        let end = end.format("%Y-%m-%d").to_string();
        let body = self.http.get(
            SCHED_DATA_PAGE,
            &[
                ("ver", SCHED_DATA_VERSION),
                ("user_id", c.userid.as_str()),
                ("ses_id", c.sessionid.as_str()),
                ("c", "fCal"),
                ("subCmd", "sch"),
                ("userfilter", "0"),
                ("start", start.as_str()),
                ("end", end.as_str()),
            ],
        )?;
        let reservations = specs::reservations::parse(&body)?;
        debug!(resources = resources.len(), reservations = reservations.len(), "fetched schedule");
        Ok((resources, reservations))
    }

    fn fetch_my_schedule(&self) -> Result<Vec<ScheduleEntry>> {
        let doc = self.request(MY_SCHEDULE_PAGE, &[("mysched", "1")])?;
        specs::my_schedule::parse(&doc)
    }

    fn fetch_profile_name(&self) -> Result<String> {
        let doc = self.request(USER_INFO_PAGE, &[("GETUSER", "M")])?;
        specs::profile::parse(&doc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn calls_without_credentials_are_refused() {
        let gw = ScheduleMaster::new("http://127.0.0.1:9/", None).unwrap();
        assert!(matches!(gw.fetch_profile_name(), Err(Error::NotLoggedIn)));
        assert!(matches!(gw.fetch_resources(), Err(Error::NotLoggedIn)));
    }
}
