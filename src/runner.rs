// src/runner.rs
use std::io::Write;

use chrono::{NaiveDate, NaiveDateTime};
use tracing::info;

use crate::{
    config::options::ResourceFilter,
    core::time::parse_timestamp,
    error::{Error, Result},
    filter::{self, TimeRange},
    gateway::Gateway,
    report,
    store::SessionStore,
};

/// One CLI invocation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Login { username: String, password: String },
    Adopt { userid: String, session: String },
    AdoptUrl { url: String },
    MySchedule,
    AllSchedule { start: Option<String>, end: Option<String>, filter: ResourceFilter },
    ListResources { filter: ResourceFilter },
    Me,
}

/// Everything a command needs besides its arguments.
pub struct Context<'a> {
    pub store: &'a mut SessionStore,
    pub gateway: &'a dyn Gateway,
    /// Base for resolving relative login redirects.
    pub root: &'a str,
    pub today: NaiveDate,
}

/// Dispatch a command. Output goes to `out`; any failure aborts the command.
pub fn run(cmd: Command, ctx: Context<'_>, out: &mut dyn Write) -> Result<()> {
    match cmd {
        Command::Login { username, password } => {
            let redirect = ctx.gateway.authenticate(&username, &password)?;
            ctx.store.adopt_from_url(&redirect, ctx.root)?;
            info!(user = %username, "logged in");
        }
        Command::Adopt { userid, session } => {
            ctx.store.adopt(&userid, &session)?;
        }
        Command::AdoptUrl { url } => {
            ctx.store.adopt_from_url(&url, ctx.root)?;
        }
        Command::MySchedule => {
            for entry in ctx.gateway.fetch_my_schedule()? {
                writeln!(out, "{entry}")?;
            }
        }
        Command::AllSchedule { start, end, filter } => {
            let range = TimeRange::resolve(
                parse_opt(start.as_deref())?,
                parse_opt(end.as_deref())?,
                ctx.today,
            );
            let lines = all_schedule(ctx.gateway, &range, &filter)?;
            report::write_lines(out, &lines)?;
        }
        Command::ListResources { filter } => {
            let resources = ctx.gateway.fetch_resources()?;
            let kept = filter::filter_resources(&resources, &filter);
            report::write_lines(out, &report::resource_list(&kept))?;
        }
        Command::Me => {
            writeln!(out, "{}", ctx.gateway.fetch_profile_name()?)?;
        }
    }
    out.flush()?;
    Ok(())
}

/// Fetch, filter and render the time-ranged report.
pub fn all_schedule(
    gateway: &dyn Gateway,
    range: &TimeRange,
    criteria: &ResourceFilter,
) -> Result<Vec<String>> {
    let (resources, reservations) =
        gateway.fetch_resources_and_reservations(range.start.date(), range.end.date())?;
    let (resources, reservations) = filter::apply(&resources, &reservations, criteria, range);
    Ok(report::build(range, &resources, &reservations))
}

fn parse_opt(s: Option<&str>) -> Result<Option<NaiveDateTime>> {
    s.map(|s| parse_timestamp(s).ok_or_else(|| Error::InvalidTime(s!(s))))
        .transpose()
}
