// src/cli.rs
use std::path::PathBuf;

use chrono::Local;
use clap::{ArgAction, Args, Parser, Subcommand};

use crate::config::options::{ResourceFilter, Settings};
use crate::error::Result;
use crate::gateway::ScheduleMaster;
use crate::runner::{self, Command, Context};
use crate::store::SessionStore;

/// Schedule Master from the terminal.
#[derive(Parser, Debug)]
#[command(name = "sm_scrape", version, about)]
pub struct Cli {
    /// JSON state file path (default: ~/.schedulemaster-api.json).
    #[arg(short = 'c', long = "config-file", global = true)]
    pub config_file: Option<PathBuf>,

    /// More logging on stderr; repeat for more.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// Log in and store the session.
    Login {
        /// Username (e.g. 12345-1).
        username: String,
        password: String,
    },
    /// Store an existing user id and session id.
    Adopt { userid: String, session: String },
    /// Store the session found in a post-login redirect URL.
    Adopturl { url: String },
    /// Your own reservations.
    Mysched,
    /// Reservations per resource in a time range (default: today).
    Allsched {
        #[arg(long)]
        start_time: Option<String>,
        #[arg(long)]
        end_time: Option<String>,
        #[command(flatten)]
        filter: FilterArgs,
    },
    /// Resources matching the filters.
    Listres {
        #[command(flatten)]
        filter: FilterArgs,
    },
    /// Name of the logged-in user.
    Me,
}

#[derive(Args, Debug, Default)]
pub struct FilterArgs {
    /// Comma-separated titles, codes or ids.
    #[arg(long)]
    pub resources: Option<String>,
    /// Comma-separated model tags.
    #[arg(long)]
    pub models: Option<String>,
    /// Comma-separated allowed statuses. `None` selects resources with no
    /// badge; `unk` and `none` match only a literal status of that name.
    #[arg(long)]
    pub statuses: Option<String>,
    /// Comma-separated location substrings.
    #[arg(long)]
    pub location: Option<String>,
}

impl From<FilterArgs> for ResourceFilter {
    fn from(a: FilterArgs) -> Self {
        ResourceFilter::from_args(
            a.resources.as_deref(),
            a.models.as_deref(),
            a.location.as_deref(),
            a.statuses.as_deref(),
        )
    }
}

impl From<CliCommand> for Command {
    fn from(c: CliCommand) -> Self {
        match c {
            CliCommand::Login { username, password } => Command::Login { username, password },
            CliCommand::Adopt { userid, session } => Command::Adopt { userid, session },
            CliCommand::Adopturl { url } => Command::AdoptUrl { url },
            CliCommand::Mysched => Command::MySchedule,
            CliCommand::Allsched { start_time, end_time, filter } => Command::AllSchedule {
                start: start_time,
                end: end_time,
                filter: filter.into(),
            },
            CliCommand::Listres { filter } => Command::ListResources { filter: filter.into() },
            CliCommand::Me => Command::Me,
        }
    }
}

/// Parse process args and run the command against the live site.
pub fn run() -> Result<()> {
    run_with(Cli::parse())
}

pub fn run_with(cli: Cli) -> Result<()> {
    crate::log::init(cli.verbose);

    let settings = Settings::default().with_state_path(cli.config_file);
    let mut store = SessionStore::load(&settings.state_path);
    let gateway = ScheduleMaster::new(&settings.root, store.credentials().cloned())?;

    let ctx = Context {
        store: &mut store,
        gateway: &gateway,
        root: &settings.root,
        today: Local::now().date_naive(),
    };
    let stdout = std::io::stdout();
    runner::run(cli.command.into(), ctx, &mut stdout.lock())
}
