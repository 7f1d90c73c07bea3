//! CLI routing and command dispatch.

use crate::constants;
use crate::core::paths::StorePath;
use crate::core::validate;
use crate::core::{CredentialRepository, JsonFileStore};
use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;
use tracing::debug;

pub mod credential;
pub mod menu;
pub mod report;

/// Shared context passed to all command handlers.
pub struct CliContext {
    pub store: StorePath,
    pub repo: CredentialRepository<JsonFileStore>,
    pub today: NaiveDate,
}

impl CliContext {
    pub fn new(store: StorePath, today: NaiveDate) -> Self {
        let repo = CredentialRepository::new(JsonFileStore::new(store.file.clone()));
        Self { store, repo, today }
    }
}

fn parse_as_of(s: &str) -> Result<NaiveDate, String> {
    validate::parse_date(s).map_err(|e| e.to_string())
}

#[derive(Parser, Debug)]
#[command(
    name = "rotation-tracker",
    version,
    about = "Track credentials that need periodic rotation"
)]
pub struct Cli {
    /// Store file (default: ./credentials.json)
    #[arg(long, global = true, value_name = "PATH", env = constants::STORE_ENV_VAR)]
    pub store: Option<PathBuf>,

    /// Evaluate due dates as of this day instead of today (YYYY-MM-DD)
    #[arg(long, global = true, value_name = "DATE", value_parser = parse_as_of)]
    pub as_of: Option<NaiveDate>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Run a single command; without one the interactive menu starts
    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        let store = StorePath::resolve(self.store);
        let today = self.as_of.unwrap_or_else(|| Local::now().date_naive());
        debug!(%store, %today, "resolved context");
        let ctx = CliContext::new(store, today);

        match self.command {
            None => menu::run(&ctx),
            Some(Commands::Add(args)) => credential::run_add(&ctx, args),
            Some(Commands::List(args)) => credential::run_list(&ctx, args),
            Some(Commands::Update(args)) => credential::run_update(&ctx, args),
            Some(Commands::Delete(args)) => credential::run_delete(&ctx, args),
            Some(Commands::Overdue(args)) => report::run_overdue(&ctx, args),
            Some(Commands::Summary(args)) => report::run_summary(&ctx, args),
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Track a new credential
    Add(credential::AddArgs),
    /// List tracked credentials with their rotation status
    List(credential::ListArgs),
    /// Record a new rotation date for a credential
    Update(credential::UpdateArgs),
    /// Stop tracking a credential
    Delete(credential::DeleteArgs),
    /// Show credentials past their due date
    Overdue(report::OverdueArgs),
    /// Show total and overdue counts
    Summary(report::SummaryArgs),
}
