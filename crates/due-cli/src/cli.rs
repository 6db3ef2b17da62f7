use std::io::IsTerminal;

use anyhow::anyhow;
use clap::{ArgAction, Args, Parser, Subcommand};
use due_engine::WeekStartDay;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "due",
    version,
    about = "Preview natural due-date expressions such as \"mon 2h\", \"9pm\" or \"2d4h\""
)]
pub struct Cli {
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[arg(short = 'q', long = "quiet", action = ArgAction::Count, global = true)]
    pub quiet: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Parse a due-date expression and show the moment it resolves to
    Parse(ParseArgs),
    /// Push a stored due date back by one hour
    Snooze(SnoozeArgs),
}

#[derive(Args, Debug)]
pub struct ParseArgs {
    /// Expression to parse; several words are joined with single spaces
    #[arg(required = true, num_args = 1..)]
    pub text: Vec<String>,

    /// Anchor instant in RFC 3339 [default: current time]
    #[arg(long)]
    pub now: Option<String>,

    /// IANA timezone for wall-clock arithmetic
    #[arg(long, env = "DUE_TIMEZONE", default_value = "UTC")]
    pub timezone: String,

    /// First day of the week (sunday or monday)
    #[arg(long, default_value = "sunday")]
    pub week_start: WeekStartDay,

    /// Print a JSON object instead of text
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct SnoozeArgs {
    /// Stored due date in RFC 3339
    pub due: String,

    /// Anchor instant for the relative text, in RFC 3339 [default: current time]
    #[arg(long)]
    pub now: Option<String>,

    /// IANA timezone the snoozed date is shown in
    #[arg(long, env = "DUE_TIMEZONE", default_value = "UTC")]
    pub timezone: String,

    /// Print a JSON object instead of text
    #[arg(long)]
    pub json: bool,
}

pub fn init_tracing(verbose: u8, quiet: u8) -> anyhow::Result<()> {
    let default_level = if quiet > 0 {
        "error"
    } else if verbose >= 3 {
        "trace"
    } else if verbose == 2 {
        "debug"
    } else if verbose == 1 {
        "info"
    } else {
        "warn"
    };

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .map_err(|e| anyhow!("invalid RUST_LOG / log filter: {e}"))?;

    let init_result = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .try_init();

    if let Err(err) = init_result {
        debug!(error = %err, "tracing subscriber already set, continuing");
    }

    Ok(())
}
