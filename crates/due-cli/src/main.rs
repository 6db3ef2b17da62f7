mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli::init_tracing(cli.verbose, cli.quiet)?;

    let mut stdout = std::io::stdout().lock();
    match &cli.command {
        Command::Parse(args) => commands::run_parse(args, &mut stdout),
        Command::Snooze(args) => commands::run_snooze(args, &mut stdout),
    }
}
