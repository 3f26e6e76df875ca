mod calendar_cmd;
mod cli;
mod config;
mod logging;
mod name_cmd;
mod now_cmd;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};
use crate::config::AlmanacConfig;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = AlmanacConfig::load(cli.config.as_deref())?;
    match cli.command {
        Command::Now(args) => now_cmd::run(args, &config),
        Command::Name(args) => name_cmd::run(args, &config),
        Command::Calendar(args) => calendar_cmd::run(args, &config),
    }
}
