use std::path::PathBuf;

use almanac_calendar::TextStyle;
use clap::{Parser, Subcommand, ValueEnum};

/// Almanac calendrical toolkit.
#[derive(Parser)]
#[command(
    name = "almanac",
    version,
    about = "Clock readings, ISO weekdays and months, and localized calendar names"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to TOML configuration file [default: almanac.toml, if present].
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Print the current local date-time with its weekday and month names.
    Now(NowArgs),
    /// Resolve the display name of one month or day of the week.
    Name(NameArgs),
    /// Print all month and weekday names of a locale.
    Calendar(CalendarArgs),
}

/// Arguments for the `now` subcommand.
#[derive(clap::Args)]
pub struct NowArgs {
    /// Fixed-offset zone (`UTC`, `+05:30`, `GMT-08`); overrides config.
    #[arg(short, long)]
    pub zone: Option<String>,

    /// Locale tag for the names; overrides config.
    #[arg(short, long)]
    pub locale: Option<String>,
}

/// What `name` resolves.
#[derive(Clone, Copy, ValueEnum)]
pub enum NameKind {
    /// A month, numbered 1 (January) to 12.
    Month,
    /// A day of the week, numbered 1 (Monday) to 7.
    Day,
}

/// Arguments for the `name` subcommand.
#[derive(clap::Args)]
pub struct NameArgs {
    /// Whether `number` is a month or an ISO day of the week.
    pub kind: NameKind,

    /// Month number (1..=12) or ISO day number (1..=7).
    #[arg(allow_negative_numbers = true)]
    pub number: i32,

    /// Text style, e.g. `full`, `short-standalone`, `narrow`.
    #[arg(short, long, default_value = "full-standalone")]
    pub style: TextStyle,

    /// Locale tag; overrides config.
    #[arg(short, long)]
    pub locale: Option<String>,
}

/// Arguments for the `calendar` subcommand.
#[derive(clap::Args)]
pub struct CalendarArgs {
    /// Locale tag; overrides config.
    #[arg(short, long)]
    pub locale: Option<String>,

    /// Text style of the listed names.
    #[arg(short, long, default_value = "full-standalone")]
    pub style: TextStyle,
}
