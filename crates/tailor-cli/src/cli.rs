//! CLI argument definitions for the itinerary checker.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "trip-tailor",
    version,
    about = "Trip Tailor - check itinerary drafts before submission",
    long_about = "Check Trip Tailor itinerary drafts before submission.\n\n\
                  Validates basic info, tag selection and the event schedule,\n\
                  and can replay recorded editing sessions through the draft store."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Validate a draft saved as JSON.
    Validate(ValidateArgs),

    /// Replay a recorded editing session, then validate the result.
    Replay(ReplayArgs),

    /// List the tag catalog.
    Tags(CatalogArgs),

    /// List the selectable event times.
    Times,
}

#[derive(Args)]
pub struct CatalogArgs {
    /// Tag catalog JSON to use instead of the built-in one.
    #[arg(long = "catalog", value_name = "PATH")]
    pub catalog: Option<PathBuf>,
}

#[derive(Args)]
pub struct CheckArgs {
    #[command(flatten)]
    pub catalog: CatalogArgs,

    /// Minimum number of selected tags.
    #[arg(long = "min-tags", value_name = "N")]
    pub min_tags: Option<usize>,

    /// Print the report as JSON instead of a table.
    #[arg(long = "json")]
    pub json: bool,

    /// Print the submission payload when the draft passes.
    #[arg(long = "payload")]
    pub payload: bool,
}

#[derive(Args)]
pub struct ValidateArgs {
    /// Draft JSON file.
    #[arg(value_name = "DRAFT")]
    pub draft: PathBuf,

    #[command(flatten)]
    pub check: CheckArgs,
}

#[derive(Args)]
pub struct ReplayArgs {
    /// JSON array of draft commands.
    #[arg(value_name = "SESSION")]
    pub session: PathBuf,

    #[command(flatten)]
    pub check: CheckArgs,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
