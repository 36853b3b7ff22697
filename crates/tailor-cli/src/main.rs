//! Trip Tailor itinerary checker CLI.

use std::io::{self, IsTerminal};

use clap::{ColorChoice, Parser};
use tailor_cli::exit;
use tailor_cli::logging::{LogConfig, LogFormat, init_logging};
use tracing::level_filters::LevelFilter;

mod cli;
mod commands;
mod summary;

use crate::cli::{Cli, Command, LogFormatArg, LogLevelArg};
use crate::commands::{run_replay, run_tags, run_validate};
use crate::summary::{emit_report, print_catalog, print_times};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(exit::SETUP_ERROR);
    }
    let exit_code = match cli.command {
        Command::Validate(args) => report_exit_code(
            run_validate(&args).and_then(|report| {
                emit_report(&report, args.check.json)?;
                Ok(report.is_submittable())
            }),
        ),
        Command::Replay(args) => report_exit_code(
            run_replay(&args).and_then(|report| {
                emit_report(&report, args.check.json)?;
                Ok(report.is_submittable())
            }),
        ),
        Command::Tags(args) => match run_tags(&args) {
            Ok(catalog) => {
                print_catalog(&catalog);
                exit::SUCCESS
            }
            Err(error) => {
                eprintln!("error: {error:#}");
                exit::SETUP_ERROR
            }
        },
        Command::Times => {
            print_times();
            exit::SUCCESS
        }
    };
    std::process::exit(exit_code);
}

fn report_exit_code(outcome: anyhow::Result<bool>) -> i32 {
    match outcome {
        Ok(submittable) => exit::for_verdict(submittable),
        Err(error) => {
            eprintln!("error: {error:#}");
            exit::SETUP_ERROR
        }
    }
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.log_file = cli.log_file.clone();
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
