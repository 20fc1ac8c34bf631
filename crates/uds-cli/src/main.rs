//! UDS extraction CLI.

use clap::{ColorChoice, Parser};
use std::io::{self, IsTerminal};
use tracing::level_filters::LevelFilter;
use uds_cli::logging::{LogConfig, LogFormat, init_logging};

mod cli;
mod commands;
mod summary;

use crate::cli::{Cli, Command, LogFormatArg, LogLevelArg};
use crate::commands::{run_catalog, run_pipeline};
use crate::summary::{print_catalog, print_summary};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match cli.command {
        Command::Run(args) => match run_pipeline(&args) {
            Ok(result) => {
                print_summary(&result);
                0
            }
            Err(error) => {
                eprintln!("error: {error:#}");
                1
            }
        },
        Command::Catalog(args) => match run_catalog(&args) {
            Ok((catalog, path)) => {
                print_catalog(&catalog, &path);
                0
            }
            Err(error) => {
                eprintln!("error: {error:#}");
                1
            }
        },
    };
    std::process::exit(exit_code);
}

/// Build logging configuration from CLI flags with consistent precedence.
///
/// `RUST_LOG` applies only when neither `-v/-q` nor `--log-level` is given.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    let with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    }
    .with_format(format)
    .with_ansi(with_ansi)
    .with_log_file(cli.log_file.clone());

    if let Some(level) = cli.log_level {
        config = config.with_level(match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        });
    } else if cli.verbosity.is_present() {
        config = config.with_level(cli.verbosity.tracing_level_filter());
    }
    config
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        let mut argv = vec!["uds-extract"];
        argv.extend_from_slice(args);
        argv.extend_from_slice(&["catalog", "--pdf", "rdd.pdf", "--pages", "23", "27"]);
        Cli::try_parse_from(argv).unwrap()
    }

    #[test]
    fn env_filter_applies_without_level_flags() {
        let config = log_config_from_cli(&parse(&["--color", "never"]));
        assert!(config.use_env_filter);
        assert_eq!(config.level_filter, LevelFilter::WARN);
        assert!(!config.with_ansi);
    }

    #[test]
    fn log_level_flag_wins() {
        let config = log_config_from_cli(&parse(&["-v", "--log-level", "trace"]));
        assert!(!config.use_env_filter);
        assert_eq!(config.level_filter, LevelFilter::TRACE);
    }

    #[test]
    fn verbosity_flag_fixes_level() {
        let config = log_config_from_cli(&parse(&["-v", "--log-format", "json"]));
        assert!(!config.use_env_filter);
        assert_eq!(config.level_filter, LevelFilter::INFO);
        assert_eq!(config.format, LogFormat::Json);
    }
}
