//! CLI argument definitions for the UDS extraction tool.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use uds_model::DEFAULT_MISSING_SENTINEL;

#[derive(Parser)]
#[command(
    name = "uds-extract",
    version,
    about = "Extract the UDS variable catalog and report dataset availability",
    long_about = "Extract the C1/C2 variable catalog from the UDS researcher data dictionary PDF,\n\
                  align a UDS CSV export to it, tag MMSE/MoCA availability and write\n\
                  availability reports."
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
    /// Build the catalog, align the dataset and write all reports.
    Run(RunArgs),

    /// Extract the variable catalog only.
    Catalog(CatalogArgs),
}

/// Dictionary location and extraction filters shared by both commands.
#[derive(Args)]
pub struct DictionaryArgs {
    /// Path to the researcher data dictionary PDF.
    #[arg(long = "pdf", value_name = "PATH")]
    pub pdf: PathBuf,

    /// Inclusive zero-based page range holding the variable tables.
    #[arg(long = "pages", num_args = 2, value_names = ["START", "END"], required = true)]
    pub pages: Vec<usize>,

    /// Output directory for generated files.
    #[arg(long = "out", value_name = "DIR", default_value = "outputs/uds_extraction")]
    pub out: PathBuf,

    /// Form tokens to keep (space or comma separated). Defaults to C1 C2.
    #[arg(long = "forms", value_name = "TOKEN", num_args = 1..)]
    pub forms: Vec<String>,
}

#[derive(Args)]
pub struct CatalogArgs {
    #[command(flatten)]
    pub dictionary: DictionaryArgs,
}

#[derive(Args)]
pub struct RunArgs {
    /// Path to the UDS CSV export.
    #[arg(long = "csv", value_name = "PATH")]
    pub csv: PathBuf,

    #[command(flatten)]
    pub dictionary: DictionaryArgs,

    /// Columns that signal an MMSE assessment (space or comma separated).
    #[arg(
        long = "mmse-cols",
        alias = "primary-cols",
        value_name = "COL",
        num_args = 1..
    )]
    pub mmse_cols: Vec<String>,

    /// Columns that signal a MoCA assessment (space or comma separated).
    #[arg(
        long = "moca-cols",
        alias = "secondary-cols",
        value_name = "COL",
        num_args = 1..
    )]
    pub moca_cols: Vec<String>,

    /// Render the sampled availability heatmap.
    #[arg(long = "heatmap")]
    pub heatmap: bool,

    /// Numeric placeholder treated as missing.
    #[arg(
        long = "missing-sentinel",
        value_name = "F64",
        default_value_t = DEFAULT_MISSING_SENTINEL,
        allow_negative_numbers = true
    )]
    pub missing_sentinel: f64,

    /// Number of records sampled for the heatmap.
    #[arg(long = "sample-size", value_name = "N", default_value_t = 100)]
    pub sample_size: usize,

    /// Seed for heatmap sampling.
    #[arg(long = "seed", value_name = "N", default_value_t = 42)]
    pub seed: u64,

    /// TrueType/OpenType font for heatmap labels (default: system sans-serif).
    #[arg(long = "font", value_name = "PATH")]
    pub font: Option<PathBuf>,
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
