//! CLI argument definitions for the catalog sync tool.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "catalog-sync",
    version,
    about = "Normalize a retail catalog export and submit it in batches",
    long_about = "Read a semicolon-delimited product export (Portuguese retail \
                  catalog), normalize each row into an API-ready record, infer \
                  selling-unit type and measures from product names, and submit \
                  the result to the catalog API in batches of 1000."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
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
    /// Process a catalog export and submit the resulting batches.
    Sync(SyncArgs),

    /// Show the unit-type inference rules in evaluation order.
    Rules,
}

#[derive(Parser)]
pub struct SyncArgs {
    /// Path to the semicolon-delimited catalog export.
    #[arg(value_name = "CATALOG_CSV")]
    pub catalog: PathBuf,

    /// Directory for batch files (default: <CATALOG_CSV dir>/batches).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Process and report without writing files or submitting.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Write batch files but skip the API submission.
    #[arg(long = "no-submit")]
    pub no_submit: bool,

    /// API key for the catalog endpoint (default: INSTABUY_API_KEY env var).
    #[arg(long = "api-key", value_name = "KEY")]
    pub api_key: Option<String>,

    /// Override the catalog API endpoint.
    #[arg(long = "api-url", value_name = "URL")]
    pub api_url: Option<String>,
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
