//! CLI argument definitions for contact deduplication.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use colorchoice_clap::Color;

use contact_cli::config::{DEFAULT_INPUT, DEFAULT_OUTPUT_DIR};
use contact_output::{DEFAULT_DUPLICATES_FILE, DEFAULT_MATCHES_FILE};

#[derive(Parser)]
#[command(
    name = "contact-dedup",
    version,
    about = "Find duplicate and related contacts in a CSV contact list",
    long_about = "Compare every pair of contacts in a CSV file.\n\n\
                  Contacts equal on every field are written to the duplicates file.\n\
                  Related contacts are written to the matches file in both directions,\n\
                  with an accuracy from Very Low to Very High."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for warnings only).
    #[command(flatten)]
    pub verbosity: Verbosity<InfoLevel>,

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

    /// Prefix pretty and compact log lines with a timestamp.
    #[arg(long = "log-timestamps", global = true)]
    pub log_timestamps: bool,

    /// Allow contact field values in trace logs (personal data).
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Match a contact file and write duplicates and matches.
    Run(RunArgs),

    /// List accuracy levels and their labels.
    Levels,
}

#[derive(Parser)]
pub struct RunArgs {
    /// Path to the contact CSV file.
    #[arg(value_name = "INPUT", default_value = DEFAULT_INPUT)]
    pub input: PathBuf,

    /// Directory for the output files.
    #[arg(long = "output-dir", value_name = "DIR", default_value = DEFAULT_OUTPUT_DIR)]
    pub output_dir: PathBuf,

    /// File name for match references.
    #[arg(long = "matches-file", value_name = "NAME", default_value = DEFAULT_MATCHES_FILE)]
    pub matches_file: String,

    /// File name for duplicate records.
    #[arg(long = "duplicates-file", value_name = "NAME", default_value = DEFAULT_DUPLICATES_FILE)]
    pub duplicates_file: String,

    /// Match and report without writing output files.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
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
