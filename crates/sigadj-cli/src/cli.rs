//! CLI argument definitions for the signal adjustment toolkit.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use colorchoice_clap::Color;

use sigadj_cli::project::DEFAULT_ROOT_MARKER;

#[derive(Parser)]
#[command(
    name = "sigadj",
    version,
    about = "Signal adjustment toolkit - prepare and summarize feature tables",
    long_about = "Prepare and summarize intersection feature tables before modeling.\n\n\
                  Resolves columns by partial name, coerces float columns to nullable\n\
                  integers, checks constant columns and summarizes red-light running flags."
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

    /// Write logs to a timestamped file in this directory.
    #[arg(
        long = "log-dir",
        value_name = "DIR",
        global = true,
        conflicts_with = "log_file"
    )]
    pub log_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Locate the project root and create the standard project directories.
    Init(InitArgs),

    /// Print the first column whose name matches a case-insensitive pattern.
    Resolve(ResolveArgs),

    /// Show column types before and after float to nullable-integer coercion.
    Coerce(TableArgs),

    /// Print the single distinct value of a column.
    Unique(UniqueArgs),

    /// Print a dictionary scaffold with typed default values as JSON.
    Scaffold(ScaffoldArgs),

    /// Summarize 0/1 counts of flag columns.
    Flags(FlagsArgs),
}

#[derive(Args)]
pub struct InitArgs {
    /// Project root (default: nearest ancestor of the current directory containing the marker).
    #[arg(long = "root", value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Entry that marks the project root.
    #[arg(long = "marker", default_value = DEFAULT_ROOT_MARKER)]
    pub marker: String,

    /// Directories to create (default: data, logs, reports, notebook).
    #[arg(value_name = "DIRS")]
    pub dirs: Vec<String>,
}

#[derive(Args)]
pub struct TableArgs {
    /// Path to a CSV file with a header row.
    #[arg(value_name = "CSV")]
    pub csv: PathBuf,
}

#[derive(Args)]
pub struct ResolveArgs {
    #[command(flatten)]
    pub table: TableArgs,

    /// Partial column name or regular expression.
    #[arg(value_name = "PATTERN")]
    pub pattern: String,
}

#[derive(Args)]
pub struct UniqueArgs {
    #[command(flatten)]
    pub table: TableArgs,

    /// Exact column name.
    #[arg(value_name = "COLUMN")]
    pub column: String,

    /// Print JSON instead of the bare value.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Args)]
pub struct ScaffoldArgs {
    /// Key defaulting to 0.
    #[arg(long = "int", value_name = "KEY")]
    pub int_keys: Vec<String>,

    /// Key defaulting to an empty string.
    #[arg(long = "str", value_name = "KEY")]
    pub str_keys: Vec<String>,

    /// Key defaulting to an empty list.
    #[arg(long = "seq", value_name = "KEY")]
    pub seq_keys: Vec<String>,

    /// Key defaulting to an empty mapping.
    #[arg(long = "map", value_name = "KEY")]
    pub map_keys: Vec<String>,
}

#[derive(Args)]
pub struct FlagsArgs {
    /// CSV files to summarize, or directories of CSV files.
    #[arg(value_name = "PATH", required = true)]
    pub paths: Vec<PathBuf>,

    /// Case-sensitive substring identifying flag columns.
    #[arg(long = "marker", default_value = sigadj_transform::RUNNING_FLAG_MARKER)]
    pub marker: String,

    /// Print JSON instead of a table.
    #[arg(long = "json")]
    pub json: bool,
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
