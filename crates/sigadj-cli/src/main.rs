//! Signal adjustment toolkit CLI.

use std::io::{self, IsTerminal};

use anyhow::Result;
use clap::{ColorChoice, Parser};
use serde_json::{Value, json};
use sigadj_cli::commands::{
    run_coerce, run_flags, run_init, run_resolve, run_scaffold, run_unique, unique_value_json,
};
use sigadj_cli::logging::{LogConfig, LogFormat, init_logging};
use sigadj_cli::summary::{print_coercion, print_directories, print_flag_summary};
use sigadj_cli::types::TableFlagSummary;
use tracing::info;
use tracing::level_filters::LevelFilter;

mod cli;

use crate::cli::{Cli, Command, FlagsArgs, LogFormatArg, LogLevelArg};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    match init_logging(&log_config) {
        Ok(Some(path)) => info!(path = %path.display(), "logging to file"),
        Ok(None) => {}
        Err(error) => {
            eprintln!("error: failed to initialize logging: {error}");
            std::process::exit(1);
        }
    }
    let exit_code = match run(&cli.command) {
        Ok(()) => 0,
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}

fn run(command: &Command) -> Result<()> {
    match command {
        Command::Init(args) => {
            let cwd = std::env::current_dir()?;
            let statuses = run_init(args.root.as_deref(), &cwd, &args.marker, &args.dirs)?;
            print_directories(&statuses);
        }
        Command::Resolve(args) => {
            println!("{}", run_resolve(&args.table.csv, &args.pattern)?);
        }
        Command::Coerce(args) => {
            print_coercion(&run_coerce(&args.csv)?);
        }
        Command::Unique(args) => {
            let value = run_unique(&args.table.csv, &args.column)?;
            if args.json {
                let output = unique_value_json(&args.column, &value);
                println!("{}", serde_json::to_string_pretty(&output)?);
            } else {
                println!("{value}");
            }
        }
        Command::Scaffold(args) => {
            let scaffold = run_scaffold(
                &args.int_keys,
                &args.str_keys,
                &args.seq_keys,
                &args.map_keys,
            );
            println!("{}", serde_json::to_string_pretty(&scaffold)?);
        }
        Command::Flags(args) => run_flags_command(args)?,
    }
    Ok(())
}

fn run_flags_command(args: &FlagsArgs) -> Result<()> {
    let summaries = run_flags(&args.paths, &args.marker)?;
    if args.json {
        let tables: Vec<Value> = summaries.iter().map(flag_summary_json).collect();
        println!("{}", serde_json::to_string_pretty(&tables)?);
    } else {
        print_flag_summary(&summaries);
    }
    Ok(())
}

fn flag_summary_json(summary: &TableFlagSummary) -> Value {
    json!({
        "table": summary.table,
        "source": summary.source.as_ref().map(|path| path.display().to_string()),
        "rows": summary.rows,
        "records": summary.records,
    })
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
    let to_file = cli.log_file.is_some() || cli.log_dir.is_some();
    if to_file {
        config = config.for_file_sink();
    }
    config.log_file = cli.log_file.clone();
    config.log_dir = cli.log_dir.clone();
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => !to_file,
        ColorChoice::Never => false,
        ColorChoice::Auto => !to_file && io::stderr().is_terminal(),
    };
    config
}
