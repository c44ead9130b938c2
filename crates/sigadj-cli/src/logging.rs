//! Logging infrastructure using `tracing` and `tracing-subscriber`.
//!
//! The library crates only emit events; this module owns the sink. A sink is
//! described by a [`LogConfig`] and installed in one of two ways:
//!
//! - [`init_logging`] installs it process-wide. Call it once at startup; it
//!   stays in place until the process exits.
//! - [`scoped_logging`] installs it for the current thread and returns a
//!   guard. Dropping the guard restores the previous subscriber.
//!
//! # Log Levels
//!
//! - `error`: failed operations, logged before the error is returned
//! - `warn`: non-fatal issues
//! - `info`: operation entry/exit and per-column progress
//! - `debug`: per-column details
//! - `trace`: unused by the toolkit itself
//!
//! # Usage
//!
//! ```ignore
//! use sigadj_cli::logging::{init_logging, LogConfig};
//!
//! let config = LogConfig::default().with_log_dir(Some("logs".into()));
//! init_logging(&config).expect("init logging");
//! ```

use std::fmt::Display;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use chrono::{DateTime, Local, TimeZone};
use tracing::Subscriber;
use tracing::level_filters::LevelFilter;
use tracing::subscriber::DefaultGuard;
use tracing_subscriber::{
    EnvFilter, Layer, Registry,
    fmt::{self, MakeWriter},
    layer::SubscriberExt,
};

/// `chrono` format of timestamped log file names.
pub const LOG_FILE_NAME_FORMAT: &str = "%m-%d-%Y@%H-%M-%S.log";

/// Configuration for logging behavior.
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Maximum level for the toolkit's own crates.
    pub level_filter: LevelFilter,
    /// Whether `RUST_LOG` may replace the configured filter.
    pub use_env_filter: bool,
    /// Whether to include timestamps in log output.
    pub with_timestamps: bool,
    /// Whether to include target (module path) in log output.
    pub with_target: bool,
    /// Whether to include the source line of each event.
    pub with_line_numbers: bool,
    /// Whether to include span close events (JSON format only).
    pub with_spans: bool,
    /// Whether to use ANSI colors in output.
    pub with_ansi: bool,
    /// Output format: "pretty", "compact", or "json".
    pub format: LogFormat,
    /// Explicit log file path. Takes precedence over `log_dir`.
    pub log_file: Option<PathBuf>,
    /// Directory receiving a timestamped log file.
    pub log_dir: Option<PathBuf>,
}

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable pretty format with colors.
    #[default]
    Pretty,
    /// Compact single-line format.
    Compact,
    /// JSON format for machine parsing.
    Json,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level_filter: LevelFilter::INFO,
            use_env_filter: true,
            with_timestamps: false,
            with_target: false,
            with_line_numbers: false,
            with_spans: true,
            with_ansi: true,
            format: LogFormat::default(),
            log_file: None,
            log_dir: None,
        }
    }
}

impl LogConfig {
    /// Set the level filter directly.
    #[must_use]
    pub fn with_level(mut self, level_filter: LevelFilter) -> Self {
        self.level_filter = level_filter;
        self
    }

    /// Allow or forbid `RUST_LOG` overrides.
    #[must_use]
    pub fn with_env_filter(mut self, enable: bool) -> Self {
        self.use_env_filter = enable;
        self
    }

    /// Enable or disable timestamps.
    #[must_use]
    pub fn with_timestamps(mut self, enable: bool) -> Self {
        self.with_timestamps = enable;
        self
    }

    /// Enable or disable target (module path) in output.
    #[must_use]
    pub fn with_target(mut self, enable: bool) -> Self {
        self.with_target = enable;
        self
    }

    /// Enable or disable source line numbers.
    #[must_use]
    pub fn with_line_numbers(mut self, enable: bool) -> Self {
        self.with_line_numbers = enable;
        self
    }

    /// Enable or disable ANSI colors.
    #[must_use]
    pub fn with_ansi(mut self, enable: bool) -> Self {
        self.with_ansi = enable;
        self
    }

    /// Set output format.
    #[must_use]
    pub fn with_format(mut self, format: LogFormat) -> Self {
        self.format = format;
        self
    }

    /// Set the log file path (writes to stderr when neither file nor dir is set).
    #[must_use]
    pub fn with_log_file(mut self, path: Option<PathBuf>) -> Self {
        self.log_file = path;
        self
    }

    /// Set the directory receiving a timestamped log file.
    #[must_use]
    pub fn with_log_dir(mut self, dir: Option<PathBuf>) -> Self {
        self.log_dir = dir;
        self
    }

    /// Settings suited to a file sink: timestamps, targets and line numbers
    /// on, colors off.
    #[must_use]
    pub fn for_file_sink(self) -> Self {
        self.with_timestamps(true)
            .with_target(true)
            .with_line_numbers(true)
            .with_ansi(false)
    }

    /// The file this configuration writes to, relative to `now` for
    /// timestamped files. `None` means stderr.
    pub fn log_path_at<Tz>(&self, now: &DateTime<Tz>) -> Option<PathBuf>
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        if let Some(path) = &self.log_file {
            return Some(path.clone());
        }
        self.log_dir
            .as_ref()
            .map(|dir| dir.join(timestamped_log_name(now)))
    }
}

/// File name of a log started at `at`, e.g. `03-05-2024@14-07-09.log`.
pub fn timestamped_log_name<Tz>(at: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    at.format(LOG_FILE_NAME_FORMAT).to_string()
}

/// Initialize the global tracing subscriber with the given configuration.
///
/// This should be called once at application startup. Returns the log file
/// in use, if any.
///
/// # Errors
///
/// Returns an error if the log file cannot be opened or a global subscriber
/// is already installed.
pub fn init_logging(config: &LogConfig) -> io::Result<Option<PathBuf>> {
    let log_path = config.log_path_at(&Local::now());
    match &log_path {
        Some(path) => {
            let file = open_log_file(path)?;
            tracing::subscriber::set_global_default(build_subscriber(
                config,
                SharedFileWriter::new(file),
            ))
            .map_err(io::Error::other)?;
        }
        None => {
            tracing::subscriber::set_global_default(build_subscriber(config, io::stderr))
                .map_err(io::Error::other)?;
        }
    }
    Ok(log_path)
}

/// Install a subscriber for the current thread until the guard is dropped.
///
/// `log_file` and `log_dir` are ignored; events go to `writer`.
pub fn scoped_logging<W>(config: &LogConfig, writer: W) -> DefaultGuard
where
    W: for<'writer> MakeWriter<'writer> + Send + Sync + 'static,
{
    tracing::subscriber::set_default(build_subscriber(config, writer))
}

fn open_log_file(path: &Path) -> io::Result<fs::File> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync + 'static>;

fn build_subscriber<W>(config: &LogConfig, writer: W) -> impl Subscriber + Send + Sync + 'static
where
    W: for<'writer> MakeWriter<'writer> + Send + Sync + 'static,
{
    let layer: BoxedLayer = match config.format {
        LogFormat::Json => fmt::layer()
            .json()
            .with_writer(writer)
            .with_target(config.with_target)
            .with_line_number(config.with_line_numbers)
            .with_span_events(if config.with_spans {
                fmt::format::FmtSpan::CLOSE
            } else {
                fmt::format::FmtSpan::NONE
            })
            .boxed(),
        LogFormat::Compact => {
            let layer = fmt::layer()
                .compact()
                .with_writer(writer)
                .with_ansi(config.with_ansi)
                .with_target(config.with_target)
                .with_line_number(config.with_line_numbers);
            if config.with_timestamps {
                layer.boxed()
            } else {
                layer.without_time().boxed()
            }
        }
        LogFormat::Pretty => {
            let layer = fmt::layer()
                .with_writer(writer)
                .with_ansi(config.with_ansi)
                .with_target(config.with_target)
                .with_line_number(config.with_line_numbers);
            if config.with_timestamps {
                layer.boxed()
            } else {
                layer.without_time().boxed()
            }
        }
    };

    tracing_subscriber::registry().with(layer.with_filter(build_env_filter(config)))
}

#[derive(Clone)]
struct SharedFileWriter {
    file: Arc<Mutex<fs::File>>,
}

impl SharedFileWriter {
    fn new(file: fs::File) -> Self {
        Self {
            file: Arc::new(Mutex::new(file)),
        }
    }
}

struct SharedFileGuard {
    file: Arc<Mutex<fs::File>>,
}

impl Write for SharedFileGuard {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut guard = self
            .file
            .lock()
            .map_err(|_| io::Error::other("log file lock poisoned"))?;
        guard.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        let mut guard = self
            .file
            .lock()
            .map_err(|_| io::Error::other("log file lock poisoned"))?;
        guard.flush()
    }
}

impl<'a> MakeWriter<'a> for SharedFileWriter {
    type Writer = SharedFileGuard;

    fn make_writer(&'a self) -> Self::Writer {
        SharedFileGuard {
            file: Arc::clone(&self.file),
        }
    }
}

/// Build an `EnvFilter` for the configured level, respecting `RUST_LOG` when allowed.
fn build_env_filter(config: &LogConfig) -> EnvFilter {
    let level = config.level_filter.to_string().to_lowercase();
    // External crates stay at warn level to reduce noise
    let directives = format!(
        "warn,sigadj={level},sigadj_cli={level},sigadj_ingest={level},\
         sigadj_model={level},sigadj_transform={level}"
    );
    if config.use_env_filter {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directives))
    } else {
        EnvFilter::new(directives)
    }
}
