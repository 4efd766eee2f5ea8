//! Logging setup using `tracing` and `tracing-subscriber`.
//!
//! # Log Levels
//!
//! - `error`: fatal failures
//! - `warn`: default level
//! - `info`: stage progress with counts and durations
//! - `debug`: per-table and per-field details
//! - `trace`: row-level values (redacted unless `--log-data` is passed)

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use tracing::level_filters::LevelFilter;
use tracing_subscriber::{
    EnvFilter,
    fmt::{self, MakeWriter},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

/// Configuration for logging behavior.
#[derive(Debug, Clone)]
pub struct LogConfig {
    pub level_filter: LevelFilter,
    /// Honor `RUST_LOG` when set.
    pub use_env_filter: bool,
    pub with_timestamps: bool,
    /// Include the module path in log lines.
    pub with_target: bool,
    /// Emit span close events (with busy/idle times) in json output.
    pub with_spans: bool,
    pub with_ansi: bool,
    pub format: LogFormat,
    /// When set, logs are appended to this file instead of stderr.
    pub log_file: Option<PathBuf>,
    /// Whether row values may be logged.
    pub log_data: bool,
}

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Pretty,
    Compact,
    Json,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level_filter: LevelFilter::WARN,
            use_env_filter: true,
            with_timestamps: false,
            with_target: false,
            with_spans: true,
            with_ansi: true,
            format: LogFormat::default(),
            log_file: None,
            log_data: false,
        }
    }
}

impl LogConfig {
    #[must_use]
    pub fn with_level_filter(mut self, level_filter: LevelFilter) -> Self {
        self.level_filter = level_filter;
        self
    }

    #[must_use]
    pub fn with_format(mut self, format: LogFormat) -> Self {
        self.format = format;
        self
    }

    #[must_use]
    pub fn with_log_data(mut self, enable: bool) -> Self {
        self.log_data = enable;
        self
    }
}

/// Install the global subscriber. Call once at startup.
///
/// # Errors
///
/// Returns an error if the log file cannot be opened.
pub fn init_logging(config: &LogConfig) -> io::Result<()> {
    if let Some(path) = &config.log_file {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        init_logging_with_writer(config, SharedFileWriter::new(file));
    } else {
        init_logging_with_writer(config, io::stderr);
    }
    Ok(())
}

/// Install the global subscriber writing to `writer`.
pub fn init_logging_with_writer<W>(config: &LogConfig, writer: W)
where
    W: for<'writer> MakeWriter<'writer> + Send + Sync + 'static,
{
    addr_common::set_log_data(config.log_data);
    let filter = build_env_filter(config);

    match config.format {
        LogFormat::Json => {
            let layer = fmt::layer()
                .json()
                .with_writer(writer)
                .with_target(config.with_target)
                .with_span_events(if config.with_spans {
                    fmt::format::FmtSpan::CLOSE
                } else {
                    fmt::format::FmtSpan::NONE
                });
            tracing_subscriber::registry()
                .with(filter)
                .with(layer)
                .init();
        }
        LogFormat::Compact => {
            let layer = fmt::layer()
                .compact()
                .with_writer(writer)
                .with_ansi(config.with_ansi)
                .with_target(config.with_target);
            if config.with_timestamps {
                tracing_subscriber::registry()
                    .with(filter)
                    .with(layer)
                    .init();
            } else {
                tracing_subscriber::registry()
                    .with(filter)
                    .with(layer.without_time())
                    .init();
            }
        }
        LogFormat::Pretty => {
            let layer = fmt::layer()
                .with_writer(writer)
                .with_ansi(config.with_ansi)
                .with_target(config.with_target);
            if config.with_timestamps {
                tracing_subscriber::registry()
                    .with(filter)
                    .with(layer)
                    .init();
            } else {
                tracing_subscriber::registry()
                    .with(filter)
                    .with(layer.without_time())
                    .init();
            }
        }
    }
}

#[derive(Clone)]
struct SharedFileWriter {
    file: Arc<Mutex<std::fs::File>>,
}

impl SharedFileWriter {
    fn new(file: std::fs::File) -> Self {
        Self {
            file: Arc::new(Mutex::new(file)),
        }
    }
}

struct SharedFileGuard {
    file: Arc<Mutex<std::fs::File>>,
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

/// Directive string applying `level` to every workspace crate; other crates
/// stay at warn.
pub fn default_directives(level: LevelFilter) -> String {
    let level = level.to_string().to_lowercase();
    let crates = [
        "addr_cli",
        "addr_common",
        "addr_ingest",
        "addr_match",
        "addr_model",
        "addr_normalize",
        "addr_report",
    ];
    let mut directives = String::from("warn");
    for name in crates {
        directives.push_str(&format!(",{name}={level}"));
    }
    directives
}

fn build_env_filter(config: &LogConfig) -> EnvFilter {
    let directives = default_directives(config.level_filter);
    if config.use_env_filter {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&directives))
    } else {
        EnvFilter::new(directives)
    }
}
