//! Logging configuration and initialization
//!
//! Sets up the global tracing subscriber used by the whole tool:
//!
//! - console output for warnings (debug and up with `--verbose`)
//! - a log file (`alff.log` by default) capturing info and up, so timeout
//!   and missing-population notes survive quiet runs
//!
//! Use the structured macros (`info!`, `warn!`, ...) instead of `println!`
//! for anything that is not primary program output.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::Level;
use tracing_subscriber::{
    filter::LevelFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt, Layer,
};

/// Log level for filtering messages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    /// Detailed information useful during development
    Debug,
    /// Informational messages about run progress
    #[default]
    Info,
    /// Warning messages
    Warn,
    /// Error messages
    Error,
}

impl LogLevel {
    /// Convert to a tracing level filter
    pub fn to_filter(self) -> LevelFilter {
        match self {
            LogLevel::Debug => LevelFilter::from_level(Level::DEBUG),
            LogLevel::Info => LevelFilter::from_level(Level::INFO),
            LogLevel::Warn => LevelFilter::from_level(Level::WARN),
            LogLevel::Error => LevelFilter::from_level(Level::ERROR),
        }
    }
}

impl std::str::FromStr for LogLevel {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "debug" | "trace" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(anyhow::anyhow!("Invalid log level: {}", s)),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Minimum level shown on the console
    pub console_level: LogLevel,

    /// Minimum level written to the log file
    pub file_level: LogLevel,

    /// Path of the log file; `None` disables file logging
    pub log_file: Option<PathBuf>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            console_level: LogLevel::Warn,
            file_level: LogLevel::Info,
            log_file: Some(PathBuf::from("alff.log")),
        }
    }
}

impl LogConfig {
    /// Config for a run: `--verbose` lowers the console threshold to debug.
    /// `ALFF_LOG` overrides the console level when set.
    pub fn for_run(verbose: bool) -> Self {
        let mut config = Self::default();
        if verbose {
            config.console_level = LogLevel::Debug;
        }
        if let Ok(level) = std::env::var("ALFF_LOG") {
            if let Ok(parsed) = level.parse() {
                config.console_level = parsed;
            }
        }
        config
    }

    /// Disable the log file (used by tests)
    pub fn without_file(mut self) -> Self {
        self.log_file = None;
        self
    }
}

/// Initialize the global tracing subscriber
///
/// Should only be called once at startup. Returns an error if a subscriber
/// is already installed.
pub fn init_logging(config: &LogConfig) -> Result<()> {
    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_filter(config.console_level.to_filter());

    match &config.log_file {
        Some(path) => {
            let file_layer = file_layer(path, config.file_level)?;
            tracing_subscriber::registry()
                .with(console_layer)
                .with(file_layer)
                .try_init()
                .context("Failed to install tracing subscriber")?;
        }
        None => {
            tracing_subscriber::registry()
                .with(console_layer)
                .try_init()
                .context("Failed to install tracing subscriber")?;
        }
    }

    Ok(())
}

fn file_layer<S>(path: &Path, level: LogLevel) -> Result<impl Layer<S>>
where
    S: tracing::Subscriber + for<'a> tracing_subscriber::registry::LookupSpan<'a>,
{
    let dir = path.parent().filter(|p| !p.as_os_str().is_empty());
    if let Some(dir) = dir {
        std::fs::create_dir_all(dir).context("Failed to create log directory")?;
    }

    let file_name = path
        .file_name()
        .context("Log file path has no file name")?;
    let appender = tracing_appender::rolling::never(
        dir.unwrap_or_else(|| Path::new(".")),
        file_name,
    );
    let (non_blocking, guard) = tracing_appender::non_blocking(appender);

    // The guard must outlive the program for buffered lines to flush.
    std::mem::forget(guard);

    Ok(fmt::layer()
        .with_writer(non_blocking)
        .with_target(false)
        .with_ansi(false)
        .with_filter(level.to_filter()))
}
