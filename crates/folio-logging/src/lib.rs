//! Logging setup for Folio
//!
//! Console output is pretty or JSONL; an optional file layer always writes
//! JSONL so sessions can be inspected afterwards.
//!
//! # Quick Start
//!
//! ```ignore
//! use folio_logging::{FolioSubscriberBuilder, LogConfig};
//!
//! let _guard = FolioSubscriberBuilder::new()
//!     .with_config(LogConfig::development())
//!     .init()?;
//! ```

pub mod config;

pub use config::{ConsoleConfig, FileConfig, LogConfig, RotationStrategy};

use std::fs::{self, File};
use std::path::PathBuf;
use std::str::FromStr;

use thiserror::Error;
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_appender::rolling::{InitError, RollingFileAppender, Rotation};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{EnvFilter, Layer, Registry, layer::SubscriberExt, util::SubscriberInitExt};

/// Errors raised while installing the subscriber
#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("failed to create log file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to create rolling log appender: {0}")]
    Appender(#[from] InitError),

    #[error("invalid log level {0:?}")]
    InvalidLevel(String),

    #[error("a global subscriber is already installed: {0}")]
    AlreadyInitialized(#[from] TryInitError),
}

/// Builder for configuring and initializing the Folio logging subscriber
pub struct FolioSubscriberBuilder {
    config: LogConfig,
}

impl FolioSubscriberBuilder {
    /// Create a new subscriber builder with default configuration
    ///
    /// Default: JSONL output to console
    pub fn new() -> Self {
        Self {
            config: LogConfig::default(),
        }
    }

    /// Use a specific configuration
    pub fn with_config(mut self, config: LogConfig) -> Self {
        self.config = config;
        self
    }

    /// Configure file output
    pub fn with_file_output(mut self, config: FileConfig) -> Self {
        self.config.file = Some(config);
        self
    }

    /// The configuration `init` will install
    pub fn config(&self) -> &LogConfig {
        &self.config
    }

    /// Install the subscriber globally.
    ///
    /// The returned guard flushes the file writer on drop; keep it alive for
    /// the duration of the program.
    pub fn init(self) -> Result<Option<WorkerGuard>, LoggingError> {
        let env_filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(&self.config.default_level));
        let console = &self.config.console;
        let console_level = parse_level(console.level.as_deref())?;

        let pretty_console = (console.enabled && console.pretty).then(|| {
            tracing_subscriber::fmt::layer()
                .with_ansi(console.ansi)
                .with_target(true)
                .with_filter(console_level)
        });

        let json_console = (console.enabled && !console.pretty).then(|| {
            tracing_subscriber::fmt::layer()
                .json()
                .with_current_span(true)
                .flatten_event(true)
                .with_filter(console_level)
        });

        let (file_layer, guard) = match &self.config.file {
            Some(file_config) => {
                let (writer, guard) = create_file_writer(file_config)?;
                let layer = tracing_subscriber::fmt::layer()
                    .json()
                    .with_current_span(true)
                    .flatten_event(true)
                    .with_file(true)
                    .with_line_number(true)
                    .with_writer(writer);
                (Some(layer), Some(guard))
            }
            None => (None, None),
        };

        Registry::default()
            .with(env_filter)
            .with(pretty_console)
            .with(json_console)
            .with(file_layer)
            .try_init()?;

        Ok(guard)
    }
}

impl Default for FolioSubscriberBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_level(level: Option<&str>) -> Result<LevelFilter, LoggingError> {
    match level {
        None => Ok(LevelFilter::TRACE),
        Some(s) => LevelFilter::from_str(s).map_err(|_| LoggingError::InvalidLevel(s.to_string())),
    }
}

/// Create the non-blocking file writer. `Never` truncates a single file.
fn create_file_writer(config: &FileConfig) -> Result<(NonBlocking, WorkerGuard), LoggingError> {
    let rotation = match config.rotation {
        RotationStrategy::Never => {
            let path = config.directory.join(format!("{}.log", config.prefix));
            let io_err = |source| LoggingError::Io {
                path: path.clone(),
                source,
            };
            fs::create_dir_all(&config.directory).map_err(io_err)?;
            let file = File::create(&path).map_err(io_err)?;
            return Ok(tracing_appender::non_blocking(file));
        }
        RotationStrategy::Daily => Rotation::DAILY,
        RotationStrategy::Hourly => Rotation::HOURLY,
    };

    let appender = RollingFileAppender::builder()
        .rotation(rotation)
        .filename_prefix(&config.prefix)
        .filename_suffix("log")
        .build(&config.directory)?;
    Ok(tracing_appender::non_blocking(appender))
}

/// Initialize logging for testing (minimal output), ignoring a prior install
pub fn init_testing() {
    let _ = FolioSubscriberBuilder::new()
        .with_config(LogConfig::testing())
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_creation() {
        let builder = FolioSubscriberBuilder::new();
        assert_eq!(builder.config.default_level, "info");
        assert!(!builder.config.console.pretty); // JSONL by default
    }

    #[test]
    fn test_builder_with_config() {
        let dir = PathBuf::from("/tmp/folio-logs");
        let builder = FolioSubscriberBuilder::new()
            .with_config(LogConfig::development())
            .with_file_output(FileConfig {
                directory: dir.clone(),
                prefix: "folio".to_string(),
                rotation: RotationStrategy::Never,
            });
        assert_eq!(builder.config.default_level, "debug");
        assert_eq!(builder.config.file.map(|f| f.directory), Some(dir));
    }

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level(None).unwrap(), LevelFilter::TRACE);
        assert_eq!(parse_level(Some("warn")).unwrap(), LevelFilter::WARN);
        assert!(matches!(
            parse_level(Some("loud")),
            Err(LoggingError::InvalidLevel(_))
        ));
    }

    #[test]
    fn test_single_file_writer_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = FileConfig {
            directory: dir.path().join("nested"),
            prefix: "folio-test".to_string(),
            rotation: RotationStrategy::Never,
        };
        let (_writer, _guard) = create_file_writer(&config).unwrap();
        assert!(dir.path().join("nested/folio-test.log").exists());
    }
}
