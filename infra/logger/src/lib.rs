//! # Logger
//!
//! Installs the process-wide `tracing` subscriber: a compact console layer and an
//! optional daily rolling log file written through a non-blocking worker.
//!
//! The default level comes from the builder (or [`LoggingConfig::level`]); extra
//! module directives such as `"v2g_dashboard=debug,tower_http=info"` can be added with
//! [`LoggerBuilder::filter`]. Without an explicit filter, `RUST_LOG` applies.
//!
//! ## Example
//!
//! ```rust
//! use v2g_logger::{LevelFilter, Logger};
//!
//! let _logger = Logger::builder("v2g")
//!     .console(true)
//!     .level(LevelFilter::DEBUG)
//!     .init()
//!     .unwrap();
//! ```

mod error;

pub use crate::error::LoggerError;
pub use tracing::level_filters::LevelFilter;

use std::fs;
use std::path::PathBuf;
use std::str::FromStr;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::fmt::layer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};
use v2g_domain::config::LoggingConfig;

const DEFAULT_MAX_FILES: usize = 10;
const LOG_FILE_SUFFIX: &str = "log";

/// Configures and installs the global tracing subscriber.
#[derive(Debug)]
#[must_use = "call .init() to install the subscriber"]
pub struct LoggerBuilder {
    name: String,
    console: bool,
    stderr: bool,
    level: LevelFilter,
    directory: Option<PathBuf>,
    json: bool,
    filter: Option<String>,
    max_files: usize,
}

impl LoggerBuilder {
    fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            console: true,
            stderr: false,
            level: LevelFilter::INFO,
            directory: None,
            json: false,
            filter: None,
            max_files: DEFAULT_MAX_FILES,
        }
    }

    /// Applies every field of a [`LoggingConfig`].
    ///
    /// # Errors
    /// Returns [`LoggerError::InvalidConfiguration`] when the level is not a valid
    /// level name.
    pub fn with_config(mut self, config: &LoggingConfig) -> Result<Self, LoggerError> {
        self.level = LevelFilter::from_str(config.level.trim()).map_err(|_| {
            LoggerError::InvalidConfiguration {
                message: format!("unknown log level '{}'", config.level).into(),
            }
        })?;
        self.console = config.console;
        self.json = config.json;
        self.directory.clone_from(&config.directory);
        self.filter.clone_from(&config.filter);
        Ok(self)
    }

    pub const fn console(mut self, enabled: bool) -> Self {
        self.console = enabled;
        self
    }

    /// Sends console output to stderr, keeping stdout free for command output.
    pub const fn stderr(mut self, enabled: bool) -> Self {
        self.stderr = enabled;
        self
    }

    pub const fn level(mut self, level: LevelFilter) -> Self {
        self.level = level;
        self
    }

    /// Writes daily rolling log files into `directory`.
    pub fn directory(mut self, directory: impl Into<PathBuf>) -> Self {
        self.directory = Some(directory.into());
        self
    }

    /// Emits JSON lines to the log file.
    pub const fn json(mut self, enabled: bool) -> Self {
        self.json = enabled;
        self
    }

    /// Adds module directives on top of the default level.
    pub fn filter(mut self, directives: impl Into<String>) -> Self {
        self.filter = Some(directives.into());
        self
    }

    pub const fn max_files(mut self, max: usize) -> Self {
        self.max_files = max;
        self
    }

    /// Installs the subscriber.
    ///
    /// The returned [`Logger`] owns the file writer's guard; keep it alive until
    /// shutdown so buffered lines are flushed.
    ///
    /// # Errors
    /// Returns [`LoggerError::Subscriber`] if a global subscriber is already set, and
    /// [`LoggerError::InvalidConfiguration`] when no output is enabled or the filter
    /// does not parse.
    pub fn init(self) -> Result<Logger, LoggerError> {
        self.validate()?;
        let env_filter = self.env_filter()?;

        let mut layers = Vec::new();
        if self.console {
            let console = layer().compact().with_ansi(true);
            layers.push(if self.stderr {
                console.with_writer(std::io::stderr).boxed()
            } else {
                console.boxed()
            });
        }

        let guard = match &self.directory {
            Some(directory) => {
                fs::create_dir_all(directory).map_err(|source| LoggerError::Directory {
                    source,
                    path: directory.clone(),
                })?;

                let appender = RollingFileAppender::builder()
                    .rotation(Rotation::DAILY)
                    .filename_prefix(&self.name)
                    .filename_suffix(LOG_FILE_SUFFIX)
                    .max_log_files(self.max_files)
                    .build(directory)?;
                let (writer, guard) = tracing_appender::non_blocking(appender);

                let file_layer = layer().with_writer(writer).with_ansi(false);
                layers.push(if self.json { file_layer.json().boxed() } else { file_layer.boxed() });
                Some(guard)
            },
            None => None,
        };

        tracing_subscriber::registry().with(env_filter).with(layers).try_init()?;

        Ok(Logger { guard })
    }

    fn validate(&self) -> Result<(), LoggerError> {
        if self.name.trim().is_empty() {
            return Err(LoggerError::InvalidConfiguration {
                message: "logger name cannot be empty".into(),
            });
        }
        if self.max_files == 0 {
            return Err(LoggerError::InvalidConfiguration {
                message: "max_files must be greater than zero".into(),
            });
        }
        if !self.console && self.directory.is_none() {
            return Err(LoggerError::InvalidConfiguration {
                message: "no logging output enabled; enable the console or set a directory".into(),
            });
        }
        Ok(())
    }

    fn env_filter(&self) -> Result<EnvFilter, LoggerError> {
        let builder = EnvFilter::builder().with_default_directive(self.level.into());
        self.filter.as_ref().map_or_else(
            || Ok(builder.from_env_lossy()),
            |filter| {
                builder.parse(filter).map_err(|e| LoggerError::InvalidConfiguration {
                    message: format!("invalid filter '{filter}': {e}").into(),
                })
            },
        )
    }
}

/// Handle to the installed logging system.
#[must_use = "dropping this handle stops the background log writer"]
#[derive(Debug)]
pub struct Logger {
    guard: Option<WorkerGuard>,
}

impl Logger {
    /// Starts configuring a logger. `name` prefixes the log files
    /// (`<name>.<date>.log`).
    pub fn builder(name: impl Into<String>) -> LoggerBuilder {
        LoggerBuilder::new(name)
    }

    /// `true` when logs are also written to files.
    #[must_use]
    pub const fn has_file_output(&self) -> bool {
        self.guard.is_some()
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        if self.guard.is_some() {
            tracing::info!("Logging system shutting down, flushing buffers...");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_defaults() {
        let builder = Logger::builder("v2g-test");
        assert!(builder.console);
        assert!(!builder.stderr);
        assert_eq!(builder.level, LevelFilter::INFO);
        assert!(builder.directory.is_none());
        assert!(!builder.json);
        assert_eq!(builder.max_files, DEFAULT_MAX_FILES);
    }

    #[test]
    fn config_is_applied() -> Result<(), LoggerError> {
        let config = LoggingConfig {
            level: "debug".to_owned(),
            console: false,
            json: true,
            directory: Some(PathBuf::from("logs")),
            filter: Some("v2g_dashboard=trace".to_owned()),
        };
        let builder = Logger::builder("v2g-test").with_config(&config)?;

        assert_eq!(builder.level, LevelFilter::DEBUG);
        assert!(!builder.console);
        assert!(builder.json);
        assert_eq!(builder.directory.as_deref(), Some(std::path::Path::new("logs")));
        assert_eq!(builder.filter.as_deref(), Some("v2g_dashboard=trace"));
        Ok(())
    }

    #[test]
    fn unknown_level_is_rejected() {
        let config = LoggingConfig { level: "loud".to_owned(), ..LoggingConfig::default() };
        let err = Logger::builder("v2g-test").with_config(&config).expect_err("bad level");
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));
    }

    #[test]
    fn configured_filter_is_used_as_is() -> Result<(), LoggerError> {
        let filter = Logger::builder("v2g-test")
            .level(LevelFilter::WARN)
            .filter("v2g_dashboard=trace")
            .env_filter()?;

        let directives = filter.to_string();
        assert!(directives.contains("v2g_dashboard=trace"));
        assert!(directives.contains("warn"));
        Ok(())
    }

    #[test]
    fn validation_runs_before_install() {
        let silent = Logger::builder("v2g-test").console(false).init();
        assert!(matches!(silent, Err(LoggerError::InvalidConfiguration { .. })));

        let unnamed = Logger::builder("  ").init();
        assert!(matches!(unnamed, Err(LoggerError::InvalidConfiguration { .. })));

        let bad_filter = Logger::builder("v2g-test").filter("v2g=notalevel").init();
        assert!(matches!(bad_filter, Err(LoggerError::InvalidConfiguration { .. })));
    }
}
