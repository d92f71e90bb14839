//! # Logger
//!
//! A centralized logging utility for the workspace.
//! It provides a unified way to configure console and file logging with
//! rotation, non-blocking I/O, and environment-based filtering.
//!
//! * `RUST_LOG` overrides the base level when set.
//! * Use [`LoggerBuilder::env_filter`] for module-directed filters
//!   (e.g., `"isomer_server=debug,tower_http=info"`).
//!
//! ## Example
//!
//! ```rust,no_run
//! use isomer_logger::{LevelFilter, Logger};
//!
//! let _logger = Logger::builder()
//!     .name("my-app")
//!     .console(true)
//!     .level(LevelFilter::DEBUG)
//!     .init()
//!     .unwrap();
//! ```

mod error;

pub use crate::error::LoggerError;
pub use tracing::level_filters::LevelFilter;
pub use tracing_appender::rolling::Rotation;

use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::RollingFileAppender;
use tracing_subscriber::fmt::layer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

const DEFAULT_MAX_FILES: usize = 10;
const LOG_FILE_SUFFIX: &str = "log";

/// Entry point; see [`Logger::builder`].
#[derive(Debug)]
pub struct Logger;

impl Logger {
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::default()
    }
}

/// A builder for configuring and initializing the global tracing subscriber.
#[must_use = "builders do nothing unless you call .init()"]
#[derive(Debug)]
pub struct LoggerBuilder {
    name: String,
    console: bool,
    level: LevelFilter,
    env_filter: Option<String>,
    path: Option<PathBuf>,
    rotation: Rotation,
    max_files: usize,
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self {
            name: env!("CARGO_PKG_NAME").to_owned(),
            console: true,
            level: LevelFilter::INFO,
            env_filter: None,
            path: None,
            rotation: Rotation::DAILY,
            max_files: DEFAULT_MAX_FILES,
        }
    }
}

impl LoggerBuilder {
    /// Sets the name used as the log file prefix.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Enables or disables the console layer.
    pub const fn console(mut self, console: bool) -> Self {
        self.console = console;
        self
    }

    /// Sets the base level; `RUST_LOG` still takes precedence when set.
    pub const fn level(mut self, level: LevelFilter) -> Self {
        self.level = level;
        self
    }

    /// Adds module-directed filter directives, comma-separated.
    pub fn env_filter(mut self, directives: impl Into<String>) -> Self {
        self.env_filter = Some(directives.into());
        self
    }

    /// Enables the rolling file layer, writing into `path`.
    pub fn path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Configures how often log files roll over.
    pub fn rotation(mut self, rotation: Rotation) -> Self {
        self.rotation = rotation;
        self
    }

    /// Configures the maximum number of log files to keep.
    pub const fn max_files(mut self, max: usize) -> Self {
        self.max_files = max;
        self
    }

    /// Installs the global tracing subscriber.
    ///
    /// Keep the returned guard alive for the lifetime of the process;
    /// dropping it stops the background log writer.
    ///
    /// # Errors
    /// Returns an error if a subscriber is already installed, a filter
    /// directive does not parse, or the file appender cannot be created.
    pub fn init(self) -> Result<LoggerGuard, LoggerError> {
        let mut filter =
            EnvFilter::builder().with_default_directive(self.level.into()).from_env_lossy();

        if let Some(directives) = &self.env_filter {
            for directive in directives.split(',').filter(|d| !d.trim().is_empty()) {
                filter = filter.add_directive(directive.trim().parse()?);
            }
        }

        let console_layer = self.console.then(|| layer().with_target(false).compact().boxed());

        let (file_layer, guard) = match &self.path {
            Some(path) => {
                let appender = RollingFileAppender::builder()
                    .rotation(self.rotation.clone())
                    .filename_prefix(&self.name)
                    .filename_suffix(LOG_FILE_SUFFIX)
                    .max_log_files(self.max_files)
                    .build(path)?;
                let (writer, guard) = tracing_appender::non_blocking(appender);

                (Some(layer().with_writer(writer).with_ansi(false).boxed()), Some(guard))
            }
            None => (None, None),
        };

        tracing_subscriber::registry()
            .with(filter)
            .with(console_layer)
            .with(file_layer)
            .try_init()?;

        Ok(LoggerGuard { _file: guard })
    }
}

/// Keeps the non-blocking file writer alive.
#[must_use = "dropping the guard stops the background log writer"]
#[derive(Debug)]
pub struct LoggerGuard {
    _file: Option<WorkerGuard>,
}
