use thiserror::Error;

/// Errors that can occur during logger initialization.
#[derive(Debug, Error)]
pub enum LoggerError {
    /// Failure when configuring the rolling file appender (e.g., invalid path).
    #[error("rolling file appender error: {0}")]
    Appender(#[from] tracing_appender::rolling::InitError),

    /// A global tracing subscriber has already been initialized in this process.
    #[error("tracing subscriber error: {0}")]
    Subscriber(#[from] tracing_subscriber::util::TryInitError),

    /// Invalid filter directive supplied to the builder.
    #[error("invalid filter directive: {0}")]
    Directive(#[from] tracing_subscriber::filter::ParseError),
}
