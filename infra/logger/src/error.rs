use std::borrow::Cow;
use std::path::PathBuf;

/// Errors that can occur during logger initialization.
#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// The rolling file appender could not be created.
    #[error("Rolling file appender error: {source}")]
    Appender {
        #[from]
        source: tracing_appender::rolling::InitError,
    },

    /// A global tracing subscriber is already installed in this process.
    #[error("Tracing subscriber error: {source}")]
    Subscriber {
        #[from]
        source: tracing_subscriber::util::TryInitError,
    },

    /// The log directory could not be created.
    #[error("Log directory error ({}): {source}", path.display())]
    Directory {
        #[source]
        source: std::io::Error,
        path: PathBuf,
    },

    /// Invalid settings supplied to the builder.
    #[error("Invalid logger configuration: {message}")]
    InvalidConfiguration { message: Cow<'static, str> },
}
