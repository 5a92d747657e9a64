use thiserror::Error;

/// Errors from configuring or installing a logger. Print calls never fail.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid time format '{format}': {source}")]
    InvalidTimeFormat {
        format: String,
        #[source]
        source: time::error::InvalidFormatDescription,
    },

    #[error("a global logger is already installed for the log facade")]
    AlreadyInitialized(#[from] log::SetLoggerError),

    #[error("unknown file name mode '{0}' (expected none, short or long)")]
    UnknownFileNameMode(String),

    #[error("unknown level '{0}' (expected info, warning, error or debug)")]
    UnknownLevel(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
