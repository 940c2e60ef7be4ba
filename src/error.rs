use std::io;

use thiserror::Error;

/// Faults that end the run loop.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("terminal I/O failed: {0}")]
    Terminal(#[from] io::Error),

    #[error("could not open log file {path}: {source}")]
    LogFile {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("could not install logger: {0}")]
    Logger(#[from] log::SetLoggerError),

    #[error("run loop panicked: {0}")]
    Panic(String),
}

pub type Result<T> = std::result::Result<T, AppError>;
