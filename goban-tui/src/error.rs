use std::path::PathBuf;

use goban::{EmptyHistory, RecordError};

use crate::config::ConfigError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("there is no game record at {path}: {source}")]
    Unreadable {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to open log file {path}: {source}")]
    LogFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error(transparent)]
    Record(#[from] RecordError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    EmptyHistory(#[from] EmptyHistory),

    #[error("failed to write turns: {0}")]
    Output(#[source] std::io::Error),

    #[error("terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}
