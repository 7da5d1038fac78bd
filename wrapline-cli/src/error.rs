//! CLI error type.

use std::path::PathBuf;

use thiserror::Error;
use wrapline_lib::WrapError;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid config file {path}: {source}")]
    Config {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("invalid options: {0}")]
    Wrap(#[from] WrapError),
    #[error("logger error: {0}")]
    Logger(#[from] log::SetLoggerError),
}
