//! CLI error handling.

use lifetrace_config::ConfigError;
use lifetrace_log::LogError;
use lifetrace_recorder::RecorderError;
use thiserror::Error;

use crate::Exit;

/// CLI error type
#[derive(Debug, Error)]
pub enum CliError {
    #[error("configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("logging: {0}")]
    Log(#[from] LogError),

    #[error("{0}")]
    Recorder(#[from] RecorderError),

    #[error("failed to render output: {0}")]
    Output(String),
}

impl CliError {
    /// Exit code for this error.
    pub fn exit_code(&self) -> Exit {
        match self {
            Self::Config(_) => Exit::ConfigError,
            _ => Exit::GeneralError,
        }
    }
}
