//! Error types for the runner module.

use thiserror::Error;

/// Result type alias for runner operations.
pub type RunnerResult<T> = Result<T, RunnerError>;

/// Errors that can occur while installing dependencies.
#[derive(Error, Debug)]
pub enum RunnerError {
    #[error("Failed to start `{command}`: {source}")]
    SpawnFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Unknown package manager: {0}")]
    UnknownPackageManager(String),

    #[error("Installation failed: {0}")]
    InstallFailed(String),
}
