//! Error types for the webbuild CLI.
//!
//! Uses thiserror for derive macros and keeps messages in the same wording
//! the build prints for humans.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for webbuild operations.
///
/// Every variant is fatal at the top level except `ProcessError`, which the
/// system SDK version check swallows to mean "not installed".
#[derive(Error, Debug)]
pub enum BuildError {
    /// The host OS has no Tailwind CSS release asset.
    #[error("Unsupported OS: {0}")]
    UnsupportedPlatform(String),

    /// The positional command is not one of build/publish/watch/run.
    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    /// Bad configuration or a local filesystem problem.
    #[error("{0}")]
    UserError(String),

    /// Fetching a file over HTTP failed.
    #[error("Error downloading {what}: {reason}")]
    DownloadError { what: String, reason: String },

    /// Local .NET SDK installation failed.
    #[error("Error installing .NET: {0}")]
    InstallError(String),

    /// A checked dotnet CLI command exited non-zero or could not start.
    #[error("Failed to {0} project")]
    CommandFailed(String),

    /// A captured subprocess could not be spawned or exited non-zero.
    #[error("{0}")]
    ProcessError(String),
}

impl BuildError {
    /// Returns the process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            BuildError::UnsupportedPlatform(_)
            | BuildError::UnknownCommand(_)
            | BuildError::UserError(_)
            | BuildError::DownloadError { .. }
            | BuildError::InstallError(_)
            | BuildError::CommandFailed(_)
            | BuildError::ProcessError(_) => exit_codes::FAILURE,
        }
    }
}

/// Result type alias for webbuild operations.
pub type Result<T> = std::result::Result<T, BuildError>;
