//! Error types for git-bumper

use thiserror::Error;

/// Result type alias used throughout the library
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while finding a bump point
#[derive(Error, Debug)]
pub enum Error {
    /// A git subprocess exited unsuccessfully
    #[error("`{command}` failed (exit code {code}): {stderr}")]
    CommandFailed {
        /// Full command line that was run
        command: String,
        /// Exit code (-1 when terminated by a signal)
        code: i32,
        /// Trimmed stderr output
        stderr: String,
    },

    /// git is not installed or not in PATH
    #[error("git is not installed or not in PATH")]
    GitNotFound,

    /// Failed to spawn or read a subprocess
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Tracker request failed (transport, HTTP status, or body decode)
    #[error("tracker request failed: {0}")]
    Tracker(#[from] reqwest::Error),

    /// A story lookup task was cancelled or panicked
    #[error("story lookup task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}
