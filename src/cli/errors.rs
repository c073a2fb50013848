//! CLI-specific error types

use thiserror::Error;

use crate::resolver::ResolveError;

/// Result type for CLI commands
pub type CliResult<T> = Result<T, CliError>;

/// Errors surfaced to the terminal
#[derive(Debug, Error)]
pub enum CliError {
    /// Grid resolution failed
    #[error("{0}")]
    Resolve(#[from] ResolveError),

    /// Payload could not be printed
    #[error("Output error: {0}")]
    Output(#[from] serde_json::Error),

    /// Runtime or server failure
    #[error("Server error: {0}")]
    Io(#[from] std::io::Error),
}
