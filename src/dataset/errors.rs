//! # Dataset Errors
//!
//! Failure taxonomy for the read-only dataset collaborator. Every transport
//! or query failure collapses to `Unavailable`: callers decide whether that
//! is fatal (pool building) or fails open (cell validation).

use thiserror::Error;

/// Result type for dataset operations
pub type DatasetResult<T> = Result<T, DatasetError>;

/// Errors surfaced by the dataset collaborator
#[derive(Debug, Clone, Error)]
pub enum DatasetError {
    /// The collaborator could not be reached or the query failed
    #[error("Dataset unavailable: {0}")]
    Unavailable(String),
}
