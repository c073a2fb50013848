//! # Selector Errors

use thiserror::Error;

use crate::grid::GridError;

/// Result type for grid selection
pub type SelectorResult<T> = Result<T, SelectorError>;

/// Errors raised during grid selection
#[derive(Debug, Clone, Error)]
pub enum SelectorError {
    /// Even the widened pool had nothing left for a slot
    #[error("No candidate attribute left for slot {slot}")]
    PoolExhausted { slot: usize },

    /// The assembled grid failed construction checks
    #[error(transparent)]
    Malformed(#[from] GridError),
}
