//! # Pool Errors
//!
//! Pool building is the one place a dataset outage is fatal: with no
//! candidate attributes there is nothing to select from, so the error
//! propagates instead of failing open.

use thiserror::Error;

use crate::dataset::DatasetError;

/// Result type for pool building
pub type PoolResult<T> = Result<T, PoolError>;

/// Errors raised while building the attribute pool
#[derive(Debug, Clone, Error)]
pub enum PoolError {
    /// A collaborator query failed
    #[error("Pool build failed: {0}")]
    Dataset(#[from] DatasetError),

    /// The projection produced no attributes at all
    #[error("Attribute pool is empty")]
    EmptyPool,
}
