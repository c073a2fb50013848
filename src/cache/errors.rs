//! # Cache Errors

use thiserror::Error;

/// Result type for cache operations
pub type CacheResult<T> = Result<T, CacheError>;

/// Errors raised by a cache store implementation
#[derive(Debug, Clone, Error)]
pub enum CacheError {
    /// Underlying storage failed
    #[error("Cache storage error: {0}")]
    Storage(String),
}
