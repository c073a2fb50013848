//! # Resolver Errors
//!
//! Failures that escape the resolution chain. Degraded generation is not
//! among them: an exhausted retry budget still resolves to a payload.

use thiserror::Error;

use crate::attribute::PoolError;
use crate::cache::CacheError;
use crate::grid::GridError;
use crate::selector::SelectorError;
use crate::template::TemplateError;

/// Result type for grid resolution
pub type ResolveResult<T> = Result<T, ResolveError>;

/// Errors raised while resolving a date to a grid
#[derive(Debug, Clone, Error)]
pub enum ResolveError {
    /// The attribute pool could not be built (fatal dataset outage)
    #[error(transparent)]
    Pool(#[from] PoolError),

    /// Selection ran out of candidates
    #[error(transparent)]
    Selector(#[from] SelectorError),

    /// A published template's stored axes no longer form a valid grid
    #[error(transparent)]
    Grid(#[from] GridError),

    /// Cache store failure
    #[error(transparent)]
    Cache(#[from] CacheError),

    /// Template store failure
    #[error(transparent)]
    Template(#[from] TemplateError),
}
