//! # Attributes
//!
//! Candidate axis values and the pool builder that projects them out of
//! the dataset.

mod errors;
mod pool;
mod types;

pub use errors::{PoolError, PoolResult};
pub use pool::{PoolBuilder, PoolConfig, DECADE_STARTS};
pub use types::{Attribute, AttributeKind};
