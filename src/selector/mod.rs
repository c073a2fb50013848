//! # Grid Selection
//!
//! Deterministic constrained selection of six attributes from the pool.

mod errors;
pub mod rng;
mod selector;
mod tiering;

pub use errors::{SelectorError, SelectorResult};
pub use selector::GridSelector;
pub use tiering::{is_safe, GRAND_SLAM_EVENTS, SAFE_NATIONALITIES};
