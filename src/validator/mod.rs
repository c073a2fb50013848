//! # Validation
//!
//! Per-cell satisfiability checks and the 9-way concurrent grid validator.

mod cell;
mod grid;

pub use cell::{satisfies, tier_for_count, validate_cell, CellResult, CellTier, ValidatorConfig};
pub use grid::{GridValidator, ValidationStatus, ValidationSummary};
