//! # Grid Errors
//!
//! Structural rejections raised at grid construction time.

use thiserror::Error;

/// Result type for grid construction
pub type GridResult<T> = Result<T, GridError>;

/// Structural violations in a candidate grid
#[derive(Debug, Clone, Error)]
pub enum GridError {
    /// Not exactly 3 rows and 3 columns
    #[error("Grid must have exactly 3 rows and 3 columns, got {rows}x{cols}")]
    WrongAxisLength { rows: usize, cols: usize },

    /// The same attribute appears in two slots
    #[error("Attribute {id} appears in more than one slot")]
    DuplicateAttribute { id: String },

    /// Two nationality attributes on one axis
    #[error("More than one nationality attribute on the {axis} axis")]
    AxisExclusivity { axis: String },
}
