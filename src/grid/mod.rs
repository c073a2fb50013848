//! # Grid
//!
//! The validated 3×3 grid value type. Construction is the only way to get
//! a `Grid`, and construction enforces the structural invariants, so a
//! malformed grid can never reach the validator or a store.

mod errors;

pub use errors::{GridError, GridResult};

use serde::{Deserialize, Serialize};

use crate::attribute::{Attribute, AttributeKind};

/// Number of attributes per axis
pub const AXIS_LEN: usize = 3;

/// An ordered 3-row × 3-column grid of attributes
///
/// Invariants, enforced at construction:
/// - exactly three row attributes and three column attributes
/// - all six attribute ids pairwise distinct
/// - at most one nationality attribute per axis (a player holds exactly
///   one nationality, so a second one on the same axis would make some
///   cell pair guaranteed-impossible)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Grid {
    rows: Vec<Attribute>,
    cols: Vec<Attribute>,
}

impl Grid {
    /// Build a grid, rejecting structural violations
    pub fn new(rows: Vec<Attribute>, cols: Vec<Attribute>) -> GridResult<Self> {
        if rows.len() != AXIS_LEN || cols.len() != AXIS_LEN {
            return Err(GridError::WrongAxisLength {
                rows: rows.len(),
                cols: cols.len(),
            });
        }

        let mut seen: Vec<&str> = Vec::with_capacity(AXIS_LEN * 2);
        for attr in rows.iter().chain(cols.iter()) {
            if seen.contains(&attr.id.as_str()) {
                return Err(GridError::DuplicateAttribute {
                    id: attr.id.clone(),
                });
            }
            seen.push(&attr.id);
        }

        for (name, axis) in [("row", &rows), ("column", &cols)] {
            let groups = axis
                .iter()
                .filter(|a| a.kind == AttributeKind::Nationality)
                .count();
            if groups > 1 {
                return Err(GridError::AxisExclusivity {
                    axis: name.to_string(),
                });
            }
        }

        Ok(Self { rows, cols })
    }

    /// Row attributes in order
    pub fn rows(&self) -> &[Attribute] {
        &self.rows
    }

    /// Column attributes in order
    pub fn cols(&self) -> &[Attribute] {
        &self.cols
    }

    /// The attribute pair at one cell
    pub fn cell(&self, row: usize, col: usize) -> (&Attribute, &Attribute) {
        (&self.rows[row], &self.cols[col])
    }
}

impl<'de> Deserialize<'de> for Grid {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Raw {
            rows: Vec<Attribute>,
            cols: Vec<Attribute>,
        }
        let raw = Raw::deserialize(deserializer)?;
        // Deserialized grids go through the same gate as constructed ones
        Grid::new(raw.rows, raw.cols).map_err(serde::de::Error::custom)
    }
}
