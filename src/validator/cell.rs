//! # Cell Validation
//!
//! One cell = one (row attribute, column attribute) pair. Validation scans
//! a bounded entity batch and counts players satisfying both predicates.
//! Dataset failures fail OPEN: a transient outage must never brand a cell
//! impossible and sink an otherwise fine grid. That is a product decision,
//! not a fallback of convenience.

use serde::{Deserialize, Serialize};

use crate::attribute::{Attribute, AttributeKind};
use crate::dataset::{Dataset, Entity};

/// Milestone tag treated as equivalent to a rank-1 observation
const WORLD_NO1_TAG: &str = "world-no-1";

/// Risk classification of a single cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CellTier {
    /// Three or more known solutions
    Safe,
    /// One or two known solutions
    Risky,
    /// No solution inside the scanned window
    Impossible,
}

/// Outcome of validating one cell
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CellResult {
    /// Row index, 0-2
    pub row: usize,

    /// Column index, 0-2
    pub col: usize,

    /// Players in the scanned window satisfying both attributes
    pub satisfying_count: usize,

    /// Risk tier derived from the count
    pub tier: CellTier,

    /// True when a dataset failure forced the fail-open path
    pub failed_open: bool,
}

/// Validation policy knobs
#[derive(Debug, Clone)]
pub struct ValidatorConfig {
    /// Entities scanned per cell. Bounded on purpose: "impossible" means
    /// "no solution among the first `scan_limit` entities in stable
    /// order", trading precision for bounded latency. Intended range
    /// 200-500.
    pub scan_limit: usize,

    /// Minimum count for the safe tier
    pub safe_min_count: usize,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            scan_limit: 300,
            safe_min_count: 3,
        }
    }
}

/// Whether one entity satisfies one attribute predicate
///
/// Pure function of entity fields; no I/O.
pub fn satisfies(entity: &Entity, attr: &Attribute) -> bool {
    match attr.kind {
        AttributeKind::Nationality => entity.nationality == attr.value,
        AttributeKind::TournamentWin => entity.won_event(&attr.value),
        AttributeKind::DecadeBand => attr
            .value
            .parse::<i32>()
            .map(|start| entity.active_overlaps(start, start + 9))
            .unwrap_or(false),
        AttributeKind::Handedness => entity.left_handed == (attr.value == "left"),
        AttributeKind::RankMilestone => attr
            .value
            .parse::<u32>()
            .map(|threshold| {
                entity.reached_rank(threshold)
                    || (threshold == 1 && entity.has_tag(WORLD_NO1_TAG))
            })
            .unwrap_or(false),
        AttributeKind::Tag => entity.has_tag(&attr.value),
    }
}

/// Classify a count into a tier
pub fn tier_for_count(count: usize, config: &ValidatorConfig) -> CellTier {
    if count == 0 {
        CellTier::Impossible
    } else if count < config.safe_min_count {
        CellTier::Risky
    } else {
        CellTier::Safe
    }
}

/// Validate a single cell against a bounded entity scan
pub fn validate_cell(
    dataset: &dyn Dataset,
    row: usize,
    col: usize,
    row_attr: &Attribute,
    col_attr: &Attribute,
    config: &ValidatorConfig,
) -> CellResult {
    match dataset.fetch_entity_batch(config.scan_limit) {
        Ok(entities) => {
            let satisfying_count = entities
                .iter()
                .filter(|e| satisfies(e, row_attr) && satisfies(e, col_attr))
                .count();
            CellResult {
                row,
                col,
                satisfying_count,
                tier: tier_for_count(satisfying_count, config),
                failed_open: false,
            }
        }
        // Fail open: an unreachable dataset reads as a satisfiable cell
        Err(_) => CellResult {
            row,
            col,
            satisfying_count: config.safe_min_count,
            tier: CellTier::Safe,
            failed_open: true,
        },
    }
}
