//! # Grid Validation
//!
//! Runs the nine cell validations concurrently and reduces them to one
//! summary. Cells share no mutable state; each scans the dataset on its
//! own, which is where the latency win lives.

use std::sync::Arc;
use std::time::Instant;

use futures_util::future::join_all;
use serde::{Deserialize, Serialize};

use crate::dataset::Dataset;
use crate::grid::{Grid, AXIS_LEN};
use crate::observability::{Logger, Severity};

use super::cell::{validate_cell, CellResult, CellTier, ValidatorConfig};

/// Overall grid verdict
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationStatus {
    /// No risky cells, no impossible cells
    Excellent,
    /// At most two risky cells, none impossible
    Good,
    /// More than two risky cells, none impossible
    Warning,
    /// At least one impossible cell
    Error,
}

/// Aggregate over the nine cell results
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationSummary {
    /// Per-cell diagnostics, row-major
    pub cells: Vec<CellResult>,

    /// Cells in the safe tier
    pub safe_count: usize,

    /// Cells in the risky tier
    pub risky_count: usize,

    /// Cells in the impossible tier
    pub impossible_count: usize,

    /// Smallest per-cell satisfying count
    pub min_count: usize,

    /// Largest per-cell satisfying count
    pub max_count: usize,

    /// Mean per-cell satisfying count
    pub avg_count: f64,

    /// Wall-clock validation time in milliseconds
    pub elapsed_ms: u64,

    /// Overall verdict
    pub status: ValidationStatus,
}

impl ValidationSummary {
    /// Whether the generation loop may accept the grid.
    /// Risky cells are tolerated; only impossible cells block.
    pub fn is_valid(&self) -> bool {
        self.impossible_count == 0
    }

    fn from_cells(cells: Vec<CellResult>, elapsed_ms: u64) -> Self {
        let safe_count = cells.iter().filter(|c| c.tier == CellTier::Safe).count();
        let risky_count = cells.iter().filter(|c| c.tier == CellTier::Risky).count();
        let impossible_count = cells
            .iter()
            .filter(|c| c.tier == CellTier::Impossible)
            .count();

        let counts: Vec<usize> = cells.iter().map(|c| c.satisfying_count).collect();
        let min_count = counts.iter().copied().min().unwrap_or(0);
        let max_count = counts.iter().copied().max().unwrap_or(0);
        let avg_count = if counts.is_empty() {
            0.0
        } else {
            counts.iter().sum::<usize>() as f64 / counts.len() as f64
        };

        let status = if impossible_count > 0 {
            ValidationStatus::Error
        } else if risky_count == 0 {
            ValidationStatus::Excellent
        } else if risky_count <= 2 {
            ValidationStatus::Good
        } else {
            ValidationStatus::Warning
        };

        Self {
            cells,
            safe_count,
            risky_count,
            impossible_count,
            min_count,
            max_count,
            avg_count,
            elapsed_ms,
            status,
        }
    }
}

/// Validates whole grids against the dataset
pub struct GridValidator {
    dataset: Arc<dyn Dataset>,
    config: ValidatorConfig,
}

impl GridValidator {
    /// Create a validator with default policy
    pub fn new(dataset: Arc<dyn Dataset>) -> Self {
        Self::with_config(dataset, ValidatorConfig::default())
    }

    /// Create a validator with explicit policy
    pub fn with_config(dataset: Arc<dyn Dataset>, config: ValidatorConfig) -> Self {
        Self { dataset, config }
    }

    /// Validate all nine cells concurrently and reduce to a summary
    pub async fn validate(&self, grid: &Grid) -> ValidationSummary {
        let started = Instant::now();

        let mut handles = Vec::with_capacity(AXIS_LEN * AXIS_LEN);
        for row in 0..AXIS_LEN {
            for col in 0..AXIS_LEN {
                let dataset = Arc::clone(&self.dataset);
                let config = self.config.clone();
                let (row_attr, col_attr) = grid.cell(row, col);
                let row_attr = row_attr.clone();
                let col_attr = col_attr.clone();
                // Dataset calls are synchronous; keep them off the runtime
                // worker threads.
                handles.push(tokio::task::spawn_blocking(move || {
                    validate_cell(dataset.as_ref(), row, col, &row_attr, &col_attr, &config)
                }));
            }
        }

        let mut cells = Vec::with_capacity(AXIS_LEN * AXIS_LEN);
        for (i, joined) in join_all(handles).await.into_iter().enumerate() {
            let row = i / AXIS_LEN;
            let col = i % AXIS_LEN;
            match joined {
                Ok(result) => cells.push(result),
                // A lost worker is treated like a dataset outage: fail open
                Err(_) => cells.push(CellResult {
                    row,
                    col,
                    satisfying_count: self.config.safe_min_count,
                    tier: CellTier::Safe,
                    failed_open: true,
                }),
            }
        }

        let summary =
            ValidationSummary::from_cells(cells, started.elapsed().as_millis() as u64);

        for cell in summary.cells.iter().filter(|c| c.failed_open) {
            Logger::log(
                Severity::Warn,
                "cell_failed_open",
                &[
                    ("col", &cell.col.to_string()),
                    ("row", &cell.row.to_string()),
                ],
            );
        }
        Logger::log(
            Severity::Info,
            "grid_validated",
            &[
                ("elapsed_ms", &summary.elapsed_ms.to_string()),
                ("impossible", &summary.impossible_count.to_string()),
                ("risky", &summary.risky_count.to_string()),
                ("safe", &summary.safe_count.to_string()),
                ("status", &format!("{:?}", summary.status)),
            ],
        );

        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attribute::{Attribute, AttributeKind};
    use crate::dataset::{sample_dataset, InMemoryDataset};

    fn attr(kind: AttributeKind, value: &str) -> Attribute {
        Attribute::new(kind, value, value, "")
    }

    fn decade_grid() -> Grid {
        // Every sample player is active in at least one of these windows,
        // and the pairings are dense enough to be all-safe.
        Grid::new(
            vec![
                attr(AttributeKind::RankMilestone, "10"),
                attr(AttributeKind::DecadeBand, "1990"),
                attr(AttributeKind::DecadeBand, "2000"),
            ],
            vec![
                attr(AttributeKind::RankMilestone, "1"),
                attr(AttributeKind::Handedness, "right"),
                attr(AttributeKind::DecadeBand, "2010"),
            ],
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_dense_grid_is_excellent() {
        let validator = GridValidator::new(Arc::new(sample_dataset()));
        let summary = validator.validate(&decade_grid()).await;
        assert_eq!(summary.cells.len(), 9);
        assert_eq!(summary.status, ValidationStatus::Excellent);
        assert_eq!(summary.safe_count, 9);
        assert!(summary.is_valid());
    }

    #[tokio::test]
    async fn test_single_impossible_cell_is_error() {
        let validator = GridValidator::new(Arc::new(sample_dataset()));
        let grid = Grid::new(
            vec![
                attr(AttributeKind::Nationality, "SWE"),
                attr(AttributeKind::DecadeBand, "1990"),
                attr(AttributeKind::DecadeBand, "1980"),
            ],
            vec![
                attr(AttributeKind::DecadeBand, "2020"),
                attr(AttributeKind::RankMilestone, "10"),
                attr(AttributeKind::Handedness, "right"),
            ],
        )
        .unwrap();
        let summary = validator.validate(&grid).await;
        // No Swede in the sample set reaches the 2020s
        assert_eq!(summary.status, ValidationStatus::Error);
        assert_eq!(summary.impossible_count, 1);
        let bad = summary
            .cells
            .iter()
            .find(|c| c.tier == CellTier::Impossible)
            .unwrap();
        assert_eq!((bad.row, bad.col), (0, 0));
        assert!(!summary.is_valid());
    }

    #[tokio::test]
    async fn test_dataset_outage_fails_open_not_error() {
        let dataset = Arc::new(sample_dataset());
        dataset.set_failing(true);
        let validator = GridValidator::new(Arc::clone(&dataset) as Arc<dyn crate::dataset::Dataset>);
        let summary = validator.validate(&decade_grid()).await;
        assert!(summary.is_valid());
        assert!(summary.cells.iter().all(|c| c.failed_open));
    }

    #[tokio::test]
    async fn test_empty_dataset_is_all_impossible() {
        let dataset = Arc::new(InMemoryDataset::new(vec![], vec![]));
        let validator = GridValidator::new(dataset);
        let summary = validator.validate(&decade_grid()).await;
        assert_eq!(summary.impossible_count, 9);
        assert_eq!(summary.min_count, 0);
        assert_eq!(summary.status, ValidationStatus::Error);
    }
}
