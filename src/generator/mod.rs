//! # Generation Loop
//!
//! Generate-validate retry loop. Each attempt re-derives its seed by a
//! fixed stride, so the selector's determinism guarantees every attempt
//! explores a different grid. Exhausting the budget is not a failure:
//! the caller always gets a grid, degraded if need be.

use serde::{Deserialize, Serialize};

use crate::attribute::Attribute;
use crate::grid::Grid;
use crate::observability::Logger;
use crate::selector::{GridSelector, SelectorResult};
use crate::validator::{GridValidator, ValidationSummary};

/// Attempt budget before returning a degraded grid
pub const MAX_ATTEMPTS: u32 = 20;

/// Seed stride between attempts. Any large odd constant does the job; it
/// only has to decorrelate consecutive attempts over typical seed ranges.
pub const SEED_STEP: u64 = 2_654_435_761;

/// Result of a generation run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationOutcome {
    /// The accepted (or last-produced) grid
    pub grid: Grid,

    /// Validation diagnostics for that grid
    pub summary: ValidationSummary,

    /// Attempts consumed, 1-based
    pub attempt_count: u32,

    /// True when the budget ran out and the grid still has impossible
    /// cells
    pub degraded: bool,
}

/// Runs the selector against the validator until a grid passes
pub struct GenerationLoop<'a> {
    validator: &'a GridValidator,
}

impl<'a> GenerationLoop<'a> {
    /// Create a loop over the given validator
    pub fn new(validator: &'a GridValidator) -> Self {
        Self { validator }
    }

    /// Generate a grid from the pool, retrying with stepped seeds
    ///
    /// Attempts are sequential: each one's seed is derived from the
    /// attempt number, and the per-attempt work is already parallel
    /// inside the validator.
    pub async fn run(&self, pool: &[Attribute], seed: u64) -> SelectorResult<GenerationOutcome> {
        let mut last: Option<(Grid, ValidationSummary)> = None;

        for attempt in 1..=MAX_ATTEMPTS {
            let attempt_seed = seed.wrapping_add(u64::from(attempt - 1).wrapping_mul(SEED_STEP));
            let grid = GridSelector::select(pool, attempt_seed)?;
            let summary = self.validator.validate(&grid).await;

            if summary.is_valid() {
                Logger::info(
                    "grid_generated",
                    &[
                        ("attempts", &attempt.to_string()),
                        ("status", &format!("{:?}", summary.status)),
                    ],
                );
                return Ok(GenerationOutcome {
                    grid,
                    summary,
                    attempt_count: attempt,
                    degraded: false,
                });
            }

            Logger::trace(
                "attempt_rejected",
                &[
                    ("attempt", &attempt.to_string()),
                    ("impossible", &summary.impossible_count.to_string()),
                ],
            );
            last = Some((grid, summary));
        }

        // Budget exhausted: hand back the last grid with its diagnostics
        let (grid, summary) = last.expect("MAX_ATTEMPTS is non-zero");
        Logger::warn(
            "generation_degraded",
            &[
                ("attempts", &MAX_ATTEMPTS.to_string()),
                ("impossible", &summary.impossible_count.to_string()),
            ],
        );
        Ok(GenerationOutcome {
            grid,
            summary,
            attempt_count: MAX_ATTEMPTS,
            degraded: true,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::attribute::{Attribute, AttributeKind, PoolBuilder};
    use crate::dataset::{sample_dataset, InMemoryDataset};
    use crate::validator::GridValidator;

    #[tokio::test]
    async fn test_generation_succeeds_on_sample_data() {
        let dataset = Arc::new(sample_dataset());
        let pool = PoolBuilder::new().build(dataset.as_ref()).unwrap();
        let validator = GridValidator::new(dataset);
        let outcome = GenerationLoop::new(&validator).run(&pool, 42).await.unwrap();
        assert!(outcome.attempt_count >= 1);
        if !outcome.degraded {
            assert_eq!(outcome.summary.impossible_count, 0);
        }
    }

    #[tokio::test]
    async fn test_generation_is_deterministic() {
        let dataset = Arc::new(sample_dataset());
        let pool = PoolBuilder::new().build(dataset.as_ref()).unwrap();
        let validator = GridValidator::new(Arc::clone(&dataset) as Arc<dyn crate::dataset::Dataset>);
        let a = GenerationLoop::new(&validator).run(&pool, 7).await.unwrap();
        let b = GenerationLoop::new(&validator).run(&pool, 7).await.unwrap();
        assert_eq!(a.grid, b.grid);
        assert_eq!(a.attempt_count, b.attempt_count);
    }

    #[tokio::test]
    async fn test_unwinnable_pool_terminates_degraded() {
        // Empty dataset: every cell of every grid is impossible
        let dataset = Arc::new(InMemoryDataset::new(vec![], vec![]));
        let pool: Vec<Attribute> = (0..12)
            .map(|i| Attribute::new(AttributeKind::Tag, format!("t{i}"), format!("t{i}"), ""))
            .collect();
        let validator = GridValidator::new(dataset);
        let outcome = GenerationLoop::new(&validator).run(&pool, 1).await.unwrap();
        assert!(outcome.degraded);
        assert_eq!(outcome.attempt_count, MAX_ATTEMPTS);
        assert!(outcome.summary.impossible_count > 0);
    }
}
