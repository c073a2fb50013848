//! # Attribute Pool Builder
//!
//! Projects the dataset into a flat list of candidate attributes. Pure
//! read: no randomness, no side effects. The pool is deterministic for a
//! given dataset state, which the selector's determinism contract relies on.

use crate::dataset::{Dataset, EventTier};

use super::errors::{PoolError, PoolResult};
use super::types::{Attribute, AttributeKind};

/// Decade windows offered as time-band attributes (fixed, not data-derived)
pub const DECADE_STARTS: [i32; 6] = [1970, 1980, 1990, 2000, 2010, 2020];

/// Naming-convention marker for event sub-categories excluded from the pool
const EXCLUDED_EVENT_MARKER: &str = "doubles";

/// Pool building policy knobs
#[derive(Debug, Clone)]
pub struct PoolConfig {
    /// Minimum players per nationality before it becomes an attribute.
    /// Below this, the "safe" cell tier (3+ solutions) is unreachable for
    /// that nationality, so the threshold is load-bearing.
    pub min_nationality_population: usize,

    /// Cap on Masters-tier events admitted to the pool
    pub masters_cap: usize,

    /// Cap on Tour-tier events admitted to the pool
    pub tour_cap: usize,

    /// Cap on distinct tags admitted to the pool
    pub tag_cap: usize,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            min_nationality_population: 3,
            masters_cap: 9,
            tour_cap: 12,
            tag_cap: 20,
        }
    }
}

/// Builds the candidate attribute pool from the dataset
pub struct PoolBuilder {
    config: PoolConfig,
}

impl PoolBuilder {
    /// Create a builder with default policy
    pub fn new() -> Self {
        Self::with_config(PoolConfig::default())
    }

    /// Create a builder with explicit policy
    pub fn with_config(config: PoolConfig) -> Self {
        Self { config }
    }

    /// Build the full attribute pool
    pub fn build(&self, dataset: &dyn Dataset) -> PoolResult<Vec<Attribute>> {
        let mut pool = Vec::new();

        self.push_nationalities(dataset, &mut pool)?;
        self.push_tournament_wins(dataset, &mut pool)?;
        Self::push_decade_bands(&mut pool);
        Self::push_handedness(&mut pool);
        Self::push_rank_milestones(&mut pool);
        self.push_tags(dataset, &mut pool)?;

        if pool.is_empty() {
            return Err(PoolError::EmptyPool);
        }
        Ok(pool)
    }

    fn push_nationalities(
        &self,
        dataset: &dyn Dataset,
        pool: &mut Vec<Attribute>,
    ) -> PoolResult<()> {
        let counts = dataset.count_by_nationality()?;
        // HashMap iteration order is not stable; sort so the pool is.
        let mut codes: Vec<_> = counts
            .into_iter()
            .filter(|(_, count)| *count >= self.config.min_nationality_population)
            .map(|(code, _)| code)
            .collect();
        codes.sort();

        for code in codes {
            pool.push(Attribute::new(
                AttributeKind::Nationality,
                code.clone(),
                code.clone(),
                format!("Represents {}", code),
            ));
        }
        Ok(())
    }

    fn push_tournament_wins(
        &self,
        dataset: &dyn Dataset,
        pool: &mut Vec<Attribute>,
    ) -> PoolResult<()> {
        let catalog = dataset.list_event_catalog(&[
            EventTier::GrandSlam,
            EventTier::Masters,
            EventTier::Tour,
        ])?;

        let mut masters_taken = 0;
        let mut tour_taken = 0;
        for event in catalog {
            if event.id.to_lowercase().contains(EXCLUDED_EVENT_MARKER) {
                continue;
            }
            match event.tier {
                EventTier::GrandSlam => {}
                EventTier::Masters => {
                    if masters_taken == self.config.masters_cap {
                        continue;
                    }
                    masters_taken += 1;
                }
                EventTier::Tour => {
                    if tour_taken == self.config.tour_cap {
                        continue;
                    }
                    tour_taken += 1;
                }
            }
            pool.push(Attribute::new(
                AttributeKind::TournamentWin,
                event.id.clone(),
                format!("Won {}", event.display_name),
                format!("Won the {} title at least once", event.display_name),
            ));
        }
        Ok(())
    }

    fn push_decade_bands(pool: &mut Vec<Attribute>) {
        for start in DECADE_STARTS {
            pool.push(Attribute::new(
                AttributeKind::DecadeBand,
                start.to_string(),
                format!("{}s", start),
                format!("Active at some point between {} and {}", start, start + 9),
            ));
        }
    }

    fn push_handedness(pool: &mut Vec<Attribute>) {
        pool.push(Attribute::new(
            AttributeKind::Handedness,
            "left",
            "Left-handed",
            "Plays left-handed",
        ));
        pool.push(Attribute::new(
            AttributeKind::Handedness,
            "right",
            "Right-handed",
            "Plays right-handed",
        ));
    }

    fn push_rank_milestones(pool: &mut Vec<Attribute>) {
        pool.push(Attribute::new(
            AttributeKind::RankMilestone,
            "1",
            "World No. 1",
            "Held the world number one ranking",
        ));
        pool.push(Attribute::new(
            AttributeKind::RankMilestone,
            "10",
            "Top 10",
            "Ranked inside the top ten",
        ));
    }

    fn push_tags(&self, dataset: &dyn Dataset, pool: &mut Vec<Attribute>) -> PoolResult<()> {
        for tag in dataset.list_distinct_tags(self.config.tag_cap)? {
            pool.push(Attribute::new(
                AttributeKind::Tag,
                tag.clone(),
                tag.replace('-', " "),
                format!("Has the \"{}\" achievement", tag),
            ));
        }
        Ok(())
    }
}

impl Default for PoolBuilder {
    fn default() -> Self {
        Self::new()
    }
}
