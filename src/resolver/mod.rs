//! # Resolution Chain
//!
//! Date → grid, through three tiers: cache, published template, generation.
//! Every miss writes through the cache so the next request for the same
//! date is a hit until expiry or until a publish supersedes it.

mod errors;
mod payload;

pub use errors::{ResolveError, ResolveResult};
pub use payload::{GridPayload, GridSource};

use std::sync::Arc;

use chrono::{Datelike, NaiveDate, Utc};
use serde::Serialize;

use crate::attribute::PoolBuilder;
use crate::cache::{CacheEntry, CacheStore, SourceKind};
use crate::dataset::Dataset;
use crate::generator::GenerationLoop;
use crate::grid::Grid;
use crate::observability::{Logger, Severity};
use crate::selector::{rng, GridSelector};
use crate::template::TemplateStore;
use crate::validator::{GridValidator, ValidationSummary};

/// Per-request resolution switches
#[derive(Debug, Clone, Copy, Default)]
pub struct ResolveOptions {
    /// Skip the cache read (the write-through still upserts on date)
    pub force_refresh: bool,

    /// Accept the first selected grid without validating it
    pub skip_validation: bool,

    /// Override the date-derived seed (operational debugging)
    pub seed: Option<u64>,
}

/// A one-shot selector+validator run for debugging
#[derive(Debug, Clone, Serialize)]
pub struct Suggestion {
    /// Seed the grid was derived from
    pub seed: u64,

    /// The selected grid
    pub grid: Grid,

    /// Its validation diagnostics
    pub summary: ValidationSummary,
}

/// The cache → template → generation resolution chain
pub struct GridResolver {
    dataset: Arc<dyn Dataset>,
    cache: Arc<dyn CacheStore>,
    templates: Arc<dyn TemplateStore>,
    pool_builder: PoolBuilder,
    validator: GridValidator,
}

impl GridResolver {
    /// Wire the resolver over its collaborators
    pub fn new(
        dataset: Arc<dyn Dataset>,
        cache: Arc<dyn CacheStore>,
        templates: Arc<dyn TemplateStore>,
        pool_builder: PoolBuilder,
        validator: GridValidator,
    ) -> Self {
        Self {
            dataset,
            cache,
            templates,
            pool_builder,
            validator,
        }
    }

    /// Deterministic default seed for a date
    pub fn seed_for_date(date: NaiveDate) -> u64 {
        rng::mix(date.num_days_from_ce() as u64, 0, 0)
    }

    /// Resolve the grid for a date
    pub async fn resolve(
        &self,
        date: NaiveDate,
        options: ResolveOptions,
    ) -> ResolveResult<GridPayload> {
        let now = Utc::now();

        // Housekeeping; passive expiry below is what correctness rests on
        if let Ok(swept) = self.cache.sweep_expired(now) {
            if swept > 0 {
                Logger::trace("cache_swept", &[("entries", &swept.to_string())]);
            }
        }

        // Tier 1: cache
        if !options.force_refresh {
            if let Some(entry) = self.cache.get(date)? {
                if !entry.is_expired(now) {
                    Logger::info("cache_hit", &[("date", &date.to_string())]);
                    return Ok(GridPayload::from_entry(&entry, true));
                }
                Logger::info("cache_expired", &[("date", &date.to_string())]);
            }
        }

        // Tier 2: published template
        if let Some(template) = self.templates.find_published_by_date(date)? {
            let grid = template.grid()?;
            let entry = CacheEntry {
                date,
                source_kind: SourceKind::Curated,
                template_ref: Some(template.id),
                grid,
                title: Some(template.title.clone()),
                description: template.description.clone(),
                warning: None,
                attempt_count: None,
                generated_at: now,
                expires_at: now,
            }
            .expiring_now_plus_ttl();
            self.cache.upsert(entry.clone())?;
            Logger::info(
                "resolved_curated",
                &[
                    ("date", &date.to_string()),
                    ("template", &template.id.to_string()),
                ],
            );
            return Ok(GridPayload::from_entry(&entry, false));
        }

        // Tier 3: generate
        let pool = self.pool_builder.build(self.dataset.as_ref())?;
        let seed = options.seed.unwrap_or_else(|| Self::seed_for_date(date));

        let (grid, warning, attempt_count) = if options.skip_validation {
            (GridSelector::select(&pool, seed)?, None, 1)
        } else {
            let outcome = GenerationLoop::new(&self.validator).run(&pool, seed).await?;
            let warning = outcome.degraded.then(|| {
                format!(
                    "Grid generation exhausted {} attempts; {} cell(s) may have no solution",
                    outcome.attempt_count, outcome.summary.impossible_count
                )
            });
            (outcome.grid, warning, outcome.attempt_count)
        };

        let entry = CacheEntry {
            date,
            source_kind: SourceKind::Generated,
            template_ref: None,
            grid,
            title: None,
            description: None,
            warning,
            attempt_count: Some(attempt_count),
            generated_at: now,
            expires_at: now,
        }
        .expiring_now_plus_ttl();
        self.cache.upsert(entry.clone())?;
        Logger::log(
            Severity::Info,
            "resolved_generated",
            &[
                ("attempts", &attempt_count.to_string()),
                ("date", &date.to_string()),
                ("degraded", &entry.warning.is_some().to_string()),
            ],
        );
        Ok(GridPayload::from_entry(&entry, false))
    }

    /// Run the selector and validator once for a seed, caching nothing
    pub async fn suggest(&self, seed: u64) -> ResolveResult<Suggestion> {
        let pool = self.pool_builder.build(self.dataset.as_ref())?;
        let grid = GridSelector::select(&pool, seed)?;
        let summary = self.validator.validate(&grid).await;
        Ok(Suggestion {
            seed,
            grid,
            summary,
        })
    }
}
