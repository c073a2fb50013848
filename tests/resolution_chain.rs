//! Resolution Chain Tests
//!
//! The three-tier chain: cache, then published template, then generation,
//! with write-through caching, TTL expiry as a miss, force-refresh as a
//! per-date upsert, and publish superseding stale generated entries.

use std::sync::Arc;

use chrono::{Duration, NaiveDate};
use matchgrid::attribute::{Attribute, AttributeKind, PoolBuilder};
use matchgrid::cache::{CacheStore, InMemoryCacheStore};
use matchgrid::dataset::{sample_dataset, Dataset};
use matchgrid::resolver::{GridResolver, GridSource, ResolveOptions};
use matchgrid::template::{InMemoryTemplateStore, TemplateDraft, TemplateService};
use matchgrid::validator::GridValidator;

// =============================================================================
// Helper Functions
// =============================================================================

struct Fixture {
    resolver: GridResolver,
    templates: TemplateService,
    cache: Arc<InMemoryCacheStore>,
}

fn fixture() -> Fixture {
    let dataset: Arc<dyn Dataset> = Arc::new(sample_dataset());
    let cache = Arc::new(InMemoryCacheStore::new());
    let template_store = Arc::new(InMemoryTemplateStore::new());

    let resolver = GridResolver::new(
        Arc::clone(&dataset),
        cache.clone(),
        template_store.clone(),
        PoolBuilder::new(),
        GridValidator::new(Arc::clone(&dataset)),
    );
    let templates = TemplateService::new(
        template_store,
        cache.clone(),
        GridValidator::new(dataset),
    );
    Fixture {
        resolver,
        templates,
        cache,
    }
}

fn date(s: &str) -> NaiveDate {
    s.parse().unwrap()
}

fn attr(kind: AttributeKind, value: &str) -> Attribute {
    Attribute::new(kind, value, value, "")
}

/// Axes that validate cleanly against the sample dataset
fn curated_axes() -> (Vec<Attribute>, Vec<Attribute>) {
    (
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
}

fn scheduled_draft(title: &str, d: NaiveDate) -> TemplateDraft {
    let (rows, cols) = curated_axes();
    TemplateDraft {
        title: title.to_string(),
        description: Some("curated".to_string()),
        rows,
        cols,
        scheduled_date: Some(d),
    }
}

// =============================================================================
// Tier Order
// =============================================================================

/// First resolution generates and caches; the second is a cache hit.
#[tokio::test]
async fn test_generated_then_cached() {
    let fx = fixture();
    let d = date("2026-08-27");

    let first = fx.resolver.resolve(d, ResolveOptions::default()).await.unwrap();
    assert_eq!(first.source, GridSource::FreshGenerated);
    assert!(first.attempt_count.is_some());

    let second = fx.resolver.resolve(d, ResolveOptions::default()).await.unwrap();
    assert_eq!(second.source, GridSource::CachedGenerated);
    assert_eq!(second.rows, first.rows);
    assert_eq!(second.cols, first.cols);
}

/// A published template wins over generation and then serves from cache.
#[tokio::test]
async fn test_published_template_resolves_curated() {
    let fx = fixture();
    let d = date("2026-09-01");
    let template = fx.templates.create(scheduled_draft("Clay Legends", d)).unwrap();
    fx.templates.publish(template.id).await.unwrap();

    let first = fx.resolver.resolve(d, ResolveOptions::default()).await.unwrap();
    assert_eq!(first.source, GridSource::FreshCurated);
    assert_eq!(first.title.as_deref(), Some("Clay Legends"));

    let second = fx.resolver.resolve(d, ResolveOptions::default()).await.unwrap();
    assert_eq!(second.source, GridSource::CachedCurated);
}

/// Publishing for a date that already has a cached generated grid
/// supersedes it: resolution never serves the stale generated entry again.
#[tokio::test]
async fn test_publish_supersedes_generated_cache_entry() {
    let fx = fixture();
    let d = date("2026-09-02");

    let generated = fx.resolver.resolve(d, ResolveOptions::default()).await.unwrap();
    assert_eq!(generated.source, GridSource::FreshGenerated);

    let template = fx.templates.create(scheduled_draft("Takeover", d)).unwrap();
    fx.templates.publish(template.id).await.unwrap();

    let after = fx.resolver.resolve(d, ResolveOptions::default()).await.unwrap();
    assert!(
        matches!(after.source, GridSource::FreshCurated | GridSource::CachedCurated),
        "stale generated entry served: {:?}",
        after.source
    );
    assert_eq!(after.title.as_deref(), Some("Takeover"));
}

// =============================================================================
// TTL and Upsert Semantics
// =============================================================================

/// An expired entry reads as a miss and is replaced by upsert, not
/// duplicated.
#[tokio::test]
async fn test_expired_entry_is_replaced() {
    let fx = fixture();
    let d = date("2026-09-03");

    fx.resolver.resolve(d, ResolveOptions::default()).await.unwrap();

    // Age the entry past its TTL
    let mut entry = fx.cache.get(d).unwrap().unwrap();
    entry.expires_at = entry.generated_at - Duration::hours(1);
    fx.cache.upsert(entry).unwrap();

    let regenerated = fx.resolver.resolve(d, ResolveOptions::default()).await.unwrap();
    assert_eq!(regenerated.source, GridSource::FreshGenerated);

    let fresh = fx.cache.get(d).unwrap().unwrap();
    assert!(fresh.expires_at > fresh.generated_at);
}

/// Force-refresh skips the cache read but still upserts on date.
#[tokio::test]
async fn test_force_refresh_skips_read_but_upserts() {
    let fx = fixture();
    let d = date("2026-09-04");

    fx.resolver.resolve(d, ResolveOptions::default()).await.unwrap();
    let forced = fx
        .resolver
        .resolve(
            d,
            ResolveOptions {
                force_refresh: true,
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(forced.source, GridSource::FreshGenerated);

    // Still exactly one entry for the date, and it serves the next hit
    assert!(fx.cache.get(d).unwrap().is_some());
    let next = fx.resolver.resolve(d, ResolveOptions::default()).await.unwrap();
    assert_eq!(next.source, GridSource::CachedGenerated);
}

// =============================================================================
// Generation Options
// =============================================================================

/// The date-derived seed makes force-refreshed resolutions reproducible.
#[tokio::test]
async fn test_date_derived_seed_reproduces_grid() {
    let fx = fixture();
    let d = date("2026-09-05");
    let options = ResolveOptions {
        force_refresh: true,
        ..Default::default()
    };

    let a = fx.resolver.resolve(d, options).await.unwrap();
    let b = fx.resolver.resolve(d, options).await.unwrap();
    assert_eq!(a.rows, b.rows);
    assert_eq!(a.cols, b.cols);
}

/// skip_validation accepts the first selected grid.
#[tokio::test]
async fn test_skip_validation_resolves_in_one_attempt() {
    let fx = fixture();
    let payload = fx
        .resolver
        .resolve(
            date("2026-09-06"),
            ResolveOptions {
                skip_validation: true,
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(payload.source, GridSource::FreshGenerated);
    assert_eq!(payload.attempt_count, Some(1));
}

/// Suggestion runs cache nothing.
#[tokio::test]
async fn test_suggest_does_not_touch_cache() {
    let fx = fixture();
    let suggestion = fx.resolver.suggest(1234).await.unwrap();
    assert_eq!(suggestion.seed, 1234);
    assert_eq!(suggestion.summary.cells.len(), 9);

    let again = fx.resolver.suggest(1234).await.unwrap();
    assert_eq!(suggestion.grid, again.grid);
}

// =============================================================================
// Unpublish
// =============================================================================

/// Unpublishing drops the curated cache entry so the date falls back to
/// generation.
#[tokio::test]
async fn test_unpublish_reverts_to_generated() {
    let fx = fixture();
    let d = date("2026-09-07");
    let template = fx.templates.create(scheduled_draft("Short Lived", d)).unwrap();
    fx.templates.publish(template.id).await.unwrap();

    let curated = fx.resolver.resolve(d, ResolveOptions::default()).await.unwrap();
    assert_eq!(curated.source, GridSource::FreshCurated);

    fx.templates.unpublish(template.id).unwrap();
    let after = fx.resolver.resolve(d, ResolveOptions::default()).await.unwrap();
    assert_eq!(after.source, GridSource::FreshGenerated);
}
