//! Selector Determinism Tests
//!
//! The selector's hard contract: the same (pool, seed) pair always yields
//! the same grid, bit-for-bit same attribute ids in the same slots. The
//! generation loop's seed stepping and the suggestion endpoint both lean
//! on this.

use matchgrid::attribute::{Attribute, AttributeKind, PoolBuilder};
use matchgrid::dataset::sample_dataset;
use matchgrid::selector::GridSelector;

// =============================================================================
// Helper Functions
// =============================================================================

fn sample_pool() -> Vec<Attribute> {
    PoolBuilder::new().build(&sample_dataset()).unwrap()
}

fn attr(kind: AttributeKind, value: &str) -> Attribute {
    Attribute::new(kind, value, value, "")
}

/// The six-attribute pool from the small-pool scenario: two nationalities,
/// one event win, one decade, one rank milestone, one tag.
fn six_attribute_pool() -> Vec<Attribute> {
    vec![
        attr(AttributeKind::Nationality, "ESP"),
        attr(AttributeKind::Nationality, "USA"),
        attr(AttributeKind::TournamentWin, "miami"),
        attr(AttributeKind::DecadeBand, "1990"),
        attr(AttributeKind::RankMilestone, "10"),
        attr(AttributeKind::Tag, "davis-cup"),
    ]
}

// =============================================================================
// Determinism Tests
// =============================================================================

/// Identical inputs produce identical grids, repeatedly.
#[test]
fn test_repeated_selection_is_bit_identical() {
    let pool = sample_pool();
    let first = GridSelector::select(&pool, 42).unwrap();
    for _ in 0..20 {
        let again = GridSelector::select(&pool, 42).unwrap();
        let ids = |attrs: &[Attribute]| attrs.iter().map(|a| a.id.clone()).collect::<Vec<_>>();
        assert_eq!(ids(first.rows()), ids(again.rows()));
        assert_eq!(ids(first.cols()), ids(again.cols()));
    }
}

/// Determinism holds across the whole seed range we step through.
#[test]
fn test_determinism_across_seeds() {
    let pool = sample_pool();
    for seed in 0..100 {
        let a = GridSelector::select(&pool, seed).unwrap();
        let b = GridSelector::select(&pool, seed).unwrap();
        assert_eq!(a, b, "seed {seed} diverged");
    }
}

/// Stepping the seed actually explores the grid space.
#[test]
fn test_seed_changes_reach_different_grids() {
    let pool = sample_pool();
    let baseline = GridSelector::select(&pool, 0).unwrap();
    let distinct = (1..50)
        .filter(|&seed| GridSelector::select(&pool, seed).unwrap() != baseline)
        .count();
    assert!(distinct > 25, "only {distinct} of 49 seeds diverged");
}

// =============================================================================
// Small-Pool Scenario
// =============================================================================

/// With exactly six attributes including two nationalities, selection must
/// split the nationalities across axes and never crash: the safe-only
/// early slots fall back to the full remaining pool, while the
/// nationality exclusion is never relaxed.
#[test]
fn test_six_attribute_pool_splits_nationalities() {
    let pool = six_attribute_pool();
    for seed in 0..500 {
        let grid = GridSelector::select(&pool, seed).unwrap();
        for axis in [grid.rows(), grid.cols()] {
            let nationalities = axis
                .iter()
                .filter(|a| a.kind == AttributeKind::Nationality)
                .count();
            assert_eq!(nationalities, 1, "seed {seed}: axis holds {nationalities} nationalities");
        }
    }
}

/// The seed-42 selection of the scenario pool is stable.
#[test]
fn test_six_attribute_pool_seed_42_is_stable() {
    let pool = six_attribute_pool();
    let a = GridSelector::select(&pool, 42).unwrap();
    let b = GridSelector::select(&pool, 42).unwrap();
    assert_eq!(a, b);
}
