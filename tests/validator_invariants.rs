//! Validator Invariant Tests
//!
//! Grid validation over synthetic datasets with known satisfiability:
//! - a dataset where everything matches reports nine safe cells
//! - a single unsatisfiable pairing reports exactly that cell impossible
//! - a dataset outage fails open instead of branding cells impossible

use std::sync::Arc;

use matchgrid::attribute::{Attribute, AttributeKind};
use matchgrid::dataset::{Dataset, Entity, InMemoryDataset};
use matchgrid::grid::Grid;
use matchgrid::validator::{CellTier, GridValidator, ValidationStatus};

// =============================================================================
// Helper Functions
// =============================================================================

fn tag(value: &str) -> Attribute {
    Attribute::new(AttributeKind::Tag, value, value, "")
}

fn tag_grid() -> Grid {
    Grid::new(
        vec![tag("t0"), tag("t1"), tag("t2")],
        vec![tag("t3"), tag("t4"), tag("t5")],
    )
    .unwrap()
}

fn entity_with_tags(id: &str, tags: &[&str]) -> Entity {
    Entity {
        id: id.to_string(),
        name: id.to_string(),
        nationality: "ESP".to_string(),
        active_from: 2000,
        active_to: 2010,
        left_handed: false,
        titles: vec![],
        rank_history: vec![],
        tags: tags.iter().map(|t| t.to_string()).collect(),
    }
}

// =============================================================================
// Tier Classification
// =============================================================================

/// Every entity satisfies every attribute: nine safe cells, excellent.
#[tokio::test]
async fn test_universally_satisfied_grid_is_excellent() {
    let all = ["t0", "t1", "t2", "t3", "t4", "t5"];
    let entities = (0..4).map(|i| entity_with_tags(&format!("e{i}"), &all)).collect();
    let dataset = Arc::new(InMemoryDataset::new(entities, vec![]));

    let summary = GridValidator::new(dataset).validate(&tag_grid()).await;
    assert_eq!(summary.safe_count, 9);
    assert_eq!(summary.risky_count, 0);
    assert_eq!(summary.impossible_count, 0);
    assert_eq!(summary.status, ValidationStatus::Excellent);
    assert!(summary.is_valid());
    assert_eq!(summary.min_count, 4);
    assert_eq!(summary.max_count, 4);
}

/// One pairing with zero satisfying entities: exactly that cell is
/// impossible and the overall status is error.
#[tokio::test]
async fn test_single_unsatisfiable_pairing_is_pinpointed() {
    // Group A lacks t5, group B lacks t2: only (t2, t5) has no solution
    let mut entities: Vec<Entity> = (0..3)
        .map(|i| entity_with_tags(&format!("a{i}"), &["t0", "t1", "t2", "t3", "t4"]))
        .collect();
    entities.extend(
        (0..3).map(|i| entity_with_tags(&format!("b{i}"), &["t0", "t1", "t3", "t4", "t5"])),
    );
    let dataset = Arc::new(InMemoryDataset::new(entities, vec![]));

    let summary = GridValidator::new(dataset).validate(&tag_grid()).await;
    assert_eq!(summary.impossible_count, 1);
    assert_eq!(summary.status, ValidationStatus::Error);
    assert!(!summary.is_valid());

    let impossible: Vec<_> = summary
        .cells
        .iter()
        .filter(|c| c.tier == CellTier::Impossible)
        .collect();
    // Row 2 is t2, column 2 is t5
    assert_eq!(impossible.len(), 1);
    assert_eq!((impossible[0].row, impossible[0].col), (2, 2));
}

/// One or two solutions classify risky, never impossible, never safe.
#[tokio::test]
async fn test_sparse_pairing_is_risky() {
    let all = ["t0", "t1", "t2", "t3", "t4", "t5"];
    let mut entities = vec![entity_with_tags("lone", &all)];
    entities.extend((0..3).map(|i| entity_with_tags(&format!("e{i}"), &["t0", "t3"])));
    let dataset = Arc::new(InMemoryDataset::new(entities, vec![]));

    let summary = GridValidator::new(dataset).validate(&tag_grid()).await;
    // Every cell except (t0, t3) is satisfied only by the lone entity
    assert_eq!(summary.risky_count, 8);
    assert_eq!(summary.safe_count, 1);
    assert_eq!(summary.status, ValidationStatus::Warning);
    assert!(summary.is_valid());
}

// =============================================================================
// Fail-Open Behavior
// =============================================================================

/// A dataset outage during validation fails open: cells read as satisfied
/// and the grid stays acceptable. A transient fetch failure must never
/// block a day's grid.
#[tokio::test]
async fn test_outage_fails_open() {
    let dataset = Arc::new(InMemoryDataset::new(
        vec![entity_with_tags("e", &["t0"])],
        vec![],
    ));
    dataset.set_failing(true);

    let validator =
        GridValidator::new(Arc::clone(&dataset) as Arc<dyn Dataset>);
    let summary = validator.validate(&tag_grid()).await;
    assert_eq!(summary.impossible_count, 0);
    assert!(summary.is_valid());
    assert!(summary.cells.iter().all(|c| c.failed_open));
}

/// Recovery after an outage goes back to real counts.
#[tokio::test]
async fn test_recovery_restores_real_counts() {
    let dataset = Arc::new(InMemoryDataset::new(
        vec![entity_with_tags("e", &["t0"])],
        vec![],
    ));
    let validator = GridValidator::new(Arc::clone(&dataset) as Arc<dyn Dataset>);

    dataset.set_failing(true);
    let during = validator.validate(&tag_grid()).await;
    assert!(during.is_valid());

    dataset.set_failing(false);
    let after = validator.validate(&tag_grid()).await;
    // Only t0 exists now, so most cells are genuinely impossible
    assert_eq!(after.status, ValidationStatus::Error);
    assert!(after.cells.iter().all(|c| !c.failed_open));
}
