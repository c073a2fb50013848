//! # Dataset Collaborator
//!
//! Read-only contract against the external player datastore. The core never
//! writes through this trait; persistence lives outside the crate and is
//! wired in behind `Dataset`.

mod entity;
mod errors;
mod memory;

pub use entity::{Entity, RankObservation, TitleOutcome, TitleRecord};
pub use errors::{DatasetError, DatasetResult};
pub use memory::{sample_dataset, InMemoryDataset};

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Prestige tier of a catalog event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventTier {
    /// The four majors
    GrandSlam,
    /// Top-shelf non-major events
    Masters,
    /// Everything else on the main tour
    Tour,
}

/// One entry in the tournament catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventInfo {
    /// Stable event identifier (e.g. "wimbledon")
    pub id: String,

    /// Human-readable event name
    pub display_name: String,

    /// Prestige tier
    pub tier: EventTier,
}

/// Read-only dataset contract
///
/// `fetch_entity_batch` must return entities in a stable order across calls
/// within one validation run; the bounded cell scan depends on every cell
/// seeing the same window.
pub trait Dataset: Send + Sync {
    /// Count entities per nationality code
    fn count_by_nationality(&self) -> DatasetResult<HashMap<String, usize>>;

    /// List the tournament catalog, restricted to the given tiers
    fn list_event_catalog(&self, tiers: &[EventTier]) -> DatasetResult<Vec<EventInfo>>;

    /// List distinct achievement tags, capped
    fn list_distinct_tags(&self, cap: usize) -> DatasetResult<Vec<String>>;

    /// Fetch up to `limit` entities in a stable order
    fn fetch_entity_batch(&self, limit: usize) -> DatasetResult<Vec<Entity>>;
}
