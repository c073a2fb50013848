//! # Grid Payload
//!
//! The presentation-facing shape of a resolved grid.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::attribute::Attribute;
use crate::cache::{CacheEntry, SourceKind};

/// How the payload was obtained
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GridSource {
    /// Cache hit on a curated entry
    CachedCurated,
    /// Cache hit on a generated entry
    CachedGenerated,
    /// Built from a published template this request
    FreshCurated,
    /// Built by the generation loop this request
    FreshGenerated,
}

/// A resolved grid as handed to the presentation layer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GridPayload {
    /// Puzzle date
    pub date: NaiveDate,

    /// Resolution source
    pub source: GridSource,

    /// Row attributes in order
    pub rows: Vec<Attribute>,

    /// Column attributes in order
    pub cols: Vec<Attribute>,

    /// Template title, curated only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Template description, curated only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Degraded-mode warning, generated only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,

    /// Generation attempts, generated only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attempt_count: Option<u32>,
}

impl GridPayload {
    /// Build a payload from a cache entry
    ///
    /// `cached` distinguishes a read hit from the write-through of an
    /// entry materialized in this request.
    pub fn from_entry(entry: &CacheEntry, cached: bool) -> Self {
        let source = match (entry.source_kind, cached) {
            (SourceKind::Curated, true) => GridSource::CachedCurated,
            (SourceKind::Curated, false) => GridSource::FreshCurated,
            (SourceKind::Generated, true) => GridSource::CachedGenerated,
            (SourceKind::Generated, false) => GridSource::FreshGenerated,
        };
        Self {
            date: entry.date,
            source,
            rows: entry.grid.rows().to_vec(),
            cols: entry.grid.cols().to_vec(),
            title: entry.title.clone(),
            description: entry.description.clone(),
            warning: entry.warning.clone(),
            attempt_count: entry.attempt_count,
        }
    }
}
