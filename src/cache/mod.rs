//! # Cache Store
//!
//! Date-keyed, TTL-bound materializations of resolved grids. At most one
//! entry per date; writes are per-date upserts with last-writer-wins, which
//! is safe because entries are derived, never authored. Expiry is passive:
//! an expired entry reads as a miss. `sweep_expired` exists as explicit
//! housekeeping, not as a correctness mechanism.

mod errors;

pub use errors::{CacheError, CacheResult};

use std::collections::HashMap;
use std::sync::RwLock;

use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::grid::Grid;

/// Entry lifetime
pub const CACHE_TTL_HOURS: i64 = 24;

/// Where a cached grid came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    /// Built from a published template
    Curated,
    /// Built by the generation loop
    Generated,
}

/// One cached grid for one date
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheEntry {
    /// Puzzle date, the cache key
    pub date: NaiveDate,

    /// Curated or generated
    pub source_kind: SourceKind,

    /// Backing template, curated entries only
    pub template_ref: Option<Uuid>,

    /// The resolved grid
    pub grid: Grid,

    /// Template title, curated entries only
    pub title: Option<String>,

    /// Template description, curated entries only
    pub description: Option<String>,

    /// Degraded-mode warning, generated entries only
    pub warning: Option<String>,

    /// Generation attempts, generated entries only
    pub attempt_count: Option<u32>,

    /// When the entry was materialized
    pub generated_at: DateTime<Utc>,

    /// When the entry stops being served
    pub expires_at: DateTime<Utc>,
}

impl CacheEntry {
    /// Stamp generated/expiry timestamps on a new entry
    pub fn expiring_now_plus_ttl(mut self) -> Self {
        self.generated_at = Utc::now();
        self.expires_at = self.generated_at + Duration::hours(CACHE_TTL_HOURS);
        self
    }

    /// Whether the entry is past its expiry at the given instant
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }
}

/// Date-keyed cache contract
pub trait CacheStore: Send + Sync {
    /// Fetch the entry for a date, expired or not
    fn get(&self, date: NaiveDate) -> CacheResult<Option<CacheEntry>>;

    /// Insert or replace the entry for the entry's date
    fn upsert(&self, entry: CacheEntry) -> CacheResult<()>;

    /// Drop the entry for a date, if any
    fn delete(&self, date: NaiveDate) -> CacheResult<()>;

    /// Drop every entry expired at `now`, returning how many went
    fn sweep_expired(&self, now: DateTime<Utc>) -> CacheResult<usize>;
}

/// In-memory cache store
#[derive(Debug, Default)]
pub struct InMemoryCacheStore {
    entries: RwLock<HashMap<NaiveDate, CacheEntry>>,
}

impl InMemoryCacheStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CacheStore for InMemoryCacheStore {
    fn get(&self, date: NaiveDate) -> CacheResult<Option<CacheEntry>> {
        let entries = self
            .entries
            .read()
            .map_err(|_| CacheError::Storage("lock poisoned".to_string()))?;
        Ok(entries.get(&date).cloned())
    }

    fn upsert(&self, entry: CacheEntry) -> CacheResult<()> {
        let mut entries = self
            .entries
            .write()
            .map_err(|_| CacheError::Storage("lock poisoned".to_string()))?;
        // HashMap insert is the per-date upsert: one row per date, last
        // writer wins
        entries.insert(entry.date, entry);
        Ok(())
    }

    fn delete(&self, date: NaiveDate) -> CacheResult<()> {
        let mut entries = self
            .entries
            .write()
            .map_err(|_| CacheError::Storage("lock poisoned".to_string()))?;
        entries.remove(&date);
        Ok(())
    }

    fn sweep_expired(&self, now: DateTime<Utc>) -> CacheResult<usize> {
        let mut entries = self
            .entries
            .write()
            .map_err(|_| CacheError::Storage("lock poisoned".to_string()))?;
        let before = entries.len();
        entries.retain(|_, e| !e.is_expired(now));
        Ok(before - entries.len())
    }
}
