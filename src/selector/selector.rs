//! # Grid Selector
//!
//! Assembles a 3×3 grid from the attribute pool under a hard determinism
//! contract: the same (pool, seed) pair always yields the same grid. The
//! retry loop in the generator depends on this — stepping the seed is what
//! explores new grids.

use crate::attribute::{Attribute, AttributeKind};
use crate::grid::{Grid, AXIS_LEN};

use super::errors::{SelectorError, SelectorResult};
use super::rng;
use super::tiering::is_safe;

/// Retries of the derived index before falling through to the first free
/// candidate. Repeats only occur under pool/index drift, not by design.
const SLOT_RETRY_LIMIT: u64 = 100;

/// Deterministic constrained grid selection
pub struct GridSelector;

impl GridSelector {
    /// Select 3 row and 3 column attributes from the pool
    ///
    /// Slots are processed rows 0-2 then columns 0-2. The first two slots
    /// of each axis draw from the safe partition only; the third slot may
    /// draw risky attributes. Chosen attributes are excluded globally, and
    /// once an axis holds a nationality attribute no second one is offered
    /// to that axis — that exclusion is never relaxed, even when the slot
    /// pool runs empty and widens to the full remainder.
    pub fn select(pool: &[Attribute], seed: u64) -> SelectorResult<Grid> {
        let mut rows: Vec<Attribute> = Vec::with_capacity(AXIS_LEN);
        let mut cols: Vec<Attribute> = Vec::with_capacity(AXIS_LEN);
        let mut chosen_ids: Vec<String> = Vec::with_capacity(AXIS_LEN * 2);

        // Per-axis nationality flags, carried explicitly through the loop
        let mut row_has_nationality = false;
        let mut col_has_nationality = false;

        for slot in 0..AXIS_LEN * 2 {
            let on_rows = slot < AXIS_LEN;
            let axis_pos = slot % AXIS_LEN;
            let axis_has_nationality = if on_rows {
                row_has_nationality
            } else {
                col_has_nationality
            };
            // Third slot of each axis is the designated hard one
            let allow_risky = axis_pos == AXIS_LEN - 1;

            let free = |attr: &&Attribute| !chosen_ids.contains(&attr.id);
            let axis_ok = |attr: &&Attribute| {
                !(axis_has_nationality && attr.kind == AttributeKind::Nationality)
            };

            let mut candidates: Vec<&Attribute> = pool
                .iter()
                .filter(free)
                .filter(axis_ok)
                .filter(|attr| allow_risky || is_safe(attr))
                .collect();

            if candidates.is_empty() {
                // Widen to the full remaining pool; the nationality
                // exclusion still applies.
                candidates = pool.iter().filter(free).filter(axis_ok).collect();
            }
            if candidates.is_empty() {
                return Err(SelectorError::PoolExhausted { slot });
            }

            let mut picked: Option<&Attribute> = None;
            for attempt in 0..SLOT_RETRY_LIMIT {
                let idx = rng::index(seed, slot as u64, attempt, candidates.len());
                let candidate = candidates[idx];
                if !chosen_ids.contains(&candidate.id) {
                    picked = Some(candidate);
                    break;
                }
            }
            // Exhausted retries: fall through to the first free candidate
            let picked = match picked {
                Some(attr) => attr,
                None => candidates[0],
            };

            if picked.kind == AttributeKind::Nationality {
                if on_rows {
                    row_has_nationality = true;
                } else {
                    col_has_nationality = true;
                }
            }
            chosen_ids.push(picked.id.clone());
            if on_rows {
                rows.push(picked.clone());
            } else {
                cols.push(picked.clone());
            }
        }

        Ok(Grid::new(rows, cols)?)
    }
}
