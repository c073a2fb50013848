//! # Entity Model
//!
//! Read-only player records as the dataset collaborator hands them to the
//! core. Only the fields the attribute predicates consume are modeled.

use serde::{Deserialize, Serialize};

/// Outcome of a tournament final appearance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TitleOutcome {
    /// Won the final
    Won,
    /// Lost the final
    RunnerUp,
}

/// One tournament result tied to an event in the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TitleRecord {
    /// Catalog event identifier
    pub event_id: String,

    /// Final outcome
    pub outcome: TitleOutcome,

    /// Season the final was played
    pub year: i32,
}

/// One periodic ranking observation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankObservation {
    /// Season the observation was taken
    pub year: i32,

    /// Best ranking held that season (1 = world number one)
    pub rank: u32,
}

/// A player record from the external dataset
///
/// Entities are read-only from the core's perspective. A player has exactly
/// one nationality, which is why two nationality attributes on one axis can
/// never both be satisfied by a single player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    /// Stable dataset identifier
    pub id: String,

    /// Display name
    pub name: String,

    /// ISO-3166-ish nationality code (e.g. "ESP")
    pub nationality: String,

    /// First season active on tour
    pub active_from: i32,

    /// Last season active on tour (current year for active players)
    pub active_to: i32,

    /// Plays left-handed
    pub left_handed: bool,

    /// Final appearances, wins and losses both
    #[serde(default)]
    pub titles: Vec<TitleRecord>,

    /// Best-rank-per-season observations
    #[serde(default)]
    pub rank_history: Vec<RankObservation>,

    /// Free-form achievement tags (e.g. "olympic-gold")
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Entity {
    /// Whether the player's active period overlaps the given year range
    /// (inclusive on both ends)
    pub fn active_overlaps(&self, from: i32, to: i32) -> bool {
        self.active_from <= to && self.active_to >= from
    }

    /// Whether the player ever held a ranking at or below the threshold
    pub fn reached_rank(&self, threshold: u32) -> bool {
        self.rank_history.iter().any(|obs| obs.rank <= threshold)
    }

    /// Whether the player won the given catalog event at least once
    pub fn won_event(&self, event_id: &str) -> bool {
        self.titles
            .iter()
            .any(|t| t.event_id == event_id && t.outcome == TitleOutcome::Won)
    }

    /// Whether the player carries the given achievement tag
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player() -> Entity {
        Entity {
            id: "p1".to_string(),
            name: "Test Player".to_string(),
            nationality: "ESP".to_string(),
            active_from: 2001,
            active_to: 2015,
            left_handed: true,
            titles: vec![TitleRecord {
                event_id: "roland-garros".to_string(),
                outcome: TitleOutcome::Won,
                year: 2005,
            }],
            rank_history: vec![RankObservation { year: 2008, rank: 1 }],
            tags: vec!["olympic-gold".to_string()],
        }
    }

    #[test]
    fn test_active_overlap_inclusive_bounds() {
        let p = player();
        assert!(p.active_overlaps(2015, 2020));
        assert!(p.active_overlaps(1990, 2001));
        assert!(!p.active_overlaps(2016, 2020));
        assert!(!p.active_overlaps(1990, 2000));
    }

    #[test]
    fn test_runner_up_is_not_a_win() {
        let mut p = player();
        p.titles[0].outcome = TitleOutcome::RunnerUp;
        assert!(!p.won_event("roland-garros"));
    }

    #[test]
    fn test_reached_rank_threshold() {
        let p = player();
        assert!(p.reached_rank(1));
        assert!(p.reached_rank(10));
    }
}
