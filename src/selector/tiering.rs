//! # Safe / Risky Tiering
//!
//! Heuristic partition of the attribute pool. "Safe" attributes are the
//! ones whose cells almost always have several solutions against any other
//! safe attribute; everything else is risky and is only offered to the
//! third slot of each axis.

use crate::attribute::{Attribute, AttributeKind};

/// Nationalities with deep enough player pools to pair safely
pub const SAFE_NATIONALITIES: [&str; 10] = [
    "ESP", "USA", "SRB", "SUI", "GBR", "GER", "FRA", "ARG", "RUS", "SWE",
];

/// The four majors, safe as win attributes
pub const GRAND_SLAM_EVENTS: [&str; 4] = [
    "australian-open",
    "roland-garros",
    "wimbledon",
    "us-open",
];

/// Whether an attribute belongs to the safe partition
pub fn is_safe(attr: &Attribute) -> bool {
    match attr.kind {
        AttributeKind::DecadeBand | AttributeKind::RankMilestone => true,
        AttributeKind::Nationality => SAFE_NATIONALITIES.contains(&attr.value.as_str()),
        AttributeKind::TournamentWin => GRAND_SLAM_EVENTS.contains(&attr.value.as_str()),
        AttributeKind::Handedness | AttributeKind::Tag => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attribute::{Attribute, AttributeKind};

    #[test]
    fn test_decades_and_milestones_are_safe() {
        assert!(is_safe(&Attribute::new(AttributeKind::DecadeBand, "1990", "1990s", "")));
        assert!(is_safe(&Attribute::new(AttributeKind::RankMilestone, "10", "Top 10", "")));
    }

    #[test]
    fn test_only_curated_nationalities_are_safe() {
        assert!(is_safe(&Attribute::new(AttributeKind::Nationality, "ESP", "ESP", "")));
        assert!(!is_safe(&Attribute::new(AttributeKind::Nationality, "LUX", "LUX", "")));
    }

    #[test]
    fn test_only_majors_are_safe_wins() {
        assert!(is_safe(&Attribute::new(AttributeKind::TournamentWin, "wimbledon", "", "")));
        assert!(!is_safe(&Attribute::new(AttributeKind::TournamentWin, "miami", "", "")));
    }

    #[test]
    fn test_tags_and_handedness_are_risky() {
        assert!(!is_safe(&Attribute::new(AttributeKind::Tag, "davis-cup", "", "")));
        assert!(!is_safe(&Attribute::new(AttributeKind::Handedness, "left", "", "")));
    }
}
