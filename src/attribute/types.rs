//! # Attribute Descriptors
//!
//! An attribute is an immutable, independently checkable predicate
//! descriptor. The `value` field is the raw predicate parameter; what it
//! means depends on the kind (nationality code, catalog event id, decade
//! start year, handedness, rank threshold, or tag).

use serde::{Deserialize, Serialize};

/// The fixed enumeration of attribute kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttributeKind {
    /// Identity group: a player has exactly one nationality
    Nationality,
    /// Won a specific catalog event at least once
    TournamentWin,
    /// Active period overlaps a decade window
    DecadeBand,
    /// Handedness (two mutually exclusive values)
    Handedness,
    /// Ever reached a ranking at or below a threshold
    RankMilestone,
    /// Carries a free-form achievement tag
    Tag,
}

impl AttributeKind {
    /// Stable string used in derived attribute ids
    pub fn as_str(&self) -> &'static str {
        match self {
            AttributeKind::Nationality => "nationality",
            AttributeKind::TournamentWin => "tournament_win",
            AttributeKind::DecadeBand => "decade_band",
            AttributeKind::Handedness => "handedness",
            AttributeKind::RankMilestone => "rank_milestone",
            AttributeKind::Tag => "tag",
        }
    }
}

/// Immutable axis-value descriptor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute {
    /// Predicate family
    pub kind: AttributeKind,

    /// Stable id derived from kind + value
    pub id: String,

    /// Short label shown on the axis
    pub label: String,

    /// Longer explanation shown on hover/help
    pub description: String,

    /// Raw predicate parameter
    pub value: String,
}

impl Attribute {
    /// Create an attribute with its id derived from kind and value
    pub fn new(
        kind: AttributeKind,
        value: impl Into<String>,
        label: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        let value = value.into();
        Self {
            id: format!("{}:{}", kind.as_str(), value),
            kind,
            label: label.into(),
            description: description.into(),
            value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_derivation_is_stable() {
        let a = Attribute::new(AttributeKind::Nationality, "ESP", "Spain", "Spanish player");
        let b = Attribute::new(AttributeKind::Nationality, "ESP", "Spain", "Spanish player");
        assert_eq!(a.id, "nationality:ESP");
        assert_eq!(a, b);
    }

    #[test]
    fn test_ids_differ_across_kinds_with_same_value() {
        let a = Attribute::new(AttributeKind::Tag, "1", "t", "");
        let b = Attribute::new(AttributeKind::RankMilestone, "1", "r", "");
        assert_ne!(a.id, b.id);
    }
}
