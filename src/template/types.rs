//! # Template Model
//!
//! A curated grid with a draft/published lifecycle. Drafts are mutable;
//! publishing freezes the template and claims its scheduled date.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::attribute::Attribute;
use crate::grid::{Grid, GridResult};

/// A curated, persisted grid
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Template {
    /// Stable identifier
    pub id: Uuid,

    /// Authoring title, shown to players on curated days
    pub title: String,

    /// Optional longer description
    pub description: Option<String>,

    /// Row attributes, exactly three
    pub rows: Vec<Attribute>,

    /// Column attributes, exactly three
    pub cols: Vec<Attribute>,

    /// Date the template is meant to run; None while drafting
    pub scheduled_date: Option<NaiveDate>,

    /// Published templates are immutable and own their date
    pub published: bool,

    /// Cells with at least one known solution, stamped at publish time
    pub validated_cell_count: Option<usize>,

    /// Smallest per-cell solution count, stamped at publish time
    pub min_cell_solutions: Option<usize>,

    /// Audit: creation time
    pub created_at: DateTime<Utc>,

    /// Audit: last modification time
    pub updated_at: DateTime<Utc>,
}

impl Template {
    /// Materialize the template's grid, re-checking structural invariants
    pub fn grid(&self) -> GridResult<Grid> {
        Grid::new(self.rows.clone(), self.cols.clone())
    }
}

/// Fields accepted when creating a draft
#[derive(Debug, Clone, Deserialize)]
pub struct TemplateDraft {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub rows: Vec<Attribute>,
    pub cols: Vec<Attribute>,
    #[serde(default)]
    pub scheduled_date: Option<NaiveDate>,
}

/// Partial update applied to a draft
///
/// `None` means "leave unchanged"; `clear_scheduled_date` unsets the date
/// explicitly since `None` cannot express that.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TemplateUpdate {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub rows: Option<Vec<Attribute>>,
    #[serde(default)]
    pub cols: Option<Vec<Attribute>>,
    #[serde(default)]
    pub scheduled_date: Option<NaiveDate>,
    #[serde(default)]
    pub clear_scheduled_date: bool,
}

/// Filter for template listings
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct TemplateFilter {
    /// Some(true) = published only, Some(false) = drafts only
    #[serde(default)]
    pub published: Option<bool>,

    /// Pagination offset
    #[serde(default)]
    pub offset: usize,

    /// Page size; 0 means no limit
    #[serde(default)]
    pub limit: usize,
}
