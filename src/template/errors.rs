//! # Template Errors
//!
//! Caller-visible rejections from the authoring surface. Every rejection
//! leaves the stores untouched: no half-published template, no partially
//! applied update.

use chrono::NaiveDate;
use thiserror::Error;
use uuid::Uuid;

use crate::cache::CacheError;
use crate::grid::GridError;

/// Result type for template operations
pub type TemplateResult<T> = Result<T, TemplateError>;

/// Errors raised by template authoring operations
#[derive(Debug, Clone, Error)]
pub enum TemplateError {
    /// No template with that id
    #[error("Template {id} not found")]
    NotFound { id: Uuid },

    /// Update or delete attempted on a published template
    #[error("Template {id} is published and immutable")]
    Immutable { id: Uuid },

    /// Publish attempted on an already-published template
    #[error("Template {id} is already published")]
    AlreadyPublished { id: Uuid },

    /// Unpublish attempted on a draft
    #[error("Template {id} is not published")]
    NotPublished { id: Uuid },

    /// Publish attempted without a scheduled date
    #[error("Template {id} has no scheduled date")]
    NotScheduled { id: Uuid },

    /// Another published template already holds the date
    #[error("Date {date} is already taken by published template \"{conflicting_title}\"")]
    Conflict {
        date: NaiveDate,
        conflicting_title: String,
    },

    /// Publish gate: the grid has impossible cells
    #[error("Template {id} failed validation with {impossible_cells} impossible cell(s)")]
    ValidationFailed { id: Uuid, impossible_cells: usize },

    /// The template's attributes do not form a valid grid
    #[error(transparent)]
    Malformed(#[from] GridError),

    /// Underlying storage failed
    #[error("Template storage error: {0}")]
    Storage(String),

    /// Cache coordination failed while publishing or unpublishing
    #[error(transparent)]
    Cache(#[from] CacheError),
}
