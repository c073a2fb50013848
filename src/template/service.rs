//! # Template Service
//!
//! Authoring operations over the template store: draft CRUD, the publish
//! and unpublish transitions, and standalone grid preview. Authorization
//! is the caller's problem; this layer assumes the caller is allowed to
//! author.
//!
//! Publishing coordinates with the cache: claiming a date deletes that
//! date's cache entry so the next resolution serves the template instead
//! of a stale generated grid. Unpublishing does the same in reverse.

use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use crate::attribute::Attribute;
use crate::cache::CacheStore;
use crate::observability::{Logger, Severity};
use crate::validator::{CellTier, GridValidator, ValidationStatus, ValidationSummary};

use super::errors::{TemplateError, TemplateResult};
use super::store::TemplateStore;
use super::types::{Template, TemplateDraft, TemplateFilter, TemplateUpdate};

/// Curated-template authoring operations
pub struct TemplateService {
    store: Arc<dyn TemplateStore>,
    cache: Arc<dyn CacheStore>,
    validator: GridValidator,
}

impl TemplateService {
    /// Wire the service over its stores and validator
    pub fn new(
        store: Arc<dyn TemplateStore>,
        cache: Arc<dyn CacheStore>,
        validator: GridValidator,
    ) -> Self {
        Self {
            store,
            cache,
            validator,
        }
    }

    /// Create a draft template
    ///
    /// The attribute axes must already form a structurally valid grid;
    /// malformed drafts are rejected here, at the boundary.
    pub fn create(&self, draft: TemplateDraft) -> TemplateResult<Template> {
        // Construction check only; satisfiability is the preview's job
        crate::grid::Grid::new(draft.rows.clone(), draft.cols.clone())?;

        let now = Utc::now();
        let template = Template {
            id: Uuid::new_v4(),
            title: draft.title,
            description: draft.description,
            rows: draft.rows,
            cols: draft.cols,
            scheduled_date: draft.scheduled_date,
            published: false,
            validated_cell_count: None,
            min_cell_solutions: None,
            created_at: now,
            updated_at: now,
        };
        self.store.insert(&template)?;
        Ok(template)
    }

    /// Fetch a template
    pub fn get(&self, id: Uuid) -> TemplateResult<Template> {
        self.store
            .get(id)?
            .ok_or(TemplateError::NotFound { id })
    }

    /// List templates
    pub fn list(&self, filter: TemplateFilter) -> TemplateResult<Vec<Template>> {
        self.store.list(filter)
    }

    /// Count templates matching the filter, ignoring pagination
    pub fn count(&self, filter: TemplateFilter) -> TemplateResult<usize> {
        self.store.count(filter)
    }

    /// Apply a partial update to a draft
    pub fn update(&self, id: Uuid, update: TemplateUpdate) -> TemplateResult<Template> {
        let mut template = self.get(id)?;
        if template.published {
            return Err(TemplateError::Immutable { id });
        }

        if let Some(title) = update.title {
            template.title = title;
        }
        if let Some(description) = update.description {
            template.description = Some(description);
        }
        if let Some(rows) = update.rows {
            template.rows = rows;
        }
        if let Some(cols) = update.cols {
            template.cols = cols;
        }
        if update.clear_scheduled_date {
            template.scheduled_date = None;
        } else if let Some(date) = update.scheduled_date {
            template.scheduled_date = Some(date);
        }

        // Re-check the axes before anything is persisted
        template.grid()?;
        template.updated_at = Utc::now();
        self.store.update(&template)?;
        Ok(template)
    }

    /// Delete a draft
    pub fn delete(&self, id: Uuid) -> TemplateResult<()> {
        let template = self.get(id)?;
        if template.published {
            return Err(TemplateError::Immutable { id });
        }
        self.store.delete(id)
    }

    /// Publish a template for its scheduled date
    ///
    /// Rejected when already published, unscheduled, conflicting with
    /// another published template on the same date, or failing validation
    /// with impossible cells. On success the date's cache entry is
    /// deleted so resolution picks the template up immediately.
    pub async fn publish(&self, id: Uuid) -> TemplateResult<Template> {
        let mut template = self.get(id)?;
        if template.published {
            return Err(TemplateError::AlreadyPublished { id });
        }
        let date = template
            .scheduled_date
            .ok_or(TemplateError::NotScheduled { id })?;

        // Fast-path rejection before the expensive validation; the store
        // re-checks the date under its write lock when the claim lands
        if let Some(existing) = self.store.find_published_by_date(date)? {
            return Err(TemplateError::Conflict {
                date,
                conflicting_title: existing.title,
            });
        }

        let grid = template.grid()?;
        let summary = self.validator.validate(&grid).await;
        if summary.status == ValidationStatus::Error {
            return Err(TemplateError::ValidationFailed {
                id,
                impossible_cells: summary.impossible_count,
            });
        }

        template.published = true;
        template.validated_cell_count = Some(
            summary
                .cells
                .iter()
                .filter(|c| c.tier != CellTier::Impossible)
                .count(),
        );
        template.min_cell_solutions = Some(summary.min_count);
        template.updated_at = Utc::now();
        self.store.publish(&template)?;
        self.cache.delete(date)?;

        Logger::log(
            Severity::Info,
            "template_published",
            &[("date", &date.to_string()), ("id", &id.to_string())],
        );
        Ok(template)
    }

    /// Reopen a published template as a draft
    pub fn unpublish(&self, id: Uuid) -> TemplateResult<Template> {
        let mut template = self.get(id)?;
        if !template.published {
            return Err(TemplateError::NotPublished { id });
        }

        template.published = false;
        template.updated_at = Utc::now();
        self.store.update(&template)?;
        if let Some(date) = template.scheduled_date {
            self.cache.delete(date)?;
        }

        Logger::log(
            Severity::Info,
            "template_unpublished",
            &[("id", &id.to_string())],
        );
        Ok(template)
    }

    /// Validate a candidate axis pair without persisting anything
    pub async fn preview(
        &self,
        rows: Vec<Attribute>,
        cols: Vec<Attribute>,
    ) -> TemplateResult<ValidationSummary> {
        let grid = crate::grid::Grid::new(rows, cols)?;
        Ok(self.validator.validate(&grid).await)
    }
}
