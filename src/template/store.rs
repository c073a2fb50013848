//! # Template Store
//!
//! Persistence contract for templates plus the in-memory implementation
//! used by tests and the CLI demo. The published-date uniqueness invariant
//! is enforced by `publish`, which re-checks the date under the same write
//! lock that flips the flag.

use std::collections::HashMap;
use std::sync::RwLock;

use chrono::NaiveDate;
use uuid::Uuid;

use super::errors::{TemplateError, TemplateResult};
use super::types::{Template, TemplateFilter};

/// Template persistence contract
pub trait TemplateStore: Send + Sync {
    /// Persist a new template
    fn insert(&self, template: &Template) -> TemplateResult<()>;

    /// Fetch a template by id
    fn get(&self, id: Uuid) -> TemplateResult<Option<Template>>;

    /// List templates matching the filter, newest first
    fn list(&self, filter: TemplateFilter) -> TemplateResult<Vec<Template>>;

    /// Number of templates matching the filter, ignoring pagination
    fn count(&self, filter: TemplateFilter) -> TemplateResult<usize>;

    /// Replace a template by id
    fn update(&self, template: &Template) -> TemplateResult<()>;

    /// Atomically claim a template's scheduled date
    ///
    /// Persists the already-stamped published template only if the stored
    /// copy is still unpublished and no other published template holds the
    /// same date. Check and write happen under one lock, so concurrent
    /// claims for a date cannot both succeed.
    fn publish(&self, template: &Template) -> TemplateResult<()>;

    /// Remove a template by id
    fn delete(&self, id: Uuid) -> TemplateResult<()>;

    /// The published template scheduled for a date, if any
    fn find_published_by_date(&self, date: NaiveDate) -> TemplateResult<Option<Template>>;
}

/// In-memory template store
#[derive(Debug, Default)]
pub struct InMemoryTemplateStore {
    templates: RwLock<HashMap<Uuid, Template>>,
}

impl InMemoryTemplateStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock_err() -> TemplateError {
        TemplateError::Storage("lock poisoned".to_string())
    }
}

impl TemplateStore for InMemoryTemplateStore {
    fn insert(&self, template: &Template) -> TemplateResult<()> {
        let mut templates = self.templates.write().map_err(|_| Self::lock_err())?;
        templates.insert(template.id, template.clone());
        Ok(())
    }

    fn get(&self, id: Uuid) -> TemplateResult<Option<Template>> {
        let templates = self.templates.read().map_err(|_| Self::lock_err())?;
        Ok(templates.get(&id).cloned())
    }

    fn list(&self, filter: TemplateFilter) -> TemplateResult<Vec<Template>> {
        let templates = self.templates.read().map_err(|_| Self::lock_err())?;
        let mut matching: Vec<Template> = templates
            .values()
            .filter(|t| filter.published.map_or(true, |p| t.published == p))
            .cloned()
            .collect();
        matching.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        let page: Vec<Template> = matching.into_iter().skip(filter.offset).collect();
        if filter.limit == 0 {
            Ok(page)
        } else {
            Ok(page.into_iter().take(filter.limit).collect())
        }
    }

    fn count(&self, filter: TemplateFilter) -> TemplateResult<usize> {
        let templates = self.templates.read().map_err(|_| Self::lock_err())?;
        Ok(templates
            .values()
            .filter(|t| filter.published.map_or(true, |p| t.published == p))
            .count())
    }

    fn update(&self, template: &Template) -> TemplateResult<()> {
        let mut templates = self.templates.write().map_err(|_| Self::lock_err())?;
        if !templates.contains_key(&template.id) {
            return Err(TemplateError::NotFound { id: template.id });
        }
        templates.insert(template.id, template.clone());
        Ok(())
    }

    fn publish(&self, template: &Template) -> TemplateResult<()> {
        let date = template
            .scheduled_date
            .ok_or(TemplateError::NotScheduled { id: template.id })?;
        let mut templates = self.templates.write().map_err(|_| Self::lock_err())?;

        if let Some(existing) = templates
            .values()
            .find(|t| t.id != template.id && t.published && t.scheduled_date == Some(date))
        {
            return Err(TemplateError::Conflict {
                date,
                conflicting_title: existing.title.clone(),
            });
        }
        match templates.get(&template.id) {
            None => return Err(TemplateError::NotFound { id: template.id }),
            Some(current) if current.published => {
                return Err(TemplateError::AlreadyPublished { id: template.id })
            }
            Some(_) => {}
        }

        templates.insert(template.id, template.clone());
        Ok(())
    }

    fn delete(&self, id: Uuid) -> TemplateResult<()> {
        let mut templates = self.templates.write().map_err(|_| Self::lock_err())?;
        if templates.remove(&id).is_none() {
            return Err(TemplateError::NotFound { id });
        }
        Ok(())
    }

    fn find_published_by_date(&self, date: NaiveDate) -> TemplateResult<Option<Template>> {
        let templates = self.templates.read().map_err(|_| Self::lock_err())?;
        Ok(templates
            .values()
            .find(|t| t.published && t.scheduled_date == Some(date))
            .cloned())
    }
}
