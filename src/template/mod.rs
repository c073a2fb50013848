//! # Templates
//!
//! Curated grids with a draft/published lifecycle, their persistence
//! contract, and the authoring service.

mod errors;
mod service;
mod store;
mod types;

pub use errors::{TemplateError, TemplateResult};
pub use service::TemplateService;
pub use store::{InMemoryTemplateStore, TemplateStore};
pub use types::{Template, TemplateDraft, TemplateFilter, TemplateUpdate};
