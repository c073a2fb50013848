//! Template HTTP Routes
//!
//! Authoring surface for curated templates: draft CRUD, publish and
//! unpublish transitions, and standalone validation. Authorization is
//! mounted outside this router by the deployment.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{delete, get, patch, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::attribute::Attribute;
use crate::template::{
    Template, TemplateDraft, TemplateError, TemplateFilter, TemplateService, TemplateUpdate,
};
use crate::validator::ValidationSummary;

// ==================
// Shared State
// ==================

/// Template state shared across handlers
pub struct TemplateState {
    pub service: TemplateService,
}

impl TemplateState {
    pub fn new(service: TemplateService) -> Self {
        Self { service }
    }
}

// ==================
// Request/Response Types
// ==================

#[derive(Debug, Serialize)]
pub struct TemplateListResponse {
    pub templates: Vec<Template>,
    pub total: usize,
}

#[derive(Debug, Deserialize)]
pub struct ValidateRequest {
    pub rows: Vec<Attribute>,
    pub cols: Vec<Attribute>,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

fn template_error_response(err: TemplateError) -> (StatusCode, Json<ErrorResponse>) {
    let status = match &err {
        TemplateError::NotFound { .. } => StatusCode::NOT_FOUND,
        TemplateError::Immutable { .. }
        | TemplateError::AlreadyPublished { .. }
        | TemplateError::NotPublished { .. }
        | TemplateError::Conflict { .. } => StatusCode::CONFLICT,
        TemplateError::NotScheduled { .. }
        | TemplateError::ValidationFailed { .. }
        | TemplateError::Malformed(_) => StatusCode::UNPROCESSABLE_ENTITY,
        TemplateError::Storage(_) | TemplateError::Cache(_) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };
    (
        status,
        Json(ErrorResponse {
            error: err.to_string(),
            code: status.as_u16(),
        }),
    )
}

// ==================
// Template Routes
// ==================

/// Create template routes
pub fn template_routes(state: Arc<TemplateState>) -> Router {
    Router::new()
        .route("/", post(create_handler))
        .route("/", get(list_handler))
        .route("/validate", post(validate_handler))
        .route("/{id}", get(get_handler))
        .route("/{id}", patch(update_handler))
        .route("/{id}", delete(delete_handler))
        .route("/{id}/publish", post(publish_handler))
        .route("/{id}/unpublish", post(unpublish_handler))
        .with_state(state)
}

async fn create_handler(
    State(state): State<Arc<TemplateState>>,
    Json(draft): Json<TemplateDraft>,
) -> Result<(StatusCode, Json<Template>), (StatusCode, Json<ErrorResponse>)> {
    let template = state
        .service
        .create(draft)
        .map_err(template_error_response)?;
    Ok((StatusCode::CREATED, Json(template)))
}

async fn list_handler(
    State(state): State<Arc<TemplateState>>,
    Query(filter): Query<TemplateFilter>,
) -> Result<Json<TemplateListResponse>, (StatusCode, Json<ErrorResponse>)> {
    // Total counts every match, not just the returned page
    let total = state
        .service
        .count(filter)
        .map_err(template_error_response)?;
    let templates = state
        .service
        .list(filter)
        .map_err(template_error_response)?;
    Ok(Json(TemplateListResponse { templates, total }))
}

async fn get_handler(
    State(state): State<Arc<TemplateState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<Template>, (StatusCode, Json<ErrorResponse>)> {
    let template = state.service.get(id).map_err(template_error_response)?;
    Ok(Json(template))
}

async fn update_handler(
    State(state): State<Arc<TemplateState>>,
    Path(id): Path<Uuid>,
    Json(update): Json<TemplateUpdate>,
) -> Result<Json<Template>, (StatusCode, Json<ErrorResponse>)> {
    let template = state
        .service
        .update(id, update)
        .map_err(template_error_response)?;
    Ok(Json(template))
}

async fn delete_handler(
    State(state): State<Arc<TemplateState>>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, (StatusCode, Json<ErrorResponse>)> {
    state.service.delete(id).map_err(template_error_response)?;
    Ok(StatusCode::NO_CONTENT)
}

async fn publish_handler(
    State(state): State<Arc<TemplateState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<Template>, (StatusCode, Json<ErrorResponse>)> {
    let template = state
        .service
        .publish(id)
        .await
        .map_err(template_error_response)?;
    Ok(Json(template))
}

async fn unpublish_handler(
    State(state): State<Arc<TemplateState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<Template>, (StatusCode, Json<ErrorResponse>)> {
    let template = state
        .service
        .unpublish(id)
        .map_err(template_error_response)?;
    Ok(Json(template))
}

async fn validate_handler(
    State(state): State<Arc<TemplateState>>,
    Json(request): Json<ValidateRequest>,
) -> Result<Json<ValidationSummary>, (StatusCode, Json<ErrorResponse>)> {
    let summary = state
        .service
        .preview(request.rows, request.cols)
        .await
        .map_err(template_error_response)?;
    Ok(Json(summary))
}
