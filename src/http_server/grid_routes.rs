//! Grid HTTP Routes
//!
//! The presentation-facing resolution surface: today's grid, any date's
//! grid, and the seed-based suggestion endpoint for debugging.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::resolver::{GridPayload, GridResolver, ResolveError, ResolveOptions, Suggestion};

// ==================
// Shared State
// ==================

/// Grid state shared across handlers
pub struct GridState {
    pub resolver: GridResolver,
}

impl GridState {
    pub fn new(resolver: GridResolver) -> Self {
        Self { resolver }
    }
}

// ==================
// Request/Response Types
// ==================

#[derive(Debug, Deserialize)]
pub struct ResolveQuery {
    #[serde(default)]
    pub force_refresh: bool,
    #[serde(default)]
    pub skip_validation: bool,
    #[serde(default)]
    pub seed: Option<u64>,
}

impl From<ResolveQuery> for ResolveOptions {
    fn from(query: ResolveQuery) -> Self {
        Self {
            force_refresh: query.force_refresh,
            skip_validation: query.skip_validation,
            seed: query.seed,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct SuggestQuery {
    pub seed: u64,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

fn resolve_error_response(err: ResolveError) -> (StatusCode, Json<ErrorResponse>) {
    let status = match &err {
        // No pool means the dataset collaborator is down
        ResolveError::Pool(_) => StatusCode::SERVICE_UNAVAILABLE,
        ResolveError::Grid(_) => StatusCode::UNPROCESSABLE_ENTITY,
        ResolveError::Selector(_) | ResolveError::Cache(_) | ResolveError::Template(_) => {
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
// Grid Routes
// ==================

/// Create grid routes
pub fn grid_routes(state: Arc<GridState>) -> Router {
    Router::new()
        .route("/today", get(today_handler))
        .route("/suggest", get(suggest_handler))
        .route("/{date}", get(date_handler))
        .with_state(state)
}

async fn today_handler(
    State(state): State<Arc<GridState>>,
    Query(query): Query<ResolveQuery>,
) -> Result<Json<GridPayload>, (StatusCode, Json<ErrorResponse>)> {
    let today = Utc::now().date_naive();
    let payload = state
        .resolver
        .resolve(today, query.into())
        .await
        .map_err(resolve_error_response)?;
    Ok(Json(payload))
}

async fn date_handler(
    State(state): State<Arc<GridState>>,
    Path(date): Path<NaiveDate>,
    Query(query): Query<ResolveQuery>,
) -> Result<Json<GridPayload>, (StatusCode, Json<ErrorResponse>)> {
    let payload = state
        .resolver
        .resolve(date, query.into())
        .await
        .map_err(resolve_error_response)?;
    Ok(Json(payload))
}

async fn suggest_handler(
    State(state): State<Arc<GridState>>,
    Query(query): Query<SuggestQuery>,
) -> Result<Json<Suggestion>, (StatusCode, Json<ErrorResponse>)> {
    let suggestion = state
        .resolver
        .suggest(query.seed)
        .await
        .map_err(resolve_error_response)?;
    Ok(Json(suggestion))
}
