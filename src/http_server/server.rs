//! # HTTP Server
//!
//! Combines the grid and template routers into one Axum server.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{http::StatusCode, response::IntoResponse, routing::get, Json, Router};
use serde::Serialize;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use super::config::HttpServerConfig;
use super::grid_routes::{grid_routes, GridState};
use super::template_routes::{template_routes, TemplateState};

/// HTTP server for the grid API
pub struct HttpServer {
    config: HttpServerConfig,
    router: Router,
}

impl HttpServer {
    /// Create a server over pre-wired states
    pub fn new(
        config: HttpServerConfig,
        grid_state: Arc<GridState>,
        template_state: Arc<TemplateState>,
    ) -> Self {
        let router = Self::build_router(&config, grid_state, template_state);
        Self { config, router }
    }

    fn build_router(
        config: &HttpServerConfig,
        grid_state: Arc<GridState>,
        template_state: Arc<TemplateState>,
    ) -> Router {
        let cors = if config.cors_origins.is_empty() {
            // Permissive for development
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        } else {
            let origins: Vec<_> = config
                .cors_origins
                .iter()
                .filter_map(|s| s.parse().ok())
                .collect();
            CorsLayer::new()
                .allow_origin(AllowOrigin::list(origins))
                .allow_methods(Any)
                .allow_headers(Any)
        };

        Router::new()
            .route("/health", get(health_handler))
            .nest("/grid", grid_routes(grid_state))
            .nest("/templates", template_routes(template_state))
            .layer(cors)
    }

    /// The socket address string
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// The router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Start serving (runs until the process exits)
    pub async fn start(self) -> Result<(), std::io::Error> {
        let addr: SocketAddr = self
            .config
            .socket_addr()
            .parse()
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;
        let listener = TcpListener::bind(addr).await?;
        axum::serve(listener, self.router).await
    }
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

async fn health_handler() -> impl IntoResponse {
    let response = HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };
    (StatusCode::OK, Json(response))
}
