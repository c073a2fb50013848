//! # HTTP Server Module
//!
//! Axum-based API surface consumed by the presentation layer.
//!
//! # Endpoints
//!
//! - `/health` - Health check
//! - `/grid/*` - Grid resolution and suggestion
//! - `/templates/*` - Curated template authoring

pub mod config;
pub mod grid_routes;
pub mod server;
pub mod template_routes;

pub use config::HttpServerConfig;
pub use grid_routes::GridState;
pub use server::HttpServer;
pub use template_routes::TemplateState;
