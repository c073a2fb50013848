//! matchgrid - A deterministic daily 3x3 matching-grid generator
//!
//! Three row attributes, three column attributes, and a guarantee that
//! every intersection has at least one satisfying player. Resolution runs
//! cache-first, then published templates, then seeded generation.

pub mod attribute;
pub mod cache;
pub mod cli;
pub mod dataset;
pub mod generator;
pub mod grid;
pub mod http_server;
pub mod observability;
pub mod resolver;
pub mod selector;
pub mod template;
pub mod validator;
