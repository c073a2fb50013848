//! # Observability
//!
//! Structured JSON logging for the generation pipeline. Read-only: nothing
//! here feeds back into selection or validation, and there are no
//! background threads.

mod logger;

pub use logger::{Logger, Severity};
