//! godi-core
//!
//! Core library for static dependency-injection wiring of Go packages.
//!
//! This crate defines the identifier/service model, the Go declaration scanner,
//! the analysis core (service extraction, registry, dependency resolution), the
//! code emitter, and configuration loading.
//!
//! The goal is to keep all substantive logic here so it is fully testable and
//! reusable from multiple frontends (CLI, `go generate` wrappers, etc.).

pub mod model;
pub mod analysis;
pub mod scan;
pub mod emit;
pub mod config;
pub mod services;

/// Returns the library version as encoded at compile time.
///
/// Useful for tests and for frontends to report consistent version info.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
