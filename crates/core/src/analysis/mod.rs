//! Analysis core: service extraction, registration, and dependency resolution.
//!
//! Data flows one way: declarations are extracted into services, services are
//! registered under their canonical identifier, and the registry is resolved
//! into a construction order. Each stage collects its errors so a single run
//! can report everything that is wrong with the input.

mod error;
mod extract;
mod registry;
mod resolve;

pub use error::{Diagnostics, TypePosition, WiringError};
pub use extract::{extract, extract_all, is_exported, is_service, Extraction, SERVICE_MARKER};
pub use registry::ServiceRegistry;
pub use resolve::resolve;
