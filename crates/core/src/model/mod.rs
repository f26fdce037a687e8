//! Core data model: type identifiers, discovered services, and the declaration
//! shape handed over by scanners.

mod declaration;
mod identifier;
mod service;

pub use declaration::{Declaration, SourceLocation, TypeExpr};
pub use identifier::{Identifier, UnsupportedShape};
pub use service::Service;
