use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Serialize, Serializer};
use thiserror::Error;

use crate::model::TypeExpr;

/// Canonical reference to a type: defining package, type name, and whether it
/// is passed by pointer.
///
/// Identity is the canonical string (`*pkg.Name` or `pkg.Name`), so a pointer
/// and a value of the same type are distinct.
#[derive(Debug, Clone)]
pub struct Identifier {
    scope: String,
    name: String,
    is_indirect: bool,
    key: String,
}

/// A type expression that cannot be wired.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unsupported type shape `{0}`")]
pub struct UnsupportedShape(pub String);

impl Identifier {
    pub fn new(scope: impl Into<String>, name: impl Into<String>, is_indirect: bool) -> Self {
        let scope = scope.into();
        let name = name.into();
        let key = format!("{}{}.{}", if is_indirect { "*" } else { "" }, scope, name);
        Self { scope, name, is_indirect, key }
    }

    /// Build an identifier from a type expression found in `scope`.
    ///
    /// Only bare names and pointers to bare names are accepted.
    pub fn parse(expr: &TypeExpr, scope: &str) -> Result<Self, UnsupportedShape> {
        match expr {
            TypeExpr::Plain(name) if is_bare_name(name) => Ok(Self::new(scope, name, false)),
            TypeExpr::Indirect(name) if is_bare_name(name) => Ok(Self::new(scope, name, true)),
            other => Err(UnsupportedShape(other.source_text())),
        }
    }

    pub fn scope(&self) -> &str {
        &self.scope
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_indirect(&self) -> bool {
        self.is_indirect
    }

    /// Canonical string form; the key used by the registry and resolver.
    pub fn as_str(&self) -> &str {
        &self.key
    }
}

fn is_bare_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first == '_' || first.is_alphabetic() => {
            chars.all(|c| c == '_' || c.is_alphanumeric())
        }
        _ => false,
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.key)
    }
}

impl PartialEq for Identifier {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for Identifier {}

impl Hash for Identifier {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key.hash(state);
    }
}

impl Serialize for Identifier {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.key)
    }
}
