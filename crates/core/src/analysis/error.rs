use std::fmt;

use serde::Serialize;
use thiserror::Error;

use crate::model::SourceLocation;

/// Which part of a constructor signature an unsupported type appeared in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TypePosition {
    Result,
    Parameter(usize),
}

impl fmt::Display for TypePosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypePosition::Result => f.write_str("result"),
            TypePosition::Parameter(index) => write!(f, "parameter {index}"),
        }
    }
}

/// Every way a wiring run can fail on its input.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum WiringError {
    #[error("{}{declaration}: unsupported type shape `{shape}` in {position}", prefix(.location))]
    UnsupportedTypeShape {
        declaration: String,
        position: TypePosition,
        shape: String,
        location: SourceLocation,
    },

    #[error(
        "{}service {factory} must return exactly one value, found {results}",
        prefix(.location)
    )]
    InvalidConstructorShape { factory: String, results: usize, location: SourceLocation },

    /// Tagged constructor whose name is not exported from its package.
    #[error("{}service {factory} is not exportable", prefix(.location))]
    NonExportableService { factory: String, location: SourceLocation },

    #[error("duplicate service {identifier}: provided by both {first} and {second}")]
    DuplicateService { identifier: String, first: String, second: String },

    #[error(
        "service {factory} ({service}) requires {missing} as parameter {position}, \
         but no service provides it"
    )]
    MissingDependency { factory: String, service: String, missing: String, position: usize },

    /// `cycle` repeats its first identifier at the end.
    #[error("cyclic dependency: {}", .cycle.join(" -> "))]
    CyclicDependency { cycle: Vec<String> },
}

fn prefix(location: &SourceLocation) -> String {
    if location.file.is_empty() {
        String::new()
    } else {
        format!("{location}: ")
    }
}

impl WiringError {
    /// Stable machine-readable name of the variant.
    pub fn kind(&self) -> &'static str {
        match self {
            WiringError::UnsupportedTypeShape { .. } => "unsupported_type_shape",
            WiringError::InvalidConstructorShape { .. } => "invalid_constructor_shape",
            WiringError::NonExportableService { .. } => "non_exportable_service",
            WiringError::DuplicateService { .. } => "duplicate_service",
            WiringError::MissingDependency { .. } => "missing_dependency",
            WiringError::CyclicDependency { .. } => "cyclic_dependency",
        }
    }
}

/// All errors collected during one run, in the order they were found.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Diagnostics(Vec<WiringError>);

impl Diagnostics {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn push(&mut self, error: WiringError) {
        self.0.push(error);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, WiringError> {
        self.0.iter()
    }

    pub fn errors(&self) -> &[WiringError] {
        &self.0
    }

    /// `Ok(value)` when nothing was collected, otherwise `Err(self)`.
    pub fn into_result<T>(self, value: T) -> Result<T, Diagnostics> {
        if self.is_empty() {
            Ok(value)
        } else {
            Err(self)
        }
    }
}

impl From<Vec<WiringError>> for Diagnostics {
    fn from(errors: Vec<WiringError>) -> Self {
        Self(errors)
    }
}

impl Extend<WiringError> for Diagnostics {
    fn extend<T: IntoIterator<Item = WiringError>>(&mut self, iter: T) {
        self.0.extend(iter);
    }
}

impl IntoIterator for Diagnostics {
    type Item = WiringError;
    type IntoIter = std::vec::IntoIter<WiringError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a WiringError;
    type IntoIter = std::slice::Iter<'a, WiringError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for Diagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let noun = if self.0.len() == 1 { "error" } else { "errors" };
        write!(f, "wiring failed with {} {noun}:", self.0.len())?;
        for error in &self.0 {
            write!(f, "\n  - {error}")?;
        }
        Ok(())
    }
}

impl std::error::Error for Diagnostics {}
