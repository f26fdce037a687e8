use serde::Serialize;

use crate::model::{Identifier, SourceLocation};

/// A discovered constructor: what it produces and what it needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Service {
    /// Produced identifier; the registry key.
    pub identifier: Identifier,
    /// Constructor name, used verbatim in generated calls.
    pub factory_name: String,
    /// One identifier per constructor argument, in call order.
    pub parameters: Vec<Identifier>,
    #[serde(skip_serializing_if = "is_unknown_location")]
    pub location: SourceLocation,
}

fn is_unknown_location(location: &SourceLocation) -> bool {
    location.file.is_empty()
}

impl Service {
    pub fn new(
        identifier: Identifier,
        factory_name: impl Into<String>,
        parameters: Vec<Identifier>,
    ) -> Self {
        Self {
            identifier,
            factory_name: factory_name.into(),
            parameters,
            location: SourceLocation::default(),
        }
    }

    pub fn with_location(mut self, location: SourceLocation) -> Self {
        self.location = location;
        self
    }

    /// Canonical key of the produced identifier.
    pub fn key(&self) -> &str {
        self.identifier.as_str()
    }
}
