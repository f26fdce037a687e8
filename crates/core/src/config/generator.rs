use serde::{Deserialize, Serialize};

/// Serializable settings for one package's wiring.
///
/// Every field has a default, so an empty file (or no file) is valid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Package directory to scan, relative to the project root.
    pub source_dir: String,
    /// Generated file name, relative to the source dir.
    pub output: String,
    /// Name of the generated struct holding every service.
    pub container: String,
    /// Name of the generated function building the container.
    pub constructor: String,
    /// Whether `_test.go` files take part in the scan.
    pub include_tests: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            source_dir: ".".to_string(),
            output: "services.go".to_string(),
            container: "Container".to_string(),
            constructor: "NewContainer".to_string(),
            include_tests: false,
        }
    }
}

impl GeneratorConfig {
    /// Default configuration pointing at a specific package directory.
    pub fn for_source_dir(source_dir: impl Into<String>) -> Self {
        Self { source_dir: source_dir.into(), ..Self::default() }
    }
}
