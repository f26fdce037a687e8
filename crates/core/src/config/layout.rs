use std::path::{Path, PathBuf};

use crate::config::GeneratorConfig;

/// Config file names looked up in the project root, in priority order.
pub const CONFIG_FILE_NAMES: &[&str] = &["godi.yaml", "godi.yml", "godi.json"];

/// Logical layout of a wiring project on disk.
///
/// This is derived from a chosen root path and config. It does *not* perform
/// any IO itself.
#[derive(Debug, Clone)]
pub struct GeneratorLayout {
    /// Root directory of the project.
    pub root: PathBuf,
    /// Package directory that gets scanned.
    pub source_dir: PathBuf,
    /// Generated Go file.
    pub output_path: PathBuf,
    /// Default location of the config file (`godi.yaml`).
    pub config_path: PathBuf,
}

impl GeneratorLayout {
    /// Compute the layout for a project rooted at `root`.
    ///
    /// Absolute `source_dir` / `output` values in the config are kept as is.
    pub fn new(root: impl AsRef<Path>, config: &GeneratorConfig) -> Self {
        let root = root.as_ref().to_path_buf();
        let source_dir = root.join(&config.source_dir);
        let output_path = source_dir.join(&config.output);
        let config_path = root.join(CONFIG_FILE_NAMES[0]);
        Self { root, source_dir, output_path, config_path }
    }

    /// Output path relative to the root when possible, for display.
    pub fn output_relative_string(&self) -> String {
        match self.output_path.strip_prefix(&self.root) {
            Ok(rel) => rel.to_string_lossy().to_string(),
            Err(_) => self.output_path.to_string_lossy().to_string(),
        }
    }
}
