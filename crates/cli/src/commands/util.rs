use std::path::Path;

use anyhow::{anyhow, Result};
use godi_core::config::{load_config, GeneratorConfig, GeneratorLayout};
use godi_core::scan::GoScanner;
use godi_core::services::generate::GenerateError;

use crate::resolve_root;

/// Config and layout for one invocation.
#[derive(Debug, Clone)]
pub struct CommandContext {
    pub config: GeneratorConfig,
    pub layout: GeneratorLayout,
}

impl CommandContext {
    /// Resolve `root`, then load the explicit config or the one found there.
    pub fn load(root: &str, config: Option<&Path>) -> Result<Self> {
        let root_path = resolve_root(root)?;
        let config = load_config(&root_path, config)?;
        let layout = GeneratorLayout::new(&root_path, &config);
        Ok(Self { config, layout })
    }

    /// Go scanner honoring the config; the generated file is never scanned.
    pub fn scanner(&self) -> GoScanner {
        GoScanner::new()
            .include_tests(self.config.include_tests)
            .skip_path(&self.layout.output_path)
    }
}

/// Turn a pipeline failure into a CLI error that names the package directory.
pub fn pipeline_error(layout: &GeneratorLayout, err: GenerateError) -> anyhow::Error {
    anyhow!(err).context(format!("Failed to wire {}", layout.source_dir.display()))
}

pub fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
