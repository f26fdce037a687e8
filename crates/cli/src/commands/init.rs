use std::fs;

use anyhow::{Context, Result};
use godi_core::config::{write_default_config, GeneratorConfig, GeneratorLayout};

use crate::resolve_root;

/// Write a default `godi.yaml` into `root`, creating the directory if needed.
pub fn init_command(root: &str, force: bool) -> Result<()> {
    let root_path = resolve_root(root)?;
    fs::create_dir_all(&root_path)
        .with_context(|| format!("Failed to create project root: {}", root_path.display()))?;

    let layout = GeneratorLayout::new(&root_path, &GeneratorConfig::default());
    write_default_config(&layout.config_path, force)?;

    println!("Initialized godi config:");
    println!("  Config: {}", layout.config_path.display());
    println!("  Source dir: {}", layout.source_dir.display());
    println!("  Output: {}", layout.output_path.display());
    Ok(())
}
