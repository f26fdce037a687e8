use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};

use crate::config::{GeneratorConfig, CONFIG_FILE_NAMES};

/// First existing config file in `root`, if any.
pub fn find_config(root: &Path) -> Option<PathBuf> {
    CONFIG_FILE_NAMES.iter().map(|name| root.join(name)).find(|path| path.is_file())
}

/// Parse a config file, choosing JSON or YAML by extension.
pub fn read_config_file(path: &Path) -> Result<GeneratorConfig> {
    let body = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config at {}", path.display()))?;
    let config = if path.extension().and_then(|e| e.to_str()) == Some("json") {
        serde_json::from_str(&body).context("Failed to parse config JSON")?
    } else if body.trim().is_empty() {
        GeneratorConfig::default()
    } else {
        serde_yaml::from_str(&body).context("Failed to parse config YAML")?
    };
    Ok(config)
}

/// Load the explicit config if given, else the one found in `root`, else defaults.
pub fn load_config(root: &Path, explicit: Option<&Path>) -> Result<GeneratorConfig> {
    match explicit {
        Some(path) => read_config_file(path),
        None => match find_config(root) {
            Some(path) => read_config_file(&path),
            None => Ok(GeneratorConfig::default()),
        },
    }
}

/// Write the default config as YAML to `path`; refuses to overwrite unless `force`.
pub fn write_default_config(path: &Path, force: bool) -> Result<GeneratorConfig> {
    if path.exists() && !force {
        return Err(anyhow!("Config already exists at {} (use --force to overwrite)", path.display()));
    }
    let config = GeneratorConfig::default();
    let yaml = serde_yaml::to_string(&config).context("Failed to serialize config YAML")?;
    std::fs::write(path, yaml)
        .with_context(|| format!("Failed to write config at {}", path.display()))?;
    Ok(config)
}
