use std::env;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

pub mod commands;

/// Absolute project root for a `--root` argument.
///
/// Existing paths are canonicalized; anything else is taken relative to the
/// current working directory so `init` can target a directory that does not
/// exist yet.
pub fn resolve_root(root: &str) -> Result<PathBuf> {
    let path = Path::new(root);
    if let Ok(canonical) = path.canonicalize() {
        return Ok(canonical);
    }
    if path.is_absolute() {
        return Ok(path.to_path_buf());
    }
    let cwd = env::current_dir().context("Failed to get current directory")?;
    Ok(cwd.join(path))
}
