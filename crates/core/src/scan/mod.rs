//! Declaration scanners.
//!
//! A scanner turns a package directory into the declarations the analysis
//! core consumes. The Go scanner is the real implementation; the static
//! scanner serves tests and callers that already hold declarations.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::model::Declaration;

mod go;

pub use go::GoScanner;

#[derive(Debug, Error)]
pub enum ScanError {
    #[error("Failed to read {}: {source}", .path.display())]
    Io { path: PathBuf, source: std::io::Error },
    #[error("Failed to load the Go grammar: {0}")]
    Language(#[from] tree_sitter::LanguageError),
    #[error("Failed to parse {}", .0.display())]
    Parse(PathBuf),
    #[error("{}:{line}: syntax error", .path.display())]
    Syntax { path: PathBuf, line: usize },
    #[error("{} has no package clause", .0.display())]
    MissingPackage(PathBuf),
    #[error("{} declares package {found}, expected {expected}", .path.display())]
    MixedPackages { path: PathBuf, found: String, expected: String },
    #[error("No Go source files found in {}", .0.display())]
    NoSources(PathBuf),
}

/// Declarations of one package, in scan order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScannedPackage {
    pub package: String,
    pub declarations: Vec<Declaration>,
}

/// Source of declarations for a package directory.
pub trait DeclarationScanner {
    fn scan(&self, dir: &Path) -> Result<ScannedPackage, ScanError>;
    fn name(&self) -> &'static str;
}

/// Scanner that hands back a fixed set of declarations regardless of `dir`.
#[derive(Debug, Clone)]
pub struct StaticScanner {
    package: ScannedPackage,
}

impl StaticScanner {
    pub fn new(package: impl Into<String>, declarations: Vec<Declaration>) -> Self {
        Self { package: ScannedPackage { package: package.into(), declarations } }
    }
}

impl DeclarationScanner for StaticScanner {
    fn scan(&self, _dir: &Path) -> Result<ScannedPackage, ScanError> {
        Ok(self.package.clone())
    }

    fn name(&self) -> &'static str {
        "static"
    }
}
