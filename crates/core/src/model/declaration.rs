use serde::{Deserialize, Serialize};

/// Structural shape of a type expression as seen by a scanner.
///
/// Only the two shapes a service can be wired through are named; everything
/// else (qualified, generic, slice, map, func, interface types...) is carried
/// as `Other` with its source text for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "shape", content = "text")]
pub enum TypeExpr {
    /// A bare type name, e.g. `Config`.
    Plain(String),
    /// A pointer to a bare type name, e.g. `*Config`.
    Indirect(String),
    /// Any other shape, e.g. `[]string` or `http.Client`.
    Other(String),
}

impl TypeExpr {
    pub fn plain(name: impl Into<String>) -> Self {
        TypeExpr::Plain(name.into())
    }

    pub fn indirect(name: impl Into<String>) -> Self {
        TypeExpr::Indirect(name.into())
    }

    pub fn other(text: impl Into<String>) -> Self {
        TypeExpr::Other(text.into())
    }

    /// Source-like rendering used in error messages.
    pub fn source_text(&self) -> String {
        match self {
            TypeExpr::Plain(name) => name.clone(),
            TypeExpr::Indirect(name) => format!("*{name}"),
            TypeExpr::Other(text) => text.clone(),
        }
    }
}

/// Where a declaration was found.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SourceLocation {
    pub file: String,
    /// 1-based line of the `func` keyword.
    pub line: usize,
}

impl std::fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.file, self.line)
    }
}

/// A function-like declaration plus its attached documentation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Declaration {
    pub name: String,
    /// Package the declaration lives in.
    pub scope: String,
    /// Raw documentation lines, comment leaders included.
    pub doc_lines: Vec<String>,
    pub results: Vec<TypeExpr>,
    pub params: Vec<TypeExpr>,
    #[serde(default)]
    pub location: SourceLocation,
}

impl Declaration {
    pub fn new(name: impl Into<String>, scope: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            scope: scope.into(),
            doc_lines: Vec::new(),
            results: Vec::new(),
            params: Vec::new(),
            location: SourceLocation::default(),
        }
    }

    /// Builder-style helper to attach a documentation line.
    pub fn with_doc(mut self, line: impl Into<String>) -> Self {
        self.doc_lines.push(line.into());
        self
    }

    pub fn with_result(mut self, result: TypeExpr) -> Self {
        self.results.push(result);
        self
    }

    pub fn with_param(mut self, param: TypeExpr) -> Self {
        self.params.push(param);
        self
    }

    pub fn at(mut self, file: impl Into<String>, line: usize) -> Self {
        self.location = SourceLocation { file: file.into(), line };
        self
    }
}
