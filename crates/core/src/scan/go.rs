use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};
use tree_sitter::{Node, Parser};

use crate::analysis::SERVICE_MARKER;
use crate::model::{Declaration, SourceLocation, TypeExpr};
use crate::scan::{DeclarationScanner, ScanError, ScannedPackage};

/// Tree-sitter backed scanner for a single Go package directory.
///
/// Only files directly inside the directory are read, in file-name order.
#[derive(Debug, Clone, Default)]
pub struct GoScanner {
    include_tests: bool,
    skip: BTreeSet<PathBuf>,
}

/// Top-level declarations of one file.
struct ParsedFile {
    package: String,
    declarations: Vec<Declaration>,
}

impl GoScanner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Also read `_test.go` files (external `_test` packages are still skipped).
    pub fn include_tests(mut self, include: bool) -> Self {
        self.include_tests = include;
        self
    }

    /// Ignore one file by path, e.g. the generator's own output.
    pub fn skip_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.skip.insert(path.into());
        self
    }

    fn source_files(&self, dir: &Path) -> Result<Vec<PathBuf>, ScanError> {
        let io_err = |source| ScanError::Io { path: dir.to_path_buf(), source };
        let mut files = Vec::new();
        for entry in fs::read_dir(dir).map_err(io_err)? {
            let entry = entry.map_err(io_err)?;
            if !entry.file_type().map_err(io_err)?.is_file() {
                continue;
            }
            let file_name = entry.file_name().to_string_lossy().to_string();
            let path = entry.path();
            if !file_name.ends_with(".go") || self.skip.contains(&path) {
                continue;
            }
            if file_name.ends_with("_test.go") && !self.include_tests {
                continue;
            }
            files.push(path);
        }
        files.sort();
        Ok(files)
    }
}

impl DeclarationScanner for GoScanner {
    fn scan(&self, dir: &Path) -> Result<ScannedPackage, ScanError> {
        let files = self.source_files(dir)?;
        let mut parser = Parser::new();
        parser.set_language(&tree_sitter_go::LANGUAGE.into())?;

        let mut package: Option<String> = None;
        let mut declarations = Vec::new();

        for path in files {
            let source = fs::read_to_string(&path)
                .map_err(|source| ScanError::Io { path: path.clone(), source })?;
            let file_name =
                path.file_name().map(|n| n.to_string_lossy().to_string()).unwrap_or_default();
            let parsed = parse_file(&mut parser, &source, &path, &file_name)?;

            if parsed.package.ends_with("_test") {
                debug!(file = %file_name, "skipping external test package");
                continue;
            }
            match &package {
                Some(expected) if *expected != parsed.package => {
                    return Err(ScanError::MixedPackages {
                        path,
                        found: parsed.package,
                        expected: expected.clone(),
                    });
                }
                Some(_) => {}
                None => package = Some(parsed.package),
            }
            debug!(file = %file_name, declarations = parsed.declarations.len(), "scanned file");
            declarations.extend(parsed.declarations);
        }

        let package = package.ok_or_else(|| ScanError::NoSources(dir.to_path_buf()))?;
        Ok(ScannedPackage { package, declarations })
    }

    fn name(&self) -> &'static str {
        "go"
    }
}

fn parse_file(
    parser: &mut Parser,
    source: &str,
    path: &Path,
    file_name: &str,
) -> Result<ParsedFile, ScanError> {
    let tree = parser.parse(source, None).ok_or_else(|| ScanError::Parse(path.to_path_buf()))?;
    let root = tree.root_node();
    let bytes = source.as_bytes();

    let mut package = None;
    let mut functions = Vec::new();
    // Comment group that may document the next declaration.
    let mut comments: Vec<Node> = Vec::new();
    let mut last_code_row: Option<usize> = None;

    if root.has_error() {
        let line = first_error(root).map(|n| n.start_position().row + 1).unwrap_or(1);
        return Err(ScanError::Syntax { path: path.to_path_buf(), line });
    }

    let mut cursor = root.walk();
    for child in root.children(&mut cursor) {
        if !child.is_named() {
            continue;
        }
        match child.kind() {
            "comment" => {
                // Trailing comment on a line of code documents nothing.
                if last_code_row == Some(child.start_position().row) {
                    continue;
                }
                if comments.last().is_some_and(|prev| !adjacent(prev, &child)) {
                    comments.clear();
                }
                comments.push(child);
                continue;
            }
            "package_clause" => {
                package = first_named_of_kind(child, "package_identifier").map(|n| text(n, bytes));
            }
            "function_declaration" => {
                let doc = doc_lines(&comments, &child, bytes);
                functions.push(function_declaration(child, doc, bytes, file_name));
            }
            "method_declaration" => {
                let doc = doc_lines(&comments, &child, bytes);
                let name = child.child_by_field_name("name").map(|n| text(n, bytes));
                if doc.iter().any(|line| line.contains(SERVICE_MARKER)) {
                    warn!(
                        method = name.as_deref().unwrap_or("?"),
                        file = file_name,
                        "methods cannot be service constructors; skipping"
                    );
                } else {
                    debug!(method = name.as_deref().unwrap_or("?"), "skipping method");
                }
            }
            _ => {}
        }
        comments.clear();
        last_code_row = Some(child.end_position().row);
    }

    let package = package.ok_or_else(|| ScanError::MissingPackage(path.to_path_buf()))?;
    let declarations = functions
        .into_iter()
        .map(|mut declaration: Declaration| {
            declaration.scope = package.clone();
            declaration
        })
        .collect();
    Ok(ParsedFile { package, declarations })
}

fn adjacent(above: &Node, below: &Node) -> bool {
    above.end_position().row + 1 >= below.start_position().row
}

/// Lines of the comment group ending directly above `decl`.
fn doc_lines(comments: &[Node], decl: &Node, bytes: &[u8]) -> Vec<String> {
    match comments.last() {
        Some(last) if adjacent(last, decl) => comments
            .iter()
            .flat_map(|c| text(*c, bytes).lines().map(str::to_string).collect::<Vec<_>>())
            .collect(),
        _ => Vec::new(),
    }
}

fn function_declaration(node: Node, doc_lines: Vec<String>, bytes: &[u8], file: &str) -> Declaration {
    let name = node.child_by_field_name("name").map(|n| text(n, bytes)).unwrap_or_default();
    let mut params = node.child_by_field_name("parameters").map(|p| field_types(p, bytes)).unwrap_or_default();
    let mut results = match node.child_by_field_name("result") {
        Some(result) if result.kind() == "parameter_list" => field_types(result, bytes),
        Some(result) => vec![type_expr(result, bytes)],
        None => Vec::new(),
    };

    // Names inside a generic signature may be type parameters, not package types.
    if node.child_by_field_name("type_parameters").is_some() {
        for expr in results.iter_mut().chain(params.iter_mut()) {
            *expr = TypeExpr::other(expr.source_text());
        }
    }

    Declaration {
        name,
        scope: String::new(),
        doc_lines,
        results,
        params,
        location: SourceLocation { file: file.to_string(), line: node.start_position().row + 1 },
    }
}

/// One type per declared name of a parameter list; an unnamed entry counts once.
fn field_types(list: Node, bytes: &[u8]) -> Vec<TypeExpr> {
    let mut types = Vec::new();
    let mut cursor = list.walk();
    for field in list.named_children(&mut cursor) {
        let (expr, names) = match field.kind() {
            "parameter_declaration" => {
                let expr = field
                    .child_by_field_name("type")
                    .map(|t| type_expr(t, bytes))
                    .unwrap_or_else(|| TypeExpr::other(text(field, bytes)));
                let mut names_cursor = field.walk();
                let names = field.children_by_field_name("name", &mut names_cursor).count();
                (expr, names)
            }
            "variadic_parameter_declaration" => {
                let shape = field
                    .child_by_field_name("type")
                    .map(|t| format!("...{}", text(t, bytes)))
                    .unwrap_or_else(|| text(field, bytes));
                (TypeExpr::other(shape), 1)
            }
            _ => continue,
        };
        types.extend(std::iter::repeat(expr).take(names.max(1)));
    }
    types
}

fn type_expr(node: Node, bytes: &[u8]) -> TypeExpr {
    match node.kind() {
        "type_identifier" => TypeExpr::plain(text(node, bytes)),
        "pointer_type" => match first_named(node) {
            Some(inner) if inner.kind() == "type_identifier" => {
                TypeExpr::indirect(text(inner, bytes))
            }
            _ => TypeExpr::other(text(node, bytes)),
        },
        "parenthesized_type" => match first_named(node) {
            Some(inner) => type_expr(inner, bytes),
            None => TypeExpr::other(text(node, bytes)),
        },
        _ => TypeExpr::other(text(node, bytes)),
    }
}

/// First `ERROR` or `MISSING` node in document order.
fn first_error(root: Node) -> Option<Node> {
    let mut cursor = root.walk();
    loop {
        let node = cursor.node();
        if node.is_error() || node.is_missing() {
            return Some(node);
        }
        if node.has_error() && cursor.goto_first_child() {
            continue;
        }
        while !cursor.goto_next_sibling() {
            if !cursor.goto_parent() {
                return None;
            }
        }
    }
}

fn first_named(node: Node) -> Option<Node> {
    let mut cursor = node.walk();
    let found = node.named_children(&mut cursor).next();
    found
}

fn first_named_of_kind<'t>(node: Node<'t>, kind: &str) -> Option<Node<'t>> {
    let mut cursor = node.walk();
    let found = node.named_children(&mut cursor).find(|n| n.kind() == kind);
    found
}

fn text(node: Node, bytes: &[u8]) -> String {
    node.utf8_text(bytes).unwrap_or_default().to_string()
}
