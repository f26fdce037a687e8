use std::collections::HashSet;

use crate::model::Identifier;

/// Go keywords and predeclared identifiers a generated name must not take.
const RESERVED: &[&str] = &[
    "break", "case", "chan", "const", "continue", "default", "defer", "else", "fallthrough", "for",
    "func", "go", "goto", "if", "import", "interface", "map", "package", "range", "return",
    "select", "struct", "switch", "type", "var", "any", "append", "bool", "byte", "cap", "clear",
    "close", "complex", "copy", "delete", "error", "false", "float32", "float64", "int", "iota",
    "len", "make", "max", "min", "new", "nil", "panic", "print", "println", "real", "recover",
    "rune", "string", "true", "uint", "uintptr",
];

/// Hands out unique Go identifiers derived from service identifiers.
///
/// Pointer services get the bare name (`*demo.Repo` → `repo` / `Repo`); value
/// services get a `Value` suffix so both flavours of one type can coexist.
#[derive(Debug, Default)]
pub struct NameAllocator {
    taken: HashSet<String>,
}

impl NameAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a name as unavailable.
    pub fn reserve(&mut self, name: &str) {
        self.taken.insert(name.to_string());
    }

    /// Local variable name for an identifier.
    pub fn binding_for(&mut self, id: &Identifier) -> String {
        self.allocate(with_flavour(&lower_first(id.name()), id))
    }

    /// Exported struct field name for an identifier.
    pub fn field_for(&mut self, id: &Identifier) -> String {
        self.allocate(with_flavour(&upper_first(id.name()), id))
    }

    fn allocate(&mut self, base: String) -> String {
        let mut candidate = base.clone();
        let mut n = 2;
        while RESERVED.contains(&candidate.as_str()) || self.taken.contains(&candidate) {
            candidate = format!("{base}{n}");
            n += 1;
        }
        self.taken.insert(candidate.clone());
        candidate
    }
}

fn with_flavour(base: &str, id: &Identifier) -> String {
    if id.is_indirect() {
        base.to_string()
    } else {
        format!("{base}Value")
    }
}

fn lower_first(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn upper_first(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
