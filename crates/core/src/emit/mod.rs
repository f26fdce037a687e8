//! Code emission: renders a resolved wiring plan into Go source.

use std::path::{Path, PathBuf};

use handlebars::Handlebars;
use serde::Serialize;
use sha2::{Digest, Sha256};
use thiserror::Error;

use crate::model::Service;

mod names;

pub use names::NameAllocator;

const TEMPLATE_NAME: &str = "services";
const TEMPLATE: &str = include_str!("../../templates/services.go.hbs");

#[derive(Debug, Error)]
pub enum EmitError {
    #[error("Template error: {0}")]
    Template(#[from] Box<handlebars::TemplateError>),
    #[error("Template render error: {0}")]
    Render(#[from] handlebars::RenderError),
    #[error("Failed to access {}: {source}", .path.display())]
    Io { path: PathBuf, source: std::io::Error },
}

/// Everything the emitter needs: target package and services in construction order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WiringPlan {
    pub package: String,
    pub container: String,
    pub constructor: String,
    pub services: Vec<Service>,
}

impl WiringPlan {
    /// SHA-256 over the ordered plan; identical plans hash identically.
    pub fn hash(&self) -> String {
        let mut hasher = Sha256::new();
        hasher.update(format!("{} {} {}\n", self.package, self.container, self.constructor));
        for service in &self.services {
            let params: Vec<&str> = service.parameters.iter().map(|p| p.as_str()).collect();
            hasher.update(format!(
                "{} {}({})\n",
                service.key(),
                service.factory_name,
                params.join(",")
            ));
        }
        format!("{:x}", hasher.finalize())
    }
}

#[derive(Serialize)]
struct Field {
    name: String,
    type_expr: String,
}

#[derive(Serialize)]
struct Step {
    binding: String,
    factory: String,
    args: String,
}

#[derive(Serialize)]
struct Assignment {
    key: String,
    binding: String,
}

#[derive(Serialize)]
struct TemplateData<'a> {
    plan_hash: String,
    package: &'a str,
    container: &'a str,
    constructor: &'a str,
    fields: Vec<Field>,
    steps: Vec<Step>,
    assignments: Vec<Assignment>,
}

/// Renders wiring plans through the embedded Go template.
pub struct Emitter {
    handlebars: Handlebars<'static>,
}

impl Emitter {
    pub fn new() -> Result<Self, EmitError> {
        let mut handlebars = Handlebars::new();
        handlebars.register_escape_fn(handlebars::no_escape);
        handlebars.set_strict_mode(true);
        handlebars.register_template_string(TEMPLATE_NAME, TEMPLATE).map_err(Box::new)?;
        Ok(Self { handlebars })
    }

    /// Render the plan to Go source text.
    pub fn render(&self, plan: &WiringPlan) -> Result<String, EmitError> {
        Ok(self.handlebars.render(TEMPLATE_NAME, &template_data(plan))?)
    }
}

fn template_data(plan: &WiringPlan) -> TemplateData<'_> {
    let mut bindings = NameAllocator::new();
    let mut fields = NameAllocator::new();
    fields.reserve(&plan.container);

    let named: Vec<(String, String, &Service)> = plan
        .services
        .iter()
        .map(|s| (bindings.binding_for(&s.identifier), fields.field_for(&s.identifier), s))
        .collect();

    let field_width = named.iter().map(|(_, field, _)| field.chars().count()).max().unwrap_or(0);
    let binding_of = |key: &str| {
        named
            .iter()
            .find(|(_, _, s)| s.key() == key)
            .map(|(binding, _, _)| binding.clone())
            .unwrap_or_default()
    };

    TemplateData {
        plan_hash: plan.hash(),
        package: &plan.package,
        container: &plan.container,
        constructor: &plan.constructor,
        fields: named
            .iter()
            .map(|(_, field, s)| Field {
                name: format!("{field:<field_width$}"),
                type_expr: go_type(s),
            })
            .collect(),
        steps: named
            .iter()
            .map(|(binding, _, s)| Step {
                binding: binding.clone(),
                factory: s.factory_name.clone(),
                args: s
                    .parameters
                    .iter()
                    .map(|p| binding_of(p.as_str()))
                    .collect::<Vec<_>>()
                    .join(", "),
            })
            .collect(),
        assignments: named
            .iter()
            .map(|(binding, field, _)| Assignment {
                key: format!("{:<width$}", format!("{field}:"), width = field_width + 1),
                binding: binding.clone(),
            })
            .collect(),
    }
}

/// Type as written inside the generated package.
fn go_type(service: &Service) -> String {
    let id = &service.identifier;
    if id.is_indirect() {
        format!("*{}", id.name())
    } else {
        id.name().to_string()
    }
}

/// Whether `path` is missing or holds something other than `contents`.
pub fn is_stale(path: &Path, contents: &str) -> Result<bool, EmitError> {
    match std::fs::read_to_string(path) {
        Ok(existing) => Ok(existing != contents),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(true),
        Err(source) => Err(EmitError::Io { path: path.to_path_buf(), source }),
    }
}

/// Write `contents` unless the file already holds exactly that.
///
/// Returns whether the file changed.
pub fn write_if_changed(path: &Path, contents: &str) -> Result<bool, EmitError> {
    if !is_stale(path, contents)? {
        return Ok(false);
    }
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .map_err(|source| EmitError::Io { path: parent.to_path_buf(), source })?;
    }
    std::fs::write(path, contents)
        .map_err(|source| EmitError::Io { path: path.to_path_buf(), source })?;
    Ok(true)
}
