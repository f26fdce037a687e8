use std::path::Path;

use chrono::Utc;
use serde::Serialize;
use thiserror::Error;
use tracing::info;

use crate::analysis::{extract_all, resolve, Diagnostics, ServiceRegistry};
use crate::config::GeneratorConfig;
use crate::emit::{EmitError, Emitter, WiringPlan};
use crate::model::Service;
use crate::scan::{DeclarationScanner, ScanError};

#[derive(Debug, Error)]
pub enum GenerateError {
    #[error(transparent)]
    Scan(#[from] ScanError),
    #[error(transparent)]
    Wiring(#[from] Diagnostics),
    #[error(transparent)]
    Emit(#[from] EmitError),
}

/// Registered services of a package before resolution.
#[derive(Debug, Clone)]
pub struct Inventory {
    pub package: String,
    pub registry: ServiceRegistry,
    /// Extraction and registration errors, in scan order.
    pub errors: Diagnostics,
}

/// A rendered plan, not yet written anywhere.
#[derive(Debug, Clone)]
pub struct GenerationOutput {
    pub plan: WiringPlan,
    pub source: String,
}

/// Serializable summary of a generation run for `--json` output.
#[derive(Debug, Clone, Serialize)]
pub struct GenerationReport {
    pub package: String,
    pub output: String,
    pub plan_hash: String,
    pub services: Vec<Service>,
    /// Whether the output file differed from the rendered source.
    pub changed: bool,
    pub generated_at: String,
}

impl GenerationReport {
    pub fn new(output: &GenerationOutput, path: impl Into<String>, changed: bool) -> Self {
        Self {
            package: output.plan.package.clone(),
            output: path.into(),
            plan_hash: output.plan.hash(),
            services: output.plan.services.clone(),
            changed,
            generated_at: Utc::now().to_rfc3339(),
        }
    }
}

/// Coordinator that runs scan → extract → register → resolve → render.
pub struct Generator<'a> {
    pub scanner: &'a dyn DeclarationScanner,
    pub config: &'a GeneratorConfig,
}

impl<'a> Generator<'a> {
    pub fn new(scanner: &'a dyn DeclarationScanner, config: &'a GeneratorConfig) -> Self {
        Self { scanner, config }
    }

    /// Scan a package and register its services without resolving them.
    pub fn inventory(&self, dir: &Path) -> Result<Inventory, ScanError> {
        let scanned = self.scanner.scan(dir)?;
        let extraction = extract_all(&scanned.declarations);
        let (registry, duplicates) = ServiceRegistry::from_services(extraction.services);

        let mut errors = Diagnostics::from(extraction.errors);
        errors.extend(duplicates);
        info!(
            scanner = self.scanner.name(),
            package = %scanned.package,
            declarations = scanned.declarations.len(),
            services = registry.len(),
            errors = errors.len(),
            "scanned package"
        );
        Ok(Inventory { package: scanned.package, registry, errors })
    }

    /// Resolve a package into a wiring plan, or every error that prevents one.
    pub fn plan(&self, dir: &Path) -> Result<WiringPlan, GenerateError> {
        let Inventory { package, registry, mut errors } = self.inventory(dir)?;
        let services = match resolve(&registry) {
            Ok(order) => order.into_iter().cloned().collect(),
            Err(resolution) => {
                errors.extend(resolution);
                Vec::new()
            }
        };
        let plan = errors.into_result(WiringPlan {
            package,
            container: self.config.container.clone(),
            constructor: self.config.constructor.clone(),
            services,
        })?;
        Ok(plan)
    }

    /// Plan and render, without touching the output file.
    pub fn generate(&self, dir: &Path) -> Result<GenerationOutput, GenerateError> {
        let plan = self.plan(dir)?;
        let source = Emitter::new()?.render(&plan)?;
        info!(package = %plan.package, services = plan.services.len(), "rendered wiring");
        Ok(GenerationOutput { plan, source })
    }
}
