use std::path::Path;

use anyhow::{Context, Result};
use godi_core::analysis::Diagnostics;
use godi_core::model::Service;
use godi_core::services::generate::Generator;
use serde::Serialize;

use crate::commands::{print_json, CommandContext};

#[derive(Serialize)]
pub struct ServiceListing<'a> {
    pub package: &'a str,
    pub services: Vec<&'a Service>,
    pub errors: &'a Diagnostics,
}

/// List discovered services in scan order, plus extraction and registration errors.
///
/// Dependencies are not resolved, so missing or cyclic wiring is not reported here.
pub fn list_services_command(root: &str, config: Option<&Path>, json: bool) -> Result<()> {
    let ctx = CommandContext::load(root, config)?;
    let scanner = ctx.scanner();
    let inventory = Generator::new(&scanner, &ctx.config)
        .inventory(&ctx.layout.source_dir)
        .with_context(|| format!("Failed to scan {}", ctx.layout.source_dir.display()))?;

    if json {
        return print_json(&ServiceListing {
            package: &inventory.package,
            services: inventory.registry.iter().collect(),
            errors: &inventory.errors,
        });
    }

    if inventory.registry.is_empty() {
        println!("No services found in package {}.", inventory.package);
    } else {
        println!("Services in package {}:", inventory.package);
        for service in &inventory.registry {
            let params: Vec<&str> = service.parameters.iter().map(|p| p.as_str()).collect();
            println!(
                "- {} <- {}({}) [{}]",
                service.key(),
                service.factory_name,
                params.join(", "),
                service.location
            );
        }
    }
    if !inventory.errors.is_empty() {
        println!("Errors:");
        for error in &inventory.errors {
            println!("- {error}");
        }
    }
    Ok(())
}
