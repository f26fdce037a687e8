use std::path::Path;

use anyhow::Result;
use godi_core::services::generate::Generator;

use crate::commands::{pipeline_error, print_json, CommandContext};

/// Print the resolved construction order without rendering anything.
pub fn plan_command(root: &str, config: Option<&Path>, json: bool) -> Result<()> {
    let ctx = CommandContext::load(root, config)?;
    let scanner = ctx.scanner();
    let plan = Generator::new(&scanner, &ctx.config)
        .plan(&ctx.layout.source_dir)
        .map_err(|err| pipeline_error(&ctx.layout, err))?;

    if json {
        return print_json(&plan);
    }
    println!("Package {}: {} services", plan.package, plan.services.len());
    for (step, service) in plan.services.iter().enumerate() {
        let params: Vec<&str> = service.parameters.iter().map(|p| p.as_str()).collect();
        println!("{:>3}. {} = {}({})", step + 1, service.key(), service.factory_name, params.join(", "));
    }
    println!("Plan hash: {}", plan.hash());
    Ok(())
}
