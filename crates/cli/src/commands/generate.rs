use std::path::Path;

use anyhow::{anyhow, Result};
use godi_core::emit::{is_stale, write_if_changed};
use godi_core::services::generate::{GenerationReport, Generator};
use tracing::info;

use crate::commands::{pipeline_error, print_json, CommandContext};

/// Scan, resolve and render the package; write the output unless `check`.
///
/// With `check`, nothing is written and a stale or missing output is an error.
pub fn generate_command(root: &str, config: Option<&Path>, check: bool, json: bool) -> Result<()> {
    let ctx = CommandContext::load(root, config)?;
    let scanner = ctx.scanner();
    let output = Generator::new(&scanner, &ctx.config)
        .generate(&ctx.layout.source_dir)
        .map_err(|err| pipeline_error(&ctx.layout, err))?;
    let display_path = ctx.layout.output_relative_string();

    let changed = if check {
        let stale = is_stale(&ctx.layout.output_path, &output.source)?;
        if stale {
            return Err(anyhow!("{display_path} is out of date; run `godi generate`"));
        }
        false
    } else {
        write_if_changed(&ctx.layout.output_path, &output.source)?
    };
    info!(output = %display_path, changed, "generation finished");

    if json {
        return print_json(&GenerationReport::new(&output, display_path, changed));
    }
    let count = output.plan.services.len();
    if check {
        println!("{display_path} is up to date ({count} services)");
    } else if changed {
        println!("Wrote {display_path} ({count} services)");
    } else {
        println!("{display_path} unchanged ({count} services)");
    }
    Ok(())
}
