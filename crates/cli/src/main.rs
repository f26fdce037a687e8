use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use godi::commands::{generate_command, init_command, list_services_command, plan_command};
use tracing_subscriber::EnvFilter;

/// Static dependency-injection wiring generator for Go packages.
///
/// This CLI is a thin wrapper around `godi-core`. Constructors tagged with
/// `@Service` are discovered, ordered by their dependencies, and emitted as a
/// generated container file next to the package sources.
#[derive(Parser, Debug)]
#[command(name = "godi", version, about = "Static dependency-injection wiring for Go", long_about = None)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug). `RUST_LOG` takes precedence.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate the wiring file for the configured package.
    ///
    /// Nothing is written when any service fails to extract, register or resolve.
    Generate {
        /// Project root directory. Defaults to the current working directory.
        #[arg(long, default_value = ".")]
        root: String,

        /// Explicit config file. Defaults to godi.yaml / godi.yml / godi.json in the root.
        #[arg(long)]
        config: Option<PathBuf>,

        /// Do not write; fail if the generated file is missing or out of date.
        #[arg(long, default_value_t = false)]
        check: bool,

        /// Emit a JSON report instead of human-readable text.
        #[arg(long, default_value_t = false)]
        json: bool,
    },

    /// Show the resolved construction order without generating anything.
    Plan {
        /// Project root directory. Defaults to the current working directory.
        #[arg(long, default_value = ".")]
        root: String,

        /// Explicit config file.
        #[arg(long)]
        config: Option<PathBuf>,

        /// Emit JSON instead of human-readable text.
        #[arg(long, default_value_t = false)]
        json: bool,
    },

    /// List discovered services in scan order, with extraction errors.
    ListServices {
        /// Project root directory. Defaults to the current working directory.
        #[arg(long, default_value = ".")]
        root: String,

        /// Explicit config file.
        #[arg(long)]
        config: Option<PathBuf>,

        /// Emit JSON instead of human-readable text.
        #[arg(long, default_value_t = false)]
        json: bool,
    },

    /// Write a default godi.yaml into the project root.
    Init {
        /// Project root directory. Defaults to the current working directory.
        #[arg(long, default_value = ".")]
        root: String,

        /// Overwrite an existing config.
        #[arg(long, default_value_t = false)]
        force: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Command::Generate { root, config, check, json } => {
            generate_command(&root, config.as_deref(), check, json)?
        }
        Command::Plan { root, config, json } => plan_command(&root, config.as_deref(), json)?,
        Command::ListServices { root, config, json } => {
            list_services_command(&root, config.as_deref(), json)?
        }
        Command::Init { root, force } => init_command(&root, force)?,
    }

    Ok(())
}

/// Logs go to stderr so `--json` output on stdout stays parseable.
fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
