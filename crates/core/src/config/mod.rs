//! Generator configuration and on-disk layout.
//!
//! - `GeneratorConfig`: serializable settings, read from `godi.yaml`,
//!   `godi.yml` or `godi.json` in the project root.
//! - `GeneratorLayout`: computed paths for the source dir, output file and
//!   config file.
//! - Helpers to load a config (falling back to defaults) and to write the
//!   default config file.

mod generator;
mod layout;
mod util;

pub use generator::GeneratorConfig;
pub use layout::{GeneratorLayout, CONFIG_FILE_NAMES};
pub use util::{find_config, load_config, read_config_file, write_default_config};
