//! CLI command definitions.
//!
//! Each subcommand maps to one operation on the template configuration.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::debug;

use nix_init_templates::{TemplateLoader, TemplateRegistry};

pub mod config_file;
pub mod gen;
pub mod init_config;
pub mod list;

/// Location of the configuration file relative to the home directory.
const CONFIG_SUBPATH: &str = ".config/nix-init/config.json";

/// nix-init - Generate nix-shell definitions from templates
#[derive(Parser)]
#[command(name = "nix-init")]
#[command(version, about = "Generate nix-shell init script")]
#[command(long_about = r#"
nix-init generates a shell.nix from named package templates stored in a
JSON configuration file.

COMMANDS:
  gen           → Render the selected templates into shell.nix
  list          → List available templates and their packages
  config-file   → Print the default configuration file location
  init-config   → Write a starter configuration with built-in presets

EXIT CODES:
  0 - Success
  1 - General error
  2 - Configuration error
  3 - Template error
  4 - Destination already exists
"#)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the configuration file
    #[arg(short, long, global = true, env = "NIX_INIT_CONFIG", default_value_os_t = default_config_path())]
    pub config: PathBuf,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate a shell.nix from templates
    #[command(visible_alias = "generate")]
    Gen(gen::GenArgs),

    /// List available templates
    List,

    /// Print the default configuration file location
    #[command(name = "config-file", visible_alias = "show-config-path")]
    ConfigFile,

    /// Write a configuration file seeded with built-in presets
    #[command(name = "init-config")]
    InitConfig(init_config::InitConfigArgs),
}

/// Default configuration path under the user's home directory.
pub fn default_config_path() -> PathBuf {
    match dirs::home_dir() {
        Some(home) => home.join(CONFIG_SUBPATH),
        None => PathBuf::from("~").join(CONFIG_SUBPATH),
    }
}

/// Load the template registry from `path`.
pub fn load_registry(path: &Path) -> Result<TemplateRegistry> {
    debug!("Using configuration file {:?}", path);
    TemplateLoader::new(path)
        .load()
        .with_context(|| format!("Failed to load templates from {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_default_config_path() {
        assert!(default_config_path().ends_with("nix-init/config.json"));
    }

    #[test]
    fn test_gen_defaults() {
        let cli = Cli::parse_from(["nix-init", "gen", "rust", "go"]);
        match cli.command {
            Commands::Gen(args) => {
                assert_eq!(args.keys, vec!["rust", "go"]);
                assert_eq!(args.path, PathBuf::from("shell.nix"));
                assert_eq!(args.name, "Template");
                assert!(!args.envrc && !args.force && !args.pretend);
            }
            _ => panic!("expected gen"),
        }
    }
}
