//! Init-config command - Seed the configuration file with built-in presets.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use clap::Args;
use tracing::info;

use nix_init_templates::{default_templates, TemplateError};

#[derive(Args)]
pub struct InitConfigArgs {
    /// Overwrite an existing configuration file
    #[arg(short, long)]
    force: bool,
}

pub fn execute(config: &Path, args: InitConfigArgs) -> Result<()> {
    if config.exists() && !args.force {
        return Err(TemplateError::DestinationExists(config.to_path_buf()).into());
    }

    if let Some(parent) = config.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }

    let templates = default_templates();
    let json = serde_json::to_string_pretty(&templates)?;
    fs::write(config, json).with_context(|| format!("Failed to write {}", config.display()))?;

    info!("Wrote {} templates to {:?}", templates.len(), config);
    println!("✅ Configuration written to {}", config.display());

    Ok(())
}
