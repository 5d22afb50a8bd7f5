//! List command - Show available templates.

use std::path::Path;

use anyhow::Result;
use tracing::{debug, warn};

use super::load_registry;

pub fn execute(config: &Path) -> Result<()> {
    let registry = load_registry(config)?;

    if registry.is_empty() {
        warn!("No templates defined in {}", config.display());
        return Ok(());
    }

    if let Some(source) = registry.source_path() {
        debug!("Listing {} templates from {}", registry.len(), source.display());
    }

    for template in registry.list() {
        println!("{}:", template.key);
        for pkg in &template.pkgs {
            println!("  - {}", pkg);
        }
    }

    Ok(())
}
