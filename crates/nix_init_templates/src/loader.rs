//! Template loading functionality.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::error::{TemplateError, TemplateResult};
use crate::manifest::{Template, TemplateRegistry};

/// Loads templates from a JSON configuration file.
pub struct TemplateLoader {
    config_path: PathBuf,
}

impl TemplateLoader {
    /// Create a new template loader.
    pub fn new(config_path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: config_path.into(),
        }
    }

    /// Load all templates from the configuration file.
    pub fn load(&self) -> TemplateResult<TemplateRegistry> {
        debug!("Loading templates from {:?}", self.config_path);

        let content =
            fs::read_to_string(&self.config_path).map_err(|source| TemplateError::ConfigLoad {
                path: self.config_path.clone(),
                source,
            })?;

        let templates = parse_templates(&content, &self.config_path)?;
        let registry = TemplateRegistry::new(templates).with_source_path(&self.config_path);

        for key in registry.duplicate_keys() {
            warn!("Duplicate template key '{}', the first definition is used", key);
        }

        info!(
            "Loaded {} templates from {:?}",
            registry.len(),
            self.config_path
        );

        Ok(registry)
    }

    /// Parse templates from a JSON string.
    pub fn from_json_str(content: &str) -> TemplateResult<TemplateRegistry> {
        let templates = parse_templates(content, Path::new("<inline>"))?;
        Ok(TemplateRegistry::new(templates))
    }
}

fn parse_templates(content: &str, path: &Path) -> TemplateResult<Vec<Template>> {
    let templates: Vec<Template> =
        serde_json::from_str(content).map_err(|e| TemplateError::InvalidConfig {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    if let Some(index) = templates.iter().position(|t| t.key.is_empty()) {
        return Err(TemplateError::InvalidConfig {
            path: path.to_path_buf(),
            message: format!("template at index {} has an empty key", index),
        });
    }

    Ok(templates)
}
