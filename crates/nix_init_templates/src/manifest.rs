//! Template definitions.
//!
//! A template is a named bundle of packages. Templates are data-driven: they are
//! read from a JSON configuration file rather than hardcoded.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::TemplateResult;

/// A named package bundle.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Template {
    /// Unique identifier, used for lookup and as the block comment in output
    pub key: String,
    /// Package identifiers in output order (duplicates kept)
    #[serde(default)]
    pub pkgs: Vec<String>,
}

impl Template {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            pkgs: Vec::new(),
        }
    }

    pub fn with_package(mut self, pkg: impl Into<String>) -> Self {
        self.pkgs.push(pkg.into());
        self
    }

    pub fn with_packages<I, S>(mut self, pkgs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.pkgs.extend(pkgs.into_iter().map(Into::into));
        self
    }
}

/// Ordered collection of loaded templates.
#[derive(Debug, Clone, Default)]
pub struct TemplateRegistry {
    templates: Vec<Template>,
    source_path: Option<PathBuf>,
}

impl TemplateRegistry {
    pub fn new(templates: Vec<Template>) -> Self {
        Self {
            templates,
            source_path: None,
        }
    }

    pub fn with_source_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.source_path = Some(path.into());
        self
    }

    /// Path the registry was loaded from, if any.
    pub fn source_path(&self) -> Option<&Path> {
        self.source_path.as_deref()
    }

    /// Get the first template with the given key.
    pub fn get(&self, key: &str) -> Option<&Template> {
        self.templates.iter().find(|t| t.key == key)
    }

    /// Check if a template exists.
    pub fn exists(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// List all templates in load order.
    pub fn list(&self) -> &[Template] {
        &self.templates
    }

    /// All keys in load order.
    pub fn keys(&self) -> Vec<&str> {
        self.templates.iter().map(|t| t.key.as_str()).collect()
    }

    /// Keys that appear more than once, each reported once, in order of first repeat.
    pub fn duplicate_keys(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        let mut reported = HashSet::new();
        let mut duplicates = Vec::new();

        for key in self.keys() {
            if !seen.insert(key) && reported.insert(key) {
                duplicates.push(key);
            }
        }

        duplicates
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// Resolve requested keys against this registry.
    pub fn resolve<S: AsRef<str>>(&self, requested: &[S]) -> TemplateResult<Vec<&Template>> {
        crate::resolver::resolve(&self.templates, requested)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_deserialize() {
        let template: Template =
            serde_json::from_str(r#"{"key": "go", "pkgs": ["go", "gopls"]}"#).unwrap();
        assert_eq!(template.key, "go");
        assert_eq!(template.pkgs, vec!["go", "gopls"]);
    }

    #[test]
    fn test_template_missing_pkgs_defaults_to_empty() {
        let template: Template = serde_json::from_str(r#"{"key": "empty"}"#).unwrap();
        assert!(template.pkgs.is_empty());
    }

    #[test]
    fn test_get_returns_first_match() {
        let registry = TemplateRegistry::new(vec![
            Template::new("go").with_package("go"),
            Template::new("go").with_package("go_1_21"),
        ]);

        assert_eq!(registry.get("go").unwrap().pkgs, vec!["go"]);
        assert!(registry.exists("go"));
        assert!(!registry.exists("rust"));
    }

    #[test]
    fn test_duplicate_keys() {
        let registry = TemplateRegistry::new(vec![
            Template::new("a"),
            Template::new("b"),
            Template::new("a"),
            Template::new("a"),
        ]);

        assert_eq!(registry.duplicate_keys(), vec!["a"]);
        assert_eq!(registry.keys(), vec!["a", "b", "a", "a"]);
    }
}
