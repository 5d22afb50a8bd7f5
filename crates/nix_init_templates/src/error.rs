//! Error types for templates.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for template operations.
pub type TemplateResult<T> = Result<T, TemplateError>;

/// Errors that can occur during template operations.
#[derive(Error, Debug)]
pub enum TemplateError {
    #[error("Failed to read configuration file {path}")]
    ConfigLoad {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid configuration in {path}: {message}")]
    InvalidConfig { path: PathBuf, message: String },

    #[error("Template {0} not found")]
    NotFound(String),

    #[error("No template specified")]
    NoTemplateSpecified,

    #[error("File {0} already exists")]
    DestinationExists(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl TemplateError {
    /// Whether the error comes from reading or parsing the configuration.
    pub fn is_config_error(&self) -> bool {
        matches!(self, Self::ConfigLoad { .. } | Self::InvalidConfig { .. })
    }

    /// Whether the error comes from selecting templates.
    pub fn is_selection_error(&self) -> bool {
        matches!(self, Self::NotFound(_) | Self::NoTemplateSpecified)
    }
}
