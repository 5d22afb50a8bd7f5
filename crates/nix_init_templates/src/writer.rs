//! Writing rendered shells to disk.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::error::{TemplateError, TemplateResult};

/// Name of the direnv activation file.
pub const ENVRC_FILE: &str = ".envrc";

/// Directive written to the activation file.
pub const ENVRC_DIRECTIVE: &str = "use_nix";

/// Options for writing a rendered shell.
#[derive(Debug, Clone)]
pub struct WriteOptions {
    /// Destination of the shell definition.
    pub path: PathBuf,
    /// Replace an existing destination.
    pub overwrite: bool,
    /// Also write an `.envrc`.
    pub envrc: bool,
    /// Directory for the `.envrc`; the working directory when unset.
    pub envrc_dir: Option<PathBuf>,
}

impl WriteOptions {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            overwrite: false,
            envrc: false,
            envrc_dir: None,
        }
    }

    pub fn overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = overwrite;
        self
    }

    pub fn envrc(mut self, envrc: bool) -> Self {
        self.envrc = envrc;
        self
    }

    pub fn envrc_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.envrc_dir = Some(dir.into());
        self
    }
}

/// What a write produced.
#[derive(Debug, Default)]
pub struct WriteReport {
    /// Path of the shell definition that was written.
    pub shell_path: PathBuf,
    /// Path of the activation file, when one was written.
    pub envrc_path: Option<PathBuf>,
    /// Non-fatal issues.
    pub warnings: Vec<String>,
}

/// Writes shell definitions and activation files.
pub struct ShellWriter {
    options: WriteOptions,
}

impl ShellWriter {
    pub fn new(options: WriteOptions) -> Self {
        Self { options }
    }

    /// Location of the activation file. Independent of the shell destination.
    pub fn envrc_path(&self) -> PathBuf {
        match &self.options.envrc_dir {
            Some(dir) => dir.join(ENVRC_FILE),
            None => PathBuf::from(ENVRC_FILE),
        }
    }

    /// Write `text` to the destination, then the activation file if requested.
    pub fn write(&self, text: &str) -> TemplateResult<WriteReport> {
        let path = &self.options.path;

        if path.exists() && !self.options.overwrite {
            return Err(TemplateError::DestinationExists(path.clone()));
        }

        fs::write(path, text)?;
        info!("Wrote {:?}", path);

        let mut report = WriteReport {
            shell_path: path.clone(),
            ..Default::default()
        };

        if self.options.envrc {
            let envrc = self.envrc_path();
            if let Some(warning) = write_envrc(&envrc)? {
                report.warnings.push(warning);
            }
            report.envrc_path = Some(envrc);
        }

        Ok(report)
    }
}

/// Best-effort: an existing file yields a warning and is rewritten.
fn write_envrc(path: &Path) -> TemplateResult<Option<String>> {
    let warning = if path.exists() {
        warn!("{:?} already exists and will be overwritten", path);
        Some(format!("{} already exists", path.display()))
    } else {
        None
    };

    fs::write(path, ENVRC_DIRECTIVE)?;
    info!("Wrote {:?}", path);

    Ok(warning)
}
