//! # nix_init_templates
//!
//! Template store and `shell.nix` rendering for nix-init.
//!
//! Templates are named package bundles read from a JSON configuration file.
//! A selection of template keys is resolved against the store and rendered
//! into a `pkgs.mkShell` definition.
//!
//! ## Example
//!
//! ```rust,no_run
//! use nix_init_templates::{ShellRenderer, ShellWriter, TemplateLoader, WriteOptions};
//!
//! let registry = TemplateLoader::new("config.json").load().unwrap();
//! let selected = registry.resolve(&["rust", "go"]).unwrap();
//!
//! let text = ShellRenderer::new().render(&selected, "dev");
//!
//! let writer = ShellWriter::new(WriteOptions::new("shell.nix").envrc(true));
//! let report = writer.write(&text).unwrap();
//! ```

pub mod error;
pub mod loader;
pub mod manifest;
pub mod presets;
pub mod renderer;
pub mod resolver;
pub mod writer;

pub use error::{TemplateError, TemplateResult};
pub use loader::TemplateLoader;
pub use manifest::{Template, TemplateRegistry};
pub use presets::{default_templates, Language, LanguageProvider};
pub use renderer::{render, ShellRenderer};
pub use resolver::resolve;
pub use writer::{ShellWriter, WriteOptions, WriteReport, ENVRC_DIRECTIVE, ENVRC_FILE};
