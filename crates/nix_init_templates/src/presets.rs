//! Built-in language presets.
//!
//! Each preset exposes the packages a language needs plus its editor tooling, and
//! can be turned into a [`Template`] for seeding a configuration file.

use crate::manifest::Template;

/// Something that contributes packages and tools for one ecosystem.
pub trait LanguageProvider {
    /// Template key.
    fn key(&self) -> &'static str;

    /// Runtime and compiler packages.
    fn packages(&self) -> Vec<String>;

    /// Language servers and build tooling.
    fn tools(&self) -> Vec<String>;

    /// Packages followed by tools, as a template.
    fn to_template(&self) -> Template {
        Template::new(self.key())
            .with_packages(self.packages())
            .with_packages(self.tools())
    }
}

/// Supported language presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    Clang,
    Latex,
    Python,
}

impl Language {
    /// Get all language variants.
    pub fn all() -> &'static [Language] {
        &[Language::Clang, Language::Latex, Language::Python]
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl LanguageProvider for Language {
    fn key(&self) -> &'static str {
        match self {
            Language::Clang => "clang",
            Language::Latex => "latex",
            Language::Python => "python",
        }
    }

    fn packages(&self) -> Vec<String> {
        match self {
            Language::Clang => Vec::new(),
            Language::Latex => strings(&["texlive-full"]),
            Language::Python => strings(&["python3"]),
        }
    }

    fn tools(&self) -> Vec<String> {
        match self {
            Language::Clang => strings(&["cmake", "ninja", "clang-tools"]),
            Language::Latex => strings(&["texlab"]),
            Language::Python => strings(&["nodePackages.pyright"]),
        }
    }
}

/// Templates for every built-in preset.
pub fn default_templates() -> Vec<Template> {
    Language::all().iter().map(|l| l.to_template()).collect()
}
