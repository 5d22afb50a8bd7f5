//! shell.nix rendering.

use tracing::debug;

use crate::manifest::Template;

/// Lines emitted before the `name` line.
const PREAMBLE: [&str; 3] = ["{ pkgs ? import <nixpkgs> {} }:", "", "pkgs.mkShell {"];

/// Lines emitted after the package list.
const CLOSING: [&str; 2] = ["  ];", "}"];

const PACKAGE_INDENT: &str = "    ";

/// Renders selected templates into a `mkShell` definition.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShellRenderer;

impl ShellRenderer {
    /// Create a new shell renderer.
    pub fn new() -> Self {
        Self
    }

    /// Render the document. The name is interpolated literally.
    pub fn render(&self, templates: &[&Template], name: &str) -> String {
        let mut lines: Vec<String> = PREAMBLE.iter().map(|l| l.to_string()).collect();
        lines.push(format!("  name = \"{}\";", name));
        lines.push("  buildInputs = with pkgs; [".to_string());

        for template in templates {
            lines.push(format!("{}# {}", PACKAGE_INDENT, template.key));
            lines.extend(
                template
                    .pkgs
                    .iter()
                    .map(|pkg| format!("{}{}", PACKAGE_INDENT, pkg)),
            );
        }

        lines.extend(CLOSING.iter().map(|l| l.to_string()));

        debug!(
            "Rendered shell '{}' from {} templates ({} lines)",
            name,
            templates.len(),
            lines.len()
        );

        lines.join("\n")
    }
}

/// Render with the default renderer.
pub fn render(templates: &[&Template], name: &str) -> String {
    ShellRenderer::new().render(templates, name)
}
