//! Integration tests for the template system.

use std::fs;
use std::path::{Path, PathBuf};

use nix_init_templates::{
    default_templates, ShellRenderer, ShellWriter, TemplateError, TemplateLoader, WriteOptions,
    ENVRC_DIRECTIVE, ENVRC_FILE,
};
use tempfile::tempdir;

const CONFIG: &str = r#"[
  {"key": "go", "pkgs": ["go", "gopls"]},
  {"key": "rust", "pkgs": ["rustc", "cargo"]}
]"#;

fn write_config(dir: &Path) -> PathBuf {
    let path = dir.join("config.json");
    fs::write(&path, CONFIG).unwrap();
    path
}

#[test]
fn test_generate_round_trip() {
    let temp = tempdir().unwrap();
    let config = write_config(temp.path());

    let registry = TemplateLoader::new(&config).load().unwrap();
    let selected = registry.resolve(&["rust", "go"]).unwrap();
    let text = ShellRenderer::new().render(&selected, "dev");

    let rust = text.find("    # rust").unwrap();
    let go = text.find("    # go").unwrap();
    assert!(rust < go, "rust block should precede go block");
    assert!(text.lines().any(|l| l == "  name = \"dev\";"));

    let expected = "{ pkgs ? import <nixpkgs> {} }:

pkgs.mkShell {
  name = \"dev\";
  buildInputs = with pkgs; [
    # rust
    rustc
    cargo
    # go
    go
    gopls
  ];
}";
    assert_eq!(text, expected);
}

#[test]
fn test_unknown_template() {
    let registry = TemplateLoader::from_json_str(CONFIG).unwrap();
    let err = registry.resolve(&["python"]).unwrap_err();
    assert!(matches!(err, TemplateError::NotFound(ref k) if k == "python"));
    assert_eq!(err.to_string(), "Template python not found");
}

#[test]
fn test_empty_selection() {
    let registry = TemplateLoader::from_json_str(CONFIG).unwrap();
    let none: Vec<String> = Vec::new();
    let err = registry.resolve(none.as_slice()).unwrap_err();
    assert!(matches!(err, TemplateError::NoTemplateSpecified));
}

#[test]
fn test_render_empty_selection_is_well_formed() {
    let text = ShellRenderer::new().render(&[], "Template");
    assert!(text.contains("  buildInputs = with pkgs; [\n  ];"));
    assert!(text.ends_with('}'));
}

#[test]
fn test_write_then_overwrite() {
    let temp = tempdir().unwrap();
    let config = write_config(temp.path());
    let registry = TemplateLoader::new(&config).load().unwrap();
    let shell = temp.path().join("shell.nix");

    let first = ShellRenderer::new().render(&registry.resolve(&["go"]).unwrap(), "one");
    ShellWriter::new(WriteOptions::new(&shell))
        .write(&first)
        .unwrap();

    let second = ShellRenderer::new().render(&registry.resolve(&["rust"]).unwrap(), "two");
    let err = ShellWriter::new(WriteOptions::new(&shell))
        .write(&second)
        .unwrap_err();
    assert!(matches!(err, TemplateError::DestinationExists(_)));
    assert_eq!(fs::read_to_string(&shell).unwrap(), first);

    ShellWriter::new(WriteOptions::new(&shell).overwrite(true))
        .write(&second)
        .unwrap();
    assert_eq!(fs::read_to_string(&shell).unwrap(), second);
}

#[test]
fn test_write_with_envrc() {
    let temp = tempdir().unwrap();
    let sub = temp.path().join("sub");
    fs::create_dir(&sub).unwrap();
    let shell = sub.join("shell.nix");

    let options = WriteOptions::new(&shell).envrc(true).envrc_dir(temp.path());
    let report = ShellWriter::new(options).write("{}").unwrap();

    assert!(report.warnings.is_empty());
    let envrc = temp.path().join(ENVRC_FILE);
    assert_eq!(fs::read_to_string(envrc).unwrap(), ENVRC_DIRECTIVE);
    assert!(!sub.join(ENVRC_FILE).exists());
}

#[test]
fn test_presets_serialize_as_config() {
    let json = serde_json::to_string_pretty(&default_templates()).unwrap();
    let registry = TemplateLoader::from_json_str(&json).unwrap();
    assert_eq!(registry.keys(), vec!["clang", "latex", "python"]);
    assert_eq!(registry.get("latex").unwrap().pkgs, vec!["texlive-full", "texlab"]);
}

#[test]
fn test_malformed_config_file() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("config.json");
    fs::write(&path, "not json").unwrap();

    let err = TemplateLoader::new(&path).load().unwrap_err();
    assert!(err.is_config_error());
}
