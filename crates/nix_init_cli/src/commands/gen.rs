//! Gen command - Render selected templates into a shell.nix.

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Args;
use tracing::info;

use nix_init_templates::{ShellRenderer, ShellWriter, WriteOptions, ENVRC_DIRECTIVE, ENVRC_FILE};

use super::load_registry;

#[derive(Args)]
pub struct GenArgs {
    /// Template keys to include, in output order
    pub keys: Vec<String>,

    /// Place the output into FILE
    #[arg(short = 'o', long, value_name = "FILE", default_value = "shell.nix")]
    pub path: PathBuf,

    /// Set the name of the nix-shell
    #[arg(short, long, default_value = "Template")]
    pub name: String,

    /// Generate .envrc file
    #[arg(short, long)]
    pub envrc: bool,

    /// Overwrite existing files
    #[arg(short, long)]
    pub force: bool,

    /// Print the generated script to stdout
    #[arg(short, long)]
    pub pretend: bool,
}

pub fn execute(config: &Path, args: GenArgs) -> Result<()> {
    let registry = load_registry(config)?;
    let selected = registry.resolve(args.keys.as_slice())?;

    info!("Generating shell '{}' from {:?}", args.name, args.keys);
    let text = ShellRenderer::new().render(&selected, &args.name);

    if args.pretend {
        println!("{}", text);
        return Ok(());
    }

    let options = WriteOptions::new(&args.path)
        .overwrite(args.force)
        .envrc(args.envrc);
    let report = ShellWriter::new(options).write(&text)?;

    for warning in &report.warnings {
        println!("{}", warning);
    }
    if !report.warnings.is_empty() {
        println!(
            "Do $ echo \"{}\" >> {} to enable nix-shell",
            ENVRC_DIRECTIVE, ENVRC_FILE
        );
    }

    Ok(())
}
