//! nix-init CLI - Main entry point.
//!
//! Exit codes:
//! - 0: Success
//! - 1: General error
//! - 2: Configuration error
//! - 3: Template error
//! - 4: Destination already exists

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use nix_init_templates::TemplateError;

mod commands;

use commands::{Cli, Commands};

/// CI-friendly exit codes
pub struct ExitCodes;

impl ExitCodes {
    pub const SUCCESS: u8 = 0;
    pub const GENERAL_ERROR: u8 = 1;
    pub const CONFIG_ERROR: u8 = 2;
    pub const TEMPLATE_ERROR: u8 = 3;
    pub const DESTINATION_EXISTS: u8 = 4;
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Gen(args) => commands::gen::execute(&cli.config, args),
        Commands::List => commands::list::execute(&cli.config),
        Commands::ConfigFile => commands::config_file::execute(),
        Commands::InitConfig(args) => commands::init_config::execute(&cli.config, args),
    };

    match result {
        Ok(()) => ExitCode::from(ExitCodes::SUCCESS),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(categorize_error(&e))
        }
    }
}

/// Logs go to stderr so generated output on stdout stays clean.
fn init_logging(verbose: bool) {
    let default_directive = if verbose {
        "nix_init=debug,warn"
    } else {
        "nix_init=info,warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    // Ignore the error if a subscriber is already installed.
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .try_init();
}

/// Categorize error to determine exit code
fn categorize_error(e: &anyhow::Error) -> u8 {
    let template_error = e
        .chain()
        .find_map(|cause| cause.downcast_ref::<TemplateError>());

    match template_error {
        Some(err) if err.is_config_error() => ExitCodes::CONFIG_ERROR,
        Some(err) if err.is_selection_error() => ExitCodes::TEMPLATE_ERROR,
        Some(TemplateError::DestinationExists(_)) => ExitCodes::DESTINATION_EXISTS,
        _ => ExitCodes::GENERAL_ERROR,
    }
}
