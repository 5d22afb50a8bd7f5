//! Config-file command - Print the default configuration location.

use anyhow::Result;

pub fn execute() -> Result<()> {
    println!("{}", super::default_config_path().display());
    Ok(())
}
