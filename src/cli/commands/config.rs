//! Config Command
//!
//! Manage docscaffold configuration.
//!
//! Usage:
//!   docscaffold config show [-f json]
//!   docscaffold config path
//!   docscaffold config init [--force]

use std::path::Path;

use crate::cli::ui::Output;
use crate::config::{ConfigLoader, PROJECT_CONFIG_FILE};
use crate::types::Result;

/// Show the merged effective configuration
pub fn show(config_file: Option<&Path>, format: &str) -> Result<()> {
    let config = ConfigLoader::load(config_file)?;
    println!("{}", ConfigLoader::render(&config, format == "json")?);
    Ok(())
}

/// Show configuration paths
pub fn path() -> Result<()> {
    println!("Configuration paths:");
    println!();
    for line in ConfigLoader::describe_paths() {
        println!("  {}", line);
    }
    Ok(())
}

/// Initialize project configuration in the working directory
pub fn init(force: bool) -> Result<()> {
    let root = std::env::current_dir()?;
    let path = ConfigLoader::init_project(&root, force)?;

    Output::new().success(&format!("Initialized {}", PROJECT_CONFIG_FILE));
    println!("  Config: {}", path.display());
    Ok(())
}
