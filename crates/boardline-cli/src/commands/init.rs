//! Init command implementation.

use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use std::path::{Path, PathBuf};

/// Execute the init command.
///
/// Writes the default configuration to `path`, or to the default location
/// when no path is given. Returns the path written.
pub fn execute_init(path: Option<&Path>, force: bool, formatter: &Formatter) -> Result<PathBuf> {
    let path = match path {
        Some(path) => path.to_path_buf(),
        None => Config::path()?,
    };

    if path.exists() && !force {
        return Err(CliError::InvalidInput(format!(
            "'{}' already exists, use --force to overwrite",
            path.display()
        )));
    }

    Config::default().save_to(&path)?;
    println!(
        "{}",
        formatter.success(&format!("Configuration written to {}", path.display()))
    );
    println!("{}", formatter.info("Set `layout` to use your own boards"));

    Ok(path)
}
