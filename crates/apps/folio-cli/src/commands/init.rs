//! Write a starter configuration file.

use std::path::PathBuf;

use crate::config::{default_config_path, CliConfig};
use crate::error::{CliError, CliResult};
use crate::output::{InitOutput, OutputFormat, Render};

/// Execute the init command.
pub fn init(config_path: Option<PathBuf>, force: bool, format: OutputFormat) -> CliResult<String> {
    let path = config_path.unwrap_or_else(default_config_path);

    if path.exists() && !force {
        return Err(CliError::ConfigExists(path));
    }

    CliConfig::default().save(&path)?;

    let output = InitOutput {
        config_path: path.display().to_string(),
    };
    Ok(output.render(format))
}
