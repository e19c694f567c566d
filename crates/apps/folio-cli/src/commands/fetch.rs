//! Snapshot raw entries to a local JSON file.

use std::path::PathBuf;

use tracing::info;

use folio_client::CmsClient;

use crate::config::CliConfig;
use crate::error::CliResult;
use crate::output::{FetchOutput, OutputFormat, Render};

/// Execute the fetch command.
pub async fn fetch(config: CliConfig, format: OutputFormat, output: PathBuf) -> CliResult<String> {
    let client = CmsClient::new(&config.cms)?;
    let entries = client.fetch_entries().await?;
    info!(count = entries.len(), "Fetched entries");

    if let Some(parent) = output.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let contents = serde_json::to_string_pretty(&entries)?;
    std::fs::write(&output, contents)?;

    let result = FetchOutput {
        entries: entries.len(),
        path: output.display().to_string(),
    };
    Ok(result.render(format))
}
