//! CLI command implementations.

pub mod build;
pub mod fetch;
pub mod init;
pub mod sections;

// Re-export command handlers
pub use build::build;
pub use fetch::fetch;
pub use init::init;
pub use sections::sections;

use std::path::Path;

use folio_client::{CmsClient, CmsConfig};
use folio_content::{entries_from_json, Entry};

use crate::error::{CliError, CliResult};

/// Load entries from a local snapshot, or fetch them live when no input
/// path is given.
pub(crate) async fn load_entries(
    cms: &CmsConfig,
    input: Option<&Path>,
) -> CliResult<Vec<Entry>> {
    match input {
        Some(path) => {
            if !path.exists() {
                return Err(CliError::FileNotFound(path.to_path_buf()));
            }
            let contents = std::fs::read_to_string(path)?;
            Ok(entries_from_json(&contents)?)
        }
        None => {
            let client = CmsClient::new(cms)?;
            Ok(client.fetch_entries().await?)
        }
    }
}
