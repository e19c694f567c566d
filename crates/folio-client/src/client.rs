//! Delivery API HTTP client.
//!
//! Fetches raw entries for the landing page and hands them to the mapping
//! layer. Responses are decoded with `folio-content`, so the client never
//! interprets entry fields itself.

use std::time::Duration;

use reqwest::Client;
use tracing::{debug, warn};

use folio_content::{entries_from_json, map_sections, Entry};
use folio_types::Section;

use crate::config::CmsConfig;
use crate::error::{ClientError, ClientResult};

/// Default HTTP timeout for delivery requests.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Client for a Contentful-style delivery API.
#[derive(Debug, Clone)]
pub struct CmsClient {
    /// HTTP client
    client: Client,
    /// Endpoint configuration
    config: CmsConfig,
}

impl CmsClient {
    /// Create a new delivery client.
    ///
    /// Fails fast on an unusable config (missing space id or token) so the
    /// first fetch does not turn it into a confusing 401.
    pub fn new(config: &CmsConfig) -> ClientResult<Self> {
        config.validate().map_err(ClientError::config)?;

        let client = Client::builder()
            .timeout(DEFAULT_TIMEOUT)
            .build()
            .map_err(|e| ClientError::config(format!("failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            config: config.clone(),
        })
    }

    /// The entries endpoint for the configured space and environment.
    fn entries_url(&self) -> String {
        format!(
            "{}/spaces/{}/environments/{}/entries",
            self.config.base_url.trim_end_matches('/'),
            self.config.space_id,
            self.config.environment
        )
    }

    /// Fetch raw entries for the landing page.
    pub async fn fetch_entries(&self) -> ClientResult<Vec<Entry>> {
        let url = self.entries_url();
        debug!(url = %url, "Fetching entries from delivery api");

        let limit = self.config.page_size.to_string();
        let response = self
            .client
            .get(&url)
            .query(&[
                ("access_token", self.config.access_token.as_str()),
                ("limit", limit.as_str()),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            warn!(status, "Delivery api returned an error");
            return Err(ClientError::Api { status, body });
        }

        let body = response.text().await?;
        let entries = entries_from_json(&body)?;
        debug!(count = entries.len(), "Fetched entries");
        Ok(entries)
    }

    /// Fetch entries and map them into render-ready sections.
    ///
    /// Unsupported entries are skipped, per the mapping contract.
    pub async fn fetch_landing_sections(&self) -> ClientResult<Vec<Section>> {
        let entries = self.fetch_entries().await?;
        let sections = map_sections(&entries);
        debug!(
            entries = entries.len(),
            sections = sections.len(),
            "Mapped landing page sections"
        );
        Ok(sections)
    }
}
