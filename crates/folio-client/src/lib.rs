//! Delivery API client for the folio site engine.
//!
//! Pulls raw entries from a Contentful-style headless CMS over HTTP. All
//! transport concerns live here: the mapping layer in `folio-content` stays
//! pure and never performs I/O.
//!
//! # Module Organization
//!
//! - [`config`] - Delivery endpoint configuration
//! - [`client`] - The HTTP client itself
//! - [`error`] - Client error types
//!
//! # Example
//!
//! ```no_run
//! use folio_client::{CmsClient, CmsConfig};
//!
//! # async fn run() -> Result<(), folio_client::ClientError> {
//! let config = CmsConfig {
//!     space_id: "space123".to_string(),
//!     access_token: "token".to_string(),
//!     ..CmsConfig::default()
//! };
//!
//! let client = CmsClient::new(&config)?;
//! let sections = client.fetch_landing_sections().await?;
//! println!("mapped {} sections", sections.len());
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod error;

pub use client::CmsClient;
pub use config::CmsConfig;
pub use error::{ClientError, ClientResult};
