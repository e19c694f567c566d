//! Page metadata with default-filling resolution.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_DESCRIPTION, DEFAULT_OG_IMAGE, DEFAULT_TITLE, DEFAULT_URL};

/// Resolved metadata for one rendered page.
///
/// Always fully populated: [`PageMeta::resolve`] fills every member from
/// site defaults when the input is missing or blank, so the rendering layer
/// never has to branch on absent metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct PageMeta {
    /// Document title
    pub title: String,
    /// Meta description
    pub description: String,
    /// Canonical page URL
    pub url: String,
    /// Open Graph preview image URL
    pub image_url: String,
}

impl PageMeta {
    /// Resolve page metadata against the site defaults.
    ///
    /// `title` and `description` fall back when absent or blank (whitespace
    /// only); `url` and `image_url` fall back only when absent — a caller
    /// that explicitly supplies an empty URL keeps it.
    pub fn resolve(
        title: Option<&str>,
        description: Option<&str>,
        url: Option<&str>,
        image_url: Option<&str>,
    ) -> Self {
        Self {
            title: fallback_if_blank(title, DEFAULT_TITLE),
            description: fallback_if_blank(description, DEFAULT_DESCRIPTION),
            url: url.unwrap_or(DEFAULT_URL).to_string(),
            image_url: image_url.unwrap_or(DEFAULT_OG_IMAGE).to_string(),
        }
    }
}

impl Default for PageMeta {
    fn default() -> Self {
        Self::resolve(None, None, None, None)
    }
}

fn fallback_if_blank(value: Option<&str>, fallback: &str) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => v.to_string(),
        _ => fallback.to_string(),
    }
}
