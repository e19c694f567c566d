//! CLI configuration.

use std::path::{Path, PathBuf};

use regex::Regex;
use serde::{Deserialize, Serialize};

use folio_client::CmsConfig;
use folio_types::PageMeta;

use crate::error::{CliError, CliResult};

/// Expand environment variables in a string.
/// Supports `${VAR_NAME}` syntax; unknown variables are left as-is.
fn expand_env_vars(input: &str) -> String {
    let re = Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)\}").unwrap();
    re.replace_all(input, |caps: &regex::Captures| {
        let var_name = &caps[1];
        std::env::var(var_name).unwrap_or_else(|_| caps[0].to_string())
    })
    .to_string()
}

/// CLI configuration loaded from TOML.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Delivery API configuration.
    pub cms: CmsConfig,
    /// Per-deployment page metadata overrides.
    pub site: SiteConfig,
}

/// Page metadata overrides; anything unset falls back to the site defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Document title override.
    pub title: Option<String>,
    /// Meta description override.
    pub description: Option<String>,
    /// Canonical URL override.
    pub url: Option<String>,
    /// Open Graph image override.
    pub og_image: Option<String>,
}

impl SiteConfig {
    /// Resolve the overrides into fully-populated page metadata.
    pub fn resolve_meta(&self) -> PageMeta {
        PageMeta::resolve(
            self.title.as_deref(),
            self.description.as_deref(),
            self.url.as_deref(),
            self.og_image.as_deref(),
        )
    }
}

impl CliConfig {
    /// Load configuration from a file.
    ///
    /// A missing file yields the defaults. `${VAR}` environment variables
    /// are expanded in the delivery access token.
    pub fn load(path: &Path) -> CliResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&contents)?;

        config.cms.access_token = expand_env_vars(&config.cms.access_token);

        Ok(config)
    }

    /// Load configuration from the default location.
    pub fn load_default() -> CliResult<Self> {
        let path = default_config_path();
        Self::load(&path)
    }

    /// Save configuration to a file.
    pub fn save(&self, path: &Path) -> CliResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let contents = toml::to_string_pretty(self)
            .map_err(|e| CliError::config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, contents)?;
        Ok(())
    }
}

/// Get the base directory for folio configuration.
pub fn default_base_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("FOLIO_CONFIG_DIR") {
        return PathBuf::from(dir);
    }

    directories::ProjectDirs::from("com", "gah-code", "folio")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .unwrap_or_else(|| {
            std::env::var("HOME")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("."))
                .join(".folio")
        })
}

/// Get the default config file path.
pub fn default_config_path() -> PathBuf {
    default_base_dir().join("config.toml")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_missing_file_yields_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config = CliConfig::load(&temp_dir.path().join("missing.toml")).unwrap();
        assert_eq!(config.cms.environment, "master");
        assert!(config.site.title.is_none());
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");

        let mut config = CliConfig::default();
        config.cms.space_id = "space123".to_string();
        config.site.title = Some("Custom title".to_string());
        config.save(&path).unwrap();

        let loaded = CliConfig::load(&path).unwrap();
        assert_eq!(loaded.cms.space_id, "space123");
        assert_eq!(loaded.site.title.as_deref(), Some("Custom title"));
    }

    #[test]
    fn test_access_token_env_expansion() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(
            &path,
            "[cms]\nspace_id = \"space123\"\naccess_token = \"${FOLIO_TEST_TOKEN}\"\n",
        )
        .unwrap();

        std::env::set_var("FOLIO_TEST_TOKEN", "secret-token");
        let config = CliConfig::load(&path).unwrap();
        assert_eq!(config.cms.access_token, "secret-token");
    }

    #[test]
    fn test_unknown_env_var_left_as_is() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "[cms]\naccess_token = \"${FOLIO_UNSET_VAR_XYZ}\"\n").unwrap();

        let config = CliConfig::load(&path).unwrap();
        assert_eq!(config.cms.access_token, "${FOLIO_UNSET_VAR_XYZ}");
    }

    #[test]
    fn test_site_meta_resolution_falls_back() {
        let site = SiteConfig {
            title: Some("Custom".to_string()),
            ..SiteConfig::default()
        };
        let meta = site.resolve_meta();
        assert_eq!(meta.title, "Custom");
        assert_eq!(meta.url, folio_types::constants::DEFAULT_URL);
    }

    #[test]
    fn test_bad_toml_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "not = [valid").unwrap();
        assert!(matches!(CliConfig::load(&path), Err(CliError::Toml(_))));
    }
}
