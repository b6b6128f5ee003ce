//! Configuration management for the SAR site content engine.
//!
//! Parses `sar.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! ## Environment Variable Expansion
//!
//! String configuration values support environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//!
//! Expanded fields:
//! - `store.space_id`
//! - `store.delivery_token`
//! - `store.preview_token`
//! - `store.management_token`

mod expand;

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "sar.toml";

/// Default content delivery host.
const DEFAULT_DELIVERY_HOST: &str = "https://cdn.contentful.com";
/// Default preview host (draft content).
const DEFAULT_PREVIEW_HOST: &str = "https://preview.contentful.com";
/// Default management host (write path, mission import only).
const DEFAULT_MANAGEMENT_HOST: &str = "https://api.contentful.com";

/// Application configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Content store configuration.
    pub store: Option<StoreConfig>,
    /// Site content identifiers.
    pub site: SiteConfig,

    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

/// Content store configuration.
///
/// The delivery and preview host/token pairs are distinct values selected
/// together by the preview flag. They must never be cross-wired.
#[derive(Debug, Clone, Deserialize)]
pub struct StoreConfig {
    /// Content store space identifier.
    pub space_id: String,
    /// Content store environment name.
    #[serde(default = "default_environment")]
    pub environment: String,
    /// Access token for published content.
    pub delivery_token: String,
    /// Access token for draft content.
    pub preview_token: String,
    /// Host serving published content.
    #[serde(default = "default_delivery_host")]
    pub delivery_host: String,
    /// Host serving draft content.
    #[serde(default = "default_preview_host")]
    pub preview_host: String,
    /// Access token for the management API (mission import only).
    #[serde(default)]
    pub management_token: Option<String>,
    /// Management API host.
    #[serde(default = "default_management_host")]
    pub management_host: String,
}

/// Site content identifiers.
///
/// Fixed, out-of-band entry ids the site reads by id rather than by query.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Entry id of the announcement banner.
    pub announcement_id: Option<String>,
    /// Entry id of the photo gallery attachment container.
    pub gallery_id: Option<String>,
}

fn default_environment() -> String {
    "master".to_owned()
}

fn default_delivery_host() -> String {
    DEFAULT_DELIVERY_HOST.to_owned()
}

fn default_preview_host() -> String {
    DEFAULT_PREVIEW_HOST.to_owned()
}

fn default_management_host() -> String {
    DEFAULT_MANAGEMENT_HOST.to_owned()
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`store.delivery_token`").
        field: String,
        /// Error message (e.g., "${`SAR_DELIVERY_TOKEN`} not set").
        message: String,
    },
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

/// Require a URL field to use http:// or https:// scheme.
fn require_http_url(url: &str, field: &str) -> Result<(), ConfigError> {
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(ConfigError::Validation(format!(
            "{field} must start with http:// or https://"
        )));
    }
    Ok(())
}

impl StoreConfig {
    /// Validate that all required fields are properly set.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any field is empty or has an
    /// invalid format.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.space_id, "store.space_id")?;
        require_non_empty(&self.environment, "store.environment")?;
        require_non_empty(&self.delivery_token, "store.delivery_token")?;
        require_non_empty(&self.preview_token, "store.preview_token")?;
        require_http_url(&self.delivery_host, "store.delivery_host")?;
        require_http_url(&self.preview_host, "store.preview_host")?;
        require_http_url(&self.management_host, "store.management_host")?;
        Ok(())
    }

    /// Get the validated management API token.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if `management_token` is unset or
    /// empty.
    pub fn require_management(&self) -> Result<&str, ConfigError> {
        let token = self.management_token.as_deref().ok_or_else(|| {
            ConfigError::Validation("store.management_token required for imports".to_owned())
        })?;
        require_non_empty(token, "store.management_token")?;
        Ok(token)
    }
}

impl SiteConfig {
    /// Get the configured announcement entry id.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if `site.announcement_id` is unset.
    pub fn require_announcement_id(&self) -> Result<&str, ConfigError> {
        self.announcement_id
            .as_deref()
            .filter(|id| !id.is_empty())
            .ok_or_else(|| {
                ConfigError::Validation("site.announcement_id required in config".to_owned())
            })
    }

    /// Get the configured gallery entry id.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if `site.gallery_id` is unset.
    pub fn require_gallery_id(&self) -> Result<&str, ConfigError> {
        self.gallery_id
            .as_deref()
            .filter(|id| !id.is_empty())
            .ok_or_else(|| {
                ConfigError::Validation("site.gallery_id required in config".to_owned())
            })
    }
}

impl Config {
    /// Load configuration from file.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `sar.toml` in current directory and parents.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist or parsing fails.
    pub fn load(config_path: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)
        } else {
            Ok(Self::default())
        }
    }

    /// Get validated store configuration.
    ///
    /// Returns the store config if the `[store]` section is present and all
    /// fields are valid. Use this instead of accessing the `store` field
    /// directly when the command requires the content store.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if the section is missing or invalid.
    pub fn require_store(&self) -> Result<&StoreConfig, ConfigError> {
        let store = self.store.as_ref().ok_or_else(|| {
            ConfigError::Validation("[store] section required in config".to_owned())
        })?;
        store.validate()?;
        Ok(store)
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        config.expand_env_vars()?;
        config.config_path = Some(path.to_path_buf());

        Ok(config)
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        if let Some(ref mut store) = self.store {
            store.space_id = expand::expand_env(&store.space_id, "store.space_id")?;
            store.delivery_token =
                expand::expand_env(&store.delivery_token, "store.delivery_token")?;
            store.preview_token = expand::expand_env(&store.preview_token, "store.preview_token")?;
            if let Some(ref token) = store.management_token {
                store.management_token =
                    Some(expand::expand_env(token, "store.management_token")?);
            }
        }
        Ok(())
    }
}
