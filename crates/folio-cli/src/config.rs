//! CLI configuration.
//!
//! Loaded from TOML. The file is resolved from `--config`, then
//! `FOLIO_CONFIG`, then `<config dir>/folio/config.toml`. A missing file
//! means defaults. `FOLIO_API_*` variables override file values.

use std::path::{Path, PathBuf};
use std::time::Duration;

use folio_client::ClientConfig;
use folio_client::source::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
use folio_core::{Error, Result};
use serde::{Deserialize, Serialize};

/// Environment variable naming the config file.
pub const CONFIG_ENV: &str = "FOLIO_CONFIG";
/// Overrides `api.base_url`.
pub const BASE_URL_ENV: &str = "FOLIO_API_BASE_URL";
/// Overrides `api.token`.
pub const TOKEN_ENV: &str = "FOLIO_API_TOKEN";
/// Overrides `api.timeout_secs`.
pub const TIMEOUT_ENV: &str = "FOLIO_API_TIMEOUT_SECS";

/// Template API settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// API root URL
    pub base_url: String,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
    /// Bearer token for authenticated requests
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT.as_secs(),
            token: None,
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Filter directives used when `RUST_LOG` is unset
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info,folio=debug".to_string(),
        }
    }
}

/// Complete CLI configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FolioConfig {
    /// Template API
    pub api: ApiConfig,
    /// Logging
    pub log: LogConfig,
}

impl FolioConfig {
    /// `<config dir>/folio/config.toml`, if the platform has a config dir.
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("folio").join("config.toml"))
    }

    /// Resolve the config file path from the flag, the environment, or the
    /// platform default, in that order.
    pub fn resolve_config_path(explicit: Option<&str>) -> Option<PathBuf> {
        Self::resolve_config_path_with(explicit, |key| std::env::var(key).ok())
    }

    fn resolve_config_path_with(
        explicit: Option<&str>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Option<PathBuf> {
        explicit
            .map(PathBuf::from)
            .or_else(|| env(CONFIG_ENV).filter(|p| !p.is_empty()).map(PathBuf::from))
            .or_else(Self::default_config_path)
    }

    /// Load the config file (or defaults) and apply environment overrides.
    pub fn load(explicit: Option<&str>) -> Result<Self> {
        let mut config = match Self::resolve_config_path(explicit) {
            Some(path) => Self::load_from(&path)?,
            None => Self::default(),
        };
        config.apply_env_overrides(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// Parse a config file; a missing file yields defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::debug!("No config file at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config = toml::from_str(&content)
            .map_err(|e| Error::config(format!("Failed to parse {}: {e}", path.display())))?;
        log::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Apply `FOLIO_API_*` overrides read through `env`.
    pub fn apply_env_overrides(&mut self, env: impl Fn(&str) -> Option<String>) -> Result<()> {
        if let Some(base_url) = env(BASE_URL_ENV) {
            self.api.base_url = base_url;
        }
        if let Some(token) = env(TOKEN_ENV) {
            self.api.token = Some(token).filter(|t| !t.is_empty());
        }
        if let Some(timeout) = env(TIMEOUT_ENV) {
            self.api.timeout_secs = timeout.trim().parse().map_err(|e| {
                Error::config(format!("{TIMEOUT_ENV} must be a whole number of seconds: {e}"))
            })?;
        }
        Ok(())
    }

    /// Serialize as pretty TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::config(e.to_string()))
    }

    /// Connection settings for the template API.
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            base_url: self.api.base_url.clone(),
            token: self.api.token.clone(),
            timeout: Duration::from_secs(self.api.timeout_secs),
        }
    }
}
