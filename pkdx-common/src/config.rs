//! Configuration loading and defaults
//!
//! Bootstrap configuration comes from a TOML file. Every field has a
//! built-in default, so a missing file is never fatal:
//! 1. Command-line argument / environment variable (applied by the binary)
//! 2. TOML config file
//! 3. Compiled default (fallback)

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Upstream REST API root
pub const DEFAULT_API_BASE_URL: &str = "https://pokeapi.co/api/v2";

/// Artwork repository URL, `{id}` is replaced with the numeric species id
pub const DEFAULT_ARTWORK_URL_TEMPLATE: &str =
    "https://raw.githubusercontent.com/PokeAPI/sprites/master/pokemon/other/official-artwork/{id}.png";

/// Placeholder substituted in `artwork_url_template`
pub const ARTWORK_ID_PLACEHOLDER: &str = "{id}";

/// Environment variable naming an explicit config file
pub const CONFIG_PATH_ENV: &str = "PKDX_CONFIG";

/// Default bound on in-flight stage image lookups per traversal
pub const DEFAULT_MAX_CONCURRENT_LOOKUPS: usize = 4;

/// Bootstrap configuration loaded from TOML file
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct TomlConfig {
    /// Upstream REST API root (no trailing slash)
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Fallback artwork URL template containing `{id}`
    #[serde(default = "default_artwork_url_template")]
    pub artwork_url_template: String,

    /// Number of catalog entries requested from the list endpoint
    #[serde(default = "default_catalog_fetch_limit")]
    pub catalog_fetch_limit: u32,

    /// Per-request HTTP timeout for upstream calls
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// Upper bound on in-flight stage image lookups per traversal
    #[serde(default = "default_max_concurrent_lookups")]
    pub max_concurrent_lookups: usize,

    /// HTTP server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Logging configuration (optional)
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_api_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

fn default_artwork_url_template() -> String {
    DEFAULT_ARTWORK_URL_TEMPLATE.to_string()
}

fn default_catalog_fetch_limit() -> u32 {
    70
}

fn default_request_timeout_secs() -> u64 {
    30
}

fn default_max_concurrent_lookups() -> usize {
    DEFAULT_MAX_CONCURRENT_LOOKUPS
}

fn default_port() -> u16 {
    5780
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for TomlConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            artwork_url_template: default_artwork_url_template(),
            catalog_fetch_limit: default_catalog_fetch_limit(),
            request_timeout_secs: default_request_timeout_secs(),
            max_concurrent_lookups: default_max_concurrent_lookups(),
            port: default_port(),
            logging: LoggingConfig::default(),
        }
    }
}

impl TomlConfig {
    /// Parse configuration from TOML text and validate it
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: TomlConfig = toml::from_str(content)
            .map_err(|e| Error::Config(format!("Parse TOML failed: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from an explicit file path
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("Read {} failed: {}", path.display(), e)))?;
        Self::from_toml_str(&content)
    }

    /// Load configuration for a module, falling back to defaults
    ///
    /// A missing file logs a warning and yields defaults. A file that exists
    /// but fails to parse or validate is an error.
    pub fn load_or_default(module_name: &str) -> Result<Self> {
        let Some(path) = config_file_path(module_name) else {
            warn!("Could not determine config directory, using built-in defaults");
            return Ok(Self::default());
        };

        if !path.exists() {
            warn!(
                path = %path.display(),
                "Config file not found, using built-in defaults"
            );
            return Ok(Self::default());
        }

        let config = Self::load(&path)?;
        info!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }

    /// Reject values that cannot work at runtime
    pub fn validate(&self) -> Result<()> {
        if self.api_base_url.trim().is_empty() {
            return Err(Error::Config("api_base_url must not be empty".to_string()));
        }
        if !self.artwork_url_template.contains(ARTWORK_ID_PLACEHOLDER) {
            return Err(Error::Config(format!(
                "artwork_url_template must contain {}",
                ARTWORK_ID_PLACEHOLDER
            )));
        }
        if self.max_concurrent_lookups == 0 {
            return Err(Error::Config(
                "max_concurrent_lookups must be at least 1".to_string(),
            ));
        }
        if self.catalog_fetch_limit == 0 {
            return Err(Error::Config(
                "catalog_fetch_limit must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// API base with any trailing slash removed
    pub fn normalized_api_base(&self) -> &str {
        self.api_base_url.trim_end_matches('/')
    }
}

/// Config file location for a module
///
/// `PKDX_CONFIG` wins; otherwise `<config dir>/pkdx/<module>.toml`
/// (`~/.config/pkdx/` on Linux).
pub fn config_file_path(module_name: &str) -> Option<PathBuf> {
    if let Ok(path) = std::env::var(CONFIG_PATH_ENV) {
        if !path.trim().is_empty() {
            return Some(PathBuf::from(path));
        }
    }

    dirs::config_dir().map(|d| d.join("pkdx").join(format!("{}.toml", module_name)))
}
