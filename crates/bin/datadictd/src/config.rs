//! Configuration loading — TOML file with environment variable overrides.
//!
//! Looks for `datadict.toml` in the working directory. Every field has a
//! sensible default so the file is optional. Environment variables take
//! precedence over file values.

use std::path::PathBuf;

use datadict_adapter_http_axum::state::{DEFAULT_PAGE_PATH, DEFAULT_PAGE_TITLE, PageSettings};
use serde::Deserialize;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTTP server settings.
    pub server: ServerConfig,
    /// Data-layer settings.
    pub catalog: CatalogConfig,
    /// Dictionary page settings.
    pub page: PageConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
}

/// HTTP listener configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to bind to (e.g. `0.0.0.0`).
    pub host: String,
    /// TCP port.
    pub port: u16,
}

/// Location of the pre-built JSON payload.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Path of the JSON file produced by the site build.
    pub path: PathBuf,
}

/// Dictionary page configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    /// URL path the page is served under.
    pub path: String,
    /// Page title.
    pub title: String,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

impl Config {
    /// Load configuration from `datadict.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if the
    /// resulting configuration is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file("datadict.toml")?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("DATADICT_HOST") {
            self.server.host = val;
        }
        if let Ok(val) = std::env::var("DATADICT_PORT")
            && let Ok(port) = val.parse()
        {
            self.server.port = port;
        }
        if let Ok(val) = std::env::var("DATADICT_BIND")
            && let Some((host, port)) = val.rsplit_once(':')
        {
            self.server.host = host.to_string();
            if let Ok(port) = port.parse() {
                self.server.port = port;
            }
        }
        if let Ok(val) = std::env::var("DATADICT_CATALOG") {
            self.catalog.path = PathBuf::from(val);
        }
        if let Ok(val) = std::env::var("DATADICT_PAGE_PATH") {
            self.page.path = val;
        }
        if let Ok(val) = std::env::var("DATADICT_LOG") {
            self.logging.filter = val;
        }
        if let Ok(val) = std::env::var("RUST_LOG") {
            self.logging.filter = val;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation("port must be non-zero".to_string()));
        }
        if self.catalog.path.as_os_str().is_empty() {
            return Err(ConfigError::Validation(
                "catalog path must not be empty".to_string(),
            ));
        }
        let page_path = self.page.path.as_str();
        if !page_path.starts_with('/') || page_path == "/" {
            return Err(ConfigError::Validation(format!(
                "page path {page_path:?} must start with '/' and not be the root"
            )));
        }
        if page_path == "/api" || page_path.starts_with("/api/") || page_path == "/health" {
            return Err(ConfigError::Validation(format!(
                "page path {page_path:?} collides with a reserved route"
            )));
        }
        Ok(())
    }

    /// Return the `host:port` bind address.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Return the page settings handed to the HTTP adapter.
    #[must_use]
    pub fn page_settings(&self) -> PageSettings {
        PageSettings {
            path: self.page.path.clone(),
            title: self.page.title.clone(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("data-dictionary.json"),
        }
    }
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            path: DEFAULT_PAGE_PATH.to_string(),
            title: DEFAULT_PAGE_TITLE.to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "datadictd=info,datadict=info,tower_http=debug".to_string(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}
