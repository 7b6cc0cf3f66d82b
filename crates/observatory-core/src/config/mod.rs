//! Configuration management for the observatory.
//!
//! Configuration is loaded from multiple sources with the following priority:
//! 1. Environment variables (highest priority)
//! 2. Project-local `observatory.toml` file
//! 3. User config `~/.config/observatory/config.toml`
//! 4. Built-in defaults (lowest priority)

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

mod defaults;

pub use defaults::*;

use crate::selection::ClassSource;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Main configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Input data configuration.
    pub data: DataConfig,

    /// Static asset configuration.
    pub assets: AssetsConfig,

    /// Web server configuration.
    pub server: ServerConfig,

    /// Class selection configuration.
    pub selection: SelectionConfig,
}

impl Config {
    /// Load configuration from default locations.
    ///
    /// Searches for config in order:
    /// 1. `./observatory.toml` (project local)
    /// 2. `~/.config/observatory/config.toml` (user config)
    /// 3. Falls back to defaults
    pub fn load() -> Result<Self, ConfigError> {
        if Path::new("observatory.toml").exists() {
            return Self::from_file("observatory.toml");
        }

        if let Some(config_dir) = dirs::config_dir() {
            let user_config = config_dir.join("observatory").join("config.toml");
            if user_config.exists() {
                return Self::from_file(&user_config);
            }
        }

        let mut config = Self::default();
        config.apply_env_overrides()?;
        Ok(config)
    }

    /// Load configuration from a specific file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Config = toml::from_str(&content)?;

        config.apply_env_overrides()?;

        Ok(config)
    }

    /// Apply environment variable overrides.
    fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        if let Ok(file) = std::env::var("OBSERVATORY_DATA_FILE") {
            self.data.hierarchy_file = file;
        }
        if let Ok(dir) = std::env::var("OBSERVATORY_ASSETS_DIR") {
            self.assets.dir = dir;
        }
        if let Ok(host) = std::env::var("OBSERVATORY_HOST") {
            self.server.host = host;
        }
        if let Ok(port) = std::env::var("OBSERVATORY_PORT") {
            if let Ok(n) = port.parse() {
                self.server.port = n;
            }
        }
        if let Ok(source) = std::env::var("OBSERVATORY_CLASS_SOURCE") {
            self.selection.source = source.parse().map_err(ConfigError::Invalid)?;
        }
        if let Ok(class) = std::env::var("OBSERVATORY_DEFAULT_CLASS") {
            self.selection.default_class = class;
        }

        Ok(())
    }

    /// Create a default config file content as a string.
    pub fn default_config_string() -> String {
        let config = Config::default();
        toml::to_string_pretty(&config).unwrap_or_default()
    }
}

/// Input data configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    /// Path to the class usage-count JSON tree.
    pub hierarchy_file: String,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            hierarchy_file: DEFAULT_HIERARCHY_FILE.to_string(),
        }
    }
}

/// Static asset configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetsConfig {
    /// Assets directory on disk, served under `/assets`.
    pub dir: String,

    /// Plot images subdirectory inside `dir`.
    pub plots_dir: String,

    /// File name suffix of plot images.
    pub plot_suffix: String,
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self {
            dir: DEFAULT_ASSETS_DIR.to_string(),
            plots_dir: DEFAULT_PLOTS_DIR.to_string(),
            plot_suffix: DEFAULT_PLOT_SUFFIX.to_string(),
        }
    }
}

impl AssetsConfig {
    /// Plot directory on disk.
    pub fn plots_path(&self) -> PathBuf {
        PathBuf::from(&self.dir).join(&self.plots_dir)
    }

    /// Plot directory as seen by the browser, e.g. `assets/plots`.
    pub fn plots_url_path(&self) -> String {
        format!("{}/{}", ASSETS_ROUTE, self.plots_dir.trim_matches('/'))
    }
}

/// Web server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,

    pub port: u16,

    /// Open the dashboard in a browser once the server is up.
    pub open_browser: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            open_browser: false,
        }
    }
}

/// Class selection configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectionConfig {
    /// Where dropdown labels come from.
    pub source: ClassSource,

    /// Label selected on page load.
    pub default_class: String,

    /// Namespace given to labels derived from plot file names.
    pub namespace: String,
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            source: ClassSource::default(),
            default_class: DEFAULT_CLASS.to_string(),
            namespace: DEFAULT_NAMESPACE.to_string(),
        }
    }
}
