//! Configuration loading
//!
//! Reads `config.toml` from the user config directory (or an explicit path).
//! A missing file yields defaults; an unreadable or invalid file yields defaults
//! plus a warning for the caller to surface.

use std::fs;
use std::path::{Path, PathBuf};

mod types;

pub use types::{ApiConfig, Config, GeolocationConfig, MenuConfig, TimingConfig};
#[allow(unused_imports)]
pub use types::{
    DEFAULT_API_BASE, DEFAULT_BLUR_GRACE_MS, DEFAULT_DEBOUNCE_MS, DEFAULT_DISTANCE_RADIUS,
    DEFAULT_RESULT_LIMIT, DEFAULT_TIMEOUT_MS,
};

use crate::error::CacError;

const CONFIG_DIR_NAME: &str = "cac";
const CONFIG_FILE_NAME: &str = "config.toml";

/// Outcome of loading the configuration
#[derive(Debug, Clone)]
pub struct ConfigResult {
    pub config: Config,
    /// Set when a config file existed but could not be used
    pub warning: Option<String>,
}

/// Default config file location: `$XDG_CONFIG_HOME/cac/config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}

/// Load configuration from `path`, or from the default location when `None`
pub fn load_config(path: Option<&Path>) -> ConfigResult {
    let path = match path {
        Some(p) => p.to_path_buf(),
        None => match default_config_path() {
            Some(p) => p,
            None => {
                return ConfigResult {
                    config: Config::default(),
                    warning: None,
                };
            }
        },
    };

    match read_config_file(&path) {
        Ok(Some(config)) => ConfigResult {
            config,
            warning: None,
        },
        Ok(None) => ConfigResult {
            config: Config::default(),
            warning: None,
        },
        Err(e) => {
            log::warn!("Ignoring config file {}: {}", path.display(), e);
            ConfigResult {
                config: Config::default(),
                warning: Some(format!("{}: {}", path.display(), e)),
            }
        }
    }
}

/// Read and parse a config file; `Ok(None)` when the file does not exist
fn read_config_file(path: &Path) -> Result<Option<Config>, CacError> {
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(path)?;
    parse_config(&content).map(Some)
}

/// Parse TOML config text
pub fn parse_config(content: &str) -> Result<Config, CacError> {
    toml::from_str(content).map_err(|e| CacError::Config(e.message().to_string()))
}

/// Render the config as TOML with the API key masked
pub fn render_config(config: &Config) -> String {
    let mut masked = config.clone();
    if let Some(key) = masked.api.api_key.as_mut() {
        *key = mask_secret(key);
    }
    toml::to_string(&masked).unwrap_or_default()
}

fn mask_secret(secret: &str) -> String {
    let visible: String = secret.chars().take(4).collect();
    if secret.chars().count() <= 4 {
        "****".to_string()
    } else {
        format!("{}****", visible)
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
