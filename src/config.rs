//! Application configuration
//!
//! Built-in defaults, overridden by an optional TOML file in the user's
//! config directory, overridden by environment variables:
//! - Linux: ~/.config/plant-shop/config.toml
//! - macOS: ~/Library/Application Support/plant-shop/config.toml
//! - Windows: %APPDATA%\plant-shop\config.toml

use reqwest::Url;
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const DEFAULT_API_BASE: &str = "https://openapi.programming-hero.com/api";
pub const DEFAULT_CURRENCY: &str = "৳";

pub const ENV_API_BASE: &str = "PLANT_SHOP_API_BASE";
pub const ENV_CURRENCY: &str = "PLANT_SHOP_CURRENCY";
pub const ENV_LOG_JSON: &str = "PLANT_SHOP_LOG_JSON";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("invalid API base URL {url:?}: {reason}")]
    BaseUrl { url: String, reason: String },
}

/// Resolved settings
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub api_base: Url,
    pub currency_symbol: String,
    pub log_json: bool,
}

/// On-disk shape; every key is optional
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct FileConfig {
    api_base: Option<String>,
    currency_symbol: Option<String>,
    log_json: Option<bool>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            // Constant input, covered by test_defaults
            api_base: Url::parse(DEFAULT_API_BASE).expect("built-in API base URL is valid"),
            currency_symbol: DEFAULT_CURRENCY.to_string(),
            log_json: false,
        }
    }
}

impl Config {
    /// Load from the standard location and the process environment
    pub fn load() -> Result<Self, ConfigError> {
        let file = match Self::get_config_path() {
            Some(path) if path.exists() => {
                let contents =
                    std::fs::read_to_string(&path).map_err(|source| ConfigError::Read {
                        path: path.clone(),
                        source,
                    })?;
                Some(parse_file(&contents, &path)?)
            }
            _ => None,
        };
        Self::resolve(file.unwrap_or_default(), |key| std::env::var(key).ok())
    }

    /// Get the path where the config file is looked up
    pub fn get_config_path() -> Option<PathBuf> {
        let mut path = dirs::config_dir().or_else(dirs::home_dir)?;
        path.push("plant-shop");
        path.push("config.toml");
        Some(path)
    }

    fn resolve(
        file: FileConfig,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let mut config = Config::default();

        if let Some(base) = env(ENV_API_BASE).or(file.api_base) {
            config.api_base = parse_base(&base)?;
        }
        if let Some(symbol) = env(ENV_CURRENCY).or(file.currency_symbol) {
            config.currency_symbol = symbol;
        }
        if let Some(flag) = env(ENV_LOG_JSON).and_then(|v| parse_bool(&v)).or(file.log_json) {
            config.log_json = flag;
        }

        Ok(config)
    }
}

/// Parse the contents of the config file found at `path`
fn parse_file(contents: &str, path: &Path) -> Result<FileConfig, ConfigError> {
    toml::from_str(contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

fn parse_base(raw: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(raw.trim()).map_err(|e| ConfigError::BaseUrl {
        url: raw.to_string(),
        reason: e.to_string(),
    })?;
    if url.cannot_be_a_base() || !matches!(url.scheme(), "http" | "https") {
        return Err(ConfigError::BaseUrl {
            url: raw.to_string(),
            reason: "expected an http(s) URL".to_string(),
        });
    }
    Ok(url)
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw {
        "1" | "true" | "TRUE" | "yes" | "YES" => Some(true),
        "0" | "false" | "FALSE" | "no" | "NO" => Some(false),
        _ => None,
    }
}
