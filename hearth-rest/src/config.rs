// hearth-rest/src/config.rs
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Result};
use directories::BaseDirs;
use serde::{Deserialize, Serialize};

use crate::client::DEFAULT_MAX_REDIRECT_HOPS;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    /// Root endpoint prepended to every request path.
    #[serde(default)]
    pub root_endpoint: String,
    /// Hop limit for the redirect-following call variants.
    #[serde(default = "default_max_redirect_hops")]
    pub max_redirect_hops: u32,
    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            root_endpoint: String::new(),
            max_redirect_hops: default_max_redirect_hops(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_max_redirect_hops() -> u32 {
    DEFAULT_MAX_REDIRECT_HOPS
}

fn default_timeout_secs() -> u64 {
    30
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            fs::create_dir_all(&config_dir)?;
        }

        let config_path = config_dir.join("config.toml");

        let mut config = if config_path.exists() {
            Self::load_from(&config_path)?
        } else {
            Self::default()
        };

        // Applies on fresh installs too, where no config.toml exists yet
        config.apply_endpoint_override(std::env::var("HEARTH_ENDPOINT").ok());

        Ok(config)
    }

    /// Allow the endpoint to be overridden by the `HEARTH_ENDPOINT`
    /// environment variable.
    fn apply_endpoint_override(&mut self, root: Option<String>) {
        if let Some(root) = root {
            self.root_endpoint = root;
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            fs::create_dir_all(&config_dir)?;
        }

        let content = toml::to_string_pretty(self)?;
        fs::write(config_dir.join("config.toml"), content)?;
        Ok(())
    }

    fn config_dir() -> Result<PathBuf> {
        let base_dirs =
            BaseDirs::new().ok_or_else(|| anyhow!("Cannot determine config directory"))?;
        Ok(base_dirs.config_dir().join("hearth"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config: Config = toml::from_str(r#"root_endpoint = "https://api.example.com""#).unwrap();
        assert_eq!(config.root_endpoint, "https://api.example.com");
        assert_eq!(config.max_redirect_hops, 10);
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn endpoint_override_applies_to_a_fresh_default_config() {
        let mut config = Config::default();
        config.apply_endpoint_override(Some("https://env.example.com".to_string()));
        assert_eq!(config.root_endpoint, "https://env.example.com");
    }

    #[test]
    fn endpoint_override_replaces_a_configured_endpoint() {
        let mut config: Config =
            toml::from_str(r#"root_endpoint = "https://file.example.com""#).unwrap();
        config.apply_endpoint_override(Some("https://env.example.com".to_string()));
        assert_eq!(config.root_endpoint, "https://env.example.com");
    }

    #[test]
    fn absent_override_keeps_the_configured_endpoint() {
        let mut config: Config =
            toml::from_str(r#"root_endpoint = "https://file.example.com""#).unwrap();
        config.apply_endpoint_override(None);
        assert_eq!(config.root_endpoint, "https://file.example.com");
    }

    #[test]
    fn round_trips_through_toml() {
        let config = Config {
            root_endpoint: "http://localhost:9191".to_string(),
            max_redirect_hops: 3,
            timeout_secs: 5,
        };
        let text = toml::to_string_pretty(&config).unwrap();
        let back: Config = toml::from_str(&text).unwrap();
        assert_eq!(back.root_endpoint, config.root_endpoint);
        assert_eq!(back.max_redirect_hops, 3);
        assert_eq!(back.timeout_secs, 5);
    }
}
