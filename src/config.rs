use anyhow::{Context, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Default scoring service endpoint, matching a locally running service.
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:5000/interview";

/// Environment variable overriding the configured endpoint.
pub const ENDPOINT_ENV_VAR: &str = "INTERVIEW_ENDPOINT";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Endpoint receiving interview submissions.
    pub endpoint: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
        }
    }
}

impl Config {
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .or_else(|| dirs::home_dir().map(|home| home.join(".config")))
            .context("Could not determine config directory")?
            .join("interview-cli");

        Ok(config_dir.join("config.toml"))
    }

    /// Load the config file, then apply the environment override.
    ///
    /// Precedence (low to high): built-in default, config file,
    /// `INTERVIEW_ENDPOINT`. A CLI flag on top of this is applied by the
    /// caller.
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;
        debug!("Loading config from: {:?}", config_path);

        let mut config = if config_path.exists() {
            let config_content = fs::read_to_string(&config_path)
                .with_context(|| format!("Failed to read config file: {:?}", config_path))?;

            toml::from_str(&config_content)
                .with_context(|| format!("Failed to parse config file: {:?}", config_path))?
        } else {
            info!("Config file doesn't exist, using defaults");
            Self::default()
        };

        if let Ok(endpoint) = std::env::var(ENDPOINT_ENV_VAR) {
            if !endpoint.trim().is_empty() {
                debug!("Endpoint overridden from {}", ENDPOINT_ENV_VAR);
                config.endpoint = endpoint;
            }
        }

        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::get_config_path()?;
        debug!("Saving config to: {:?}", config_path);

        if let Some(config_dir) = config_path.parent() {
            if !config_dir.exists() {
                fs::create_dir_all(config_dir).with_context(|| {
                    format!("Failed to create config directory: {:?}", config_dir)
                })?;
                info!("Created config directory: {:?}", config_dir);
            }
        }

        let config_content =
            toml::to_string_pretty(self).context("Failed to serialize config to TOML")?;

        fs::write(&config_path, config_content)
            .with_context(|| format!("Failed to write config file: {:?}", config_path))?;

        info!("Config saved successfully");
        Ok(())
    }
}
