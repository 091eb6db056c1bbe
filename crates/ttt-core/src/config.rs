//! Application configuration management.
//!
//! This module handles loading and saving the application configuration,
//! which holds the REST base URL and the request timeout/retry settings.
//!
//! Configuration is stored at `~/.config/ttt/config.json`. The base URL can
//! be overridden with the `TTT_API_BASE` environment variable (a `.env`
//! file is honored by the binary).

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Application name used for config/log directory paths
pub const APP_NAME: &str = "ttt";

/// Config file name
const CONFIG_FILE: &str = "config.json";

/// Environment variable overriding `api_base_url`
pub const API_BASE_ENV: &str = "TTT_API_BASE";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    #[serde(default = "default_request_timeout_ms")]
    pub request_timeout_ms: u64,
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,
    #[serde(default = "default_retry_delay_ms")]
    pub retry_delay_ms: u64,
    #[serde(default = "default_upcoming_events_limit")]
    pub upcoming_events_limit: usize,
}

fn default_api_base_url() -> String {
    "https://tacticalteam.de/api/v1".to_string()
}

fn default_request_timeout_ms() -> u64 {
    2000
}

fn default_max_retries() -> u32 {
    2
}

fn default_retry_delay_ms() -> u64 {
    500
}

fn default_upcoming_events_limit() -> usize {
    3
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            request_timeout_ms: default_request_timeout_ms(),
            max_retries: default_max_retries(),
            retry_delay_ms: default_retry_delay_ms(),
            upcoming_events_limit: default_upcoming_events_limit(),
        }
    }
}

impl Config {
    /// Load from the config file (defaults if absent), then apply the
    /// environment override.
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        let config = if path.exists() {
            let contents = std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {}", path.display()))?;
            Self::from_json(&contents)?
        } else {
            Self::default()
        };
        Ok(config.with_env_override(std::env::var(API_BASE_ENV).ok()))
    }

    pub fn from_json(contents: &str) -> Result<Self> {
        serde_json::from_str(contents).context("Failed to parse config file")
    }

    /// Replace the base URL when an override is present and non-empty.
    pub fn with_env_override(mut self, api_base: Option<String>) -> Self {
        if let Some(base) = api_base.map(|b| b.trim().to_string()).filter(|b| !b.is_empty()) {
            debug!(base = %base, "API base URL overridden from environment");
            self.api_base_url = base;
        }
        self
    }

    /// Write the config file, creating its directory. Returns the path written.
    pub fn save(&self) -> Result<PathBuf> {
        let path = Self::config_path()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }
        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(&path, contents)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;
        Ok(path)
    }

    fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find config directory"))?;
        Ok(config_dir.join(APP_NAME).join(CONFIG_FILE))
    }

    /// Directory for rolling log files.
    pub fn log_dir(&self) -> Result<PathBuf> {
        let cache_dir = dirs::cache_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find cache directory"))?;
        Ok(cache_dir.join(APP_NAME).join("logs"))
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }

    pub fn retry_delay(&self) -> Duration {
        Duration::from_millis(self.retry_delay_ms)
    }

    /// Base URL without a trailing slash, so endpoints can be appended.
    pub fn base_url(&self) -> &str {
        self.api_base_url.trim_end_matches('/')
    }
}
