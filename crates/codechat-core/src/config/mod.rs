use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::CodechatError;

/// Environment variable that overrides `backend.base_url`.
pub const BACKEND_URL_ENV: &str = "CODECHAT_BACKEND_URL";

pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Settings {
    #[serde(default)]
    pub backend: BackendSettings,
    #[serde(default)]
    pub ui: UiSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BackendSettings {
    pub base_url: String,
    /// Unset means the transport default (no client-side timeout).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UiSettings {
    pub theme: String,
}

impl Default for BackendSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BACKEND_URL.to_string(),
            request_timeout_secs: None,
        }
    }
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            theme: "dark".to_string(),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            backend: BackendSettings::default(),
            ui: UiSettings::default(),
        }
    }
}

impl BackendSettings {
    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }
}

impl Settings {
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("codechat")
            .join("config.toml")
    }

    /// Load from the default location, then apply the environment override.
    /// A missing or unreadable file yields defaults.
    pub fn load() -> Self {
        let mut settings = Self::load_from(&Self::config_path()).unwrap_or_else(|e| {
            tracing::warn!("Ignoring config file: {e}");
            Self::default()
        });
        settings.apply_env_override(std::env::var(BACKEND_URL_ENV).ok());
        settings
    }

    pub fn load_from(path: &Path) -> Result<Self, CodechatError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| CodechatError::Config(e.to_string()))
    }

    pub fn save(&self) -> Result<(), CodechatError> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, path: &Path) -> Result<(), CodechatError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content =
            toml::to_string_pretty(self).map_err(|e| CodechatError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn apply_env_override(&mut self, backend_url: Option<String>) {
        if let Some(url) = backend_url.filter(|u| !u.trim().is_empty()) {
            self.backend.base_url = url.trim().to_string();
        }
    }

    /// Build the HTTP backend client described by these settings.
    pub fn build_backend(&self) -> Result<crate::backend::HttpBackend, CodechatError> {
        crate::backend::HttpBackend::from_settings(&self.backend)
    }
}
