use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::{Result, TripdeckError};

/// Top-level configuration for the Tripdeck application.
///
/// Loaded from `~/.tripdeck/config.toml` by default. Each section corresponds
/// to a bounded context or cross-cutting concern.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TripdeckConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub assistant: AssistantSettings,
    #[serde(default)]
    pub expenses: ExpenseSettings,
}

impl TripdeckConfig {
    /// Load configuration from a TOML file.
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: TripdeckConfig = toml::from_str(&content)?;
        info!("Configuration loaded from {}", path.display());
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the
    /// file does not exist or cannot be parsed.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                warn!(
                    "Failed to load config from {}: {}. Using defaults.",
                    path.display(),
                    e
                );
                Self::default()
            }
        }
    }

    /// Save the current configuration to a TOML file.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content =
            toml::to_string_pretty(self).map_err(|e| TripdeckError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        info!("Configuration saved to {}", path.display());
        Ok(())
    }
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Log level: trace, debug, info, warn, error.
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// AI assistant backend connection settings.
///
/// These seed the runtime configuration store; an empty endpoint means the
/// assistant answers locally with canned responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AssistantSettings {
    /// Base URL of the assistant backend. Empty means no backend configured.
    pub endpoint: String,
    /// Optional bearer credential sent with each request. Never logged.
    pub credential: String,
    /// Model identifier forwarded to the backend.
    pub model: String,
    /// Answer locally even when an endpoint is configured.
    pub mock_mode: bool,
}

impl Default for AssistantSettings {
    fn default() -> Self {
        Self {
            endpoint: String::new(),
            credential: String::new(),
            model: "default".to_string(),
            mock_mode: false,
        }
    }
}

/// Expense tracker settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExpenseSettings {
    /// Directory where the persisted expense collection lives.
    pub data_dir: String,
}

impl Default for ExpenseSettings {
    fn default() -> Self {
        Self {
            data_dir: "~/.tripdeck/data".to_string(),
        }
    }
}
