use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{ClipguardError, Result};

pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:8000";
pub const ENDPOINT_ENV_VAR: &str = "CLIPGUARD_ENDPOINT";
pub const API_KEY_ENV_VAR: &str = "GEMINI_API_KEY";

/// Values as they may appear in `config.json`; anything missing falls through.
#[derive(Debug, Default, Serialize, Deserialize)]
struct FileConfig {
    endpoint: Option<String>,
    api_key: Option<String>,
}

/// Startup configuration, resolved once.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub endpoint: String,
    pub api_key: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            api_key: None,
        }
    }
}

impl Config {
    /// Defaults, then the user config file, then the environment.
    pub fn load() -> Result<Self> {
        let mut config = Self::default();
        if let Some(path) = Self::config_path() {
            config.merge_file(&path)?;
        }
        config.merge_env(|name| std::env::var(name).ok());
        Ok(config)
    }

    /// Get the path of the optional user config file
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("clipguard").join("config.json"))
    }

    fn merge_file(&mut self, path: &Path) -> Result<()> {
        if !path.exists() {
            return Ok(());
        }

        let content = std::fs::read_to_string(path)?;
        let file: FileConfig = serde_json::from_str(&content)
            .map_err(|e| ClipguardError::Config(format!("{}: {e}", path.display())))?;

        if let Some(endpoint) = file.endpoint {
            self.endpoint = endpoint;
        }
        if let Some(key) = file.api_key.filter(|k| !k.is_empty()) {
            self.api_key = Some(key);
        }
        tracing::debug!(path = %path.display(), "loaded config file");
        Ok(())
    }

    fn merge_env(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(endpoint) = var(ENDPOINT_ENV_VAR).filter(|v| !v.is_empty()) {
            self.endpoint = endpoint;
        }
        if let Some(key) = var(API_KEY_ENV_VAR).filter(|v| !v.is_empty()) {
            self.api_key = Some(key);
        }
    }
}
