//! Configuration management

use crate::domain::{Actor, Role};
use crate::error::{BlockoutError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const WORKSPACE_DIR: &str = ".blockout";
const CONFIG_FILE: &str = "config.toml";
const DEFAULT_TIMEOUT_SECS: u64 = 10;

fn default_timeout() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the scheduling API; requests go to the outbox when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_url: Option<String>,
    pub user_id: String,
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl Config {
    /// Create a new config with default values
    pub fn new(user_id: impl Into<String>, role: Role) -> Self {
        Config {
            api_url: None,
            user_id: user_id.into(),
            role,
            first_name: None,
            token: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Load config from .blockout/config.toml in the given directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(WORKSPACE_DIR).join(CONFIG_FILE);

        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                BlockoutError::NotWorkspace(path.to_path_buf())
            } else {
                BlockoutError::Io(e)
            }
        })?;

        toml::from_str(&contents)
            .map_err(|e| BlockoutError::Config(format!("Failed to parse config.toml: {}", e)))
    }

    /// Save config to .blockout/config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let workspace_dir = path.join(WORKSPACE_DIR);
        let config_path = workspace_dir.join(CONFIG_FILE);

        if !workspace_dir.exists() {
            fs::create_dir(&workspace_dir)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| BlockoutError::Config(format!("Failed to serialize config: {}", e)))?;

        fs::write(&config_path, contents)?;

        Ok(())
    }

    /// API token, with BLOCKOUT_TOKEN taking precedence over the stored one
    pub fn get_token(&self) -> Option<String> {
        std::env::var("BLOCKOUT_TOKEN")
            .ok()
            .filter(|token| !token.is_empty())
            .or_else(|| self.token.clone())
    }

    /// The user this workspace acts as
    pub fn actor(&self) -> Actor {
        Actor {
            id: self.user_id.clone(),
            role: self.role,
            first_name: self.first_name.clone(),
        }
    }
}
