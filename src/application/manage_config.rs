//! Config management use case

use crate::domain::Role;
use crate::error::{BlockoutError, Result};
use crate::infrastructure::{Config, FileSystemWorkspace, WorkspaceRepository};
use std::str::FromStr;

const VALID_KEYS: &str = "api_url, user_id, role, first_name, token, timeout_secs";

fn unknown_key(key: &str) -> BlockoutError {
    BlockoutError::Config(format!(
        "Unknown config key: '{}'. Valid keys are: {}",
        key, VALID_KEYS
    ))
}

/// Empty values clear optional keys
fn optional(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

/// Service for managing workspace configuration
pub struct ConfigService {
    workspace: FileSystemWorkspace,
}

impl ConfigService {
    pub fn new(workspace: FileSystemWorkspace) -> Self {
        ConfigService { workspace }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = self.workspace.load_config()?;

        match key {
            "api_url" => Ok(config.api_url.unwrap_or_default()),
            "user_id" => Ok(config.user_id),
            "role" => Ok(config.role.to_string()),
            "first_name" => Ok(config.first_name.unwrap_or_default()),
            "token" => Ok(config.token.unwrap_or_default()),
            "timeout_secs" => Ok(config.timeout_secs.to_string()),
            _ => Err(unknown_key(key)),
        }
    }

    /// Set a config value
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = self.workspace.load_config()?;

        match key {
            "api_url" => config.api_url = optional(value),
            "user_id" => {
                config.user_id = optional(value)
                    .ok_or_else(|| BlockoutError::Config("user_id cannot be empty".to_string()))?
            }
            "role" => config.role = Role::from_str(value).map_err(BlockoutError::Config)?,
            "first_name" => config.first_name = optional(value),
            "token" => config.token = optional(value),
            "timeout_secs" => {
                config.timeout_secs = value
                    .trim()
                    .parse::<u64>()
                    .ok()
                    .filter(|secs| *secs > 0)
                    .ok_or_else(|| {
                        BlockoutError::Config(format!(
                            "Invalid timeout_secs: '{}'. Expected a positive number of seconds",
                            value
                        ))
                    })?
            }
            _ => return Err(unknown_key(key)),
        }

        self.workspace.save_config(&config)?;
        Ok(())
    }

    /// All config values as `key = value` pairs, with the token masked
    pub fn list(&self) -> Result<Vec<(&'static str, String)>> {
        let config = self.workspace.load_config()?;

        Ok(vec![
            ("api_url", config.api_url.unwrap_or_default()),
            ("user_id", config.user_id),
            ("role", config.role.to_string()),
            ("first_name", config.first_name.unwrap_or_default()),
            (
                "token",
                if config.token.is_some() {
                    "********".to_string()
                } else {
                    String::new()
                },
            ),
            ("timeout_secs", config.timeout_secs.to_string()),
        ])
    }
}
