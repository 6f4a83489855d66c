//! Initialize workspace use case

use crate::error::Result;
use crate::infrastructure::{Config, FileSystemWorkspace, WorkspaceRepository};
use std::fs;
use std::path::Path;

/// Initialize a new workspace at the specified path.
pub fn init(path: &Path, config: &Config) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }

    let workspace = FileSystemWorkspace::new(path.to_path_buf());
    workspace.initialize()?;
    workspace.save_config(config)?;

    println!("Initialized blockout workspace at {}", path.display());
    println!("Acting as {} ({})", config.user_id, config.role);
    match &config.api_url {
        Some(url) => println!("API: {}", url),
        None => println!("API: none (requests are queued in the outbox)"),
    }

    Ok(())
}
