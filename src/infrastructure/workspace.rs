//! Workspace discovery and local state

use crate::error::{BlockoutError, Result};
use crate::infrastructure::config::WORKSPACE_DIR;
use crate::infrastructure::Config;
use std::fs;
use std::path::{Path, PathBuf};

const OUTBOX_FILE: &str = "outbox.jsonl";

/// Abstract workspace operations
pub trait WorkspaceRepository {
    /// Get the root directory of this workspace
    fn root(&self) -> &Path;

    /// Load configuration from .blockout/config.toml
    fn load_config(&self) -> Result<Config>;

    /// Save configuration to .blockout/config.toml
    fn save_config(&self, config: &Config) -> Result<()>;

    /// Check if .blockout directory exists
    fn is_initialized(&self) -> bool;

    /// Create .blockout directory structure
    fn initialize(&self) -> Result<()>;
}

/// File system implementation of WorkspaceRepository
#[derive(Debug, Clone)]
pub struct FileSystemWorkspace {
    pub root: PathBuf,
}

impl FileSystemWorkspace {
    /// Create a new workspace with the given root directory
    pub fn new(root: PathBuf) -> Self {
        FileSystemWorkspace { root }
    }

    /// Discover the workspace root.
    /// BLOCKOUT_ROOT wins; otherwise walk up from the current directory.
    pub fn discover() -> Result<Self> {
        if let Ok(root_path) = std::env::var("BLOCKOUT_ROOT") {
            let path = PathBuf::from(root_path);
            if Self::has_workspace_dir(&path) {
                return Ok(FileSystemWorkspace::new(path));
            } else {
                return Err(BlockoutError::Config(format!(
                    "BLOCKOUT_ROOT is set to '{}' but no .blockout directory found. \
                    Run 'blockout init' in that directory or unset BLOCKOUT_ROOT.",
                    path.display()
                )));
            }
        }

        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Discover the workspace root by walking up from a specific directory
    pub fn discover_from(start: &Path) -> Result<Self> {
        let mut current = start.to_path_buf();

        loop {
            if Self::has_workspace_dir(&current) {
                return Ok(FileSystemWorkspace::new(current));
            }

            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => return Err(BlockoutError::NotWorkspace(start.to_path_buf())),
            }
        }
    }

    fn has_workspace_dir(path: &Path) -> bool {
        path.join(WORKSPACE_DIR).is_dir()
    }

    /// Where queued mutations are written while offline
    pub fn outbox_path(&self) -> PathBuf {
        self.root.join(WORKSPACE_DIR).join(OUTBOX_FILE)
    }
}

impl WorkspaceRepository for FileSystemWorkspace {
    fn root(&self) -> &Path {
        &self.root
    }

    fn load_config(&self) -> Result<Config> {
        Config::load_from_dir(&self.root)
    }

    fn save_config(&self, config: &Config) -> Result<()> {
        config.save_to_dir(&self.root)
    }

    fn is_initialized(&self) -> bool {
        Self::has_workspace_dir(&self.root)
    }

    fn initialize(&self) -> Result<()> {
        let workspace_dir = self.root.join(WORKSPACE_DIR);

        if workspace_dir.exists() {
            return Err(BlockoutError::Config(format!(
                "Directory already initialized: {}",
                self.root.display()
            )));
        }

        fs::create_dir(&workspace_dir)?;
        Ok(())
    }
}
