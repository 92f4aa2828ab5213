//! Path resolution for focusdo configuration and data files.
//!
//! All focusdo data is stored in `~/.focusdo/`:
//! - `config.yaml` - Main configuration file
//! - `focusdo.db` - SQLite database holding the tasks

use std::path::PathBuf;

use crate::error::FocusdoError;

/// Paths to focusdo configuration and data files.
#[derive(Debug, Clone)]
pub struct Paths {
    /// Root directory: `~/.focusdo/`
    pub root: PathBuf,
    /// Config file: `~/.focusdo/config.yaml`
    pub config_file: PathBuf,
    /// Database file: `~/.focusdo/focusdo.db`
    pub database: PathBuf,
}

impl Paths {
    /// Create paths based on the user's home directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, FocusdoError> {
        let home = std::env::var("HOME").map_err(|_| {
            FocusdoError::Config("Could not determine home directory".to_string())
        })?;

        Ok(Self::with_root(PathBuf::from(home).join(".focusdo")))
    }

    /// Create paths with a custom root directory (useful for testing).
    #[must_use]
    pub fn with_root(root: PathBuf) -> Self {
        Self {
            config_file: root.join("config.yaml"),
            database: root.join("focusdo.db"),
            root,
        }
    }

    /// Ensure the root directory exists, creating it if necessary.
    ///
    /// # Errors
    ///
    /// Returns an error if directory creation fails.
    pub fn ensure_dirs(&self) -> Result<(), FocusdoError> {
        if !self.root.exists() {
            std::fs::create_dir_all(&self.root).map_err(|e| {
                FocusdoError::Config(format!(
                    "Failed to create directory {:?}: {}",
                    self.root, e
                ))
            })?;
        }

        Ok(())
    }
}

impl Default for Paths {
    fn default() -> Self {
        Self::new().unwrap_or_else(|_| {
            // Fallback to current directory if home cannot be determined
            Self::with_root(PathBuf::from(".focusdo"))
        })
    }
}
