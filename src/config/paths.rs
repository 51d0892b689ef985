//! Path management for Fundsheet
//!
//! ## Path Resolution Order
//!
//! 1. `FUNDSHEET_DATA_DIR` environment variable (if set)
//! 2. The platform configuration directory for `fundsheet`
//!    (`~/.config/fundsheet` on Linux, `%APPDATA%\fundsheet\config` on Windows)

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::FundsheetError;

/// Environment variable that overrides the base directory
pub const DATA_DIR_ENV: &str = "FUNDSHEET_DATA_DIR";

/// Manages all paths used by Fundsheet
#[derive(Debug, Clone)]
pub struct FundsheetPaths {
    /// Base directory for all Fundsheet data
    base_dir: PathBuf,
}

impl FundsheetPaths {
    /// Create a new FundsheetPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no platform configuration directory can be
    /// determined and no override is set.
    pub fn new() -> Result<Self, FundsheetError> {
        let base_dir = if let Ok(custom) = std::env::var(DATA_DIR_ENV) {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create FundsheetPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory holding the persisted blobs
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Ensure the base and data directories exist
    pub fn ensure_directories(&self) -> Result<(), FundsheetError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| FundsheetError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| FundsheetError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }

    /// Check if Fundsheet has been initialized (config file exists)
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

fn resolve_default_path() -> Result<PathBuf, FundsheetError> {
    ProjectDirs::from("", "", "fundsheet")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| {
            FundsheetError::Config(format!(
                "Could not determine a configuration directory; set {}",
                DATA_DIR_ENV
            ))
        })
}
