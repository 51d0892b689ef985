//! User settings for Fundsheet
//!
//! Export naming, date formats, clipboard hand-off and log verbosity.

use serde::{Deserialize, Serialize};

use super::paths::FundsheetPaths;
use crate::error::FundsheetError;

/// User settings for Fundsheet
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// strftime format stamped on saved records
    #[serde(default = "default_record_date_format")]
    pub record_date_format: String,

    /// strftime format used for the date part of CSV file names
    #[serde(default = "default_file_date_format")]
    pub file_date_format: String,

    /// File name prefix for CSV exports
    #[serde(default = "default_prefix")]
    pub csv_prefix: String,

    /// File name prefix for workbook exports
    #[serde(default = "default_prefix")]
    pub workbook_prefix: String,

    /// Currency symbol for terminal display
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// External command that receives clipboard text on stdin
    /// (e.g. `wl-copy`, `pbcopy`, `xclip -selection clipboard`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clipboard_command: Option<String>,

    /// How long the "copied" acknowledgment stays visible
    #[serde(default = "default_copy_notice_secs")]
    pub copy_notice_secs: u64,

    /// Default tracing filter when `RUST_LOG` is unset
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_record_date_format() -> String {
    "%Y/%m/%d %H:%M:%S".to_string()
}

fn default_file_date_format() -> String {
    "%Y/%m/%d".to_string()
}

fn default_prefix() -> String {
    "personal_funds".to_string()
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_copy_notice_secs() -> u64 {
    3
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            record_date_format: default_record_date_format(),
            file_date_format: default_file_date_format(),
            csv_prefix: default_prefix(),
            workbook_prefix: default_prefix(),
            currency_symbol: default_currency(),
            clipboard_command: None,
            copy_notice_secs: default_copy_notice_secs(),
            log_level: default_log_level(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or return defaults if the file doesn't exist
    pub fn load_or_create(paths: &FundsheetPaths) -> Result<Self, FundsheetError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                FundsheetError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                FundsheetError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &FundsheetPaths) -> Result<(), FundsheetError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            FundsheetError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(paths.settings_file(), contents).map_err(|e| {
            FundsheetError::Io(format!("Failed to write settings file: {}", e))
        })?;

        Ok(())
    }
}
