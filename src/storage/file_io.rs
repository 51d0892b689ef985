//! File I/O utilities with atomic writes
//!
//! Provides safe file operations that won't corrupt data on failure.

use std::fs::{self, File};
use std::io::{BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};

use crate::error::FundsheetError;

/// Read a whole file as text, returning `None` if it doesn't exist
pub fn read_text<P: AsRef<Path>>(path: P) -> Result<Option<String>, FundsheetError> {
    let path = path.as_ref();

    match fs::read_to_string(path) {
        Ok(text) => Ok(Some(text)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(FundsheetError::Storage(format!(
            "Failed to read {}: {}",
            path.display(),
            e
        ))),
    }
}

/// Write bytes to a file atomically (write to temp, then rename)
///
/// The file is either completely written or not modified at all.
pub fn write_atomic<P: AsRef<Path>>(path: P, contents: &[u8]) -> Result<(), FundsheetError> {
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            FundsheetError::Storage(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    // Temp file in the same directory so the rename stays on one filesystem
    let temp_path = temp_path_for(path);

    let file = File::create(&temp_path)
        .map_err(|e| FundsheetError::Storage(format!("Failed to create temp file: {}", e)))?;

    let mut writer = BufWriter::new(file);
    writer
        .write_all(contents)
        .map_err(|e| FundsheetError::Storage(format!("Failed to write data: {}", e)))?;

    writer
        .flush()
        .map_err(|e| FundsheetError::Storage(format!("Failed to flush data: {}", e)))?;

    writer
        .get_ref()
        .sync_all()
        .map_err(|e| FundsheetError::Storage(format!("Failed to sync data: {}", e)))?;

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        FundsheetError::Storage(format!("Failed to rename temp file: {}", e))
    })?;

    Ok(())
}

/// Move a file aside to `target`, replacing any earlier copy
pub fn quarantine<P: AsRef<Path>, Q: AsRef<Path>>(path: P, target: Q) -> Result<(), FundsheetError> {
    let path = path.as_ref();
    let target = target.as_ref();

    fs::rename(path, target).map_err(|e| {
        FundsheetError::Storage(format!("Failed to move aside {}: {}", path.display(), e))
    })
}

fn temp_path_for(path: &Path) -> PathBuf {
    let mut temp = path.as_os_str().to_owned();
    temp.push(".tmp");
    PathBuf::from(temp)
}
