// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Daily log file output

use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use tracing::{debug, info};

/// Log file name for a run date, e.g. `commits_17-01-26.txt`
#[must_use]
pub fn log_file_name(date: NaiveDate) -> String {
    format!("commits_{}.txt", date.format("%d-%m-%y"))
}

/// Write `contents` to the day's log file in `dir`
///
/// An existing file for the same date is overwritten.
///
/// # Errors
///
/// Returns [`PersistError::Write`] if the file cannot be written.
pub fn write_log(dir: &Path, date: NaiveDate, contents: &str) -> Result<PathBuf, PersistError> {
    let path = dir.join(log_file_name(date));
    debug!(path = %path.display(), bytes = contents.len(), "Writing log file");

    fs::write(&path, contents).map_err(|source| PersistError::Write {
        path: path.clone(),
        source,
    })?;

    info!(path = %path.display(), "Log file written");
    Ok(path)
}

/// Errors writing the log file
#[derive(Debug, thiserror::Error)]
pub enum PersistError {
    /// The file could not be created or written
    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        /// Target path
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },
}
