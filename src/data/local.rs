//! Local directory loader: every regular file in a directory is one blob.
//!
//! Useful offline (`wx show --dir ./logs`) and for integration-style tests.

use std::fs;
use std::path::Path;

use crate::error::AppError;

/// Read each regular file in `dir` as one blob, in file-name order.
///
/// An unreadable directory is a configuration error; an unreadable single
/// file is skipped (the same drop-and-continue stance the parser takes).
/// Non-UTF-8 bytes are replaced rather than rejected.
pub fn read_blob_dir(dir: &Path) -> Result<Vec<String>, AppError> {
    let entries = fs::read_dir(dir)
        .map_err(|e| AppError::new(2, format!("Failed to read log dir '{}': {e}", dir.display())))?;

    let mut paths: Vec<_> = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_file())
        .collect();

    // File-name order keeps blob precedence (and therefore dedup outcomes)
    // deterministic across platforms.
    paths.sort();

    Ok(paths
        .iter()
        .filter_map(|path| fs::read(path).ok())
        .map(|bytes| String::from_utf8_lossy(&bytes).into_owned())
        .collect())
}
