//! Utility functions and helpers.

pub mod http;

use std::path::Path;

use crate::error::{AppError, Result};

/// Read a line-delimited identifier list file.
///
/// Blank lines are skipped; anything else must parse as a positive integer.
pub fn read_id_file(path: &Path) -> Result<Vec<u32>> {
    let content = std::fs::read_to_string(path)?;
    let mut ids = Vec::new();
    for (index, line) in content.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        let id: u32 = trimmed.parse().map_err(|_| AppError::IdFile {
            path: path.display().to_string(),
            line: index + 1,
        })?;
        ids.push(id);
    }
    Ok(ids)
}
