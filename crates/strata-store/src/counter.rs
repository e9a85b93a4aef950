//! Persisted commit counter
//!
//! The next commit index is explicit repository state, written atomically
//! alongside the manifest. Numbering therefore survives commit-directory
//! deletions and never depends on directory enumeration order.

use crate::atomic::atomic_write;
use crate::errors::{corrupt_counter, io_error, Result};
use std::fs;
use std::path::Path;

/// Load the next commit index from the counter file
///
/// # Errors
///
/// Returns `CorruptCounter` if the file content does not parse as a
/// decimal index, `Io` if the file is unreadable.
pub fn load_next_index(path: &Path) -> Result<u64> {
    let raw = fs::read_to_string(path).map_err(|e| io_error("read_counter", path, e))?;
    let trimmed = raw.trim();

    trimmed
        .parse::<u64>()
        .map_err(|e| corrupt_counter(format!("'{}' is not a commit index: {}", trimmed, e)))
}

/// Persist the next commit index
pub fn persist_next_index(path: &Path, next: u64) -> Result<()> {
    atomic_write(path, format!("{}\n", next).as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_counter_roundtrip() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("next_commit");

        persist_next_index(&path, 0).unwrap();
        assert_eq!(load_next_index(&path).unwrap(), 0);

        persist_next_index(&path, 7).unwrap();
        assert_eq!(load_next_index(&path).unwrap(), 7);
    }

    #[test]
    fn test_counter_tolerates_trailing_newline() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("next_commit");

        fs::write(&path, "3\n").unwrap();
        assert_eq!(load_next_index(&path).unwrap(), 3);
    }

    #[test]
    fn test_counter_rejects_garbage() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("next_commit");

        fs::write(&path, "not-a-number").unwrap();
        let err = load_next_index(&path).unwrap_err();
        assert_eq!(err.code(), "ERR_CORRUPT_COUNTER");
    }

    #[test]
    fn test_counter_missing_is_io_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("next_commit");

        let err = load_next_index(&path).unwrap_err();
        assert_eq!(err.code(), "ERR_IO");
    }
}
