//! Error handling for strata-store
//!
//! Wraps strata-core StrataError with store-specific helpers

use std::path::Path;
use strata_core::errors::StrataError;

pub use strata_core::errors::Result;

/// Create an IO error with operation and path context
pub fn io_error(op: &str, path: &Path, err: std::io::Error) -> StrataError {
    StrataError::Io {
        op: op.to_string(),
        path: path.to_path_buf(),
        message: err.to_string(),
    }
}

/// Create a corrupt-manifest error for a specific (1-based) line
pub fn corrupt_line(line: usize, reason: impl Into<String>) -> StrataError {
    StrataError::CorruptManifest {
        line,
        reason: reason.into(),
    }
}

/// Create a corrupt-counter error
pub fn corrupt_counter(reason: impl Into<String>) -> StrataError {
    StrataError::CorruptCounter {
        reason: reason.into(),
    }
}

/// Create an invalid-path error
pub fn invalid_path(path: impl Into<String>, reason: impl Into<String>) -> StrataError {
    StrataError::InvalidPath {
        path: path.into(),
        reason: reason.into(),
    }
}
