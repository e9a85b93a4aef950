use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using StrataError
pub type Result<T> = std::result::Result<T, StrataError>;

/// Error taxonomy for strata operations
///
/// Every variant carries enough context (path, operation, reason) for the
/// caller to act. The engine performs no automatic retry and no silent
/// recovery: errors are surfaced to the immediate caller.
///
/// Variants carry rendered messages instead of `std::io::Error` sources so
/// the enum stays `Clone + PartialEq` for outcome collections and tests.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StrataError {
    // ===== I/O Errors =====
    /// Underlying filesystem operation failed
    #[error("I/O failure in {op} on {}: {message}", path.display())]
    Io {
        op: String,
        path: PathBuf,
        message: String,
    },

    // ===== Manifest Errors =====
    /// A manifest line did not parse as `<path> <fingerprint>`
    #[error("Corrupt manifest at line {line}: {reason}")]
    CorruptManifest { line: usize, reason: String },

    /// The persisted commit counter did not parse as a decimal index
    #[error("Corrupt commit counter: {reason}")]
    CorruptCounter { reason: String },

    // ===== Repository Lifecycle =====
    /// Operation attempted before `init` created the store
    #[error("Repository not initialized at {}", root.display())]
    UninitializedRepository { root: PathBuf },

    /// `init` attempted on an existing store
    #[error("Repository already initialized at {}", root.display())]
    AlreadyInitialized { root: PathBuf },

    // ===== Snapshot Errors =====
    /// A tracked path vanished before the snapshot could read it
    #[error("Tracked file missing: {path}")]
    MissingTrackedFile { path: String },

    // ===== Validation Errors =====
    /// A path cannot be recorded in the staging manifest
    #[error("Invalid path '{path}': {reason}")]
    InvalidPath { path: String, reason: String },

    // ===== Generic Errors =====
    /// Serialization error (JSON encoding)
    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

impl StrataError {
    /// Get the stable error code for this error
    ///
    /// Codes are stable identifiers for programmatic handling, testing,
    /// and front-end reporting.
    pub fn code(&self) -> &'static str {
        match self {
            StrataError::Io { .. } => "ERR_IO",
            StrataError::CorruptManifest { .. } => "ERR_CORRUPT_MANIFEST",
            StrataError::CorruptCounter { .. } => "ERR_CORRUPT_COUNTER",
            StrataError::UninitializedRepository { .. } => "ERR_UNINITIALIZED_REPOSITORY",
            StrataError::AlreadyInitialized { .. } => "ERR_ALREADY_INITIALIZED",
            StrataError::MissingTrackedFile { .. } => "ERR_MISSING_TRACKED_FILE",
            StrataError::InvalidPath { .. } => "ERR_INVALID_PATH",
            StrataError::Serialization { .. } => "ERR_SERIALIZATION",
        }
    }
}

/// Conversion from serde_json::Error to StrataError
impl From<serde_json::Error> for StrataError {
    fn from(err: serde_json::Error) -> Self {
        StrataError::Serialization {
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lifecycle_error_codes() {
        let cases = [
            (
                StrataError::UninitializedRepository {
                    root: PathBuf::from(".strata"),
                },
                "ERR_UNINITIALIZED_REPOSITORY",
            ),
            (
                StrataError::AlreadyInitialized {
                    root: PathBuf::from(".strata"),
                },
                "ERR_ALREADY_INITIALIZED",
            ),
            (
                StrataError::MissingTrackedFile {
                    path: "a.txt".to_string(),
                },
                "ERR_MISSING_TRACKED_FILE",
            ),
        ];
        for (err, expected_code) in cases {
            assert_eq!(err.code(), expected_code, "Wrong code for {:?}", err);
        }
    }

    #[test]
    fn test_corrupt_manifest_display_carries_line() {
        let err = StrataError::CorruptManifest {
            line: 3,
            reason: "expected two tokens".to_string(),
        };
        assert_eq!(err.code(), "ERR_CORRUPT_MANIFEST");
        assert!(err.to_string().contains("line 3"));
    }

    #[test]
    fn test_io_error_display_carries_op_and_path() {
        let err = StrataError::Io {
            op: "read_manifest".to_string(),
            path: PathBuf::from(".strata/manifest"),
            message: "permission denied".to_string(),
        };
        let rendered = err.to_string();
        assert!(rendered.contains("read_manifest"));
        assert!(rendered.contains("permission denied"));
    }
}
