//! Per-path snapshot outcomes.
//!
//! A snapshot is best-effort: one vanished file must not abort the
//! remaining tracked paths. Each tracked path therefore gets its own
//! outcome, and the full collection is returned to the caller so every
//! result, success or error, stays inspectable.

use crate::errors::Result;
use serde::Serialize;

/// What the snapshot pass concluded for one tracked path.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum PathStatus {
    /// Live fingerprint equals the recorded one; nothing copied
    Unchanged,
    /// Content changed; a copy was written into the commit directory
    Changed,
    /// The tracked file no longer exists
    Missing,
    /// Reading the tracked file failed for a non-missing reason
    Failed { error: String },
}

/// Outcome for a single tracked path.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PathOutcome {
    /// Tracked path, relative to the working directory
    pub path: String,
    #[serde(flatten)]
    pub status: PathStatus,
}

/// Result of one `snapshot()` invocation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SnapshotOutcome {
    /// Index of the materialized commit, or `None` when nothing changed
    pub commit_index: Option<u64>,
    /// One outcome per tracked path, in manifest (path) order
    pub outcomes: Vec<PathOutcome>,
}

impl SnapshotOutcome {
    /// Paths whose content changed in this snapshot
    pub fn changed_paths(&self) -> Vec<&str> {
        self.outcomes
            .iter()
            .filter(|o| o.status == PathStatus::Changed)
            .map(|o| o.path.as_str())
            .collect()
    }

    /// Tracked paths that no longer exist on disk
    pub fn missing_paths(&self) -> Vec<&str> {
        self.outcomes
            .iter()
            .filter(|o| o.status == PathStatus::Missing)
            .map(|o| o.path.as_str())
            .collect()
    }

    /// True when nothing was committed
    pub fn is_empty(&self) -> bool {
        self.commit_index.is_none()
    }

    /// Render the outcome as pretty-printed JSON
    ///
    /// # Errors
    ///
    /// Returns `StrataError::Serialization` if JSON encoding fails.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(Into::into)
    }
}
