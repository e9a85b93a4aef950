//! Content fingerprinting.
//!
//! A fingerprint is the hex-encoded SHA256 digest of raw file content.
//! Equality of fingerprints implies (with overwhelming probability)
//! equality of content. Fingerprints carry no ordering semantics: they
//! exist only to answer "did this content change?".
//!
//! ## Determinism Guarantees
//!
//! - Same bytes → same fingerprint
//! - Different bytes → different fingerprint (accidental-collision
//!   resistance only; no adversarial guarantee is required or claimed)

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Hex-encoded SHA256 digest of file content.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Fingerprint(String);

impl Fingerprint {
    /// Compute the fingerprint of raw content.
    ///
    /// Pure and deterministic. Produces 64 lowercase hex characters.
    /// I/O failure while obtaining `content` is the caller's concern,
    /// not this function's: it has no failure modes of its own.
    pub fn of(content: &[u8]) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(content);
        Self(hex::encode(hasher.finalize()))
    }

    /// Reconstruct a fingerprint from its stored hex form.
    pub fn from_hex(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// The pending fingerprint: recorded for a tracked path whose
    /// content has not been captured by any snapshot yet.
    ///
    /// All zeros, so it never equals the fingerprint of real content
    /// and the next snapshot always treats the path as changed.
    pub fn pending() -> Self {
        Self("0".repeat(64))
    }

    /// Check whether this is the pending fingerprint.
    pub fn is_pending(&self) -> bool {
        self.0.bytes().all(|b| b == b'0')
    }

    /// Get the fingerprint as a hex string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
