//! Staging manifest persistence
//!
//! The manifest is a flat text file, one entry per line:
//! `<path> <fingerprint>\n`. It is loaded fully into memory at the start
//! of any mutating operation and rewritten in full (temp then rename) at
//! the end. The format tolerates no partial lines: anything that does
//! not split into exactly two whitespace-separated tokens is corruption.

use crate::atomic::atomic_write;
use crate::errors::{corrupt_line, io_error, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use strata_core::errors::StrataError;
use strata_core::{Fingerprint, StagingManifest};

/// Load the staging manifest from disk
///
/// A missing manifest file signals an uninitialized repository: only
/// `init` creates the (empty) manifest, so every later operation treats
/// its absence as a lifecycle error rather than an empty manifest.
///
/// # Errors
///
/// - `UninitializedRepository`: manifest file does not exist
/// - `CorruptManifest`: a line fails to parse
/// - `Io`: file exists but is unreadable
pub fn load_manifest(path: &Path) -> Result<StagingManifest> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            let root = path.parent().unwrap_or(path).to_path_buf();
            return Err(StrataError::UninitializedRepository { root });
        }
        Err(e) => return Err(io_error("read_manifest", path, e)),
    };

    parse_manifest(&raw)
}

/// Parse manifest text into the in-memory model
///
/// Each non-blank line must split into exactly two whitespace-separated
/// tokens: path, then fingerprint. Line numbers in errors are 1-based.
pub fn parse_manifest(raw: &str) -> Result<StagingManifest> {
    let mut manifest = StagingManifest::new();

    for (idx, line) in raw.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }

        let mut tokens = line.split_whitespace();
        let path = tokens.next();
        let fingerprint = tokens.next();
        let excess = tokens.next();

        match (path, fingerprint, excess) {
            (Some(path), Some(fingerprint), None) => {
                manifest.track(path, Fingerprint::from_hex(fingerprint));
            }
            _ => {
                return Err(corrupt_line(
                    idx + 1,
                    format!("expected '<path> <fingerprint>', got '{}'", line),
                ));
            }
        }
    }

    Ok(manifest)
}

/// Render the manifest to its on-disk text form (entries in path order)
pub fn render_manifest(manifest: &StagingManifest) -> String {
    let mut out = String::new();
    for (path, fingerprint) in manifest.entries() {
        out.push_str(path);
        out.push(' ');
        out.push_str(fingerprint.as_str());
        out.push('\n');
    }
    out
}

/// Persist the manifest, overwriting prior content
///
/// Full rewrite through the atomic temp→rename primitive: a crash never
/// yields a half-written manifest.
pub fn persist_manifest(path: &Path, manifest: &StagingManifest) -> Result<()> {
    atomic_write(path, render_manifest(manifest).as_bytes())
}
