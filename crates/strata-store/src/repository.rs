//! Repository handle and the snapshot engine
//!
//! The repository is an explicit handle over a working directory and its
//! `.strata` store; there is no ambient global state. `init` bootstraps the
//! store, `track` registers paths in the staging manifest, and
//! `snapshot` materializes an immutable commit of everything whose
//! content changed since the last snapshot.
//!
//! Single-threaded, synchronous: one process, one logical caller at a
//! time. Concurrent invocations against the same store are out of
//! contract.

use crate::counter::{load_next_index, persist_next_index};
use crate::errors::{invalid_path, io_error, Result};
use crate::layout::StoreLayout;
use crate::manifest_io::{load_manifest, persist_manifest};
use std::fs;
use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};
use strata_core::errors::StrataError;
use strata_core::{Fingerprint, PathOutcome, PathStatus, SnapshotOutcome, StagingManifest};
use tracing::{debug, info, warn};

/// Handle to a strata repository
#[derive(Debug, Clone)]
pub struct Repository {
    workdir: PathBuf,
    layout: StoreLayout,
}

impl Repository {
    /// Open a repository handle over a working directory
    ///
    /// Does not touch the filesystem; operations fail with
    /// `UninitializedRepository` if the store was never created.
    pub fn open(workdir: impl Into<PathBuf>) -> Self {
        let workdir = workdir.into();
        let layout = StoreLayout::under(&workdir);
        Self { workdir, layout }
    }

    /// Bootstrap the store exactly once
    ///
    /// Creates the store root, the commits root, an empty manifest, and
    /// a zero commit counter.
    ///
    /// # Errors
    ///
    /// Returns `AlreadyInitialized` if the store root already exists.
    pub fn init(workdir: impl Into<PathBuf>) -> Result<Self> {
        let repo = Self::open(workdir);
        let root = repo.layout.root().to_path_buf();

        if root.exists() {
            return Err(StrataError::AlreadyInitialized { root });
        }

        fs::create_dir_all(&root).map_err(|e| io_error("create_store_root", &root, e))?;
        let commits = repo.layout.commits_dir();
        fs::create_dir_all(&commits).map_err(|e| io_error("create_commits_root", &commits, e))?;

        persist_manifest(&repo.layout.manifest_path(), &StagingManifest::new())?;
        persist_next_index(&repo.layout.counter_path(), 0)?;

        info!(root = %root.display(), "Initialized repository store");

        Ok(repo)
    }

    /// The working directory this repository tracks
    pub fn workdir(&self) -> &Path {
        &self.workdir
    }

    /// The on-disk store layout
    pub fn layout(&self) -> &StoreLayout {
        &self.layout
    }

    /// Register paths in the staging manifest
    ///
    /// Each path is fingerprinted immediately; content is not captured
    /// until the next `snapshot()`. A path whose content is not yet
    /// identical to its last captured state is recorded with the
    /// pending fingerprint, so the next snapshot always treats it as
    /// changed. Re-tracking a path whose content already matches its
    /// captured fingerprint is a no-op. Tracking is perpetual: once
    /// recorded, a path is re-checked by every subsequent snapshot
    /// without requiring a re-add.
    ///
    /// Fails fast: an invalid or unreadable path aborts the whole call
    /// before any manifest write.
    ///
    /// # Errors
    ///
    /// - `UninitializedRepository`: no store under the working directory
    /// - `InvalidPath`: path escapes the working directory or cannot be
    ///   represented in the manifest format
    /// - `Io`: a requested path cannot be read
    pub fn track<I, P>(&self, paths: I) -> Result<()>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let manifest_path = self.layout.manifest_path();
        let mut manifest = load_manifest(&manifest_path)?;

        for path in paths {
            let relative = self.normalize(path.as_ref())?;
            let absolute = self.workdir.join(&relative);
            let content =
                fs::read(&absolute).map_err(|e| io_error("read_tracked", &absolute, e))?;
            let fingerprint = Fingerprint::of(&content);

            // Already captured with identical content: nothing to stage
            if manifest.recorded(&relative) == Some(&fingerprint) {
                debug!(path = %relative, "Path already tracked and unchanged");
                continue;
            }

            debug!(path = %relative, fingerprint = %fingerprint, "Staged path for capture");
            manifest.track(relative, Fingerprint::pending());
        }

        persist_manifest(&manifest_path, &manifest)
    }

    /// Materialize a commit of everything that changed since the last
    /// snapshot
    ///
    /// Walks the manifest in path order, re-fingerprints each tracked
    /// file, and copies changed content into the next commit directory.
    /// Best-effort per path: a vanished or unreadable file is reported
    /// in the outcome without aborting the remaining paths, and its
    /// manifest entry is left untouched.
    ///
    /// The manifest is persisted exactly once per call, changed or not.
    /// With zero changes no commit directory is created and no index is
    /// consumed.
    ///
    /// # Errors
    ///
    /// - `UninitializedRepository`: no store under the working directory
    /// - `CorruptManifest` / `CorruptCounter`: persisted state fails to
    ///   parse
    /// - `Io`: the commit directory or a commit copy cannot be written,
    ///   or the manifest/counter cannot be persisted. A persist failure
    ///   after copies were written leaves a commit directory the
    ///   manifest does not reflect yet: inconsistent but detectable,
    ///   surfaced rather than masked.
    pub fn snapshot(&self) -> Result<SnapshotOutcome> {
        let manifest_path = self.layout.manifest_path();
        let mut manifest = load_manifest(&manifest_path)?;

        let counter_path = self.layout.counter_path();
        let index = load_next_index(&counter_path)?;

        let mut outcomes = Vec::with_capacity(manifest.len());
        let mut commit_dir: Option<PathBuf> = None;

        // Entries are collected up front so the manifest can be updated
        // while walking them; BTreeMap order keeps the walk stable.
        let entries: Vec<(String, Fingerprint)> = manifest
            .entries()
            .map(|(path, fp)| (path.to_string(), fp.clone()))
            .collect();

        for (path, recorded) in entries {
            let absolute = self.workdir.join(&path);

            let content = match fs::read(&absolute) {
                Ok(content) => content,
                Err(e) if e.kind() == ErrorKind::NotFound => {
                    let err = StrataError::MissingTrackedFile { path: path.clone() };
                    warn!(code = err.code(), path = %path, "Tracked file vanished; continuing");
                    outcomes.push(PathOutcome {
                        path,
                        status: PathStatus::Missing,
                    });
                    continue;
                }
                Err(e) => {
                    let err = io_error("read_tracked", &absolute, e);
                    warn!(code = err.code(), path = %path, "Tracked file unreadable; continuing");
                    outcomes.push(PathOutcome {
                        path,
                        status: PathStatus::Failed {
                            error: err.to_string(),
                        },
                    });
                    continue;
                }
            };

            let live = Fingerprint::of(&content);
            if live == recorded {
                outcomes.push(PathOutcome {
                    path,
                    status: PathStatus::Unchanged,
                });
                continue;
            }

            // First changed path materializes the commit directory; an
            // empty snapshot never creates one.
            let dir = match &commit_dir {
                Some(dir) => dir.clone(),
                None => {
                    let dir = self.layout.commit_dir(index);
                    fs::create_dir_all(&dir)
                        .map_err(|e| io_error("create_commit_dir", &dir, e))?;
                    commit_dir = Some(dir.clone());
                    dir
                }
            };

            let dst = dir.join(&path);
            if let Some(parent) = dst.parent() {
                fs::create_dir_all(parent)
                    .map_err(|e| io_error("create_commit_subdir", parent, e))?;
            }
            fs::write(&dst, &content).map_err(|e| io_error("write_commit_copy", &dst, e))?;

            debug!(
                path = %path,
                commit_index = index,
                fingerprint = %live,
                staged = recorded.is_pending(),
                "Captured changed path"
            );

            manifest.track(path.clone(), live);
            outcomes.push(PathOutcome {
                path,
                status: PathStatus::Changed,
            });
        }

        let commit_index = commit_dir.is_some().then_some(index);
        let changed = outcomes
            .iter()
            .filter(|o| o.status == PathStatus::Changed)
            .count();

        // Counter first, then manifest. A crash in between leaves a
        // commit directory not yet reflected in the manifest.
        if commit_index.is_some() {
            persist_next_index(&counter_path, index + 1)?;
        }
        persist_manifest(&manifest_path, &manifest)?;

        match commit_index {
            Some(idx) => info!(commit_index = idx, changed, "Committed snapshot"),
            None => debug!("Nothing to commit"),
        }

        Ok(SnapshotOutcome {
            commit_index,
            outcomes,
        })
    }

    /// Normalize a path to be relative to the working directory
    ///
    /// Absolute paths are accepted only when they point under the
    /// working directory. Parent-directory components are rejected so
    /// commit copies always land under the commit directory, and
    /// whitespace is rejected because the manifest format cannot
    /// represent it.
    fn normalize(&self, path: &Path) -> Result<String> {
        let relative = if path.is_absolute() {
            path.strip_prefix(&self.workdir).map_err(|_| {
                invalid_path(
                    path.display().to_string(),
                    format!("not under working directory {}", self.workdir.display()),
                )
            })?
        } else {
            path
        };

        if relative
            .components()
            .any(|c| matches!(c, Component::ParentDir))
        {
            return Err(invalid_path(
                path.display().to_string(),
                "parent directory components are not allowed",
            ));
        }

        let rendered = relative.to_string_lossy().into_owned();
        if rendered.is_empty() {
            return Err(invalid_path(rendered, "path is empty"));
        }
        if rendered.chars().any(char::is_whitespace) {
            return Err(invalid_path(
                rendered,
                "whitespace is not representable in the manifest format",
            ));
        }

        Ok(rendered)
    }
}
