//! Strata Store - filesystem persistence for the staging-and-snapshot engine
//!
//! Owns the on-disk repository store and the snapshot engine that drives it.
//!
//! Layout:
//!
//! ```text
//! <workdir>/.strata/
//!   manifest        # one line per tracked path: "<path> <fingerprint>\n"
//!   next_commit     # decimal index of the next commit
//!   commits/
//!     0/            # commit 0: copies of changed files, relative paths preserved
//!     1/
//! ```
//!
//! All writes to `manifest` and `next_commit` go through the atomic
//! temp→rename primitive, so neither file is ever observable half-written.

pub mod atomic;
pub mod counter;
pub mod errors;
pub mod layout;
pub mod manifest_io;
pub mod repository;

pub use layout::StoreLayout;
pub use repository::Repository;
