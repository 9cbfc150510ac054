//! Reporting seam for codec and storage events.
//!
//! Codec and store code never log directly. They call a [`Reporter`], which
//! the application injects. [`TracingReporter`] forwards to `tracing`;
//! [`NullReporter`] discards everything.

use std::path::Path;

use tracing::{debug, info, warn};

use crate::error::Error;
use crate::storage::OwnerId;

/// Receiver for non-fatal conditions and progress events.
///
/// Every method has an empty default so implementors only override what they
/// care about.
pub trait Reporter {
    /// A container declares a format version newer than this build supports.
    /// Decoding continues.
    fn newer_version(&self, _found: u32, _supported: u32) {}

    /// A container was decoded.
    fn decoded(&self, _version: u32, _hashes: usize, _records: usize) {}

    /// A map was encoded; `skipped` hashes had no records and were left out.
    fn encoded(&self, _hashes: usize, _records: usize, _skipped: usize) {}

    /// No score file exists for the owner.
    fn store_missing(&self, _owner: OwnerId, _path: &Path) {}

    /// A score file was read successfully.
    fn store_read(&self, _owner: OwnerId, _path: &Path) {}

    /// A score file could not be read.
    fn store_read_failed(&self, _owner: OwnerId, _path: &Path, _error: &Error) {}

    /// A score file was written.
    fn store_written(&self, _owner: OwnerId, _path: &Path, _records: usize) {}

    /// A score file could not be written.
    fn store_write_failed(&self, _owner: OwnerId, _path: &Path, _error: &Error) {}
}

impl<R: Reporter + ?Sized> Reporter for &R {
    fn newer_version(&self, found: u32, supported: u32) {
        (**self).newer_version(found, supported)
    }

    fn decoded(&self, version: u32, hashes: usize, records: usize) {
        (**self).decoded(version, hashes, records)
    }

    fn encoded(&self, hashes: usize, records: usize, skipped: usize) {
        (**self).encoded(hashes, records, skipped)
    }

    fn store_missing(&self, owner: OwnerId, path: &Path) {
        (**self).store_missing(owner, path)
    }

    fn store_read(&self, owner: OwnerId, path: &Path) {
        (**self).store_read(owner, path)
    }

    fn store_read_failed(&self, owner: OwnerId, path: &Path, error: &Error) {
        (**self).store_read_failed(owner, path, error)
    }

    fn store_written(&self, owner: OwnerId, path: &Path, records: usize) {
        (**self).store_written(owner, path, records)
    }

    fn store_write_failed(&self, owner: OwnerId, path: &Path, error: &Error) {
        (**self).store_write_failed(owner, path, error)
    }
}

/// Discards every event
#[derive(Debug, Clone, Copy, Default)]
pub struct NullReporter;

impl Reporter for NullReporter {}

/// Forwards events to `tracing`
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingReporter;

impl Reporter for TracingReporter {
    fn newer_version(&self, found: u32, supported: u32) {
        warn!(
            "Score container version {} is newer than supported version {}, reading anyway",
            found, supported
        );
    }

    fn decoded(&self, version: u32, hashes: usize, records: usize) {
        debug!(
            "Decoded score container v{}: {} beatmaps, {} scores",
            version, hashes, records
        );
    }

    fn encoded(&self, hashes: usize, records: usize, skipped: usize) {
        debug!(
            "Encoded {} beatmaps, {} scores ({} empty beatmaps skipped)",
            hashes, records, skipped
        );
    }

    fn store_missing(&self, owner: OwnerId, path: &Path) {
        debug!("No score file for {} at {}", owner, path.display());
    }

    fn store_read(&self, owner: OwnerId, path: &Path) {
        info!("Scores for {} read from {}", owner, path.display());
    }

    fn store_read_failed(&self, owner: OwnerId, path: &Path, error: &Error) {
        warn!(
            "Failed to read scores for {} from {}: {}",
            owner,
            path.display(),
            error
        );
    }

    fn store_written(&self, owner: OwnerId, path: &Path, records: usize) {
        info!("{} scores for {} written to {}", records, owner, path.display());
    }

    fn store_write_failed(&self, owner: OwnerId, path: &Path, error: &Error) {
        warn!(
            "Failed to write scores for {} to {}: {}",
            owner,
            path.display(),
            error
        );
    }
}
