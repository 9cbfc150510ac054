//! Store configuration and container format constants.
//!
//! - `StoreConfig` - where per-owner score files live
//! - `format` - constants fixed by the on-disk container layout

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Container format constants.
pub mod format {
    /// Highest container version this build understands, and the one it writes.
    pub const CURRENT_VERSION: u32 = 20170103;

    /// Marker byte preceding every per-beatmap block.
    pub const BLOCK_TAG: u8 = 0x0B;

    /// Strings carry a one-byte length prefix.
    pub const MAX_STRING_LEN: usize = u8::MAX as usize;

    /// Upper bound for `Vec::with_capacity` when trusting a count read from disk.
    pub const MAX_PREALLOCATE: usize = 1024;
}

/// Location of the per-owner score files.
///
/// Files are laid out as `{data_dir}/{owner}.{extension}`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    pub data_dir: PathBuf,
    pub extension: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("./data/score"),
            extension: "db".to_string(),
        }
    }
}

impl StoreConfig {
    pub fn new<P: AsRef<Path>>(data_dir: P) -> Self {
        Self {
            data_dir: data_dir.as_ref().to_path_buf(),
            ..Default::default()
        }
    }

    /// Override the data directory
    pub fn with_data_dir<P: AsRef<Path>>(mut self, data_dir: P) -> Self {
        self.data_dir = data_dir.as_ref().to_path_buf();
        self
    }

    /// Override the file extension (without the leading dot)
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }
}
