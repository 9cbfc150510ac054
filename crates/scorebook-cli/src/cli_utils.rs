//! Common CLI utility functions shared across commands.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use owo_colors::OwoColorize;
use scorebook_core::{
    Error, OwnerId, Reporter, ScoreDatabase, ScoreStore, StoreConfig, TracingReporter,
};
use tracing::debug;

use crate::cli::Source;

/// Load the store config from a TOML file, falling back to defaults when the
/// file does not exist. `data_dir` overrides whatever the file says.
pub fn load_config(path: &Path, data_dir: Option<&Path>) -> Result<StoreConfig> {
    let config = if path.exists() {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config: StoreConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config {}", path.display()))?;
        debug!("Loaded config from {}", path.display());
        config
    } else {
        debug!("No config at {}, using defaults", path.display());
        StoreConfig::default()
    };

    Ok(match data_dir {
        Some(dir) => config.with_data_dir(dir),
        None => config,
    })
}

/// Reporter for command output: the newer-format advisory goes to stderr
/// once, in color, and everything else goes to `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct CliReporter;

impl Reporter for CliReporter {
    fn newer_version(&self, found: u32, supported: u32) {
        eprintln!("{}", newer_version_message(found, supported).yellow());
    }

    fn decoded(&self, version: u32, hashes: usize, records: usize) {
        TracingReporter.decoded(version, hashes, records)
    }

    fn encoded(&self, hashes: usize, records: usize, skipped: usize) {
        TracingReporter.encoded(hashes, records, skipped)
    }

    fn store_missing(&self, owner: OwnerId, path: &Path) {
        TracingReporter.store_missing(owner, path)
    }

    fn store_read(&self, owner: OwnerId, path: &Path) {
        TracingReporter.store_read(owner, path)
    }

    fn store_read_failed(&self, owner: OwnerId, path: &Path, error: &Error) {
        TracingReporter.store_read_failed(owner, path, error)
    }

    fn store_written(&self, owner: OwnerId, path: &Path, records: usize) {
        TracingReporter.store_written(owner, path, records)
    }

    fn store_write_failed(&self, owner: OwnerId, path: &Path, error: &Error) {
        TracingReporter.store_write_failed(owner, path, error)
    }
}

pub fn newer_version_message(found: u32, supported: u32) -> String {
    format!(
        "Written by a newer format ({} > {}); data may be incomplete",
        found, supported
    )
}

/// Read the score file named by `source`.
///
/// A missing file is an error here; the store itself treats it as "no scores".
pub fn load_database(config: &StoreConfig, source: &Source) -> Result<ScoreDatabase> {
    let store = ScoreStore::with_reporter(config.clone(), CliReporter);

    match (source.owner, source.file.as_deref()) {
        (Some(owner), _) => {
            let path = store.path_for(owner);
            store
                .read(owner)
                .with_context(|| format!("Failed to read {}", path.display()))?
                .with_context(|| format!("No score file for owner {} ({})", owner, path.display()))
        }
        (None, Some(path)) => store
            .read_path(path)
            .with_context(|| format!("Failed to read {}", path.display()))?
            .with_context(|| format!("Score file not found: {}", path.display())),
        (None, None) => bail!("Either --owner or --file is required"),
    }
}
