//! Owners command: list owners that have a score file.

use anyhow::{Context, Result};
use scorebook_core::{ScoreStore, StoreConfig};

pub fn run(config: &StoreConfig) -> Result<()> {
    let store = ScoreStore::new(config.clone());
    let owners = store
        .owners()
        .with_context(|| format!("Failed to list {}", config.data_dir.display()))?;

    if owners.is_empty() {
        eprintln!("No score files in {}", config.data_dir.display());
    }
    for owner in owners {
        println!("{}  {}", owner, store.path_for(owner).display());
    }
    Ok(())
}
