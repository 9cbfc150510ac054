use std::collections::HashMap;
use std::collections::hash_map::Entry;

use crate::error::Result;
use crate::report::{Reporter, TracingReporter};
use crate::score::{BeatmapScores, ScoreDatabase};

use super::{OwnerId, ScoreStore, WriteSummary};

/// Lazily loaded score databases, one per owner.
///
/// An owner's file is read the first time it is asked for and kept in memory
/// afterwards, including the fact that no file exists. `replace` writes the
/// new map to disk and only then swaps it into memory.
#[derive(Debug)]
pub struct ScoreCache<Rep = TracingReporter> {
    store: ScoreStore<Rep>,
    loaded: HashMap<OwnerId, Option<ScoreDatabase>>,
}

impl<Rep: Reporter> ScoreCache<Rep> {
    pub fn new(store: ScoreStore<Rep>) -> Self {
        Self {
            store,
            loaded: HashMap::new(),
        }
    }

    pub fn store(&self) -> &ScoreStore<Rep> {
        &self.store
    }

    /// Scores for `owner`, reading the file on first access.
    ///
    /// A failed read is not cached, so the next call tries again.
    pub fn get(&mut self, owner: OwnerId) -> Result<Option<&ScoreDatabase>> {
        let db = match self.loaded.entry(owner) {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => entry.insert(self.store.read(owner)?),
        };
        Ok(db.as_ref())
    }

    /// Check whether `owner` has been loaded already
    pub fn is_loaded(&self, owner: OwnerId) -> bool {
        self.loaded.contains_key(&owner)
    }

    /// Write `scores` as `owner`'s complete score set.
    ///
    /// On failure the cached copy, if any, stays as it was.
    pub fn replace(&mut self, owner: OwnerId, scores: BeatmapScores) -> Result<WriteSummary> {
        let summary = self.store.write(owner, &scores)?;
        self.loaded.insert(owner, Some(ScoreDatabase::new(scores)));
        Ok(summary)
    }

    /// Drop the cached copy so the next `get` rereads the file
    pub fn invalidate(&mut self, owner: OwnerId) -> bool {
        self.loaded.remove(&owner).is_some()
    }

    /// Number of owners currently held in memory
    pub fn len(&self) -> usize {
        self.loaded.len()
    }

    pub fn is_empty(&self) -> bool {
        self.loaded.is_empty()
    }
}
