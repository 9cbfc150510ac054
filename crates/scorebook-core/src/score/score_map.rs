use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::config::format::CURRENT_VERSION;

use super::ScoreRecord;

/// Scores grouped by beatmap hash.
///
/// Records keep the order they were inserted in. Hashes iterate in sorted
/// order so the same map always encodes to the same bytes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BeatmapScores {
    scores: BTreeMap<String, Vec<ScoreRecord>>,
}

impl BeatmapScores {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, hash: &str) -> Option<&[ScoreRecord]> {
        self.scores.get(hash).map(Vec::as_slice)
    }

    /// Replace the record list for `hash`, returning the previous one
    pub fn insert(
        &mut self,
        hash: impl Into<String>,
        records: Vec<ScoreRecord>,
    ) -> Option<Vec<ScoreRecord>> {
        self.scores.insert(hash.into(), records)
    }

    /// Append a record to the list of its own beatmap hash
    pub fn push(&mut self, record: ScoreRecord) {
        self.get_or_insert(record.beatmap_hash()).push(record);
    }

    pub fn get_or_insert(&mut self, hash: &str) -> &mut Vec<ScoreRecord> {
        self.scores.entry(hash.to_string()).or_default()
    }

    pub fn remove(&mut self, hash: &str) -> Option<Vec<ScoreRecord>> {
        self.scores.remove(hash)
    }

    pub fn contains(&self, hash: &str) -> bool {
        self.scores.contains_key(hash)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Vec<ScoreRecord>)> {
        self.scores.iter()
    }

    /// Hashes that would survive encoding (at least one record)
    pub fn non_empty(&self) -> impl Iterator<Item = (&String, &Vec<ScoreRecord>)> {
        self.scores.iter().filter(|(_, records)| !records.is_empty())
    }

    pub fn hashes(&self) -> impl Iterator<Item = &str> {
        self.scores.keys().map(String::as_str)
    }

    /// Every record across all hashes, hash order then insertion order
    pub fn records(&self) -> impl Iterator<Item = &ScoreRecord> {
        self.scores.values().flatten()
    }

    pub fn record_count(&self) -> usize {
        self.scores.values().map(Vec::len).sum()
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }
}

impl FromIterator<ScoreRecord> for BeatmapScores {
    fn from_iter<I: IntoIterator<Item = ScoreRecord>>(iter: I) -> Self {
        let mut scores = Self::new();
        for record in iter {
            scores.push(record);
        }
        scores
    }
}

impl Extend<ScoreRecord> for BeatmapScores {
    fn extend<I: IntoIterator<Item = ScoreRecord>>(&mut self, iter: I) {
        for record in iter {
            self.push(record);
        }
    }
}

/// The decoded contents of one owner's score file
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreDatabase {
    pub version: u32,
    pub scores: BeatmapScores,
}

impl ScoreDatabase {
    pub fn new(scores: BeatmapScores) -> Self {
        Self {
            version: CURRENT_VERSION,
            scores,
        }
    }

    /// True when the file was written by a newer format than this build knows
    pub fn is_newer_format(&self) -> bool {
        self.version > CURRENT_VERSION
    }
}
