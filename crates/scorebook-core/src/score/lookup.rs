use crate::search::{keyed_search_leftmost, keyed_search_with, search_by_key};

use super::{BeatmapScores, ScoreRecord};

/// Every record of a score map, sorted by player name.
///
/// Records of the same player keep their map order (hash order, then
/// insertion order), so a player with scores on several beatmaps forms one
/// contiguous run.
#[derive(Debug, Clone)]
pub struct PlayerIndex<'a> {
    records: Vec<&'a ScoreRecord>,
}

impl<'a> PlayerIndex<'a> {
    pub fn new(scores: &'a BeatmapScores) -> Self {
        let mut records: Vec<&ScoreRecord> = scores.records().collect();
        records.sort_by(|a, b| a.player().cmp(b.player()));
        Self { records }
    }

    pub fn records(&self) -> &[&'a ScoreRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Any record of `player`
    pub fn find(&self, player: &str) -> Option<&'a ScoreRecord> {
        search_by_key(&self.records, &player, |r| r.player()).map(|i| self.records[i])
    }

    /// The record of `player` on the beatmap `hash`
    pub fn find_on(&self, player: &str, hash: &str) -> Option<&'a ScoreRecord> {
        keyed_search_with(
            &self.records,
            &player,
            |r| r.player(),
            by_name,
            |r| r.beatmap_hash() == hash,
        )
        .map(|i| self.records[i])
    }

    /// All records of `player`, in map order
    pub fn scores_of(&self, player: &str) -> &[&'a ScoreRecord] {
        let Some(start) =
            keyed_search_leftmost(&self.records, &player, |r| r.player(), by_name)
        else {
            return &[];
        };

        let len = self.records[start..]
            .iter()
            .take_while(|r| r.player() == player)
            .count();
        &self.records[start..start + len]
    }
}

fn by_name(a: &&str, b: &&str) -> std::cmp::Ordering {
    a.cmp(b)
}
