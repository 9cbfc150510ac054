use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Grade;

/// Hit counts for the four judgement tiers of a play
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HitCounts {
    pub count_300: u32,
    pub count_100: u32,
    pub count_50: u32,
    pub count_miss: u32,
}

impl HitCounts {
    pub fn new(count_300: u32, count_100: u32, count_50: u32, count_miss: u32) -> Self {
        Self {
            count_300,
            count_100,
            count_50,
            count_miss,
        }
    }

    /// Total number of judged objects.
    ///
    /// Widened to `u64` since each count can hold any `u32` read from a file.
    pub fn total(&self) -> u64 {
        [self.count_300, self.count_100, self.count_50, self.count_miss]
            .into_iter()
            .map(u64::from)
            .sum()
    }
}

/// A single submitted score on a beatmap.
///
/// Records are immutable once built; the container codec writes every field
/// verbatim and reads it back unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreRecord {
    player: String,
    beatmap_hash: String,
    score: u32,
    accuracy: f64,
    grade: Grade,
    hits: HitCounts,
    timestamp: DateTime<Utc>,
}

impl ScoreRecord {
    pub fn new(
        player: impl Into<String>,
        beatmap_hash: impl Into<String>,
        score: u32,
        accuracy: f64,
        grade: Grade,
        hits: HitCounts,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            player: player.into(),
            beatmap_hash: beatmap_hash.into(),
            score,
            accuracy,
            grade,
            hits,
            timestamp,
        }
    }

    pub fn player(&self) -> &str {
        &self.player
    }

    pub fn beatmap_hash(&self) -> &str {
        &self.beatmap_hash
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Accuracy as a percentage (0.0 - 100.0).
    ///
    /// Stored as raw `f64` bits, so any value survives the codec unchanged,
    /// NaN included. A NaN accuracy still makes the record compare unequal to
    /// itself; compare `accuracy().to_bits()` when that matters.
    pub fn accuracy(&self) -> f64 {
        self.accuracy
    }

    pub fn grade(&self) -> Grade {
        self.grade
    }

    pub fn hits(&self) -> HitCounts {
        self.hits
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }
}

impl std::fmt::Display for ScoreRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} {} ({:.2}%) [{}/{}/{}/{}] {}",
            self.player,
            self.score,
            self.grade,
            self.accuracy,
            self.hits.count_300,
            self.hits.count_100,
            self.hits.count_50,
            self.hits.count_miss,
            self.timestamp.to_rfc3339()
        )
    }
}
