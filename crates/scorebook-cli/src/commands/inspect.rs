//! Inspect command: header and per-hash summary of one score file.

use anyhow::Result;
use scorebook_core::config::format::CURRENT_VERSION;
use scorebook_core::{BeatmapScores, StoreConfig};

use crate::cli::Source;
use crate::cli_utils;

pub fn run(config: &StoreConfig, source: &Source) -> Result<()> {
    let db = cli_utils::load_database(config, source)?;

    // The newer-format advisory itself was already shown while loading
    if db.is_newer_format() {
        println!("Version: {} (newer than {})", db.version, CURRENT_VERSION);
    } else {
        println!("Version: {}", db.version);
    }
    println!("Beatmaps: {}", db.scores.len());
    println!("Records: {}", db.scores.record_count());
    println!("Judged objects: {}", judged_objects(&db.scores));

    for line in summary_lines(&db.scores) {
        println!("{}", line);
    }

    Ok(())
}

fn judged_objects(scores: &BeatmapScores) -> u64 {
    scores.records().map(|r| r.hits().total()).sum()
}

/// One line per hash: record count and best score
fn summary_lines(scores: &BeatmapScores) -> Vec<String> {
    scores
        .iter()
        .map(|(hash, records)| {
            let best = records.iter().max_by_key(|r| r.score());
            match best {
                Some(best) => format!(
                    "  {}  {:>4} record(s)  best {} by {} ({})",
                    hash,
                    records.len(),
                    best.score(),
                    best.player(),
                    best.grade()
                ),
                None => format!("  {}  {:>4} record(s)", hash, 0),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;
    use scorebook_core::score::HitCounts;
    use scorebook_core::{Grade, ScoreRecord};

    fn record(player: &str, hash: &str, score: u32) -> ScoreRecord {
        ScoreRecord::new(
            player,
            hash,
            score,
            90.0,
            Grade::A,
            HitCounts::default(),
            DateTime::from_timestamp(0, 0).unwrap(),
        )
    }

    #[test]
    fn test_judged_objects_sums_wide() {
        let hits = HitCounts::new(u32::MAX, u32::MAX, 0, 0);
        let scores: BeatmapScores = ["beef", "cafe"]
            .into_iter()
            .map(|hash| {
                ScoreRecord::new(
                    "mio",
                    hash,
                    1,
                    90.0,
                    Grade::A,
                    hits,
                    DateTime::from_timestamp(0, 0).unwrap(),
                )
            })
            .collect();

        assert_eq!(judged_objects(&scores), 4 * u64::from(u32::MAX));
    }

    #[test]
    fn test_summary_picks_best_score() {
        let scores: BeatmapScores = vec![
            record("mio", "beef", 300),
            record("ayu", "beef", 900),
            record("ren", "cafe", 100),
        ]
        .into_iter()
        .collect();

        let lines = summary_lines(&scores);
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("beef"));
        assert!(lines[0].contains("best 900 by ayu (A)"));
        assert!(lines[1].contains("best 100 by ren"));
    }
}
