//! Find command: look up a player's scores by name.

use anyhow::Result;
use scorebook_core::score::PlayerIndex;
use scorebook_core::{ScoreRecord, StoreConfig};

use crate::cli::Source;
use crate::cli_utils;

pub fn run(config: &StoreConfig, source: &Source, player: &str, hash: Option<&str>) -> Result<()> {
    let db = cli_utils::load_database(config, source)?;
    let index = PlayerIndex::new(&db.scores);

    let found = matching(&index, player, hash);
    if found.is_empty() {
        match hash {
            Some(hash) => eprintln!("No score for {} on {}", player, hash),
            None => eprintln!("No scores for {}", player),
        }
        return Ok(());
    }

    for record in found {
        println!("{}  {}", record.beatmap_hash(), record);
    }
    Ok(())
}

fn matching<'a>(index: &PlayerIndex<'a>, player: &str, hash: Option<&str>) -> Vec<&'a ScoreRecord> {
    match hash {
        Some(hash) => index.find_on(player, hash).into_iter().collect(),
        None => index.scores_of(player).to_vec(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;
    use scorebook_core::score::HitCounts;
    use scorebook_core::{BeatmapScores, Grade};

    fn scores() -> BeatmapScores {
        [("mio", "beef", 10), ("ayu", "beef", 20), ("mio", "cafe", 30)]
            .into_iter()
            .map(|(player, hash, score)| {
                ScoreRecord::new(
                    player,
                    hash,
                    score,
                    95.0,
                    Grade::S,
                    HitCounts::default(),
                    DateTime::from_timestamp(0, 0).unwrap(),
                )
            })
            .collect()
    }

    #[test]
    fn test_matching_all_for_player() {
        let scores = scores();
        let index = PlayerIndex::new(&scores);
        let found = matching(&index, "mio", None);
        assert_eq!(found.len(), 2);
        assert!(found.iter().all(|r| r.player() == "mio"));
    }

    #[test]
    fn test_matching_on_hash() {
        let scores = scores();
        let index = PlayerIndex::new(&scores);
        let found = matching(&index, "mio", Some("cafe"));
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].score(), 30);
        assert!(matching(&index, "ayu", Some("cafe")).is_empty());
        assert!(matching(&index, "nobody", None).is_empty());
    }
}
