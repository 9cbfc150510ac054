//! Export command: dump a score file as JSON keyed by beatmap hash.

use std::path::Path;

use anyhow::{Context, Result};
use scorebook_core::StoreConfig;

use crate::cli::Source;
use crate::cli_utils;

pub fn run(config: &StoreConfig, source: &Source, output: Option<&Path>) -> Result<()> {
    let db = cli_utils::load_database(config, source)?;
    let content = serde_json::to_string_pretty(&db.scores)?;

    if let Some(output_path) = output {
        std::fs::write(output_path, &content)
            .with_context(|| format!("Failed to write {}", output_path.display()))?;
        eprintln!(
            "Exported {} record(s) to: {}",
            db.scores.record_count(),
            output_path.display()
        );
    } else {
        println!("{}", content);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;
    use scorebook_core::score::HitCounts;
    use scorebook_core::{BeatmapScores, Grade, ScoreRecord, ScoreStore};
    use tempfile::TempDir;

    #[test]
    fn test_export_to_file() {
        let dir = TempDir::new().unwrap();
        let config = StoreConfig::new(dir.path());
        let scores: BeatmapScores = vec![ScoreRecord::new(
            "mio",
            "beef",
            777,
            99.0,
            Grade::Ss,
            HitCounts::new(77, 0, 0, 0),
            DateTime::from_timestamp(1_600_000_000, 0).unwrap(),
        )]
        .into_iter()
        .collect();
        ScoreStore::new(config.clone()).write(3, &scores).unwrap();

        let output = dir.path().join("out.json");
        let source = Source {
            owner: Some(3),
            file: None,
        };
        run(&config, &source, Some(&output)).unwrap();

        let json: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&output).unwrap()).unwrap();
        assert_eq!(json["beef"][0]["player"], "mio");
        assert_eq!(json["beef"][0]["score"], 777);
    }
}
