use std::fs::{self, File};
use std::io::{BufReader, ErrorKind};
use std::path::{Path, PathBuf};

use crate::codec::{decode, encode};
use crate::config::StoreConfig;
use crate::error::{Error, Result};
use crate::report::{Reporter, TracingReporter};
use crate::score::{BeatmapScores, ScoreDatabase};

/// Identifier of the group that owns a score file
pub type OwnerId = u64;

/// What a successful write put on disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteSummary {
    pub path: PathBuf,
    pub hashes: usize,
    pub records: usize,
    pub bytes: usize,
}

/// One score container file per owner under a data directory.
///
/// Writes replace the whole file in place. There is no staging or locking:
/// callers must not write the same owner from two places at once, and a file
/// interrupted mid-write will fail to decode.
#[derive(Debug, Clone)]
pub struct ScoreStore<Rep = TracingReporter> {
    config: StoreConfig,
    reporter: Rep,
}

impl ScoreStore<TracingReporter> {
    pub fn new(config: StoreConfig) -> Self {
        Self::with_reporter(config, TracingReporter)
    }
}

impl<Rep: Reporter> ScoreStore<Rep> {
    pub fn with_reporter(config: StoreConfig, reporter: Rep) -> Self {
        Self { config, reporter }
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    pub fn reporter(&self) -> &Rep {
        &self.reporter
    }

    /// File holding `owner`'s scores
    pub fn path_for(&self, owner: OwnerId) -> PathBuf {
        self.config
            .data_dir
            .join(format!("{}.{}", owner, self.config.extension))
    }

    /// Check whether `owner` has a score file
    pub fn contains(&self, owner: OwnerId) -> bool {
        self.path_for(owner).is_file()
    }

    /// Read `owner`'s score file.
    ///
    /// Returns `Ok(None)` when the owner has no file yet. Any decode failure is
    /// returned as an error with no partial data.
    pub fn read(&self, owner: OwnerId) -> Result<Option<ScoreDatabase>> {
        let path = self.path_for(owner);

        let file = match File::open(&path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                self.reporter.store_missing(owner, &path);
                return Ok(None);
            }
            Err(e) => {
                let error = Error::Io(e);
                self.reporter.store_read_failed(owner, &path, &error);
                return Err(error);
            }
        };

        match decode(BufReader::new(file), &self.reporter) {
            Ok(db) => {
                self.reporter.store_read(owner, &path);
                Ok(Some(db))
            }
            Err(error) => {
                self.reporter.store_read_failed(owner, &path, &error);
                Err(error)
            }
        }
    }

    /// Read a score file at an arbitrary path, outside the owner layout
    pub fn read_path<P: AsRef<Path>>(&self, path: P) -> Result<Option<ScoreDatabase>> {
        match File::open(path.as_ref()) {
            Ok(file) => decode(BufReader::new(file), &self.reporter).map(Some),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(Error::Io(e)),
        }
    }

    /// Replace `owner`'s score file with `scores`.
    ///
    /// Hashes without records are not written. A map with no records at all is
    /// refused with [`Error::EmptyScoreMap`] and the existing file is left
    /// alone. The in-memory map is never modified.
    pub fn write(&self, owner: OwnerId, scores: &BeatmapScores) -> Result<WriteSummary> {
        let path = self.path_for(owner);

        if scores.non_empty().next().is_none() {
            return Err(Error::EmptyScoreMap);
        }

        let result = encode(scores, &self.reporter).and_then(|bytes| {
            fs::create_dir_all(&self.config.data_dir)?;
            fs::write(&path, &bytes)?;
            Ok(bytes.len())
        });

        match result {
            Ok(bytes) => {
                let records = scores.record_count();
                self.reporter.store_written(owner, &path, records);
                Ok(WriteSummary {
                    hashes: scores.non_empty().count(),
                    records,
                    bytes,
                    path,
                })
            }
            Err(error) => {
                self.reporter.store_write_failed(owner, &path, &error);
                Err(error)
            }
        }
    }

    /// Owners with a score file in the data directory, ascending
    pub fn owners(&self) -> Result<Vec<OwnerId>> {
        let entries = match fs::read_dir(&self.config.data_dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(Error::Io(e)),
        };

        let mut owners = Vec::new();
        for entry in entries {
            let path = entry?.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some(self.config.extension.as_str())
            {
                continue;
            }
            if let Some(owner) = path
                .file_stem()
                .and_then(|stem| stem.to_str())
                .and_then(|stem| stem.parse::<OwnerId>().ok())
            {
                owners.push(owner);
            }
        }

        owners.sort_unstable();
        Ok(owners)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::NullReporter;
    use crate::score::{Grade, HitCounts, ScoreRecord};
    use chrono::DateTime;
    use tempfile::TempDir;

    fn store(dir: &TempDir) -> ScoreStore<NullReporter> {
        ScoreStore::with_reporter(StoreConfig::new(dir.path()), NullReporter)
    }

    fn record(player: &str, hash: &str) -> ScoreRecord {
        ScoreRecord::new(
            player,
            hash,
            100,
            80.0,
            Grade::B,
            HitCounts::new(80, 15, 3, 2),
            DateTime::from_timestamp(1_480_000_000, 0).unwrap(),
        )
    }

    #[test]
    fn test_path_for() {
        let store = ScoreStore::with_reporter(StoreConfig::new("/data/score"), NullReporter);
        assert_eq!(store.path_for(42), PathBuf::from("/data/score/42.db"));
    }

    #[test]
    fn test_missing_owner_is_none() {
        let dir = TempDir::new().unwrap();
        let store = store(&dir);

        assert!(!store.contains(7));
        assert!(store.read(7).unwrap().is_none());
    }

    #[test]
    fn test_write_then_read() {
        let dir = TempDir::new().unwrap();
        let store = store(&dir);
        let scores: BeatmapScores = vec![record("a", "h1"), record("b", "h1")]
            .into_iter()
            .collect();

        let summary = store.write(7, &scores).unwrap();
        assert_eq!(summary.hashes, 1);
        assert_eq!(summary.records, 2);
        assert!(store.contains(7));

        let db = store.read(7).unwrap().unwrap();
        assert_eq!(db.scores, scores);
    }

    #[test]
    fn test_write_creates_data_dir() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("nested").join("score");
        let store = ScoreStore::with_reporter(StoreConfig::new(&nested), NullReporter);

        let scores: BeatmapScores = vec![record("a", "h1")].into_iter().collect();
        store.write(1, &scores).unwrap();
        assert!(nested.join("1.db").is_file());
    }

    #[test]
    fn test_empty_map_refused() {
        let dir = TempDir::new().unwrap();
        let store = store(&dir);

        let mut scores = BeatmapScores::new();
        assert!(matches!(store.write(1, &scores), Err(Error::EmptyScoreMap)));

        scores.insert("only-empty", Vec::new());
        assert!(matches!(store.write(1, &scores), Err(Error::EmptyScoreMap)));
        assert!(!store.contains(1));
    }

    #[test]
    fn test_truncated_file_is_error() {
        let dir = TempDir::new().unwrap();
        let store = store(&dir);
        let scores: BeatmapScores = vec![record("a", "h1")].into_iter().collect();
        let summary = store.write(3, &scores).unwrap();

        let bytes = fs::read(&summary.path).unwrap();
        fs::write(&summary.path, &bytes[..bytes.len() - 4]).unwrap();

        assert!(matches!(store.read(3), Err(Error::Truncated { .. })));
    }

    #[test]
    fn test_owners_listing() {
        let dir = TempDir::new().unwrap();
        let store = store(&dir);
        let scores: BeatmapScores = vec![record("a", "h1")].into_iter().collect();

        store.write(30, &scores).unwrap();
        store.write(4, &scores).unwrap();
        fs::write(dir.path().join("notes.txt"), "x").unwrap();
        fs::write(dir.path().join("guild.db"), "x").unwrap();

        assert_eq!(store.owners().unwrap(), vec![4, 30]);
    }

    #[test]
    fn test_owners_without_dir() {
        let dir = TempDir::new().unwrap();
        let store =
            ScoreStore::with_reporter(StoreConfig::new(dir.path().join("absent")), NullReporter);
        assert!(store.owners().unwrap().is_empty());
    }

    #[test]
    fn test_read_path() {
        let dir = TempDir::new().unwrap();
        let store = store(&dir);
        let scores: BeatmapScores = vec![record("a", "h1")].into_iter().collect();
        let summary = store.write(9, &scores).unwrap();

        let db = store.read_path(&summary.path).unwrap().unwrap();
        assert_eq!(db.scores, scores);
        assert!(store.read_path(dir.path().join("none.db")).unwrap().is_none());
    }
}
