pub mod codec;
pub mod config;
pub mod error;
pub mod report;
pub mod score;
pub mod search;
pub mod storage;

pub use codec::{ByteReader, ByteWriter, decode, encode};
pub use config::StoreConfig;
pub use error::{Error, Result};
pub use report::{NullReporter, Reporter, TracingReporter};
pub use score::{BeatmapScores, Grade, ScoreDatabase, ScoreRecord};
pub use search::{
    KeySequence, keyed_search, keyed_search_leftmost, keyed_search_with, search_by_key,
};
pub use storage::{OwnerId, ScoreCache, ScoreStore, WriteSummary};
