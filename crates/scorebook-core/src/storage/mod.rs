mod cache;
mod store;

pub use cache::ScoreCache;
pub use store::{OwnerId, ScoreStore, WriteSummary};
