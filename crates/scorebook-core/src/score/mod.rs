//! Score types and lookups.
//!
//! - `ScoreRecord` - one submitted score
//! - `Grade` - letter grade (SSH, SS, SH, S, A, B, C, D, F)
//! - `BeatmapScores`, `ScoreDatabase` - scores grouped by beatmap hash
//! - `PlayerIndex` - player-sorted view for keyed lookups

mod grade;
mod lookup;
mod record;
mod score_map;

pub use grade::*;
pub use lookup::*;
pub use record::*;
pub use score_map::*;
