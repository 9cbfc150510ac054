use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Unexpected end of data while reading {field} at byte {position}")]
    Truncated { field: &'static str, position: u64 },

    #[error("Invalid block tag {tag:#04x} at byte {position}")]
    InvalidBlockTag { tag: u8, position: u64 },

    #[error("Invalid grade value: {0}")]
    InvalidGrade(u8),

    #[error("Timestamp out of range: {seconds}s + {nanos}ns")]
    InvalidTimestamp { seconds: i64, nanos: u32 },

    #[error("String of {len} bytes exceeds the {max} byte limit")]
    StringTooLong { len: usize, max: usize },

    #[error("Character {ch:?} cannot be stored as a single byte")]
    UnencodableChar { ch: char },

    #[error("Too many entries for a 32-bit count: {0}")]
    CountOverflow(usize),

    #[error("Score map has no scores to write")]
    EmptyScoreMap,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
