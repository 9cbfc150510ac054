//! Stream reader for the primitives of the score container.
//!
//! `ByteReader` wraps any `std::io::Read` and consumes exactly the bytes each
//! primitive occupies on disk. It never reads ahead; wrap the source in a
//! `BufReader` if it needs buffering.

use std::io::{ErrorKind, Read};

use chrono::DateTime;

use crate::error::{Error, Result};
use crate::score::{Grade, HitCounts, ScoreRecord};

/// A position-tracking reader for little-endian container primitives.
///
/// # Example
///
/// ```
/// use scorebook_core::ByteReader;
///
/// let data = [0x78, 0x56, 0x34, 0x12, 0x03, b'a', b'b', b'c'];
/// let mut reader = ByteReader::new(&data[..]);
///
/// assert_eq!(reader.read_u32().unwrap(), 0x12345678);
/// assert_eq!(reader.read_string().unwrap(), "abc");
/// assert_eq!(reader.position(), 8);
/// ```
pub struct ByteReader<R> {
    inner: R,
    pos: u64,
}

impl<R: Read> ByteReader<R> {
    pub fn new(inner: R) -> Self {
        Self { inner, pos: 0 }
    }

    /// Number of bytes consumed so far.
    pub fn position(&self) -> u64 {
        self.pos
    }

    pub fn into_inner(self) -> R {
        self.inner
    }

    /// Reads an unsigned 8-bit integer.
    pub fn read_u8(&mut self) -> Result<u8> {
        let [byte] = self.read_array::<1>("u8")?;
        Ok(byte)
    }

    /// Reads an unsigned 32-bit integer (little-endian).
    pub fn read_u32(&mut self) -> Result<u32> {
        Ok(u32::from_le_bytes(self.read_array::<4>("u32")?))
    }

    /// Reads an unsigned 64-bit integer (little-endian).
    pub fn read_u64(&mut self) -> Result<u64> {
        Ok(u64::from_le_bytes(self.read_array::<8>("u64")?))
    }

    /// Reads exactly `count` bytes.
    pub fn read_bytes(&mut self, count: usize) -> Result<Vec<u8>> {
        let mut buf = vec![0u8; count];
        self.fill(&mut buf, "bytes")?;
        Ok(buf)
    }

    /// Reads a string: one length byte, then one byte per character.
    ///
    /// Each byte maps to the character with the same code point (U+0000 to
    /// U+00FF), mirroring [`ByteWriter::write_string`](super::ByteWriter::write_string).
    pub fn read_string(&mut self) -> Result<String> {
        let [len] = self.read_array::<1>("string length")?;
        let mut buf = vec![0u8; len as usize];
        self.fill(&mut buf, "string")?;
        Ok(buf.into_iter().map(char::from).collect())
    }

    /// Reads one score record in the layout written by
    /// [`ByteWriter::write_score_record`](super::ByteWriter::write_score_record).
    pub fn read_score_record(&mut self) -> Result<ScoreRecord> {
        let player = self.read_string()?;
        let beatmap_hash = self.read_string()?;
        let score = self.read_u32()?;
        let accuracy = f64::from_bits(self.read_u64()?);

        let grade_value = self.read_u8()?;
        let grade = Grade::from_u8(grade_value).ok_or(Error::InvalidGrade(grade_value))?;

        let hits = HitCounts {
            count_300: self.read_u32()?,
            count_100: self.read_u32()?,
            count_50: self.read_u32()?,
            count_miss: self.read_u32()?,
        };

        let seconds = self.read_u64()? as i64;
        let nanos = self.read_u32()?;
        let timestamp = DateTime::from_timestamp(seconds, nanos)
            .ok_or(Error::InvalidTimestamp { seconds, nanos })?;

        Ok(ScoreRecord::new(
            player,
            beatmap_hash,
            score,
            accuracy,
            grade,
            hits,
            timestamp,
        ))
    }

    fn read_array<const N: usize>(&mut self, field: &'static str) -> Result<[u8; N]> {
        let mut buf = [0u8; N];
        self.fill(&mut buf, field)?;
        Ok(buf)
    }

    fn fill(&mut self, buf: &mut [u8], field: &'static str) -> Result<()> {
        match self.inner.read_exact(buf) {
            Ok(()) => {
                self.pos += buf.len() as u64;
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::UnexpectedEof => Err(Error::Truncated {
                field,
                position: self.pos,
            }),
            Err(e) => Err(Error::Io(e)),
        }
    }
}
