use crate::config::format::MAX_STRING_LEN;
use crate::error::{Error, Result};
use crate::score::ScoreRecord;

/// In-memory encoder for container primitives.
///
/// Output is accumulated in a buffer so a failed encode never leaves a
/// half-written file behind.
#[derive(Debug, Default)]
pub struct ByteWriter {
    buf: Vec<u8>,
}

impl ByteWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: Vec::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }

    pub fn write_u8(&mut self, value: u8) {
        self.buf.push(value);
    }

    pub fn write_u32(&mut self, value: u32) {
        self.buf.extend_from_slice(&value.to_le_bytes());
    }

    pub fn write_u64(&mut self, value: u64) {
        self.buf.extend_from_slice(&value.to_le_bytes());
    }

    /// Writes a one-byte length followed by one byte per character.
    ///
    /// # Errors
    ///
    /// Fails on characters above U+00FF and on strings longer than 255
    /// characters. Nothing is written on failure.
    pub fn write_string(&mut self, value: &str) -> Result<()> {
        let bytes = value
            .chars()
            .map(|ch| u8::try_from(ch).map_err(|_| Error::UnencodableChar { ch }))
            .collect::<Result<Vec<u8>>>()?;

        if bytes.len() > MAX_STRING_LEN {
            return Err(Error::StringTooLong {
                len: bytes.len(),
                max: MAX_STRING_LEN,
            });
        }

        self.write_u8(bytes.len() as u8);
        self.buf.extend_from_slice(&bytes);
        Ok(())
    }

    /// Writes one score record.
    ///
    /// Layout:
    /// ```text
    /// player        string
    /// beatmap hash  string
    /// score         u32
    /// accuracy      u64  (f64 bits)
    /// grade         u8
    /// count 300     u32
    /// count 100     u32
    /// count 50      u32
    /// count miss    u32
    /// timestamp     u64  (i64 unix seconds)
    /// nanoseconds   u32  (sub-second part, up to 1_999_999_999 for leap seconds)
    /// ```
    pub fn write_score_record(&mut self, record: &ScoreRecord) -> Result<()> {
        self.write_string(record.player())?;
        self.write_string(record.beatmap_hash())?;
        self.write_u32(record.score());
        self.write_u64(record.accuracy().to_bits());
        self.write_u8(record.grade().as_u8());

        let hits = record.hits();
        self.write_u32(hits.count_300);
        self.write_u32(hits.count_100);
        self.write_u32(hits.count_50);
        self.write_u32(hits.count_miss);

        let timestamp = record.timestamp();
        self.write_u64(timestamp.timestamp() as u64);
        self.write_u32(timestamp.timestamp_subsec_nanos());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::ByteReader;
    use crate::score::{Grade, HitCounts};
    use chrono::DateTime;

    #[test]
    fn test_write_u32_little_endian() {
        let mut writer = ByteWriter::new();
        writer.write_u32(0x12345678);
        assert_eq!(writer.as_bytes(), &[0x78, 0x56, 0x34, 0x12]);
    }

    #[test]
    fn test_write_string_layout() {
        let mut writer = ByteWriter::new();
        writer.write_string("deadbeef").unwrap();

        let bytes = writer.into_bytes();
        assert_eq!(bytes[0], 8);
        assert_eq!(&bytes[1..], b"deadbeef");
    }

    #[test]
    fn test_write_string_rejects_wide_chars() {
        let mut writer = ByteWriter::new();
        let result = writer.write_string("スコア");

        assert!(matches!(result, Err(Error::UnencodableChar { ch: 'ス' })));
        assert!(writer.is_empty());
    }

    #[test]
    fn test_write_string_rejects_long_strings() {
        let mut writer = ByteWriter::new();
        writer.write_string(&"a".repeat(255)).unwrap();
        assert_eq!(writer.len(), 256);

        let result = writer.write_string(&"a".repeat(256));
        assert!(matches!(
            result,
            Err(Error::StringTooLong { len: 256, max: 255 })
        ));
        assert_eq!(writer.len(), 256);
    }

    #[test]
    fn test_score_record_reads_back() {
        let record = ScoreRecord::new(
            "Ren\u{e9}",
            "0123456789abcdef0123456789abcdef",
            1_234_567,
            98.76,
            Grade::Sh,
            HitCounts::new(900, 25, 3, 1),
            DateTime::from_timestamp(1_490_000_000, 0).unwrap(),
        );

        let mut writer = ByteWriter::new();
        writer.write_score_record(&record).unwrap();
        let bytes = writer.into_bytes();

        let mut reader = ByteReader::new(&bytes[..]);
        assert_eq!(reader.read_score_record().unwrap(), record);
        assert_eq!(reader.position(), bytes.len() as u64);
    }

    #[test]
    fn test_sub_second_timestamp_reads_back() {
        let record = ScoreRecord::new(
            "mio",
            "deadbeef",
            500,
            91.25,
            Grade::A,
            HitCounts::new(50, 4, 1, 0),
            DateTime::from_timestamp(1_700_000_000, 123_456_789).unwrap(),
        );

        let mut writer = ByteWriter::new();
        writer.write_score_record(&record).unwrap();
        let bytes = writer.into_bytes();
        assert_eq!(&bytes[bytes.len() - 4..], &123_456_789u32.to_le_bytes());

        let decoded = ByteReader::new(&bytes[..]).read_score_record().unwrap();
        assert_eq!(decoded.timestamp(), record.timestamp());
        assert_eq!(decoded, record);
    }

    #[test]
    fn test_out_of_range_nanos_rejected() {
        let record = ScoreRecord::new(
            "mio",
            "beef",
            1,
            50.0,
            Grade::C,
            HitCounts::default(),
            DateTime::from_timestamp(1_700_000_000, 0).unwrap(),
        );
        let mut writer = ByteWriter::new();
        writer.write_score_record(&record).unwrap();
        let mut bytes = writer.into_bytes();
        let tail = bytes.len() - 4;
        bytes[tail..].copy_from_slice(&2_000_000_000u32.to_le_bytes());

        let result = ByteReader::new(&bytes[..]).read_score_record();
        assert!(matches!(
            result,
            Err(Error::InvalidTimestamp {
                seconds: 1_700_000_000,
                nanos: 2_000_000_000
            })
        ));
    }

    #[test]
    fn test_nan_accuracy_bits_preserved() {
        let nan = f64::from_bits(0x7FF8_0000_0000_0001);
        let record = ScoreRecord::new(
            "mio",
            "beef",
            1,
            nan,
            Grade::F,
            HitCounts::default(),
            DateTime::from_timestamp(0, 0).unwrap(),
        );
        let mut writer = ByteWriter::new();
        writer.write_score_record(&record).unwrap();
        let bytes = writer.into_bytes();

        let decoded = ByteReader::new(&bytes[..]).read_score_record().unwrap();
        assert_eq!(decoded.accuracy().to_bits(), nan.to_bits());
        assert_ne!(decoded, record);
    }

    #[test]
    fn test_score_record_size() {
        let record = ScoreRecord::new(
            "ab",
            "cd",
            0,
            0.0,
            Grade::F,
            HitCounts::default(),
            DateTime::from_timestamp(0, 0).unwrap(),
        );

        let mut writer = ByteWriter::new();
        writer.write_score_record(&record).unwrap();
        // 2 strings (1 + 2 each), u32, u64, u8, 4 x u32, u64, u32
        assert_eq!(writer.len(), 3 + 3 + 4 + 8 + 1 + 16 + 8 + 4);
    }
}
