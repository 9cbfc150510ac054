use std::io::Read;

use crate::config::format::{BLOCK_TAG, CURRENT_VERSION, MAX_PREALLOCATE};
use crate::error::{Error, Result};
use crate::report::Reporter;
use crate::score::{BeatmapScores, ScoreDatabase};

use super::{ByteReader, ByteWriter};

/// Encode a score map into container bytes.
///
/// Hashes without records are left out entirely and do not count towards the
/// header's hash count. Blocks follow the map's iteration order.
pub fn encode<Rep: Reporter + ?Sized>(scores: &BeatmapScores, reporter: &Rep) -> Result<Vec<u8>> {
    let hash_count = scores.non_empty().count();
    let skipped = scores.len() - hash_count;

    let mut writer = ByteWriter::with_capacity(8 + scores.record_count() * 64);
    writer.write_u32(CURRENT_VERSION);
    writer.write_u32(to_count(hash_count)?);

    let mut record_count = 0;
    for (hash, records) in scores.non_empty() {
        writer.write_u8(BLOCK_TAG);
        writer.write_string(hash)?;
        writer.write_u32(to_count(records.len())?);
        for record in records {
            writer.write_score_record(record)?;
        }
        record_count += records.len();
    }

    reporter.encoded(hash_count, record_count, skipped);
    Ok(writer.into_bytes())
}

/// Decode a container from a byte stream.
///
/// A version newer than [`CURRENT_VERSION`] is reported to `reporter` and
/// decoding carries on with the current layout. Exactly the declared number of
/// blocks is read; anything after the last block is ignored. When a hash
/// appears in more than one block the last block wins. Running out of
/// data part way through is fatal and yields no partial result.
pub fn decode<R: Read, Rep: Reporter + ?Sized>(source: R, reporter: &Rep) -> Result<ScoreDatabase> {
    let mut reader = ByteReader::new(source);

    let version = reader.read_u32()?;
    if version > CURRENT_VERSION {
        reporter.newer_version(version, CURRENT_VERSION);
    }

    let hash_count = reader.read_u32()?;
    let mut scores = BeatmapScores::new();

    for _ in 0..hash_count {
        let position = reader.position();
        let tag = reader.read_u8()?;
        if tag != BLOCK_TAG {
            return Err(Error::InvalidBlockTag { tag, position });
        }

        let hash = reader.read_string()?;
        let count = reader.read_u32()? as usize;

        let mut records = Vec::with_capacity(count.min(MAX_PREALLOCATE));
        for _ in 0..count {
            records.push(reader.read_score_record()?);
        }

        // A repeated hash replaces the earlier block
        scores.insert(hash, records);
    }

    reporter.decoded(version, scores.len(), scores.record_count());
    Ok(ScoreDatabase { version, scores })
}

fn to_count(len: usize) -> Result<u32> {
    u32::try_from(len).map_err(|_| Error::CountOverflow(len))
}
