//! Binary score container codec.
//!
//! ## File Format
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │ version (u32 LE) │ hash count (u32 LE)       │
//! ├──────────────────────────────────────────────┤
//! │ Block 1                                      │
//! │ ┌─────┬─────┬──────┬────────────┬─────────┐  │
//! │ │0x0B │ len │ hash │ count (u32)│ records │  │
//! │ └─────┴─────┴──────┴────────────┴─────────┘  │
//! ├──────────────────────────────────────────────┤
//! │ Block 2 ...                                  │
//! └──────────────────────────────────────────────┘
//! ```
//!
//! The record layout is documented on [`ByteWriter::write_score_record`].

mod container;
mod reader;
mod writer;

pub use container::{decode, encode};
pub use reader::ByteReader;
pub use writer::ByteWriter;
