//! Key-based binary search over sorted sequences.
//!
//! The sequence is sorted by a key derived from each element. Several elements
//! may share a key; a disambiguating predicate then selects one of them.
//!
//! - `keyed_search` - plain probe, any matching index
//! - `keyed_search_with` - probe, then scan the equal-key run for a predicate match
//! - `keyed_search_leftmost` - lowest matching index
//! - `KeySequence` - indexed access for slices, vectors, deques and linked lists

mod keyed;
mod sequence;

pub use keyed::*;
pub use sequence::KeySequence;
