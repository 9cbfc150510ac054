//! CLI command implementations.

pub mod export;
pub mod find;
pub mod inspect;
pub mod owners;
