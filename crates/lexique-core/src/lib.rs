//! Shared types for lexicon-driven word filtering.
//!
//! - [`entry`] -- Grammatical metadata attached to a word form in the lexicon
//! - [`decision`] -- Keep/remove verdicts produced by the candidate filter

pub mod decision;
pub mod entry;

pub use decision::{Decision, KeepReason, RemovalReason};
pub use entry::{Category, InflectionCode, LexiconEntry, Number};
