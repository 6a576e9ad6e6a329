//! Lexicon-driven filtering of candidate word lists.
//!
//! Reduces a word list to canonical forms (infinitives, singulars) by looking
//! each word up in a Lexique-style TSV table. Words missing from the table
//! are always kept.
//!
//! # Architecture
//!
//! - [`lexicon`] -- TSV loading into a first-occurrence-wins word map
//! - [`candidates`] -- Candidate word list parsing
//! - [`classify`] -- Pure per-word keep/remove classification
//! - [`filter`] -- Filter pass over a candidate list with a stats accumulator
//! - [`writer`] -- Sorted word list rendering and persistence
//! - [`pipeline`] -- Load, filter, write in one call

pub mod candidates;
pub mod classify;
pub mod filter;
pub mod lexicon;
pub mod pipeline;
pub mod writer;

pub use classify::classify;
pub use filter::{FilterOutcome, FilterStats, filter_candidates};
pub use lexicon::{Lexicon, LexiconError};
pub use pipeline::{
    DEFAULT_CANDIDATES_PATH, DEFAULT_LEXICON_PATH, DEFAULT_OUTPUT_PATH, FilterError, FilterPaths,
    FilterReport, filter_dictionary,
};
