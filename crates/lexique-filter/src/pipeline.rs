// One-call pipeline: load lexicon, read candidates, filter, write.
//
// Both inputs are fully loaded and filtered before the output file is
// touched, so an input failure leaves any existing output untouched.

use std::path::{Path, PathBuf};

use crate::candidates::read_candidates;
use crate::filter::{FilterStats, filter_candidates};
use crate::lexicon::{Lexicon, LexiconError};
use crate::writer::write_word_list;

/// Default lexicon table.
pub const DEFAULT_LEXICON_PATH: &str = "Lexique383.tsv";

/// Default candidate word list.
pub const DEFAULT_CANDIDATES_PATH: &str = "mots_lexique.txt";

/// Default output word list.
pub const DEFAULT_OUTPUT_PATH: &str = "assets/dictionnaire_fr.txt";

/// Error type for a full filter run.
#[derive(Debug, thiserror::Error)]
pub enum FilterError {
    #[error(transparent)]
    Lexicon(#[from] LexiconError),
    #[error("failed to read candidate words {}: {source}", .path.display())]
    ReadCandidates {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write {}: {source}", .path.display())]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Input and output locations for [`filter_dictionary`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterPaths {
    pub lexicon: PathBuf,
    pub candidates: PathBuf,
    pub output: PathBuf,
}

impl FilterPaths {
    /// Build paths from optional overrides, falling back to the defaults.
    pub fn from_options(
        lexicon: Option<PathBuf>,
        candidates: Option<PathBuf>,
        output: Option<PathBuf>,
    ) -> Self {
        Self {
            lexicon: lexicon.unwrap_or_else(|| PathBuf::from(DEFAULT_LEXICON_PATH)),
            candidates: candidates.unwrap_or_else(|| PathBuf::from(DEFAULT_CANDIDATES_PATH)),
            output: output.unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_PATH)),
        }
    }
}

impl Default for FilterPaths {
    fn default() -> Self {
        Self::from_options(None, None, None)
    }
}

/// Words written by a run and the counters behind them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterReport {
    /// Kept words, sorted ascending and unique.
    pub words: Vec<String>,
    pub stats: FilterStats,
    /// Where the words were written.
    pub output: PathBuf,
}

/// Filter the candidate list against the lexicon and write the result.
pub fn filter_dictionary(paths: &FilterPaths) -> Result<FilterReport, FilterError> {
    tracing::info!(path = %paths.lexicon.display(), "loading lexicon");
    let lexicon = Lexicon::from_path(&paths.lexicon)?;
    tracing::info!(
        entries = lexicon.len(),
        skipped = lexicon.skipped_rows(),
        duplicates = lexicon.duplicate_rows(),
        "lexicon loaded"
    );

    tracing::info!(path = %paths.candidates.display(), "loading candidate words");
    let candidates = read_candidates(&paths.candidates).map_err(|source| {
        FilterError::ReadCandidates {
            path: paths.candidates.clone(),
            source,
        }
    })?;
    tracing::info!(count = candidates.len(), "candidate words loaded");

    tracing::info!("filtering");
    let outcome = filter_candidates(&lexicon, &candidates);
    tracing::info!(
        kept = outcome.stats.kept_words,
        removed = outcome.stats.total_removed(),
        "filtered"
    );

    write_output(&paths.output, &outcome.words)?;
    tracing::info!(path = %paths.output.display(), words = outcome.stats.kept_words, "saved");

    Ok(FilterReport {
        words: outcome.words.into_iter().collect(),
        stats: outcome.stats,
        output: paths.output.clone(),
    })
}

fn write_output<'a, I>(path: &Path, words: I) -> Result<(), FilterError>
where
    I: IntoIterator<Item = &'a String>,
{
    write_word_list(path, words).map_err(|source| FilterError::WriteOutput {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let paths = FilterPaths::default();
        assert_eq!(paths.lexicon, PathBuf::from("Lexique383.tsv"));
        assert_eq!(paths.candidates, PathBuf::from("mots_lexique.txt"));
        assert_eq!(paths.output, PathBuf::from("assets/dictionnaire_fr.txt"));
    }

    #[test]
    fn overrides_replace_only_given_paths() {
        let paths = FilterPaths::from_options(None, Some("words.txt".into()), None);
        assert_eq!(paths.lexicon, PathBuf::from(DEFAULT_LEXICON_PATH));
        assert_eq!(paths.candidates, PathBuf::from("words.txt"));
        assert_eq!(paths.output, PathBuf::from(DEFAULT_OUTPUT_PATH));
    }

    #[test]
    fn missing_lexicon_is_fatal() {
        let paths = FilterPaths::from_options(
            Some("/nonexistent/lexicon.tsv".into()),
            Some("/nonexistent/words.txt".into()),
            Some("/nonexistent/out.txt".into()),
        );
        let err = filter_dictionary(&paths).unwrap_err();
        assert!(matches!(err, FilterError::Lexicon(LexiconError::Open { .. })));
    }
}
