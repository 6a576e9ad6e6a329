// Filter pass: classify every candidate, collect the kept words and tally
// the reasons.

use std::collections::BTreeSet;
use std::fmt;

use lexique_core::{Decision, KeepReason, RemovalReason};

use crate::classify::classify;
use crate::lexicon::Lexicon;

/// Counters accumulated over one filter pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FilterStats {
    /// Number of candidates read, duplicates included.
    pub candidates: usize,
    pub kept_infinitives: usize,
    pub removed_conjugated: usize,
    pub removed_present_participles: usize,
    pub removed_plural_participles: usize,
    pub removed_plural_nouns: usize,
    pub removed_plural_adjectives: usize,
    /// Number of distinct words kept.
    pub kept_words: usize,
}

impl FilterStats {
    /// Record one decision. `kept_words` is not touched here since it counts
    /// distinct words.
    pub fn record(&mut self, decision: Decision) {
        self.candidates += 1;
        match decision {
            Decision::Keep(KeepReason::Infinitive) => self.kept_infinitives += 1,
            Decision::Keep(_) => {}
            Decision::Remove(reason) => *self.removed_mut(reason) += 1,
        }
    }

    /// Count of candidates removed for `reason`.
    pub fn removed(&self, reason: RemovalReason) -> usize {
        match reason {
            RemovalReason::Conjugated => self.removed_conjugated,
            RemovalReason::PresentParticiple => self.removed_present_participles,
            RemovalReason::PluralParticiple => self.removed_plural_participles,
            RemovalReason::PluralNoun => self.removed_plural_nouns,
            RemovalReason::PluralAdjective => self.removed_plural_adjectives,
        }
    }

    /// Total candidates removed, duplicates included.
    pub fn total_removed(&self) -> usize {
        self.removed_conjugated
            + self.removed_present_participles
            + self.removed_plural_participles
            + self.removed_plural_nouns
            + self.removed_plural_adjectives
    }

    fn removed_mut(&mut self, reason: RemovalReason) -> &mut usize {
        match reason {
            RemovalReason::Conjugated => &mut self.removed_conjugated,
            RemovalReason::PresentParticiple => &mut self.removed_present_participles,
            RemovalReason::PluralParticiple => &mut self.removed_plural_participles,
            RemovalReason::PluralNoun => &mut self.removed_plural_nouns,
            RemovalReason::PluralAdjective => &mut self.removed_plural_adjectives,
        }
    }
}

impl fmt::Display for FilterStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Results:")?;
        writeln!(f, "  Original words: {}", self.candidates)?;
        writeln!(f, "  Infinitives kept: {}", self.kept_infinitives)?;
        for reason in RemovalReason::ALL {
            writeln!(f, "  {} removed: {}", reason.label(), self.removed(reason))?;
        }
        write!(f, "  Final words: {}", self.kept_words)
    }
}

/// Result of a filter pass: the kept words, deduplicated and sorted, plus
/// the counters.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterOutcome {
    pub words: BTreeSet<String>,
    pub stats: FilterStats,
}

/// Classify each candidate against the lexicon.
///
/// Duplicated candidates are classified (and counted) once per occurrence
/// but appear once in the output.
pub fn filter_candidates<I, S>(lexicon: &Lexicon, candidates: I) -> FilterOutcome
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut outcome = FilterOutcome::default();
    for candidate in candidates {
        let word = candidate.as_ref();
        let decision = classify(word, lexicon.get(word));
        outcome.stats.record(decision);
        if decision.is_kept() && !outcome.words.contains(word) {
            outcome.words.insert(word.to_string());
        }
    }
    outcome.stats.kept_words = outcome.words.len();
    outcome
}
