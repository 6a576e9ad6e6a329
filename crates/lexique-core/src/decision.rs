// Filter verdicts and the reasons behind them.

/// Why a candidate word was kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeepReason {
    /// The word has no lexicon entry.
    NotInLexicon,
    /// Verb or auxiliary in its infinitive (or lemma) form.
    Infinitive,
    /// Past participle that is not plural.
    SingularParticiple,
    /// Noun that is not plural.
    SingularNoun,
    /// Adjective that is not plural.
    SingularAdjective,
    /// Category the filter does not restrict.
    OtherCategory,
}

/// Why a candidate word was removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RemovalReason {
    /// Conjugated verb form other than a participle.
    Conjugated,
    PresentParticiple,
    PluralParticiple,
    PluralNoun,
    PluralAdjective,
}

impl RemovalReason {
    /// Every reason, in report order.
    pub const ALL: [RemovalReason; 5] = [
        RemovalReason::Conjugated,
        RemovalReason::PresentParticiple,
        RemovalReason::PluralParticiple,
        RemovalReason::PluralNoun,
        RemovalReason::PluralAdjective,
    ];

    /// Label used in summary reports.
    pub fn label(self) -> &'static str {
        match self {
            RemovalReason::Conjugated => "Conjugated verbs",
            RemovalReason::PresentParticiple => "Present participles",
            RemovalReason::PluralParticiple => "Plural past participles",
            RemovalReason::PluralNoun => "Plural nouns",
            RemovalReason::PluralAdjective => "Plural adjectives",
        }
    }
}

/// Outcome of classifying one candidate word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Decision {
    Keep(KeepReason),
    Remove(RemovalReason),
}

impl Decision {
    pub fn is_kept(self) -> bool {
        matches!(self, Decision::Keep(_))
    }
}
