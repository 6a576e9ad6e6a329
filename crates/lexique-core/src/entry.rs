// Lexicon entry types: category, number, inflection code.
//
// Tags follow the Lexique table conventions (`cgram`, `nombre`, `infover`
// columns). Only the tags the filter reacts to get dedicated variants.

// ---------------------------------------------------------------------------
// Tag constants
// ---------------------------------------------------------------------------

pub const CGRAM_VERB: &str = "VER";
pub const CGRAM_AUXILIARY: &str = "AUX";
pub const CGRAM_NOUN: &str = "NOM";
pub const CGRAM_ADJECTIVE: &str = "ADJ";

pub const NOMBRE_SINGULAR: &str = "s";
pub const NOMBRE_PLURAL: &str = "p";

/// Prefix of an infinitive inflection code.
pub const INFINITIVE_MARKER: &str = "inf";

/// Substring marking a present participle reading.
pub const PRESENT_PARTICIPLE_MARKER: &str = "par:pre";

/// Substring marking a past participle reading.
pub const PAST_PARTICIPLE_MARKER: &str = "par:pas";

/// Grammatical category of a lexicon entry (`cgram` column).
///
/// Matching is exact: sub-tagged categories such as `ADJ:pos` are `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Category {
    Verb,
    Auxiliary,
    Noun,
    Adjective,
    /// Any other tag, kept verbatim.
    Other(String),
}

impl Category {
    /// Parse a `cgram` tag.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            CGRAM_VERB => Category::Verb,
            CGRAM_AUXILIARY => Category::Auxiliary,
            CGRAM_NOUN => Category::Noun,
            CGRAM_ADJECTIVE => Category::Adjective,
            other => Category::Other(other.to_string()),
        }
    }
}

/// Grammatical number (`nombre` column).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Number {
    Singular,
    Plural,
    /// Empty or unrecognized tag. Treated as not plural.
    #[default]
    Unspecified,
}

impl Number {
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            NOMBRE_SINGULAR => Number::Singular,
            NOMBRE_PLURAL => Number::Plural,
            _ => Number::Unspecified,
        }
    }

    pub fn is_plural(self) -> bool {
        self == Number::Plural
    }
}

/// Free-text inflection tag (`infover` column), e.g. `ind:pre:3s;sub:pre:3s;`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct InflectionCode(String);

impl InflectionCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The code starts with the infinitive marker.
    pub fn is_infinitive(&self) -> bool {
        self.0.starts_with(INFINITIVE_MARKER)
    }

    /// One of the readings is a present participle.
    pub fn has_present_participle(&self) -> bool {
        self.0.contains(PRESENT_PARTICIPLE_MARKER)
    }

    /// One of the readings is a past participle.
    pub fn has_past_participle(&self) -> bool {
        self.0.contains(PAST_PARTICIPLE_MARKER)
    }
}

impl From<&str> for InflectionCode {
    fn from(code: &str) -> Self {
        Self::new(code)
    }
}

/// Grammatical metadata for one word form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexiconEntry {
    pub category: Category,
    /// Base form, trimmed and lowercased.
    pub lemma: String,
    pub inflection: InflectionCode,
    pub number: Number,
}

impl LexiconEntry {
    pub fn new(
        category: Category,
        lemma: impl Into<String>,
        inflection: impl Into<InflectionCode>,
        number: Number,
    ) -> Self {
        Self {
            category,
            lemma: lemma.into(),
            inflection: inflection.into(),
            number,
        }
    }

    /// Build an entry from raw Lexique column values.
    ///
    /// The lemma is trimmed and lowercased; the other tags are taken as-is.
    pub fn from_tags(cgram: &str, lemme: &str, infover: &str, nombre: &str) -> Self {
        Self {
            category: Category::from_tag(cgram),
            lemma: lemme.trim().to_lowercase(),
            inflection: InflectionCode::new(infover),
            number: Number::from_tag(nombre),
        }
    }
}
