// Lexicon loading from a tab-separated Lexique table.
//
// The table has a header row naming its columns. Only five columns matter
// here: ortho (word form), cgram (category), lemme (lemma), infover
// (inflection code) and nombre (number). Rows whose word form is not a single
// alphabetic token are skipped; the first row for a given word wins.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, StringRecord};
use hashbrown::HashMap;
use lexique_core::LexiconEntry;

pub const COL_ORTHO: &str = "ortho";
pub const COL_CGRAM: &str = "cgram";
pub const COL_LEMME: &str = "lemme";
pub const COL_INFOVER: &str = "infover";
pub const COL_NOMBRE: &str = "nombre";

/// Error type for lexicon loading.
#[derive(Debug, thiserror::Error)]
pub enum LexiconError {
    #[error("failed to open lexicon {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("lexicon header is missing required column `{0}`")]
    MissingColumn(&'static str),
    #[error("failed to read lexicon: {0}")]
    Csv(#[from] csv::Error),
}

/// Column positions resolved from the header row.
#[derive(Debug, Clone, Copy)]
struct Columns {
    ortho: usize,
    cgram: usize,
    lemme: usize,
    infover: Option<usize>,
    nombre: Option<usize>,
}

impl Columns {
    fn from_header(header: &StringRecord) -> Result<Self, LexiconError> {
        let find = |name: &str| header.iter().position(|h| h.trim() == name);
        let require = |name: &'static str| find(name).ok_or(LexiconError::MissingColumn(name));
        Ok(Self {
            ortho: require(COL_ORTHO)?,
            cgram: require(COL_CGRAM)?,
            lemme: require(COL_LEMME)?,
            infover: find(COL_INFOVER),
            nombre: find(COL_NOMBRE),
        })
    }

    /// Extract `(word, entry)` from a row, or `None` if a required field is
    /// missing.
    fn parse_row<'r>(&self, row: &'r StringRecord) -> Option<(&'r str, LexiconEntry)> {
        let ortho = row.get(self.ortho)?;
        let cgram = row.get(self.cgram)?;
        let lemme = row.get(self.lemme)?;
        let optional = |idx: Option<usize>| idx.and_then(|i| row.get(i)).unwrap_or("");
        let entry = LexiconEntry::from_tags(
            cgram,
            lemme,
            optional(self.infover),
            optional(self.nombre),
        );
        Some((ortho, entry))
    }
}

/// Normalize a raw `ortho` value into a lookup key.
///
/// Returns `None` for empty words and words containing a space, a hyphen or
/// any non-letter character.
pub fn normalize_word(raw: &str) -> Option<String> {
    let word = raw.trim().to_lowercase();
    if word.is_empty()
        || word.contains(' ')
        || word.contains('-')
        || !word.chars().all(is_letter)
    {
        return None;
    }
    Some(word)
}

/// Alphabetic but not a letter number (Roman numerals and the like).
///
/// Combining marks with the Other_Alphabetic property are still accepted;
/// std exposes no general category lookup to reject them.
fn is_letter(c: char) -> bool {
    c.is_alphabetic() && !c.is_numeric()
}

/// Word form to metadata map, built once and read-only afterwards.
#[derive(Debug, Default)]
pub struct Lexicon {
    entries: HashMap<String, LexiconEntry>,
    skipped_rows: usize,
    duplicate_rows: usize,
}

impl Lexicon {
    /// Create an empty lexicon.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a lexicon from a TSV file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, LexiconError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| LexiconError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_reader(BufReader::new(file))
    }

    /// Load a lexicon from any TSV source with a header row.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, LexiconError> {
        let mut reader = ReaderBuilder::new()
            .delimiter(b'\t')
            .flexible(true)
            .from_reader(reader);
        let columns = Columns::from_header(reader.headers()?)?;

        let mut lexicon = Self::new();
        let mut row = StringRecord::new();
        while reader.read_record(&mut row)? {
            let Some((ortho, entry)) = columns.parse_row(&row) else {
                lexicon.skipped_rows += 1;
                continue;
            };
            let Some(word) = normalize_word(ortho) else {
                lexicon.skipped_rows += 1;
                continue;
            };
            if !lexicon.insert(word, entry) {
                lexicon.duplicate_rows += 1;
            }
        }
        Ok(lexicon)
    }

    /// Insert an entry unless the word is already present.
    ///
    /// Returns `true` if the entry was stored.
    pub fn insert(&mut self, word: impl Into<String>, entry: LexiconEntry) -> bool {
        match self.entries.entry(word.into()) {
            hashbrown::hash_map::Entry::Occupied(_) => false,
            hashbrown::hash_map::Entry::Vacant(slot) => {
                slot.insert(entry);
                true
            }
        }
    }

    pub fn get(&self, word: &str) -> Option<&LexiconEntry> {
        self.entries.get(word)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Rows dropped while loading because of a missing field or an invalid word.
    pub fn skipped_rows(&self) -> usize {
        self.skipped_rows
    }

    /// Rows ignored while loading because their word was already present.
    pub fn duplicate_rows(&self) -> usize {
        self.duplicate_rows
    }
}
