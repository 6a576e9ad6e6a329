// Filtered word list persistence.

use std::io;
use std::path::Path;

/// Join words with `\n`, without a trailing newline.
pub fn render_word_list<I, S>(words: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out = String::new();
    for (i, word) in words.into_iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(word.as_ref());
    }
    out
}

/// Write words one per line to `path`, replacing any existing content.
///
/// The caller is responsible for ordering and deduplication.
pub fn write_word_list<I, S>(path: impl AsRef<Path>, words: I) -> io::Result<()>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    std::fs::write(path, render_word_list(words))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_without_trailing_newline() {
        assert_eq!(render_word_list(["a", "b", "c"]), "a\nb\nc");
    }

    #[test]
    fn single_and_empty() {
        assert_eq!(render_word_list(["seul"]), "seul");
        assert_eq!(render_word_list(Vec::<String>::new()), "");
    }
}
