// Candidate word list: one word per line, blank lines ignored.

use std::io;
use std::path::Path;

/// Parse a candidate list: each line is trimmed and lowercased, blank lines
/// are dropped. Order and duplicates are preserved.
pub fn parse_candidates(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_lowercase)
        .collect()
}

/// Read and parse a candidate list file.
pub fn read_candidates(path: impl AsRef<Path>) -> io::Result<Vec<String>> {
    let text = std::fs::read_to_string(path)?;
    Ok(parse_candidates(&text))
}
