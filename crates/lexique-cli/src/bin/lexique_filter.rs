// lexique-filter: Reduce a word list to canonical forms.
//
// Loads a Lexique TSV table, drops conjugated verbs, present participles,
// plural past participles, plural nouns and plural adjectives from the
// candidate list, and writes the remaining words sorted and deduplicated.
// Words absent from the table are kept.
//
// Usage:
//   lexique-filter [--] [LEXICON [WORDS [OUTPUT]]]
//
// Options:
//   -h, --help              Print help

use lexique_filter::{
    DEFAULT_CANDIDATES_PATH, DEFAULT_LEXICON_PATH, DEFAULT_OUTPUT_PATH, filter_dictionary,
};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if lexique_cli::wants_help(&args) {
        println!("lexique-filter: Reduce a word list to canonical forms.");
        println!();
        println!("Usage: lexique-filter [--] [LEXICON [WORDS [OUTPUT]]]");
        println!();
        println!("Keeps infinitives, singular participles, singular nouns and");
        println!("adjectives, other categories, and words missing from the lexicon.");
        println!();
        println!("Arguments:");
        println!("  LEXICON   Lexique TSV table (default: {DEFAULT_LEXICON_PATH})");
        println!("  WORDS     Candidate words, one per line (default: {DEFAULT_CANDIDATES_PATH})");
        println!("  OUTPUT    Filtered word list (default: {DEFAULT_OUTPUT_PATH})");
        println!();
        println!("Options:");
        println!("  -h, --help   Print this help");
        println!("  --           Treat all following arguments as paths");
        println!();
        println!("Log verbosity follows RUST_LOG (default: info).");
        return;
    }

    let paths = lexique_cli::parse_paths(&args).unwrap_or_else(|e| lexique_cli::fatal(&e));
    lexique_cli::init_tracing();

    let report = filter_dictionary(&paths).unwrap_or_else(|e| lexique_cli::fatal(&e.to_string()));

    println!();
    println!("{}", report.stats);
    println!();
    println!("Saved to {}", report.output.display());
}
