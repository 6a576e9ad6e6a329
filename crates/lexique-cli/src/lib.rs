// lexique-cli: shared utilities for CLI tools.

use std::path::PathBuf;
use std::process;

use lexique_filter::FilterPaths;
use tracing_subscriber::EnvFilter;

/// Log filter used when `RUST_LOG` is unset or invalid.
const DEFAULT_LOG_FILTER: &str = "info";

/// Install the stdout tracing subscriber.
///
/// Verbosity follows `RUST_LOG`, defaulting to `info` so progress messages
/// are shown.
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .init();
}

/// Map up to three positional arguments onto lexicon, candidates and output
/// paths. Missing positions use the defaults.
///
/// Arguments after `--` are always paths, so names starting with `-` can be
/// passed that way.
pub fn parse_paths(args: &[String]) -> Result<FilterPaths, String> {
    let mut paths = Vec::new();
    let mut options_done = false;
    for arg in args {
        if options_done {
            paths.push(arg);
        } else if arg == "--" {
            options_done = true;
        } else if arg.starts_with('-') && arg.len() > 1 {
            return Err(format!("unknown option: {arg}"));
        } else {
            paths.push(arg);
        }
    }
    if paths.len() > 3 {
        return Err(format!(
            "expected at most 3 paths (lexicon, words, output), got {}",
            paths.len()
        ));
    }

    let mut positional = paths.into_iter().map(PathBuf::from);
    Ok(FilterPaths::from_options(
        positional.next(),
        positional.next(),
        positional.next(),
    ))
}

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}

/// Check if `--help` or `-h` appears before any `--`.
pub fn wants_help(args: &[String]) -> bool {
    args.iter()
        .take_while(|a| *a != "--")
        .any(|a| a == "--help" || a == "-h")
}
