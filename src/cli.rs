//! Command-line parsing.
//!
//! The parser makes a single pass over argv and keeps going after a bad
//! option: every malformed token is recorded and the whole batch is surfaced
//! at once before the process exits. Short flags combine into clusters
//! (`-ach`), anything that does not start with `-` is a target path.

use std::path::PathBuf;

/// Immutable run configuration, built once from argv and passed by
/// reference through the traversal.
#[derive(Debug, Clone)]
pub struct Config {
    /// Print individual files, not just directory aggregates (`-a`).
    pub all: bool,
    /// Print a final grand-total line (`-c`).
    pub grand_total: bool,
    /// Render sizes with K/M/G/T suffixes (`-h`).
    pub human_readable: bool,
    /// Deepest level that still prints; `None` means unlimited.
    pub max_depth: Option<u64>,
    /// Invocation name, used as the prefix of every diagnostic.
    pub program: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            all: false,
            grand_total: false,
            human_readable: false,
            max_depth: None,
            program: String::from("dusk"),
        }
    }
}

/// A successfully parsed invocation.
#[derive(Debug)]
pub enum Parsed {
    /// Run a report over the given target paths (empty means `.`).
    Run(Config, Vec<PathBuf>),
    /// `--help` was given; print usage and exit cleanly.
    Help,
}

/// One-screen usage summary printed for `--help`.
pub const USAGE: &str = "\
Usage: dusk [OPTION]... [PATH]...
Summarize the disk usage of each PATH, recursively for directories.

  -a              write counts for all files, not just directories
  -c              produce a grand total
  -h              print sizes in human-readable form (e.g. 1.0K, 234M, 2G)
  --max-depth=N   print totals only for entries N or fewer levels deep
  --help          display this help and exit

With no PATH, the current directory is summarized.";

/// Parse argv (minus the program name) into a run configuration.
///
/// On failure the `Err` carries one already-formatted diagnostic per
/// malformed token, in the order they appeared.
pub fn parse_args(program: &str, args: &[String]) -> Result<Parsed, Vec<String>> {
    let mut config = Config {
        program: program.to_string(),
        ..Config::default()
    };
    let mut paths = Vec::new();
    let mut errors = Vec::new();

    for arg in args {
        if arg == "--help" {
            return Ok(Parsed::Help);
        }
        if let Some(value) = arg.strip_prefix("--max-depth=") {
            match value.parse::<i64>() {
                Ok(depth) if depth >= 0 => config.max_depth = Some(depth as u64),
                _ => errors.push(format!("{program}: invalid maximum depth `{value}'")),
            }
        } else if arg.starts_with("--") {
            errors.push(format!("{program}: unrecognized option '{arg}'"));
        } else if let Some(cluster) = arg.strip_prefix('-') {
            for flag in cluster.chars() {
                match flag {
                    'a' => config.all = true,
                    'c' => config.grand_total = true,
                    'h' => config.human_readable = true,
                    _ => errors.push(format!("{program}: invalid option -- '{flag}'")),
                }
            }
        } else {
            paths.push(PathBuf::from(arg));
        }
    }

    if errors.is_empty() {
        Ok(Parsed::Run(config, paths))
    } else {
        Err(errors)
    }
}
