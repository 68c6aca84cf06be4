//! Top-level driver: per-target dispatch and the grand total.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use log::debug;

use crate::cli::Config;
use crate::format::report_entry;
use crate::walk::{block_usage_kib, is_file_like, os_error_text, walk};

/// Report usage for every target, returning how many were inaccessible.
///
/// An empty target list stands for the current directory. Explicitly named
/// files and symlinks always print, whether or not `-a` was given. An
/// inaccessible target is reported and skipped without stopping the rest.
pub fn report<W: Write>(out: &mut W, paths: &[PathBuf], config: &Config) -> usize {
    let mut grand_total = 0;
    let mut failures = 0;

    if paths.is_empty() {
        grand_total = walk(out, Path::new("."), config, 0);
    }

    for path in paths {
        debug!("target {}", path.display());
        match fs::symlink_metadata(path) {
            Err(err) => {
                eprintln!(
                    "{}: cannot access `{}': {}",
                    config.program,
                    path.display(),
                    os_error_text(&err)
                );
                failures += 1;
            }
            Ok(meta) if is_file_like(&meta) => {
                grand_total += report_entry(out, block_usage_kib(&meta), path, config);
            }
            Ok(meta) if meta.is_dir() => {
                grand_total += walk(out, path, config, 0);
            }
            // Other entry types (fifos, sockets, devices) are skipped.
            Ok(_) => {}
        }
    }

    if config.grand_total {
        report_entry(out, grand_total, Path::new("total"), config);
    }

    failures
}
