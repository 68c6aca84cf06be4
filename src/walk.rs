//! Recursive walker that accumulates allocated blocks bottom-up.

use std::fs::{self, Metadata};
use std::io::{self, Write};
use std::path::Path;

use log::debug;

use crate::cli::Config;
use crate::depth::depth_ok;
use crate::format::report_entry;

/// Allocated storage charged to one entry, in KiB.
///
/// POSIX metadata counts 512-byte blocks; halving yields KiB.
#[cfg(unix)]
pub fn block_usage_kib(meta: &Metadata) -> u64 {
    use std::os::unix::fs::MetadataExt;
    meta.blocks() / 2
}

/// Fallback for targets without an allocated-block count.
#[cfg(not(unix))]
pub fn block_usage_kib(meta: &Metadata) -> u64 {
    meta.len().div_ceil(1024)
}

/// System error text without the trailing `(os error N)` tag, matching the
/// classic `perror` rendering in diagnostics.
pub(crate) fn os_error_text(err: &io::Error) -> String {
    let text = err.to_string();
    match text.find(" (os error") {
        Some(pos) => text[..pos].to_string(),
        None => text,
    }
}

/// Files and symlinks are accounted alike: the link's own metadata cost,
/// never the target's.
pub(crate) fn is_file_like(meta: &Metadata) -> bool {
    let file_type = meta.file_type();
    file_type.is_file() || file_type.is_symlink()
}

/// Recursively compute and report usage for the directory at `path`.
///
/// Returns the directory's total in KiB: its own metadata cost plus the
/// usage of everything below it, whether or not individual lines printed.
/// An unreadable directory is reported, contributes its own cost only, and
/// prints no line of its own; siblings and ancestors keep going.
pub fn walk<W: Write>(out: &mut W, path: &Path, config: &Config, depth: u64) -> u64 {
    debug!("walking {} at depth {depth}", path.display());

    let mut total = match fs::symlink_metadata(path) {
        Ok(meta) => block_usage_kib(&meta),
        Err(err) => {
            eprintln!(
                "{}: cannot access `{}': {}",
                config.program,
                path.display(),
                os_error_text(&err)
            );
            return 0;
        }
    };

    let entries = match fs::read_dir(path) {
        Ok(entries) => entries,
        Err(err) => {
            eprintln!(
                "{}: cannot read directory `{}': {}",
                config.program,
                path.display(),
                os_error_text(&err)
            );
            return total;
        }
    };

    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                eprintln!(
                    "{}: cannot read directory `{}': {}",
                    config.program,
                    path.display(),
                    os_error_text(&err)
                );
                continue;
            }
        };
        let child = path.join(entry.file_name());
        // DirEntry::metadata has lstat semantics: symlinks are not followed.
        let meta = match entry.metadata() {
            Ok(meta) => meta,
            Err(err) => {
                eprintln!(
                    "{}: cannot access `{}': {}",
                    config.program,
                    child.display(),
                    os_error_text(&err)
                );
                continue;
            }
        };

        if is_file_like(&meta) && config.all && depth_ok(depth + 1, config.max_depth) {
            total += report_entry(out, block_usage_kib(&meta), &child, config);
        } else if meta.is_dir() {
            total += walk(out, &child, config, depth + 1);
        } else {
            // Not individually shown, still counted.
            total += block_usage_kib(&meta);
        }
    }

    if depth_ok(depth, config.max_depth) {
        report_entry(out, total, path, config);
    }

    total
}
