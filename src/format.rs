//! Size rendering for report lines.

use std::io::{self, Write};
use std::path::Path;

use crate::cli::Config;

/// Minimum width of the size column.
const SIZE_WIDTH: usize = 8;

/// Binary step between unit tiers.
const STEP: f64 = 1024.0;

/// Round up to the next whole number.
fn ceiling(x: f64) -> u64 {
    x.ceil() as u64
}

/// Round up to the next tenth.
fn ceiling_tenth(x: f64) -> f64 {
    (x * 10.0).ceil() / 10.0
}

/// Render `kib` with the largest K/M/G/T suffix whose scaled value is at
/// least 1.
///
/// Values of 10 and above in their tier print as whole numbers, values in
/// [1, 10) with one decimal place. Both forms round up, never to nearest,
/// so 1025 KiB is `1.1M` and 10241 KiB is `11M`. A raw zero renders as the
/// bare string `0`.
pub fn human_size(kib: u64) -> String {
    if kib == 0 {
        return String::from("0");
    }
    let mut scaled = kib as f64;
    let mut unit = 'K';
    for next in ['M', 'G', 'T'] {
        if scaled < STEP {
            break;
        }
        scaled /= STEP;
        unit = next;
    }
    if scaled >= 10.0 {
        format!("{}{unit}", ceiling(scaled))
    } else {
        format!("{:.1}{unit}", ceiling_tenth(scaled))
    }
}

/// Write the size column followed by the path.
pub fn write_entry<W: Write>(
    out: &mut W,
    kib: u64,
    path: &Path,
    config: &Config,
) -> io::Result<()> {
    if config.human_readable {
        writeln!(out, "{:<width$}{}", human_size(kib), path.display(), width = SIZE_WIDTH)
    } else {
        writeln!(out, "{kib:<width$}{}", path.display(), width = SIZE_WIDTH)
    }
}

/// Write one report line and hand back the raw KiB value.
///
/// Printing failures never disturb the accumulated totals, so the value
/// comes back unchanged either way.
pub fn report_entry<W: Write>(out: &mut W, kib: u64, path: &Path, config: &Config) -> u64 {
    let _ = write_entry(out, kib, path, config);
    kib
}
