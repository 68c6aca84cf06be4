//! Test harness for dusk integration tests

use std::path::Path;
use std::process::Command;

pub use dusk::test_utils::TestTree;

/// Run the dusk binary in `dir` and capture stdout, stderr, and success.
pub fn run_dusk(dir: &Path, args: &[&str]) -> (String, String, bool) {
    let binary = env!("CARGO_BIN_EXE_dusk");
    let output = Command::new(binary)
        .args(args)
        .current_dir(dir)
        .output()
        .expect("Failed to run dusk");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let success = output.status.success();

    (stdout, stderr, success)
}

/// Parse the leading size column of one output line.
pub fn size_of(line: &str) -> u64 {
    line.split_whitespace()
        .next()
        .expect("size column")
        .parse()
        .expect("numeric size")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_harness_creates_temp_tree() {
        let tree = TestTree::new();
        assert!(tree.path().exists());
    }

    #[test]
    fn test_harness_add_file_creates_parents() {
        let tree = TestTree::new();
        let path = tree.add_file("a/b/c.bin", 16);
        assert!(path.exists());
    }

    #[test]
    fn test_size_of_reads_leading_column() {
        assert_eq!(size_of("42      some/path"), 42);
    }
}
