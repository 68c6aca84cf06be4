//! Dusk - a `du`-style disk usage reporter

pub mod cli;
pub mod depth;
pub mod format;
pub mod report;
pub mod walk;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use cli::{Config, Parsed, parse_args};
pub use report::report;
pub use walk::walk;
