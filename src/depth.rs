//! Depth gating for printed entries.

/// True when an entry at `depth` qualifies for output under `max_depth`.
///
/// `None` means unlimited. Depth counts directory descents from the
/// top-level target, which itself sits at depth 0.
pub fn depth_ok(depth: u64, max_depth: Option<u64>) -> bool {
    max_depth.is_none_or(|max| depth <= max)
}
