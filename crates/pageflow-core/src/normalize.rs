//! Whitespace normalization applied uniformly to reconstructed text.

/// Collapse every whitespace run to a single space and trim both ends.
///
/// All text leaving the pipeline passes through here — token joins, line
/// texts, and merged paragraph seams — so applying it twice is a no-op.
pub fn normalize_space(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
