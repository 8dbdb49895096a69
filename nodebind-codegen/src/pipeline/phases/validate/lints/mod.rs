//! Built-in lints.

mod ambiguous_segment;
mod duplicate_node;

pub use ambiguous_segment::AmbiguousSegmentLint;
pub use duplicate_node::DuplicateNodeLint;

/// Entry path as shown to users (`./main/B/index.js` -> `main/B/index.js`).
fn display_path(import_path: &str) -> &str {
    import_path.strip_prefix("./").unwrap_or(import_path)
}
