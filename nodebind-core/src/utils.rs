//! Shared path helpers.
//!
//! Generated output must not depend on the host platform, so every path that
//! ends up in emitted code goes through these helpers first.

/// Replace every backslash with a forward slash (e.g., "main\\B" -> "main/B")
pub fn to_forward_slashes(s: &str) -> String {
    s.replace('\\', "/")
}

/// Split a path on either separator, dropping empty and `.` segments
/// (e.g., "./main//B\\A" -> ["main", "B", "A"])
pub fn path_segments(s: &str) -> Vec<&str> {
    s.split(['/', '\\'])
        .filter(|segment| !segment.is_empty() && *segment != ".")
        .collect()
}
