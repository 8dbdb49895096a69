//! Core utilities and types for the nodebind bindings generator.
//!
//! This crate provides the file-writing and path primitives shared by the
//! rest of the workspace.

mod file;
mod utils;

// File operations
pub use file::{File, WriteResult};
// Path utilities
pub use utils::{path_segments, to_forward_slashes};
