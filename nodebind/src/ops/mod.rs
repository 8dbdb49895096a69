//! Core operations.
//!
//! Business logic for nodebind commands, separated from argument parsing
//! and output rendering.

pub mod build;

pub use build::build;
