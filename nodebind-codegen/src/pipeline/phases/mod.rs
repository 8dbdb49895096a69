//! Built-in pipeline phases.
//!
//! - [`NamePhase`] - derives handler descriptors from entry paths
//! - [`ValidatePhase`] - runs lints and enforces the collision policy
//! - [`LowerPhase`] - builds the module IR

mod lower;
mod name;
mod validate;

pub use lower::{LowerPhase, lower_descriptors};
pub use name::NamePhase;
pub use validate::{AmbiguousSegmentLint, DuplicateNodeLint, Lint, LintInfo, ValidatePhase};
