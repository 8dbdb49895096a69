//! Emission target abstraction.
//!
//! - [`LanguageCodegen`] - Renders the module IR for one target language
//! - [`GenerateResult`] - Result of writing a generated module

mod traits;

pub use traits::{GenerateResult, LanguageCodegen};
