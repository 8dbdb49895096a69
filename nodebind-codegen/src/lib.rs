//! Naming, discovery and the compilation pipeline for the nodebind bindings
//! generator.
//!
//! This crate provides the target-agnostic half of code generation; the
//! JavaScript emitter lives in `nodebind-codegen-js`.
//!
//! # Module Organization
//!
//! - [`builder`] - Code generation building blocks (CodeBuilder, CodeFragment, etc.)
//! - [`naming`] - Node identifiers and import specifiers from entry paths
//! - [`discovery`] - Deterministic entry-point file discovery
//! - [`config`] - Project configuration (`nodebind.toml`)
//! - [`pipeline`] - Phases from discovered files to the module IR
//! - [`language`] - Emission target abstraction
//! - [`testing`] - Test utilities (feature-gated)

pub mod builder;
pub mod config;
pub mod discovery;
pub mod error;
pub mod language;
pub mod naming;
pub mod pipeline;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use config::{CollisionPolicy, Config};
pub use error::{Error, Result};
pub use language::LanguageCodegen;
