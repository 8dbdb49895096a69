//! Compilation pipeline from discovered entry files to the module IR.
//!
//! The [`Pipeline`] runs explicit phases over a shared
//! [`CompilationContext`]:
//!
//! - `name` - entry paths to [`HandlerDescriptor`]s
//! - `validate` - lints over the descriptors, including the collision policy
//! - `lower` - descriptors to [`ModuleAst`]
//!
//! # Example
//!
//! ```ignore
//! use nodebind_codegen::{Config, pipeline::Pipeline};
//!
//! let ctx = Pipeline::new(&config).run(src_dir, files)?;
//!
//! for diag in ctx.warnings() {
//!     eprintln!("{}", diag);
//! }
//!
//! let code = generator.render(&ctx.take_ast());
//! ```
//!
//! [`HandlerDescriptor`]: nodebind_ir::HandlerDescriptor
//! [`ModuleAst`]: nodebind_ir::ModuleAst

mod context;
mod diagnostic;
mod phase;
pub mod phases;
mod runner;

pub use context::CompilationContext;
pub use diagnostic::{Diagnostic, Severity};
pub use phase::{Phase, PhaseInfo};
pub use phases::lower_descriptors;
pub use runner::Pipeline;
