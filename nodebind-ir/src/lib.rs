//! Intermediate representation types for the nodebind bindings generator.
//!
//! # Architecture
//!
//! ```text
//! entry files → nodebind-codegen (naming, lowering) → nodebind-ir → emitter
//! ```
//!
//! The IR types are designed to be:
//! - Target-agnostic (no JavaScript-specific syntax)
//! - Ordered (discovery order is preserved end to end)
//! - Self-contained (no dependencies beyond serde)

mod descriptor;
mod module;

pub use descriptor::{HandlerDescriptor, NodeId};
pub use module::{FACTORY_PARAM, FactoryItem, ImportItem, Item, ModuleAst, Property};
