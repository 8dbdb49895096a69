//! JavaScript AST builders for imports, the default export, object literals
//! and arrow functions.
//!
//! Nodes render through [`Renderable`](nodebind_codegen::builder::Renderable).

mod exports;
mod imports;
mod literal;
mod objects;

pub use exports::ExportDefault;
pub use imports::Import;
pub use literal::string_literal;
pub use objects::{ArrowFn, JsObject, Property};
