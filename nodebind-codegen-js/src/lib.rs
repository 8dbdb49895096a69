//! JavaScript emitter for nodebind.
//!
//! Renders the bindings module IR produced by `nodebind-codegen` as an ES
//! module: one default import per handler and a default-exported factory
//! that calls every handler with the same `opts` argument.
//!
//! ```
//! use nodebind_codegen::{LanguageCodegen, pipeline::lower_descriptors};
//! use nodebind_codegen_js::Generator;
//! use nodebind_ir::{HandlerDescriptor, NodeId};
//!
//! let descriptors = vec![HandlerDescriptor::new(NodeId::from("main"), "./main/index.js", 0)];
//! let code = Generator.render(&lower_descriptors(&descriptors));
//!
//! assert!(code.contains("import handler0 from \"./main/index.js\";"));
//! assert!(code.contains("\"main\": handler0(opts),"));
//! ```

mod code_file;
mod generator;

pub mod ast;

pub use ast::{ArrowFn, ExportDefault, Import, JsObject, Property, string_literal};
pub use code_file::CodeFile;
pub use generator::{Generator, HEADER};
pub use nodebind_codegen::language::{GenerateResult, LanguageCodegen};
