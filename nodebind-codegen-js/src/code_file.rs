//! CodeFile abstraction for structured JavaScript module generation.
//!
//! Organizes a module into a header comment, imports and exports.

use nodebind_codegen::builder::{CodeBuilder, CodeFragment, Renderable};

use crate::ast::{ExportDefault, Import};

/// A structured representation of a JavaScript module.
///
/// Sections render in order (header, imports, exports) with a single blank
/// line between non-empty sections.
///
/// # Example
///
/// ```
/// use nodebind_codegen_js::{ArrowFn, CodeFile, ExportDefault, Import, JsObject};
///
/// let code = CodeFile::new()
///     .header("Generated file")
///     .import(Import::default_export("handler0", "./main/index.js"))
///     .export(ExportDefault::arrow_fn(
///         ArrowFn::new("opts").returning(JsObject::new().call("main", "handler0", "opts")),
///     ))
///     .render();
///
/// assert!(code.starts_with("// Generated file\n\nimport handler0"));
/// ```
#[derive(Default)]
pub struct CodeFile {
    header: Vec<String>,
    imports: Vec<Import>,
    exports: Vec<ExportDefault>,
}

impl CodeFile {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a line to the leading comment block.
    pub fn header(mut self, line: impl Into<String>) -> Self {
        self.header.push(line.into());
        self
    }

    pub fn import(mut self, import: Import) -> Self {
        self.imports.push(import);
        self
    }

    pub fn export(mut self, export: ExportDefault) -> Self {
        self.exports.push(export);
        self
    }

    /// Render with 2-space indentation.
    pub fn render(&self) -> String {
        let mut builder = CodeBuilder::javascript();

        let sections: [Vec<CodeFragment>; 3] = [
            self.header.iter().cloned().map(CodeFragment::Comment).collect(),
            self.imports.iter().flat_map(|i| i.to_fragments()).collect(),
            self.exports.iter().flat_map(|e| e.to_fragments()).collect(),
        ];

        let mut started = false;
        for fragments in sections.into_iter().filter(|s| !s.is_empty()) {
            if started {
                builder.push_blank();
            }
            started = true;
            for fragment in fragments {
                builder.apply_fragment(fragment);
            }
        }

        builder.build()
    }
}
