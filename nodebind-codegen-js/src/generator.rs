//! JavaScript emitter for the bindings module.

use nodebind_codegen::language::LanguageCodegen;
use nodebind_ir::{Item, ModuleAst};

use crate::{
    ast::{ArrowFn, ExportDefault, Import, JsObject},
    code_file::CodeFile,
};

/// First line of every generated module.
pub const HEADER: &str = "Generated by nodebind. Do not edit.";

/// Renders a [`ModuleAst`] as an ES module.
///
/// Imports come first, in IR order, followed by a single
/// `export default (opts) => ({ ... });` factory. The output is a pure
/// function of the IR.
#[derive(Debug, Clone, Copy, Default)]
pub struct Generator;

impl Generator {
    pub fn new() -> Self {
        Self
    }

    fn code_file(&self, ast: &ModuleAst) -> CodeFile {
        let mut file = CodeFile::new().header(HEADER);

        for item in &ast.items {
            file = match item {
                Item::Import(import) => {
                    file.import(Import::default_export(&import.binding, &import.source))
                }
                Item::ExportFactory(factory) => {
                    let body = factory
                        .properties
                        .iter()
                        .fold(JsObject::new(), |obj, p| {
                            obj.call(p.key.as_str(), &p.callee, &p.arg)
                        });
                    file.export(ExportDefault::arrow_fn(
                        ArrowFn::new(&factory.param).returning(body),
                    ))
                }
            };
        }

        file
    }
}

impl LanguageCodegen for Generator {
    fn language(&self) -> &'static str {
        "javascript"
    }

    fn file_extension(&self) -> &'static str {
        "js"
    }

    fn render(&self, ast: &ModuleAst) -> String {
        self.code_file(ast).render()
    }
}
