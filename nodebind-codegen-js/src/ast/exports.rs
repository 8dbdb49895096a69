//! ES module default export builder.

use nodebind_codegen::builder::{CodeFragment, Renderable};

use super::ArrowFn;

/// Builder for `export default (params) => ({ ... });`.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportDefault {
    func: ArrowFn,
}

impl ExportDefault {
    pub fn arrow_fn(func: ArrowFn) -> Self {
        Self { func }
    }
}

impl Renderable for ExportDefault {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        self.func.to_fragments_with("export default ", ";")
    }
}
