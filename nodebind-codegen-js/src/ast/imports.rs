//! ES module import builder.

use nodebind_codegen::builder::{CodeFragment, Renderable};

use super::string_literal;

/// Builder for `import <binding> from "<specifier>";`.
#[derive(Debug, Clone)]
pub struct Import {
    binding: String,
    from: String,
}

impl Import {
    /// Import the default export of `from` under `binding`.
    pub fn default_export(binding: impl Into<String>, from: impl Into<String>) -> Self {
        Self {
            binding: binding.into(),
            from: from.into(),
        }
    }
}

impl Renderable for Import {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::Line(format!(
            "import {} from {};",
            self.binding,
            string_literal(&self.from)
        ))]
    }
}
