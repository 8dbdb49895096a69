//! Code builder utility for generating properly indented code.

use super::{CodeFragment, Indent, Renderable};

/// Builder that turns fragments into indented source text.
///
/// # Example
///
/// ```
/// use nodebind_codegen::builder::CodeBuilder;
///
/// let mut builder = CodeBuilder::javascript();
/// builder
///     .push_line("function main() {")
///     .push_indent()
///     .push_line("return 1;")
///     .push_dedent()
///     .push_line("}");
///
/// assert_eq!(builder.build(), "function main() {\n  return 1;\n}\n");
/// ```
#[derive(Debug, Clone)]
pub struct CodeBuilder {
    indent_level: usize,
    indent: Indent,
    buffer: String,
}

impl CodeBuilder {
    /// Create a new CodeBuilder with the specified indentation.
    pub fn new(indent: Indent) -> Self {
        Self {
            indent_level: 0,
            indent,
            buffer: String::new(),
        }
    }

    /// Create a new CodeBuilder with 2-space indentation.
    pub fn javascript() -> Self {
        Self::new(Indent::JAVASCRIPT)
    }

    /// Add a line of code with current indentation.
    pub fn push_line(&mut self, s: &str) -> &mut Self {
        self.write_indent();
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    /// Add a blank line.
    pub fn push_blank(&mut self) -> &mut Self {
        self.buffer.push('\n');
        self
    }

    /// Increase indentation level.
    pub fn push_indent(&mut self) -> &mut Self {
        self.indent_level += 1;
        self
    }

    /// Decrease indentation level.
    pub fn push_dedent(&mut self) -> &mut Self {
        self.indent_level = self.indent_level.saturating_sub(1);
        self
    }

    /// Add a `//` line comment.
    pub fn push_comment(&mut self, text: &str) -> &mut Self {
        self.write_indent();
        self.buffer.push_str("// ");
        self.buffer.push_str(text);
        self.buffer.push('\n');
        self
    }

    /// Emit a Renderable node.
    pub fn emit(&mut self, node: &impl Renderable) -> &mut Self {
        for fragment in node.to_fragments() {
            self.apply_fragment(fragment);
        }
        self
    }

    /// Apply a single code fragment.
    pub fn apply_fragment(&mut self, fragment: CodeFragment) {
        match fragment {
            CodeFragment::Line(s) => {
                self.push_line(&s);
            }
            CodeFragment::Blank => {
                self.push_blank();
            }
            CodeFragment::Block {
                header,
                body,
                close,
            } => {
                self.push_line(&header);
                self.push_indent();
                for f in body {
                    self.apply_fragment(f);
                }
                self.push_dedent();
                if let Some(c) = close {
                    self.push_line(&c);
                }
            }
            CodeFragment::Indent(fragments) => {
                self.push_indent();
                for f in fragments {
                    self.apply_fragment(f);
                }
                self.push_dedent();
            }
            CodeFragment::Sequence(fragments) => {
                for f in fragments {
                    self.apply_fragment(f);
                }
            }
            CodeFragment::Comment(text) => {
                self.push_comment(&text);
            }
        }
    }

    /// Get the current indentation level.
    pub fn current_indent(&self) -> usize {
        self.indent_level
    }

    /// Consume the builder and return the generated code.
    pub fn build(self) -> String {
        self.buffer
    }

    /// Get a reference to the current buffer content.
    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    fn write_indent(&mut self) {
        for _ in 0..self.indent_level {
            self.buffer.push_str(self.indent.as_str());
        }
    }
}

impl Default for CodeBuilder {
    fn default() -> Self {
        Self::javascript()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_line() {
        let mut builder = CodeBuilder::javascript();
        builder.push_line("const x = 1;");
        assert_eq!(builder.build(), "const x = 1;\n");
    }

    #[test]
    fn test_blank_line() {
        let mut builder = CodeBuilder::javascript();
        builder
            .push_line("import a from \"./a.js\";")
            .push_blank()
            .push_line("export default a;");
        assert_eq!(
            builder.build(),
            "import a from \"./a.js\";\n\nexport default a;\n"
        );
    }

    #[test]
    fn test_dedent_saturates() {
        let mut builder = CodeBuilder::javascript();
        builder.push_dedent().push_dedent().push_line("x;");
        assert_eq!(builder.current_indent(), 0);
        assert_eq!(builder.build(), "x;\n");
    }

    #[test]
    fn test_comment() {
        let mut builder = CodeBuilder::javascript();
        builder.push_indent().push_comment("generated");
        assert_eq!(builder.as_str(), "  // generated\n");
    }

    #[test]
    fn test_emit_block_fragment() {
        struct BlockNode;
        impl Renderable for BlockNode {
            fn to_fragments(&self) -> Vec<CodeFragment> {
                vec![CodeFragment::Block {
                    header: "export default (opts) => ({".to_string(),
                    body: vec![CodeFragment::line("\"main\": handler0(opts),")],
                    close: Some("});".to_string()),
                }]
            }
        }

        let mut builder = CodeBuilder::javascript();
        builder.emit(&BlockNode);
        assert_eq!(
            builder.build(),
            "export default (opts) => ({\n  \"main\": handler0(opts),\n});\n"
        );
    }

    #[test]
    fn test_emit_nested_sequence() {
        let fragments = CodeFragment::sequence(vec![
            CodeFragment::comment("header"),
            CodeFragment::indent(vec![CodeFragment::line("a;")]),
            CodeFragment::blank(),
        ]);

        let mut builder = CodeBuilder::javascript();
        builder.apply_fragment(fragments);
        assert_eq!(builder.build(), "// header\n  a;\n\n");
    }
}
