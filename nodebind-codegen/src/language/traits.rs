//! Language-agnostic code generation traits.

use std::path::{Path, PathBuf};

use nodebind_core::{File, WriteResult};
use nodebind_ir::ModuleAst;

use crate::{Error, Result};

/// Trait for target-specific emitters.
///
/// Naming, discovery and lowering do not depend on the target, so adding an
/// output format only means implementing this trait.
pub trait LanguageCodegen {
    /// Language identifier (e.g., "javascript")
    fn language(&self) -> &'static str;

    /// File extension of the generated module (e.g., "js")
    fn file_extension(&self) -> &'static str;

    /// Render the module to source text.
    ///
    /// Must be a pure function of `ast`: equal input, byte-identical output.
    fn render(&self, ast: &ModuleAst) -> String;

    /// Render the module and write it to `output`, replacing any previous file.
    fn generate(&self, ast: &ModuleAst, output: &Path) -> Result<GenerateResult> {
        let content = self.render(ast);
        let file = File::new(output, content);
        let write = file.write().map_err(|e| Error::write(output, e))?;

        tracing::debug!(path = %output.display(), bytes = file.content().len(), ?write, "wrote module");
        Ok(GenerateResult {
            path: output.to_path_buf(),
            write,
            bytes: file.content().len(),
        })
    }
}

/// Result of code generation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateResult {
    /// The written file
    pub path: PathBuf,
    /// Whether a previous version was replaced
    pub write: WriteResult,
    /// Size of the generated module in bytes
    pub bytes: usize,
}
