//! Compilation context passed through pipeline phases.

use std::path::PathBuf;

use nodebind_ir::{HandlerDescriptor, ModuleAst};
use serde::Serialize;

use super::diagnostic::{Diagnostic, Severity};
use crate::Config;

/// State carried through every phase of one run.
#[derive(Debug, Serialize)]
pub struct CompilationContext {
    /// Directory the entry paths are relative to.
    pub src_dir: PathBuf,
    /// Discovered entry files, in discovery order.
    pub files: Vec<PathBuf>,
    #[serde(skip)]
    pub config: Config,
    /// One descriptor per entry file (populated by NamePhase).
    pub descriptors: Vec<HandlerDescriptor>,
    /// The module IR (populated by LowerPhase).
    pub ast: Option<ModuleAst>,
    /// Diagnostics collected during compilation.
    pub diagnostics: Vec<Diagnostic>,
}

impl CompilationContext {
    pub fn new(src_dir: impl Into<PathBuf>, files: Vec<PathBuf>, config: Config) -> Self {
        Self {
            src_dir: src_dir.into(),
            files,
            config,
            descriptors: Vec::new(),
            ast: None,
            diagnostics: Vec::new(),
        }
    }

    pub fn has_warnings(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity.is_warning())
    }

    pub fn warning_count(&self) -> usize {
        self.warnings().count()
    }

    pub fn add_warning(&mut self, source: &str, message: impl Into<String>) {
        self.diagnostics.push(Diagnostic::warning(source, message));
    }

    pub fn add_info(&mut self, source: &str, message: impl Into<String>) {
        self.diagnostics.push(Diagnostic::info(source, message));
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| matches!(d.severity, Severity::Warning))
    }

    /// Take the module IR out of the context.
    ///
    /// # Panics
    ///
    /// Panics if the IR has not been set (i.e., LowerPhase hasn't run).
    pub fn take_ast(&mut self) -> ModuleAst {
        self.ast.take().expect("module IR not set - did LowerPhase run?")
    }

    /// Serialize the context for debugging.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}
