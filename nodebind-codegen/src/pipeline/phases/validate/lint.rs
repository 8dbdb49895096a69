//! Lint trait for descriptor validation.

use nodebind_ir::HandlerDescriptor;

use crate::{Result, pipeline::Diagnostic};

/// Information about a lint.
#[derive(Debug, Clone)]
pub struct LintInfo {
    pub name: &'static str,
    pub description: &'static str,
}

/// A check over the named handlers.
///
/// Returning an error aborts the run; findings that should not stop
/// generation are pushed to `diagnostics`.
pub trait Lint {
    /// The name of this lint.
    fn name(&self) -> &'static str;

    /// A human-readable description of what this lint checks.
    fn description(&self) -> &'static str;

    fn check(
        &self,
        descriptors: &[HandlerDescriptor],
        diagnostics: &mut Vec<Diagnostic>,
    ) -> Result<()>;

    fn info(&self) -> LintInfo {
        LintInfo {
            name: self.name(),
            description: self.description(),
        }
    }
}
