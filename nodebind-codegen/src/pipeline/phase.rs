//! Pipeline phase trait.

use super::CompilationContext;
use crate::Result;

/// Information about a pipeline phase.
#[derive(Debug, Clone)]
pub struct PhaseInfo {
    pub name: &'static str,
    pub description: &'static str,
}

/// A phase in the compilation pipeline.
///
/// Phases run in order and may read and modify the context. A phase fails
/// the run by returning an error; anything the user should merely know
/// about goes into `ctx.diagnostics`.
pub trait Phase {
    /// The name of this phase (used in diagnostics and logs).
    fn name(&self) -> &'static str;

    /// A human-readable description of what this phase does.
    fn description(&self) -> &'static str;

    fn run(&self, ctx: &mut CompilationContext) -> Result<()>;

    fn info(&self) -> PhaseInfo {
        PhaseInfo {
            name: self.name(),
            description: self.description(),
        }
    }
}
