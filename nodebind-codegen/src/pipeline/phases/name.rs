//! Name phase - derives node identifiers and bindings from entry paths.

use crate::{
    Result,
    naming::describe,
    pipeline::{CompilationContext, Phase},
};

/// Phase that turns discovered entry files into handler descriptors.
pub struct NamePhase;

impl Phase for NamePhase {
    fn name(&self) -> &'static str {
        "name"
    }

    fn description(&self) -> &'static str {
        "Derive node identifiers from entry file paths"
    }

    fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
        ctx.descriptors = describe(&ctx.src_dir, &ctx.files)?;
        tracing::debug!(handlers = ctx.descriptors.len(), "named handlers");
        Ok(())
    }
}
