//! Validate phase - runs lints over the named handlers.

mod lint;
pub mod lints;

pub use lint::{Lint, LintInfo};
pub use lints::{AmbiguousSegmentLint, DuplicateNodeLint};

use crate::{
    CollisionPolicy, Result,
    pipeline::{CompilationContext, Phase},
};

/// Phase that validates the descriptors using configurable lints.
pub struct ValidatePhase {
    lints: Vec<Box<dyn Lint>>,
}

impl ValidatePhase {
    /// Create a validate phase with the default lints.
    pub fn new(policy: CollisionPolicy) -> Self {
        Self {
            lints: vec![
                Box::new(DuplicateNodeLint::new(policy)),
                Box::new(AmbiguousSegmentLint),
            ],
        }
    }

    /// Create a validate phase with no lints.
    pub fn empty() -> Self {
        Self { lints: Vec::new() }
    }

    pub fn with_lint(mut self, lint: impl Lint + 'static) -> Self {
        self.lints.push(Box::new(lint));
        self
    }

    /// Get information about all lints that will be run.
    pub fn lint_info(&self) -> Vec<LintInfo> {
        self.lints.iter().map(|l| l.info()).collect()
    }
}

impl Default for ValidatePhase {
    fn default() -> Self {
        Self::new(CollisionPolicy::default())
    }
}

impl Phase for ValidatePhase {
    fn name(&self) -> &'static str {
        "validate"
    }

    fn description(&self) -> &'static str {
        "Check handler naming and collect diagnostics"
    }

    fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
        for lint in &self.lints {
            lint.check(&ctx.descriptors, &mut ctx.diagnostics)?;
        }

        if ctx.has_warnings() {
            tracing::debug!(warnings = ctx.warning_count(), "validation produced warnings");
        }

        Ok(())
    }
}
