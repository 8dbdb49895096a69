//! Pipeline orchestrator.

use std::path::{Path, PathBuf};

use super::{
    CompilationContext, Phase,
    phases::{LowerPhase, NamePhase, ValidatePhase},
};
use crate::{Config, Result};

/// Runs the built-in phases (name, validate, lower) followed by any
/// additional phases.
///
/// ```ignore
/// let ctx = Pipeline::new(&config)
///     .phase(MyCustomPhase)
///     .run(src_dir, files)?;
/// ```
pub struct Pipeline {
    config: Config,
    phases: Vec<Box<dyn Phase>>,
}

impl Pipeline {
    pub fn new(config: &Config) -> Self {
        Self {
            config: config.clone(),
            phases: Vec::new(),
        }
    }

    /// Add a phase to run after the built-in phases.
    pub fn phase(mut self, phase: impl Phase + 'static) -> Self {
        self.phases.push(Box::new(phase));
        self
    }

    /// Names of every phase, in execution order.
    pub fn phase_names(&self) -> Vec<&'static str> {
        self.builtin_phases()
            .iter()
            .chain(self.phases.iter())
            .map(|p| p.name())
            .collect()
    }

    /// Run the pipeline over entry files found below `src_dir`.
    ///
    /// `files` must already be in discovery order; the pipeline never
    /// reorders them.
    ///
    /// # Errors
    ///
    /// Returns the first fatal error raised by a phase.
    pub fn run(&self, src_dir: &Path, files: Vec<PathBuf>) -> Result<CompilationContext> {
        let mut ctx = CompilationContext::new(src_dir, files, self.config.clone());

        for phase in self.builtin_phases().iter().chain(self.phases.iter()) {
            let _span = tracing::debug_span!("phase", name = phase.name()).entered();
            phase.run(&mut ctx)?;
            tracing::trace!(context = %ctx.to_json(), "phase finished");
        }

        Ok(ctx)
    }

    fn builtin_phases(&self) -> Vec<Box<dyn Phase>> {
        vec![
            Box::new(NamePhase),
            Box::new(ValidatePhase::new(self.config.collisions)),
            Box::new(LowerPhase),
        ]
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}
