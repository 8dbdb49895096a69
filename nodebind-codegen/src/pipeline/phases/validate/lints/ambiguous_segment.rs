//! Lint for directory names that read as nested nodes.

use nodebind_ir::HandlerDescriptor;

use super::{super::Lint, display_path};
use crate::{Result, pipeline::Diagnostic};

/// Lint that warns when a directory name contains `:`.
///
/// `main/B:A` and `main/B/A` both become `main:B:A`, so such names are
/// confusing even when they do not collide.
pub struct AmbiguousSegmentLint;

impl Lint for AmbiguousSegmentLint {
    fn name(&self) -> &'static str {
        "ambiguous-segment"
    }

    fn description(&self) -> &'static str {
        "Warn about directory names containing the node separator"
    }

    fn check(
        &self,
        descriptors: &[HandlerDescriptor],
        diagnostics: &mut Vec<Diagnostic>,
    ) -> Result<()> {
        for descriptor in descriptors {
            let path = display_path(&descriptor.import_path);
            let mut dirs: Vec<&str> = path.split('/').collect();
            dirs.pop();

            if let Some(dir) = dirs.iter().find(|d| d.contains(':')) {
                diagnostics.push(
                    Diagnostic::warning(
                        self.name(),
                        format!(
                            "directory '{}' contains ':' and is read as node '{}'",
                            dir, descriptor.node_id
                        ),
                    )
                    .at(path),
                );
            }
        }

        Ok(())
    }
}
