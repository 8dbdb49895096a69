//! Lint for node identifiers derived from more than one directory.

use std::collections::HashMap;

use nodebind_ir::{HandlerDescriptor, NodeId};

use super::{super::Lint, display_path};
use crate::{CollisionPolicy, Error, Result, pipeline::Diagnostic};

/// Lint that enforces the collision policy.
///
/// Under [`CollisionPolicy::Reject`] the first repeated identifier fails the
/// run; under [`CollisionPolicy::LastWins`] every repeat is reported as a
/// warning and generation continues.
pub struct DuplicateNodeLint {
    policy: CollisionPolicy,
}

impl DuplicateNodeLint {
    pub fn new(policy: CollisionPolicy) -> Self {
        Self { policy }
    }
}

impl Lint for DuplicateNodeLint {
    fn name(&self) -> &'static str {
        "duplicate-node"
    }

    fn description(&self) -> &'static str {
        "Detect directories that map to the same node identifier"
    }

    fn check(
        &self,
        descriptors: &[HandlerDescriptor],
        diagnostics: &mut Vec<Diagnostic>,
    ) -> Result<()> {
        let mut seen: HashMap<&NodeId, &str> = HashMap::new();

        for descriptor in descriptors {
            let path = display_path(&descriptor.import_path);
            let Some(first) = seen.insert(&descriptor.node_id, path) else {
                continue;
            };

            match self.policy {
                CollisionPolicy::Reject => {
                    return Err(Box::new(Error::NamingCollision {
                        node_id: descriptor.node_id.clone(),
                        first: first.to_string(),
                        second: path.to_string(),
                    }));
                }
                CollisionPolicy::LastWins => diagnostics.push(
                    Diagnostic::warning(
                        self.name(),
                        format!(
                            "node '{}' from '{}' shadows the handler in '{}'",
                            descriptor.node_id, path, first
                        ),
                    )
                    .at(path),
                ),
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn descriptors(entries: &[(&str, &str)]) -> Vec<HandlerDescriptor> {
        entries
            .iter()
            .enumerate()
            .map(|(i, (node, path))| HandlerDescriptor::new(NodeId::from(*node), *path, i))
            .collect()
    }

    #[test]
    fn test_no_duplicates() {
        let ds = descriptors(&[
            ("main", "./main/index.js"),
            ("main:A", "./main/A/index.js"),
            ("main:B:A", "./main/B/A/index.js"),
        ]);

        let mut diagnostics = Vec::new();
        DuplicateNodeLint::new(CollisionPolicy::Reject)
            .check(&ds, &mut diagnostics)
            .unwrap();

        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_reject_names_both_paths() {
        let ds = descriptors(&[
            ("main:B:A", "./main/B/A/index.js"),
            ("main:B:A", "./main/B:A/index.js"),
        ]);

        let err = DuplicateNodeLint::new(CollisionPolicy::Reject)
            .check(&ds, &mut Vec::new())
            .unwrap_err();

        match *err {
            Error::NamingCollision {
                node_id,
                first,
                second,
            } => {
                assert_eq!(node_id.as_str(), "main:B:A");
                assert_eq!(first, "main/B/A/index.js");
                assert_eq!(second, "main/B:A/index.js");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_last_wins_warns_per_repeat() {
        let ds = descriptors(&[
            ("main:X", "./main/X/index.js"),
            ("main:X", "./main/X2/index.js"),
            ("main:X", "./main/X3/index.js"),
        ]);

        let mut diagnostics = Vec::new();
        DuplicateNodeLint::new(CollisionPolicy::LastWins)
            .check(&ds, &mut diagnostics)
            .unwrap();

        assert_eq!(diagnostics.len(), 2);
        assert!(diagnostics.iter().all(|d| d.severity.is_warning()));
        assert_eq!(diagnostics[1].path.as_deref(), Some("main/X3/index.js"));
    }
}
