//! Handler descriptors and node identifiers.

use std::fmt;

use serde::Serialize;

/// Separator between node names in a [`NodeId`].
const NODE_SEPARATOR: char = ':';

/// Colon-separated identifier of a node in the consuming runtime
/// (e.g. `main`, `main:B:A`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct NodeId(String);

impl NodeId {
    /// Join node names into an identifier.
    pub fn from_segments<'a>(segments: impl IntoIterator<Item = &'a str>) -> Self {
        let mut id = String::new();
        for (i, segment) in segments.into_iter().enumerate() {
            if i > 0 {
                id.push(NODE_SEPARATOR);
            }
            id.push_str(segment);
        }
        Self(id)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Iterate over the node names making up this identifier.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split(NODE_SEPARATOR)
    }

    /// Nesting depth, where the root node has depth 1.
    pub fn depth(&self) -> usize {
        if self.0.is_empty() {
            0
        } else {
            self.segments().count()
        }
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NodeId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// One discovered handler file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HandlerDescriptor {
    /// Node the handler is bound to.
    pub node_id: NodeId,
    /// Module specifier the generated file imports the handler from.
    pub import_path: String,
    /// Local name of the imported factory. Derived from the discovery
    /// position only, never from path content.
    pub binding_name: String,
}

impl HandlerDescriptor {
    /// Create a descriptor for the handler found at `position` in discovery order.
    pub fn new(node_id: NodeId, import_path: impl Into<String>, position: usize) -> Self {
        Self {
            node_id,
            import_path: import_path.into(),
            binding_name: format!("handler{}", position),
        }
    }
}
