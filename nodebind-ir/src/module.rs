//! Structural representation of the generated bindings module.

use serde::Serialize;

use crate::NodeId;

/// Name of the exported factory's single parameter.
pub const FACTORY_PARAM: &str = "opts";

/// The generated module: imports followed by the exported factory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModuleAst {
    pub items: Vec<Item>,
}

/// A top-level item of the module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Item {
    /// Default import of one handler factory.
    Import(ImportItem),
    /// The default-exported factory building the bindings object.
    ExportFactory(FactoryItem),
}

/// `import <binding> from "<source>"`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImportItem {
    pub binding: String,
    pub source: String,
}

/// A unary function returning a fresh object with one property per node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FactoryItem {
    pub param: String,
    pub properties: Vec<Property>,
}

/// `"<key>": <callee>(<arg>)`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Property {
    pub key: NodeId,
    pub callee: String,
    pub arg: String,
}

impl ModuleAst {
    /// Iterate over the import items in order.
    pub fn imports(&self) -> impl Iterator<Item = &ImportItem> {
        self.items.iter().filter_map(|item| match item {
            Item::Import(import) => Some(import),
            Item::ExportFactory(_) => None,
        })
    }

    /// The exported factory, if the module has one.
    pub fn factory(&self) -> Option<&FactoryItem> {
        self.items.iter().find_map(|item| match item {
            Item::ExportFactory(factory) => Some(factory),
            Item::Import(_) => None,
        })
    }
}
