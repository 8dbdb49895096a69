//! Lower phase - builds the module IR from handler descriptors.

use nodebind_ir::{
    FACTORY_PARAM, FactoryItem, HandlerDescriptor, ImportItem, Item, ModuleAst, Property,
};

use crate::{
    Result,
    pipeline::{CompilationContext, Phase},
};

/// Phase that turns the descriptors into a [`ModuleAst`].
pub struct LowerPhase;

impl Phase for LowerPhase {
    fn name(&self) -> &'static str {
        "lower"
    }

    fn description(&self) -> &'static str {
        "Build the bindings module IR"
    }

    fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
        ctx.ast = Some(lower_descriptors(&ctx.descriptors));
        Ok(())
    }
}

/// Build the bindings module for `descriptors`.
///
/// One import per descriptor, then a factory taking `opts` whose object has
/// one `node_id: binding(opts)` property per descriptor. Order and
/// duplicates are kept exactly as given; an empty slice yields a module
/// whose factory returns an empty object.
pub fn lower_descriptors(descriptors: &[HandlerDescriptor]) -> ModuleAst {
    let imports = descriptors.iter().map(|d| {
        Item::Import(ImportItem {
            binding: d.binding_name.clone(),
            source: d.import_path.clone(),
        })
    });

    let properties = descriptors
        .iter()
        .map(|d| Property {
            key: d.node_id.clone(),
            callee: d.binding_name.clone(),
            arg: FACTORY_PARAM.to_string(),
        })
        .collect();

    let factory = Item::ExportFactory(FactoryItem {
        param: FACTORY_PARAM.to_string(),
        properties,
    });

    ModuleAst {
        items: imports.chain(std::iter::once(factory)).collect(),
    }
}
