//! Build operation - discovery, pipeline and emission for one source directory.

use std::path::{Path, PathBuf};

use nodebind_codegen::{
    Config, LanguageCodegen, Result, discovery::Discoverer, pipeline::Pipeline,
};
use nodebind_codegen_js::Generator;

use crate::reports::BuildReport;

/// Generate the bindings module for `src_dir`.
///
/// Nothing is written unless discovery and every pipeline phase succeed.
pub fn build(src_dir: &Path) -> Result<BuildReport> {
    let _span = tracing::info_span!("build", src_dir = %src_dir.display()).entered();

    let config = Config::load(src_dir)?;
    let files = Discoverer::from_config(src_dir, &config).discover()?;

    let mut ctx = Pipeline::new(&config).run(src_dir, files)?;
    let warnings = ctx.warnings().map(ToString::to_string).collect();
    let handlers = ctx.descriptors.len();

    let output = src_dir.join(&config.output_file);
    let result = Generator.generate(&ctx.take_ast(), &output)?;

    Ok(BuildReport {
        output: display_path(&result.path),
        handlers,
        write: result.write,
        warnings,
    })
}

/// `path` relative to the current directory when it lies below it.
fn display_path(path: &Path) -> PathBuf {
    if path.is_relative() {
        return path.to_path_buf();
    }

    std::env::current_dir()
        .ok()
        .and_then(|cwd| path.strip_prefix(cwd).ok().map(Path::to_path_buf))
        .unwrap_or_else(|| path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use nodebind_codegen::{Error, testing::HandlerTree};

    use super::*;

    #[test]
    fn test_build_writes_module() {
        let tree = HandlerTree::new().handler("main").handler("main/A");

        let report = build(tree.path()).unwrap();

        assert_eq!(report.handlers, 2);
        assert!(report.warnings.is_empty());
        assert!(tree.read("index.js").contains("\"main:A\": handler1(opts),"));
    }

    #[test]
    fn test_build_honours_config() {
        let tree = HandlerTree::new()
            .file("app/handler.mjs", "export default () => 1;\n")
            .file(
                "nodebind.toml",
                "root = \"app\"\nentry_file = \"handler.mjs\"\noutput_file = \"bindings.mjs\"\n",
            );

        let report = build(tree.path()).unwrap();

        assert!(report.output.ends_with("bindings.mjs"));
        assert!(tree.read("bindings.mjs").contains("import handler0 from \"./app/handler.mjs\";"));
    }

    #[test]
    fn test_empty_tree_writes_nothing() {
        let tree = HandlerTree::new().file("main/notes.txt", "");

        let err = build(tree.path()).unwrap_err();

        assert!(matches!(*err, Error::Discovery { .. }));
        assert!(!tree.join("index.js").exists());
    }

    #[test]
    fn test_collision_keeps_previous_output() {
        let tree = HandlerTree::new()
            .handler("main/B/A")
            .handler("main/B:A")
            .file("index.js", "previous\n");

        let err = build(tree.path()).unwrap_err();

        assert!(matches!(*err, Error::NamingCollision { .. }));
        assert_eq!(tree.read("index.js"), "previous\n");
    }

    #[test]
    fn test_display_path_keeps_relative() {
        assert_eq!(display_path(Path::new("src/index.js")), Path::new("src/index.js"));
    }
}
