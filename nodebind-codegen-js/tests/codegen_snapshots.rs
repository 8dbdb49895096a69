//! Snapshot tests for the generated bindings module.
//!
//! Each test builds a handler tree on disk, runs discovery and the pipeline,
//! and renders the module. Run `cargo insta review` to update snapshots when
//! making intentional changes.

use std::path::PathBuf;

use nodebind_codegen::{
    CollisionPolicy, Config, LanguageCodegen,
    discovery::Discoverer,
    pipeline::Pipeline,
    testing::{HandlerTree, NodeRunner},
};
use nodebind_codegen_js::Generator;
use nodebind_core::WriteResult;

fn render_with(tree: &HandlerTree, config: &Config) -> String {
    let files = Discoverer::from_config(tree.path(), config)
        .discover()
        .expect("discovery failed");
    let mut ctx = Pipeline::new(config)
        .run(tree.path(), files)
        .expect("pipeline failed");
    Generator.render(&ctx.take_ast())
}

fn render(tree: &HandlerTree) -> String {
    render_with(tree, &Config::default())
}

/// Write the module into the tree and return its path.
fn generate(tree: &HandlerTree) -> PathBuf {
    let files = Discoverer::new(tree.path(), "main", "index.js")
        .discover()
        .unwrap();
    let mut ctx = Pipeline::default().run(tree.path(), files).unwrap();
    let output = tree.join("index.js");
    Generator.generate(&ctx.take_ast(), &output).unwrap();
    output
}

fn scenario_tree() -> HandlerTree {
    HandlerTree::new()
        .handler("main")
        .handler("main/A")
        .handler("main/B")
        .handler("main/B/A")
        .handler("main/B/B")
}

#[test]
fn test_single_root_handler() {
    let tree = HandlerTree::new().handler("main");

    insta::assert_snapshot!(render(&tree), @r#"
    // Generated by nodebind. Do not edit.

    import handler0 from "./main/index.js";

    export default (opts) => ({
      "main": handler0(opts),
    });
    "#);
}

#[test]
fn test_scenario_tree() {
    insta::assert_snapshot!(render(&scenario_tree()), @r#"
    // Generated by nodebind. Do not edit.

    import handler0 from "./main/index.js";
    import handler1 from "./main/A/index.js";
    import handler2 from "./main/B/index.js";
    import handler3 from "./main/B/A/index.js";
    import handler4 from "./main/B/B/index.js";

    export default (opts) => ({
      "main": handler0(opts),
      "main:A": handler1(opts),
      "main:B": handler2(opts),
      "main:B:A": handler3(opts),
      "main:B:B": handler4(opts),
    });
    "#);
}

#[test]
fn test_helper_modules_are_not_handlers() {
    let tree = HandlerTree::new()
        .handler("main/B")
        .file("main/B/another.js", "export default { imported: true };\n");

    insta::assert_snapshot!(render(&tree), @r#"
    // Generated by nodebind. Do not edit.

    import handler0 from "./main/B/index.js";

    export default (opts) => ({
      "main:B": handler0(opts),
    });
    "#);
}

#[test]
fn test_last_wins_emits_both_entries() {
    let tree = HandlerTree::new().handler("main/B/A").handler("main/B:A");
    let config = Config {
        collisions: CollisionPolicy::LastWins,
        ..Config::default()
    };

    insta::assert_snapshot!(render_with(&tree, &config), @r#"
    // Generated by nodebind. Do not edit.

    import handler0 from "./main/B/A/index.js";
    import handler1 from "./main/B:A/index.js";

    export default (opts) => ({
      "main:B:A": handler0(opts),
      "main:B:A": handler1(opts),
    });
    "#);
}

#[test]
fn test_keys_are_escaped() {
    let tree = HandlerTree::new().handler("main").handler("main/it's \"quoted\"");
    let code = render(&tree);

    assert!(code.contains(r#""main:it's \"quoted\"": handler1(opts),"#));
    assert!(code.contains(r#"import handler1 from "./main/it's%20%22quoted%22/index.js";"#));
}

#[test]
fn test_specifiers_are_percent_encoded() {
    let tree = HandlerTree::new()
        .handler("main")
        .handler("main/C#1")
        .handler("main/50%");

    insta::assert_snapshot!(render(&tree), @r#"
    // Generated by nodebind. Do not edit.

    import handler0 from "./main/index.js";
    import handler1 from "./main/50%25/index.js";
    import handler2 from "./main/C%231/index.js";

    export default (opts) => ({
      "main": handler0(opts),
      "main:50%": handler1(opts),
      "main:C#1": handler2(opts),
    });
    "#);
}

#[test]
fn test_regeneration_is_byte_identical() {
    let tree = scenario_tree();
    assert_eq!(render(&tree), render(&tree));
}

#[test]
fn test_generate_overwrites_previous_output() {
    let tree = scenario_tree().file("index.js", "stale\n");
    let files = Discoverer::new(tree.path(), "main", "index.js")
        .discover()
        .unwrap();
    let mut ctx = Pipeline::default().run(tree.path(), files).unwrap();

    let result = Generator
        .generate(&ctx.take_ast(), &tree.join("index.js"))
        .unwrap();

    assert_eq!(result.write, WriteResult::Overwritten);
    assert!(tree.read("index.js").starts_with("// Generated by nodebind."));
}

#[test]
fn test_generated_module_runs_under_node() {
    if !NodeRunner::available() {
        eprintln!("node not found, skipping");
        return;
    }

    let tree = scenario_tree();
    let output = generate(&tree);

    let json = NodeRunner::call_default(&output, r#"{"n":1}"#).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    let keys: Vec<_> = value.as_object().unwrap().keys().cloned().collect();
    assert_eq!(keys, vec!["main", "main:A", "main:B", "main:B:A", "main:B:B"]);
    assert_eq!(value["main:B:A"]["main:B:A got"]["n"], 1);
}

#[test]
fn test_url_syntax_in_directory_names_runs_under_node() {
    if !NodeRunner::available() {
        eprintln!("node not found, skipping");
        return;
    }

    let tree = HandlerTree::new()
        .handler("main")
        .handler("main/C#1")
        .handler("main/50%")
        .handler("main/why?");
    let output = generate(&tree);

    let json = NodeRunner::call_default(&output, r#"{"n":2}"#).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["main:C#1"]["main:C#1 got"]["n"], 2);
    assert_eq!(value["main:50%"]["main:50% got"]["n"], 2);
    assert_eq!(value["main:why?"]["main:why? got"]["n"], 2);
}

#[test]
fn test_each_call_invokes_every_factory_once() {
    if !NodeRunner::available() {
        eprintln!("node not found, skipping");
        return;
    }

    let nodes = ["main", "main/A", "main/B", "main/B/A", "main/B/B"];
    let tree = nodes
        .iter()
        .fold(HandlerTree::new(), |tree, node| tree.counting_handler(node));
    let output = generate(&tree);

    let json = NodeRunner::call_default_n(&output, r#"{"n":1}"#, 2).unwrap();
    let results: Vec<serde_json::Value> = serde_json::from_str(&json).unwrap();

    assert_eq!(results.len(), 2);
    for node in nodes {
        let key = node.replace('/', ":");
        assert_eq!(results[0][&key]["calls"], 1, "first call of {key}");
        assert_eq!(results[1][&key]["calls"], 2, "second call of {key}");
        assert_eq!(results[1][&key]["opts"]["n"], 1);
    }
}
