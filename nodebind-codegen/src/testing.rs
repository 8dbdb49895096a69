//! Test utilities for the bindings generator.
//!
//! This module is only available when the `testing` feature is enabled
//! or during tests.

use std::{
    fs,
    path::{Path, PathBuf},
    process::Command,
};

use tempfile::TempDir;
use url::Url;

/// A temporary source directory populated with handler files.
///
/// ```ignore
/// let tree = HandlerTree::new().handler("main").handler("main/A");
/// // tree.path() now contains main/index.js and main/A/index.js
/// ```
pub struct HandlerTree {
    dir: TempDir,
}

impl HandlerTree {
    /// Create an empty tree marked as an ES module package, so Node loads
    /// its `.js` files as modules.
    pub fn new() -> Self {
        let tree = Self {
            dir: TempDir::new().expect("failed to create temp dir"),
        };
        tree.file("package.json", "{ \"type\": \"module\" }\n")
    }

    /// The source directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Add an `index.js` in `node_dir` whose factory returns
    /// `{ "<node> got": opts }`.
    pub fn handler(self, node_dir: &str) -> Self {
        let node = node_dir.replace('/', ":");
        let content = format!(
            "export default (opts) => ({{ {}: opts }});\n",
            js_quote(&format!("{} got", node))
        );
        self.file(&format!("{}/index.js", node_dir), &content)
    }

    /// Add an `index.js` in `node_dir` whose factory returns
    /// `{ calls: n }`, where `n` counts every call of that factory.
    pub fn counting_handler(self, node_dir: &str) -> Self {
        self.file(
            &format!("{}/index.js", node_dir),
            "let calls = 0;\nexport default (opts) => ({ calls: ++calls, opts });\n",
        )
    }

    /// Write an arbitrary file, creating parent directories.
    pub fn file(self, relative: &str, content: &str) -> Self {
        let path = self.dir.path().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("failed to create fixture dir");
        }
        fs::write(&path, content).expect("failed to write fixture file");
        self
    }

    /// Read a file from the tree.
    pub fn read(&self, relative: &str) -> String {
        fs::read_to_string(self.dir.path().join(relative)).expect("failed to read fixture file")
    }

    /// Absolute path of a file in the tree.
    pub fn join(&self, relative: &str) -> PathBuf {
        self.dir.path().join(relative)
    }
}

impl Default for HandlerTree {
    fn default() -> Self {
        Self::new()
    }
}

fn js_quote(s: &str) -> String {
    format!("\"{}\"", s.replace('\\', "\\\\").replace('"', "\\\""))
}

/// Error from running generated code.
#[derive(Debug)]
pub struct RunError {
    pub message: String,
    pub output: String,
}

impl std::fmt::Display for RunError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}\n\nOutput:\n{}", self.message, self.output)
    }
}

impl std::error::Error for RunError {}

/// Runs a generated bindings module under Node.js.
pub struct NodeRunner;

impl NodeRunner {
    /// Whether a `node` executable is on the PATH.
    pub fn available() -> bool {
        Command::new("node")
            .arg("--version")
            .output()
            .is_ok_and(|o| o.status.success())
    }

    /// Import `module` as an ES module, call its default export with the
    /// JSON value `opts`, and return the JSON-serialized result.
    ///
    /// The export is called twice; the run fails if both calls return the
    /// same object.
    pub fn call_default(module: &Path, opts: &str) -> Result<String, RunError> {
        let script = format!(
            "import(process.argv[1]).then((m) => {{ \
               const first = m.default({opts}); \
               const second = m.default({opts}); \
               if (first === second) throw new Error('factory result was reused'); \
               process.stdout.write(JSON.stringify(first)); \
             }}).catch((e) => {{ console.error(e); process.exit(1); }});"
        );
        Self::run(module, &script)
    }

    /// Call the default export of `module` `times` times with `opts` and
    /// return the results as a JSON array, in call order.
    pub fn call_default_n(module: &Path, opts: &str, times: usize) -> Result<String, RunError> {
        let script = format!(
            "import(process.argv[1]).then((m) => {{ \
               const results = []; \
               for (let i = 0; i < {times}; i++) results.push(m.default({opts})); \
               process.stdout.write(JSON.stringify(results)); \
             }}).catch((e) => {{ console.error(e); process.exit(1); }});"
        );
        Self::run(module, &script)
    }

    fn run(module: &Path, script: &str) -> Result<String, RunError> {
        let url = Url::from_file_path(module).map_err(|()| RunError {
            message: format!("{} is not an absolute path", module.display()),
            output: String::new(),
        })?;
        let output = Command::new("node")
            .args(["--input-type=module", "-e", script, url.as_str()])
            .output()
            .map_err(|e| RunError {
                message: format!("Failed to run node: {}", e),
                output: String::new(),
            })?;

        if output.status.success() {
            Ok(String::from_utf8_lossy(&output.stdout).into_owned())
        } else {
            Err(RunError {
                message: "node exited with an error".to_string(),
                output: String::from_utf8_lossy(&output.stderr).into_owned(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handler_writes_factory() {
        let tree = HandlerTree::new().handler("main/B");
        assert_eq!(
            tree.read("main/B/index.js"),
            "export default (opts) => ({ \"main:B got\": opts });\n"
        );
    }

    #[test]
    fn test_counting_handler_keeps_module_state() {
        let tree = HandlerTree::new().counting_handler("main");
        assert!(tree.read("main/index.js").starts_with("let calls = 0;\n"));
    }

    #[test]
    fn test_file_creates_parents() {
        let tree = HandlerTree::new().file("a/b/c.txt", "x");
        assert!(tree.join("a/b/c.txt").is_file());
    }
}
