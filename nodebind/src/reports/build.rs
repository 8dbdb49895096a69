//! Build command report.

use std::path::PathBuf;

use nodebind_core::WriteResult;

use super::output::{Output, Report};

/// Report data from a successful build.
#[derive(Debug)]
pub struct BuildReport {
    /// Written module, relative to the current directory when possible.
    pub output: PathBuf,
    /// Number of handlers bound into the module.
    pub handlers: usize,
    /// Whether the module was created or replaced.
    pub write: WriteResult,
    /// Rendered pipeline warnings.
    pub warnings: Vec<String>,
}

impl Report for BuildReport {
    fn render(&self, out: &mut dyn Output) {
        for warning in &self.warnings {
            out.warning(warning);
        }

        tracing::debug!(handlers = self.handlers, write = ?self.write, "build finished");
        out.success(&format!("Generated {}!", self.output.display()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorded {
        lines: Vec<String>,
    }

    impl Output for Recorded {
        fn success(&mut self, msg: &str) {
            self.lines.push(format!("ok: {}", msg));
        }

        fn warning(&mut self, msg: &str) {
            self.lines.push(format!("warn: {}", msg));
        }
    }

    #[test]
    fn test_render_success() {
        let report = BuildReport {
            output: PathBuf::from("src/index.js"),
            handlers: 3,
            write: WriteResult::Created,
            warnings: Vec::new(),
        };

        let mut out = Recorded::default();
        report.render(&mut out);

        assert_eq!(out.lines, vec!["ok: Generated src/index.js!"]);
    }

    #[test]
    fn test_warnings_come_first() {
        let report = BuildReport {
            output: PathBuf::from("index.js"),
            handlers: 2,
            write: WriteResult::Overwritten,
            warnings: vec!["warning[duplicate-node]: duplicated".to_string()],
        };

        let mut out = Recorded::default();
        report.render(&mut out);

        assert_eq!(
            out.lines,
            vec![
                "warn: warning[duplicate-node]: duplicated",
                "ok: Generated index.js!"
            ]
        );
    }
}
