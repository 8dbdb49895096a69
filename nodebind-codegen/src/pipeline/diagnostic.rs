//! Non-fatal findings collected while compiling.

use serde::Serialize;

/// Severity level for a diagnostic message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Warning,
    Info,
}

impl Severity {
    pub fn is_warning(&self) -> bool {
        matches!(self, Severity::Warning)
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Warning => write!(f, "warning"),
            Severity::Info => write!(f, "info"),
        }
    }
}

/// A diagnostic message from a pipeline phase or lint.
///
/// Fatal problems are returned as [`crate::Error`] instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub severity: Severity,
    /// Phase or lint that produced this diagnostic.
    pub source: String,
    pub message: String,
    /// Entry file the diagnostic refers to, relative to the source directory.
    pub path: Option<String>,
}

impl Diagnostic {
    pub fn warning(source: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            source: source.into(),
            message: message.into(),
            path: None,
        }
    }

    pub fn info(source: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Info,
            source: source.into(),
            message: message.into(),
            path: None,
        }
    }

    /// Attach the entry file this diagnostic is about.
    pub fn at(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}[{}]: {}", self.severity, self.source, self.message)?;
        if let Some(path) = &self.path {
            write!(f, "\n  --> {}", path)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagnostic_warning() {
        let diag = Diagnostic::warning("duplicate-node", "node 'main:A' is shadowed");
        assert!(diag.severity.is_warning());
        assert_eq!(diag.source, "duplicate-node");
        assert!(diag.path.is_none());
    }

    #[test]
    fn test_display_with_path() {
        let diag = Diagnostic::info("name", "2 handlers").at("main/index.js");
        assert_eq!(diag.to_string(), "info[name]: 2 handlers\n  --> main/index.js");
    }

    #[test]
    fn test_severity_display() {
        assert_eq!(Severity::Warning.to_string(), "warning");
        assert_eq!(Severity::Info.to_string(), "info");
    }
}
