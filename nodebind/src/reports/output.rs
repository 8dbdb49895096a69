//! Output trait for rendering reports.

/// Target output for reports.
///
/// Reports describe *what* to output; implementations decide *how*.
pub trait Output {
    /// Render a success message.
    fn success(&mut self, msg: &str);

    /// Render a warning, which may span several lines.
    fn warning(&mut self, msg: &str);
}

/// A report that can render itself to an output.
pub trait Report {
    fn render(&self, out: &mut dyn Output);
}

/// Terminal output: results on stdout, warnings on stderr.
pub struct TerminalOutput;

impl TerminalOutput {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TerminalOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl Output for TerminalOutput {
    fn success(&mut self, msg: &str) {
        println!("{}", msg);
    }

    fn warning(&mut self, msg: &str) {
        eprintln!("{}", msg);
    }
}
