//! Report data structures for commands.
//!
//! Commands build reports, then render them to an output target.

mod build;
mod output;

pub use build::BuildReport;
pub use output::{Report, TerminalOutput};
