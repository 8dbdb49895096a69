use std::path::PathBuf;

use clap::Args;
use eyre::Result;

use super::UnwrapOrExit;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct BuildCommand {
    /// Directory containing the handler tree; the module is written here
    pub src_dir: PathBuf,
}

impl BuildCommand {
    pub fn run(&self) -> Result<()> {
        let report = ops::build(&self.src_dir).unwrap_or_exit();
        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
