//! `comet record`: add a confirmed candidate under an existing target.

use crate::mapping::{AppendOutcome, Candidate, MappingStore};
use anyhow::Result;
use clap::Args;
use colored::Colorize;

#[derive(Debug, Args)]
pub struct RecordCommand {
    /// Upstream target the candidate maps to; must already exist in the file
    #[arg(value_name = "TARGET")]
    pub target: String,

    /// Short component name, unique within the target
    #[arg(short, long)]
    pub name: String,

    /// Downstream image name or path
    #[arg(short, long)]
    pub repo: String,
}

impl RecordCommand {
    pub fn execute(self, store: &MappingStore) -> Result<()> {
        let name = self.name.clone();
        match store.append(&self.target, Candidate::new(self.name, self.repo))? {
            AppendOutcome::Appended => {
                println!("{} '{}' under '{}'", "Recorded".green(), name, self.target);
            }
            AppendOutcome::AlreadyPresent => {
                println!("'{}' is already recorded under '{}'", name, self.target);
            }
        }
        Ok(())
    }
}
