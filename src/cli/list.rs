//! `comet list`: print the mapping file.

use super::OutputFormat;
use crate::mapping::store::dump;
use crate::mapping::{MappingEntry, MappingStore};
use anyhow::{Context, Result};
use clap::Args;

#[derive(Debug, Args)]
pub struct ListCommand {
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

impl ListCommand {
    pub fn execute(self, store: &MappingStore) -> Result<()> {
        let entries = store.load()?;
        let output = match self.format {
            OutputFormat::Text => summarize(&entries),
            OutputFormat::Yaml => dump(&entries)?,
            OutputFormat::Json => serde_json::to_string_pretty(&entries)
                .context("Failed to render mappings as JSON")?,
        };
        println!("{}", output.trim_end());
        Ok(())
    }
}

/// One line per target, with its candidate repos indented below.
fn summarize(entries: &[MappingEntry]) -> String {
    let mut out = String::new();
    for entry in entries {
        out.push_str(&entry.target);
        out.push('\n');
        for candidate in &entry.candidates {
            out.push_str(&format!("  {} ({})\n", candidate.repo, candidate.name));
        }
    }
    out
}
