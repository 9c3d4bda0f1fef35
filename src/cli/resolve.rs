//! `comet resolve`: find the upstream target for a downstream image.

use super::OutputFormat;
use crate::constants::{ENV_PLATFORM, RHEL8};
use crate::mapping::{MappingEntry, MappingStore};
use anyhow::{Context, Result};
use clap::Args;

#[derive(Debug, Args)]
pub struct ResolveCommand {
    /// Downstream image name, e.g. `serverless-operator-136/kn-serving-activator`
    #[arg(value_name = "IMAGE")]
    pub image: String,

    /// Substring an upstream target must contain; pass "" to match any target
    #[arg(short, long, env = ENV_PLATFORM, default_value = RHEL8)]
    pub platform: String,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

impl ResolveCommand {
    pub fn execute(self, store: &MappingStore) -> Result<()> {
        let entry = store.resolve(&self.platform, &self.image)?;
        println!("{}", render(&entry, self.format)?);
        Ok(())
    }
}

fn render(entry: &MappingEntry, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(entry.target.clone()),
        OutputFormat::Yaml => serde_yaml::to_string(entry)
            .map(|yaml| yaml.trim_end().to_string())
            .context("Failed to render mapping entry as YAML"),
        OutputFormat::Json => serde_json::to_string_pretty(entry)
            .context("Failed to render mapping entry as JSON"),
    }
}
