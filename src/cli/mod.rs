//! Command-line interface for comet.
//!
//! The `comet` binary is a thin front end over the [`crate::mapping`] API,
//! meant for CI scripts and for operators maintaining a mapping file by hand.
//!
//! # Commands
//!
//! - `resolve` - find the upstream target for a downstream image
//! - `record` - add a confirmed candidate under an existing target
//! - `list` - print the mapping file as YAML or JSON
//!
//! # Global Options
//!
//! - `--file <PATH>` - mapping file, defaults to `comet.yaml` (env `COMET_FILE`)
//! - `--verbose` / `--quiet` - raise or lower log output
//!
//! # Examples
//!
//! ```bash
//! comet resolve serverless-operator-136/kn-serving-activator
//! comet resolve kn-eventing-controller --platform rhel9 --format json
//! comet record openshift-serverless-1/serving-activator-rhel8 \
//!     --name kn-serving-activator --repo serverless-operator-136/kn-serving-activator
//! COMET_FILE=openshift/comet.yaml comet list --format json
//! ```

mod list;
mod record;
mod resolve;

use crate::constants::{DEFAULT_MAPPING_FILE, ENV_MAPPING_FILE};
use crate::mapping::MappingLocks;
use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

pub use list::ListCommand;
pub use record::RecordCommand;
pub use resolve::ResolveCommand;

/// Settings derived from global flags, applied once before dispatch.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    /// Log filter directive; `None` defers to `RUST_LOG`.
    pub log_level: Option<String>,
}

impl CliConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Installs the global tracing subscriber.
    ///
    /// An explicit level wins over `RUST_LOG`; without either only warnings
    /// are shown. Logs go to stderr so command output stays parseable.
    pub fn init_logging(&self) {
        let filter = match &self.log_level {
            Some(level) => EnvFilter::new(level),
            None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        };

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
    }
}

/// Output format for commands printing structured data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text
    Text,
    /// The mapping YAML format
    Yaml,
    /// JSON with the same field names as the YAML format
    Json,
}

#[derive(Parser)]
#[command(
    name = "comet",
    about = "Resolve downstream container images to upstream CI build targets",
    version,
    long_about = "comet looks up the upstream build target for a downstream image name using \
                  fuzzy matching against a YAML mapping file, and records newly confirmed mappings."
)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to the mapping file
    #[arg(
        short,
        long,
        global = true,
        env = ENV_MAPPING_FILE,
        default_value = DEFAULT_MAPPING_FILE,
        value_name = "PATH"
    )]
    file: PathBuf,

    /// Enable debug logging
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Only log errors
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Find the upstream target closest to a downstream image
    Resolve(ResolveCommand),

    /// Record a downstream candidate under an existing target
    Record(RecordCommand),

    /// Print all mappings
    List(ListCommand),
}

impl Cli {
    /// Executes the parsed command.
    pub fn execute(self) -> Result<()> {
        let config = self.build_config();
        self.execute_with_config(&config)
    }

    /// Maps the global flags onto a [`CliConfig`].
    #[must_use]
    pub fn build_config(&self) -> CliConfig {
        let log_level = if self.verbose {
            Some("debug".to_string())
        } else if self.quiet {
            Some("error".to_string())
        } else {
            None
        };

        CliConfig { log_level }
    }

    pub fn execute_with_config(self, config: &CliConfig) -> Result<()> {
        config.init_logging();

        let locks = MappingLocks::new();
        let store = locks.store(&self.file);
        tracing::debug!("Using mapping file {}", store.path().display());

        match self.command {
            Commands::Resolve(cmd) => cmd.execute(&store),
            Commands::Record(cmd) => cmd.execute(&store),
            Commands::List(cmd) => cmd.execute(&store),
        }
    }
}
