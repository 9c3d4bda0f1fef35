//! comet - resolve downstream container images to upstream CI build targets
//!
//! This is the entry point for the `comet` binary. Argument parsing and
//! command dispatch live in [`comet_cli::cli`].

use anyhow::Result;
use clap::Parser;
use comet_cli::cli;
use comet_cli::core::user_friendly_error;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    match cli.execute() {
        Ok(()) => Ok(()),
        Err(e) => {
            user_friendly_error(e).display();
            std::process::exit(1);
        }
    }
}
