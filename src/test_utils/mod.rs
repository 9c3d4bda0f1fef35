//! Test utilities for comet
//!
//! Helpers shared by unit and integration tests: one-time logging setup and
//! mapping-file fixtures written into temporary directories.
//!
//! # Example
//!
//! ```rust,no_run
//! use comet_cli::test_utils::MappingFixture;
//!
//! let (_temp, path) = MappingFixture::serverless().write_temp().unwrap();
//! assert!(path.exists());
//! ```

pub mod fixtures;

pub use fixtures::MappingFixture;

use std::sync::Once;
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Global flag to ensure logging is only initialized once in tests
static INIT_LOGGING: Once = Once::new();

/// Initialize logging for tests.
///
/// Only the first call has an effect. Uses `level` when given, otherwise
/// `RUST_LOG`; with neither, logging stays off.
///
/// ```bash
/// RUST_LOG=comet_cli=debug cargo test
/// ```
pub fn init_test_logging(level: Option<Level>) {
    INIT_LOGGING.call_once(|| {
        let filter = if let Some(level) = level {
            EnvFilter::new(level.to_string())
        } else if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else {
            return;
        };

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .with_target(true)
            .with_thread_ids(true)
            .try_init();
    });
}
