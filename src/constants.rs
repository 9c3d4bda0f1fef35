//! Global constants used throughout the comet codebase.
//!
//! File names, platform markers and environment variable names that are
//! shared between the library and the command-line front end.

/// Default mapping file name, resolved relative to the working directory.
pub const DEFAULT_MAPPING_FILE: &str = "comet.yaml";

/// Platform marker for RHEL 8 based upstream targets.
///
/// Used as the default platform filter: only targets whose normalized name
/// contains this marker are eligible during resolution.
pub const RHEL8: &str = "rhel8";

/// Environment variable overriding the mapping file path.
pub const ENV_MAPPING_FILE: &str = "COMET_FILE";

/// Environment variable overriding the platform filter.
pub const ENV_PLATFORM: &str = "COMET_PLATFORM";
