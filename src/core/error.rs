//! Error handling for comet
//!
//! Library operations return [`CometError`], a strongly-typed enum covering
//! every failure of the mapping store and resolver. The command-line front end
//! works with [`anyhow::Error`] and converts failures into an [`ErrorContext`]
//! through [`user_friendly_error`] before printing them.
//!
//! # Error Categories
//!
//! - **File system**: [`CometError::Io`] when the mapping file cannot be read or written
//! - **Format**: [`CometError::Format`] and [`CometError::Serialize`] for YAML problems
//! - **Lookup**: [`CometError::TargetNotFound`] and [`CometError::NoMatch`]
//!
//! Lookup errors carry a YAML dump of the mapping list that was loaded, so an
//! operator can see what was searched without opening the file.
//!
//! None of these errors are retried; they propagate to the immediate caller.
//!
//! # Examples
//!
//! ```rust,no_run
//! use comet_cli::core::{CometError, user_friendly_error};
//!
//! let err = CometError::TargetNotFound {
//!     target: "openshift-serverless-1/missing-rhel8".to_string(),
//!     path: "comet.yaml".to_string(),
//!     dump: "[]\n".to_string(),
//! };
//! user_friendly_error(anyhow::Error::from(err)).display();
//! ```

use colored::Colorize;
use std::fmt;
use thiserror::Error;

/// Result alias for library operations.
pub type Result<T, E = CometError> = std::result::Result<T, E>;

/// The main error type for mapping store and resolver operations.
#[derive(Error, Debug)]
pub enum CometError {
    /// The mapping file could not be read or written.
    #[error("Failed to {operation} mapping file '{path}'")]
    Io {
        /// What was being attempted (`read`, `write`, ...)
        operation: &'static str,
        /// Path of the mapping file
        path: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The mapping file is not a list of `to`/`from` records.
    #[error("Invalid mapping file '{path}'")]
    Format {
        /// Path of the mapping file
        path: String,
        /// Underlying YAML error
        #[source]
        source: serde_yaml::Error,
    },

    /// The mapping list could not be serialized back to YAML.
    #[error("Failed to serialize mappings")]
    Serialize {
        /// Underlying YAML error
        #[source]
        source: serde_yaml::Error,
    },

    /// No entry with the requested `to` target exists.
    #[error("Mapping target '{target}' not found in file '{path}', content:\n{dump}")]
    TargetNotFound {
        /// Requested target name
        target: String,
        /// Path of the mapping file
        path: String,
        /// YAML dump of the loaded mapping list
        dump: String,
    },

    /// Resolution found no eligible entry.
    #[error(
        "Failed to find mapping for image '{image}' (platform '{platform}') in file '{path}': {dump}"
    )]
    NoMatch {
        /// Image being resolved
        image: String,
        /// Platform filter in effect
        platform: String,
        /// Path of the mapping file
        path: String,
        /// YAML dump of the loaded mapping list
        dump: String,
    },
}

impl CometError {
    /// Returns `true` for lookup failures that a human can fix by editing the
    /// mapping file.
    #[must_use]
    pub const fn is_missing_mapping(&self) -> bool {
        matches!(self, Self::TargetNotFound { .. } | Self::NoMatch { .. })
    }
}

/// Error wrapper with an optional explanation and a suggested fix.
#[derive(Debug)]
pub struct ErrorContext {
    /// The underlying error
    pub error: anyhow::Error,
    /// Suggested fix, if any
    pub suggestion: Option<String>,
    /// Extra background on the failure
    pub details: Option<String>,
}

impl ErrorContext {
    #[must_use]
    pub fn new(error: impl Into<anyhow::Error>) -> Self {
        Self {
            error: error.into(),
            suggestion: None,
            details: None,
        }
    }

    #[must_use]
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    #[must_use]
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Prints the error to stderr with colors.
    pub fn display(&self) {
        eprintln!("{}: {:#}", "error".red().bold(), self.error);

        if let Some(details) = &self.details {
            eprintln!("{}: {}", "details".yellow(), details);
        }

        if let Some(suggestion) = &self.suggestion {
            eprintln!("{}: {}", "suggestion".green(), suggestion);
        }
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#}", self.error)?;

        if let Some(details) = &self.details {
            write!(f, "\nDetails: {details}")?;
        }

        if let Some(suggestion) = &self.suggestion {
            write!(f, "\nSuggestion: {suggestion}")?;
        }

        Ok(())
    }
}

/// Attaches details and a suggestion to an error for CLI display.
///
/// Errors that are not a [`CometError`] are passed through with no extra
/// context.
#[must_use]
pub fn user_friendly_error(error: anyhow::Error) -> ErrorContext {
    let Some(comet_error) = error.downcast_ref::<CometError>() else {
        return ErrorContext::new(error);
    };

    match comet_error {
        CometError::Io { source, .. } => {
            let suggestion = match source.kind() {
                std::io::ErrorKind::NotFound => {
                    "Check the --file path or set COMET_FILE to the mapping file location"
                }
                std::io::ErrorKind::PermissionDenied => {
                    "Check the permissions of the mapping file and its directory"
                }
                _ => "Check that the mapping file is accessible",
            };
            ErrorContext::new(error).with_suggestion(suggestion)
        }
        CometError::Format { .. } => ErrorContext::new(error)
            .with_details("The mapping file must be a YAML list of entries with 'to' and 'from' fields")
            .with_suggestion("Fix the YAML syntax, each 'from' item needs 'name' and 'repo'"),
        CometError::Serialize { .. } => ErrorContext::new(error),
        CometError::TargetNotFound { target, .. } => {
            let suggestion =
                format!("Add an entry with 'to: {target}' to the mapping file, then retry");
            ErrorContext::new(error).with_suggestion(suggestion)
        }
        CometError::NoMatch { platform, .. } => {
            let details = if platform.is_empty() {
                "The mapping file has no entries".to_string()
            } else {
                format!("No target in the mapping file contains '{platform}'")
            };
            ErrorContext::new(error)
                .with_details(details)
                .with_suggestion("Add a mapping entry for this image or pass a different --platform")
        }
    }
}
