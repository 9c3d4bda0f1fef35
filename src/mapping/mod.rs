//! Image name mappings and fuzzy resolution.
//!
//! A mapping file (`comet.yaml` by default) lists upstream build targets and
//! the downstream images known to map onto each of them:
//!
//! ```yaml
//! - to: openshift-serverless-1/serving-activator-rhel8
//!   from:
//!     - name: kn-serving-activator
//!       repo: serverless-operator-135/kn-serving-activator
//! ```
//!
//! - [`store`] loads and rewrites that file under a per-file lock
//! - [`resolver`] picks the entry closest to a downstream image name
//!
//! Names are compared after [`normalize_image_name`], which drops everything
//! up to and including the first `/`.

pub mod resolver;
pub mod store;

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub use resolver::{BestMatch, best_match, record_mapping, resolve};
pub use store::{AppendOutcome, MappingLocks, MappingStore};

/// One upstream build target and the downstream images that resolve to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappingEntry {
    /// Upstream image identifier, e.g. `openshift-serverless-1/serving-activator-rhel8`.
    #[serde(rename = "to")]
    pub target: String,

    /// Known downstream images, in insertion order.
    #[serde(rename = "from", default)]
    pub candidates: Vec<Candidate>,
}

impl MappingEntry {
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            candidates: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_candidate(mut self, candidate: Candidate) -> Self {
        self.candidates.push(candidate);
        self
    }

    /// Returns `true` if a candidate with this `name` is already recorded.
    #[must_use]
    pub fn has_candidate(&self, name: &str) -> bool {
        self.candidates.iter().any(|c| c.name == name)
    }
}

/// A downstream component known to map to a [`MappingEntry`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Candidate {
    /// Short component identifier.
    pub name: String,
    /// Downstream image name or path compared against queries.
    pub repo: String,
}

impl Candidate {
    pub fn new(name: impl Into<String>, repo: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            repo: repo.into(),
        }
    }
}

/// Input to a single resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchQuery {
    /// Location of the mapping file.
    pub file_path: PathBuf,
    /// Substring a normalized target must contain to be eligible. Empty
    /// disables filtering.
    pub platform_filter: String,
    /// Downstream image being resolved.
    pub query_image: String,
}

impl MatchQuery {
    pub fn new(
        file_path: impl Into<PathBuf>,
        platform_filter: impl Into<String>,
        query_image: impl Into<String>,
    ) -> Self {
        Self {
            file_path: file_path.into(),
            platform_filter: platform_filter.into(),
            query_image: query_image.into(),
        }
    }
}

/// Strips everything up to and including the first `/`.
///
/// `a/b/c` becomes `b/c`, not `c`; a name without `/` is returned as is.
#[must_use]
pub fn normalize_image_name(name: &str) -> &str {
    match name.split_once('/') {
        Some((_, rest)) => rest,
        None => name,
    }
}
