//! comet - fuzzy mapping of downstream container images to upstream CI build targets
//!
//! CI manifest generation needs to know which upstream build target a
//! downstream image is produced from. That association is kept in a small
//! YAML mapping file, and image names rarely match it exactly, so lookups
//! are fuzzy: the entry whose target or known candidate repo is closest by
//! weighted edit distance wins.
//!
//! # Mapping File Format (comet.yaml)
//!
//! ```yaml
//! - to: openshift-serverless-1/serving-activator-rhel8
//!   from:
//!     - name: kn-serving-activator
//!       repo: serverless-operator-135/kn-serving-activator
//! - to: openshift-serverless-1/eventing-controller-rhel8
//!   from:
//!     - name: kn-eventing-controller
//!       repo: serverless-operator-135/kn-eventing-controller
//! ```
//!
//! # Modules
//!
//! - [`distance`] - weighted Levenshtein edit distance
//! - [`mapping`] - data model, name normalization, store and resolver
//! - [`core`] - error types and user-facing error rendering
//! - [`cli`] - the `comet` command-line front end
//! - [`utils`] - whole-file reads and atomic writes
//!
//! # Library Usage
//!
//! ```rust,no_run
//! use comet_cli::constants::RHEL8;
//! use comet_cli::mapping::{Candidate, MappingLocks, MatchQuery, record_mapping, resolve};
//!
//! # fn example() -> comet_cli::core::Result<()> {
//! let locks = MappingLocks::new();
//!
//! let query = MatchQuery::new("comet.yaml", RHEL8, "serverless-operator-136/kn-serving-activator");
//! let entry = resolve(&locks, &query)?;
//! println!("building from {}", entry.target);
//!
//! record_mapping(
//!     &locks,
//!     "comet.yaml",
//!     &entry.target,
//!     Candidate::new("kn-serving-activator-136", "serverless-operator-136/kn-serving-activator"),
//! )?;
//! # Ok(())
//! # }
//! ```
//!
//! # Command-Line Usage
//!
//! ```bash
//! comet resolve serverless-operator-136/kn-serving-activator
//! comet record openshift-serverless-1/serving-activator-rhel8 \
//!     --name kn-serving-activator-136 --repo serverless-operator-136/kn-serving-activator
//! comet list --format json
//! ```

pub mod cli;
pub mod constants;
pub mod core;
pub mod distance;
pub mod mapping;
pub mod utils;

// test_utils module is available for both unit tests and integration tests
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
