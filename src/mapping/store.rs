//! Mapping file persistence with per-file mutual exclusion.
//!
//! A [`MappingStore`] is a handle on one mapping file plus the lock that
//! serializes every load-only read and every load-mutate-persist sequence on
//! that file. Two handles share a lock only when they come from the same
//! [`MappingLocks`] registry for the same path, so independent mapping files
//! never contend with each other.
//!
//! Locking is in-process only. Nothing stops a second process from rewriting
//! the file concurrently.
//!
//! # Examples
//!
//! ```rust,no_run
//! use comet_cli::mapping::{Candidate, MappingLocks};
//!
//! # fn example() -> comet_cli::core::Result<()> {
//! let locks = MappingLocks::new();
//! let store = locks.store("comet.yaml");
//! store.append(
//!     "openshift-serverless-1/serving-activator-rhel8",
//!     Candidate::new("kn-serving-activator", "serverless-operator-136/kn-serving-activator"),
//! )?;
//! # Ok(())
//! # }
//! ```

use crate::core::{CometError, Result};
use crate::mapping::{Candidate, MappingEntry};
use crate::utils::fs::{atomic_write, read_text_file};
use dashmap::DashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Result of [`MappingStore::append`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppendOutcome {
    /// The candidate was added and the file rewritten.
    Appended,
    /// A candidate with the same name already existed; the file is unchanged.
    AlreadyPresent,
}

/// Handle on a mapping file and the lock guarding it.
#[derive(Debug, Clone)]
pub struct MappingStore {
    path: PathBuf,
    lock: Arc<Mutex<()>>,
}

impl MappingStore {
    /// Creates a store with its own, unshared lock.
    ///
    /// Use [`MappingLocks::store`] when several callers in the process work on
    /// the same file.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self::with_lock(path.into(), Arc::default())
    }

    fn with_lock(path: PathBuf, lock: Arc<Mutex<()>>) -> Self {
        Self { path, lock }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Acquires the file lock.
    ///
    /// The lock guards no in-memory state, so a panic in another holder leaves
    /// nothing inconsistent and poisoning is ignored.
    pub(crate) fn acquire(&self) -> MutexGuard<'_, ()> {
        self.lock.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Loads the mapping list under the lock.
    pub fn load(&self) -> Result<Vec<MappingEntry>> {
        let _guard = self.acquire();
        self.load_unlocked()
    }

    /// Loads the mapping list; the caller must hold the lock.
    ///
    /// An empty file or a bare `null` document yields an empty list.
    pub(crate) fn load_unlocked(&self) -> Result<Vec<MappingEntry>> {
        let content = read_text_file(&self.path).map_err(|source| CometError::Io {
            operation: "read",
            path: self.display_path(),
            source,
        })?;

        if content.trim().is_empty() {
            tracing::debug!("Mapping file {} is empty", self.path.display());
            return Ok(Vec::new());
        }

        let entries: Option<Vec<MappingEntry>> =
            serde_yaml::from_str(&content).map_err(|source| CometError::Format {
                path: self.display_path(),
                source,
            })?;
        let entries = entries.unwrap_or_default();

        tracing::debug!(
            "Loaded {} mapping entries from {}",
            entries.len(),
            self.path.display()
        );
        Ok(entries)
    }

    /// Rewrites the whole file; the caller must hold the lock.
    fn persist_unlocked(&self, entries: &[MappingEntry]) -> Result<()> {
        let yaml = dump(entries)?;
        atomic_write(&self.path, yaml.as_bytes()).map_err(|source| CometError::Io {
            operation: "write",
            path: self.display_path(),
            source,
        })?;
        tracing::debug!(
            "Persisted {} mapping entries to {}",
            entries.len(),
            self.path.display()
        );
        Ok(())
    }

    /// Records `candidate` under the first entry whose target is `target`.
    ///
    /// Appending a candidate whose `name` is already present under that entry
    /// is a successful no-op and does not touch the file. If no entry has the
    /// requested target the file is left unmodified and
    /// [`CometError::TargetNotFound`] is returned with a dump of the list.
    pub fn append(&self, target: &str, candidate: Candidate) -> Result<AppendOutcome> {
        let _guard = self.acquire();
        let mut entries = self.load_unlocked()?;

        let Some(index) = entries.iter().position(|e| e.target == target) else {
            return Err(CometError::TargetNotFound {
                target: target.to_string(),
                path: self.display_path(),
                dump: dump_or_placeholder(&entries),
            });
        };
        let entry = &mut entries[index];

        if entry.has_candidate(&candidate.name) {
            tracing::debug!(
                "Candidate '{}' already recorded under '{}'",
                candidate.name,
                target
            );
            return Ok(AppendOutcome::AlreadyPresent);
        }

        tracing::info!(
            "Recording '{}' ({}) under '{}'",
            candidate.name,
            candidate.repo,
            target
        );
        entry.candidates.push(candidate);
        self.persist_unlocked(&entries)?;
        Ok(AppendOutcome::Appended)
    }

    pub(crate) fn display_path(&self) -> String {
        self.path.display().to_string()
    }
}

/// Registry of per-file locks.
///
/// Every [`MappingStore`] handed out for the same path shares one mutex.
/// Locks are keyed by the canonical path so that `./comet.yaml` and
/// `comet.yaml` map to the same lock. A file that does not exist yet is keyed
/// by its canonical parent directory joined with its file name, which is the
/// key the file gets once it is created.
#[derive(Debug, Default)]
pub struct MappingLocks {
    locks: DashMap<PathBuf, Arc<Mutex<()>>>,
}

impl MappingLocks {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a store for `path`, sharing its lock with earlier handles.
    pub fn store(&self, path: impl AsRef<Path>) -> MappingStore {
        let path = path.as_ref();
        let lock = self.locks.entry(lock_key(path)).or_default().clone();
        MappingStore::with_lock(path.to_path_buf(), lock)
    }

    /// Number of distinct files with a registered lock.
    #[must_use]
    pub fn len(&self) -> usize {
        self.locks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.locks.is_empty()
    }
}

fn lock_key(path: &Path) -> PathBuf {
    if let Ok(canonical) = std::fs::canonicalize(path) {
        return canonical;
    }
    let Some(name) = path.file_name() else {
        return path.to_path_buf();
    };
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    match std::fs::canonicalize(parent) {
        Ok(dir) => dir.join(name),
        Err(_) => path.to_path_buf(),
    }
}

/// Serializes a mapping list to YAML in the on-disk format.
pub fn dump(entries: &[MappingEntry]) -> Result<String> {
    serde_yaml::to_string(entries).map_err(|source| CometError::Serialize { source })
}

/// Dump used in diagnostics, where a serialization failure must not hide the
/// original error.
pub(crate) fn dump_or_placeholder(entries: &[MappingEntry]) -> String {
    dump(entries).unwrap_or_else(|e| format!("<unable to serialize {} entries: {e}>", entries.len()))
}
