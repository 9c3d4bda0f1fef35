//! Best-match lookup of downstream image names.
//!
//! Every eligible entry is scored by the smallest edit distance between the
//! normalized query and either the entry's normalized target or one of its
//! normalized candidate repos. The lowest score wins; on ties the entry that
//! appears first in the file wins, so results depend only on list order.

use crate::core::{CometError, Result};
use crate::distance::{EditOptions, distance};
use crate::mapping::store::dump_or_placeholder;
use crate::mapping::{
    Candidate, MappingEntry, MappingLocks, MappingStore, MatchQuery, normalize_image_name,
};
use std::path::Path;

/// Winning entry of [`best_match`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BestMatch {
    /// Position of the entry in the mapping list.
    pub index: usize,
    /// Edit distance that won.
    pub distance: usize,
}

/// Scores `entries` against `image` and returns the closest one.
///
/// Entries whose normalized target does not contain `platform_filter` are
/// skipped along with their candidates; an empty filter admits everything.
/// Returns `None` when no entry is eligible.
#[must_use]
pub fn best_match(
    entries: &[MappingEntry],
    platform_filter: &str,
    image: &str,
) -> Option<BestMatch> {
    let opts = EditOptions::default();
    let query: Vec<char> = normalize_image_name(image).chars().collect();
    let mut best: Option<BestMatch> = None;

    let mut consider = |index: usize, distance: usize| {
        if best.is_none_or(|b| distance < b.distance) {
            best = Some(BestMatch { index, distance });
        }
    };

    for (index, entry) in entries.iter().enumerate() {
        let target = normalize_image_name(&entry.target);
        if !target.contains(platform_filter) {
            tracing::trace!("Skipping '{}': no '{}' in target", entry.target, platform_filter);
            continue;
        }

        for candidate in &entry.candidates {
            let repo: Vec<char> = normalize_image_name(&candidate.repo).chars().collect();
            consider(index, distance(&query, &repo, &opts));
        }

        let target: Vec<char> = target.chars().collect();
        consider(index, distance(&target, &query, &opts));
    }

    best
}

impl MappingStore {
    /// Resolves `image` to the closest mapping entry in this file.
    ///
    /// Fails with [`CometError::NoMatch`] when the list is empty or the
    /// platform filter excludes every entry.
    pub fn resolve(&self, platform_filter: &str, image: &str) -> Result<MappingEntry> {
        let _guard = self.acquire();
        let mut entries = self.load_unlocked()?;

        let Some(found) = best_match(&entries, platform_filter, image) else {
            return Err(CometError::NoMatch {
                image: image.to_string(),
                platform: platform_filter.to_string(),
                path: self.display_path(),
                dump: dump_or_placeholder(&entries),
            });
        };

        let entry = entries.swap_remove(found.index);
        tracing::debug!(
            "Resolved '{}' to '{}' (distance {})",
            image,
            entry.target,
            found.distance
        );
        Ok(entry)
    }
}

/// Resolves a [`MatchQuery`] using the lock registered for its file.
pub fn resolve(locks: &MappingLocks, query: &MatchQuery) -> Result<MappingEntry> {
    locks
        .store(&query.file_path)
        .resolve(&query.platform_filter, &query.query_image)
}

/// Records a confirmed downstream-to-upstream association.
///
/// Re-recording a candidate name that already exists under `target` succeeds
/// without changing the file.
pub fn record_mapping(
    locks: &MappingLocks,
    file_path: impl AsRef<Path>,
    target: &str,
    candidate: Candidate,
) -> Result<()> {
    locks.store(file_path).append(target, candidate)?;
    Ok(())
}
