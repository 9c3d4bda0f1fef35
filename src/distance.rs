//! Weighted Levenshtein edit distance.
//!
//! The distance between two character sequences is the minimum total cost of
//! insertions, deletions and substitutions that turns `source` into `target`.
//! Costs and the character equality test are configurable through
//! [`EditOptions`].
//!
//! Characters are compared as Unicode scalar values, so multi-byte input is
//! measured in characters rather than bytes.
//!
//! # Examples
//!
//! ```rust
//! use comet_cli::distance::{EditOptions, distance_str};
//!
//! let opts = EditOptions::default();
//! assert_eq!(distance_str("kitten", "sitting", &opts), 5);
//! assert_eq!(distance_str("same", "same", &opts), 0);
//! ```

use std::fmt;

/// Predicate deciding whether two characters count as a match.
pub type MatchFn = fn(char, char) -> bool;

/// Exact character equality, the default [`MatchFn`].
#[must_use]
pub fn identical_chars(a: char, b: char) -> bool {
    a == b
}

/// Costs and match predicate used by [`distance`].
///
/// The default configuration charges 1 per insertion, 1 per deletion and 2
/// per substitution, so a substitution never beats a delete plus insert.
#[derive(Clone, Copy)]
pub struct EditOptions {
    /// Cost of inserting one character of `target`.
    pub insert_cost: usize,
    /// Cost of deleting one character of `source`.
    pub delete_cost: usize,
    /// Cost of replacing a character of `source` with one of `target`.
    pub substitute_cost: usize,
    /// Returns `true` when two characters are considered equal.
    pub matches: MatchFn,
}

impl EditOptions {
    /// Default costs with ASCII case-insensitive matching.
    #[must_use]
    pub fn case_insensitive() -> Self {
        Self {
            matches: |a, b| a.eq_ignore_ascii_case(&b),
            ..Self::default()
        }
    }
}

impl Default for EditOptions {
    fn default() -> Self {
        Self {
            insert_cost: 1,
            delete_cost: 1,
            substitute_cost: 2,
            matches: identical_chars,
        }
    }
}

impl fmt::Debug for EditOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EditOptions")
            .field("insert_cost", &self.insert_cost)
            .field("delete_cost", &self.delete_cost)
            .field("substitute_cost", &self.substitute_cost)
            .finish_non_exhaustive()
    }
}

/// Computes the weighted edit distance between `source` and `target`.
///
/// Runs in `O(|source| * |target|)` time and keeps only two rows of the
/// dynamic-programming grid alive, so memory is `O(|target|)`.
///
/// Empty inputs are valid: the distance from an empty `source` is
/// `|target| * insert_cost`, and to an empty `target` it is
/// `|source| * delete_cost`.
#[must_use]
pub fn distance(source: &[char], target: &[char], opts: &EditOptions) -> usize {
    let width = target.len() + 1;

    // Row 0: building a target prefix out of nothing takes j insertions.
    let mut prev: Vec<usize> = (0..width).map(|j| j * opts.insert_cost).collect();
    let mut cur = vec![0; width];

    for (i, &s) in source.iter().enumerate() {
        cur[0] = (i + 1) * opts.delete_cost;
        for (j, &t) in target.iter().enumerate() {
            let delete = prev[j + 1] + opts.delete_cost;
            let insert = cur[j] + opts.insert_cost;
            let keep_or_substitute = if (opts.matches)(s, t) {
                prev[j]
            } else {
                prev[j] + opts.substitute_cost
            };
            cur[j + 1] = delete.min(insert).min(keep_or_substitute);
        }
        std::mem::swap(&mut prev, &mut cur);
    }

    prev[width - 1]
}

/// Convenience wrapper over [`distance`] for string slices.
#[must_use]
pub fn distance_str(source: &str, target: &str, opts: &EditOptions) -> usize {
    let source: Vec<char> = source.chars().collect();
    let target: Vec<char> = target.chars().collect();
    distance(&source, &target, opts)
}
