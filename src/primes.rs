//! Prime implicant generation
//!
//! Patterns are combined level by level: every pair that differs in exactly
//! one literal is merged into the next level, and whatever never merged is
//! prime. The loop stops at the first level that produces nothing new. Each
//! successful merge adds a dash, so there are at most `width + 1` levels.

use std::collections::{BTreeMap, BTreeSet};

use log::{debug, trace};

use crate::pattern::Pattern;

/// Result of one combination pass over a level
struct Level {
    next: BTreeSet<Pattern>,
    unused: Vec<Pattern>,
}

fn combine_level(patterns: &BTreeSet<Pattern>) -> Level {
    // Only patterns with identical dash placement can merge
    let mut buckets: BTreeMap<u64, Vec<&Pattern>> = BTreeMap::new();
    for pattern in patterns {
        buckets.entry(pattern.care_mask()).or_default().push(pattern);
    }

    let mut next = BTreeSet::new();
    let mut unused = Vec::new();
    for bucket in buckets.values() {
        let mut used = vec![false; bucket.len()];
        for i in 0..bucket.len() {
            for j in (i + 1)..bucket.len() {
                if let Some(merged) = bucket[i].combine(bucket[j]) {
                    next.insert(merged);
                    used[i] = true;
                    used[j] = true;
                }
            }
        }
        unused.extend(
            bucket
                .iter()
                .zip(&used)
                .filter(|(_, &was_used)| !was_used)
                .map(|(pattern, _)| (*pattern).clone()),
        );
    }
    Level { next, unused }
}

/// Run a single combination pass and return the merged patterns
///
/// An empty result means no two patterns in `patterns` can be combined, which
/// is the case for any set returned by [`prime_implicants`].
pub fn combination_pass(patterns: &BTreeSet<Pattern>) -> BTreeSet<Pattern> {
    combine_level(patterns).next
}

/// Compute the prime implicants of a set of same-width patterns
///
/// The input is normally one pattern per minterm of the on-set and the
/// don't-care set. Empty and singleton inputs are returned unchanged.
///
/// # Examples
///
/// ```
/// use quine_logic::{prime_implicants, Pattern};
/// use std::collections::BTreeSet;
///
/// let minterms: BTreeSet<Pattern> = [0, 1, 2]
///     .into_iter()
///     .map(|m| Pattern::from_minterm(m, 2))
///     .collect();
/// let primes = prime_implicants(&minterms);
/// let text: Vec<String> = primes.iter().map(|p| p.to_string()).collect();
/// assert_eq!(text, vec!["-0", "0-"]);
/// ```
pub fn prime_implicants(patterns: &BTreeSet<Pattern>) -> BTreeSet<Pattern> {
    let mut primes = BTreeSet::new();
    let mut current = patterns.clone();
    let mut depth = 0;

    while !current.is_empty() {
        let Level { next, unused } = combine_level(&current);
        debug!(
            "level {}: {} patterns, {} merged, {} prime",
            depth,
            current.len(),
            next.len(),
            unused.len()
        );
        for prime in &unused {
            trace!("prime implicant {}", prime);
        }
        primes.extend(unused);
        current = next;
        depth += 1;
    }

    primes
}
