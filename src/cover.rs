//! Covering-set selection over prime implicants
//!
//! The [`ImplicantTable`] maps every on-set minterm to the prime implicants
//! that cover it. [`select_cover`] then picks implicants until the table is
//! empty: essential implicants first, and a greedy maximum-coverage choice
//! whenever no essential implicant is left.
//!
//! The greedy choice breaks ties in favour of the implicant encountered
//! first while counting, walking minterms in ascending order and each
//! minterm's implicants in ascending pattern order. This rule decides which
//! of several equally good implicants ends up in the output.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use log::{debug, trace};

use crate::pattern::{Minterm, Pattern};


/// Incidence table from on-set minterms to the implicants covering them
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImplicantTable {
    entries: BTreeMap<Minterm, Vec<Pattern>>,
}

impl ImplicantTable {
    /// Build the table for `on_set` from a set of prime implicants
    ///
    /// Don't-care minterms must not be part of `on_set`: they are never
    /// required in the final cover, so implicants covering only don't-cares
    /// do not appear in any entry.
    ///
    /// Returns the first minterm that no implicant covers, if any.
    pub fn build(primes: &BTreeSet<Pattern>, on_set: &BTreeSet<Minterm>) -> Result<Self, Minterm> {
        let mut entries = BTreeMap::new();
        for &minterm in on_set {
            let covering: Vec<Pattern> = primes
                .iter()
                .filter(|prime| prime.covers(minterm))
                .cloned()
                .collect();
            if covering.is_empty() {
                return Err(minterm);
            }
            entries.insert(minterm, covering);
        }
        Ok(ImplicantTable { entries })
    }

    /// Number of minterms still in the table
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether every minterm has been covered
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(minterm, covering implicants)` in ascending minterm order
    pub fn entries(&self) -> impl Iterator<Item = (Minterm, &[Pattern])> {
        self.entries.iter().map(|(&m, implicants)| (m, implicants.as_slice()))
    }

    /// Implicants that are the sole coverer of at least one minterm
    pub fn essentials(&self) -> BTreeSet<Pattern> {
        self.entries
            .values()
            .filter(|implicants| implicants.len() == 1)
            .map(|implicants| implicants[0].clone())
            .collect()
    }

    fn find_essential(&self) -> Option<Pattern> {
        self.entries
            .values()
            .find(|implicants| implicants.len() == 1)
            .map(|implicants| implicants[0].clone())
    }

    fn best_coverage(&self) -> Option<Pattern> {
        let mut order: Vec<&Pattern> = Vec::new();
        let mut counts: HashMap<&Pattern, usize> = HashMap::new();
        for implicants in self.entries.values() {
            for implicant in implicants {
                let count = counts.entry(implicant).or_insert_with(|| {
                    order.push(implicant);
                    0
                });
                *count += 1;
            }
        }

        let mut best: Option<(&Pattern, usize)> = None;
        for implicant in order {
            let count = counts[implicant];
            if best.map_or(true, |(_, best_count)| count > best_count) {
                best = Some((implicant, count));
            }
        }
        best.map(|(implicant, _)| implicant.clone())
    }

    /// Remove every minterm in the full expansion of `implicant`
    fn remove_covered(&mut self, implicant: &Pattern) {
        self.entries.retain(|&minterm, _| !implicant.covers(minterm));
    }
}

/// How an implicant entered the cover
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pick {
    /// Sole coverer of some remaining minterm
    Essential,
    /// Chosen for covering the most remaining minterms
    Greedy,
}

/// The implicants chosen for one output, in selection order
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SelectedCover {
    picks: Vec<(Pattern, Pick)>,
}

impl SelectedCover {
    fn push(&mut self, implicant: Pattern, pick: Pick) {
        if !self.picks.iter().any(|(p, _)| *p == implicant) {
            self.picks.push((implicant, pick));
        }
    }

    /// Selected implicants in the order they were chosen
    pub fn implicants(&self) -> impl Iterator<Item = &Pattern> {
        self.picks.iter().map(|(implicant, _)| implicant)
    }

    /// Selected implicants together with the reason each was chosen
    pub fn picks(&self) -> &[(Pattern, Pick)] {
        &self.picks
    }

    /// Number of selected implicants
    pub fn len(&self) -> usize {
        self.picks.len()
    }

    /// Whether nothing was selected (the on-set was empty)
    pub fn is_empty(&self) -> bool {
        self.picks.is_empty()
    }

    /// Number of implicants picked as essential
    pub fn essential_count(&self) -> usize {
        self.picks
            .iter()
            .filter(|(_, pick)| *pick == Pick::Essential)
            .count()
    }

    /// Whether the selected implicants together cover `minterm`
    pub fn covers(&self, minterm: Minterm) -> bool {
        self.implicants().any(|implicant| implicant.covers(minterm))
    }

    /// First minterm of `on_set` left uncovered, if any
    pub fn first_uncovered(&self, on_set: &BTreeSet<Minterm>) -> Option<Minterm> {
        on_set.iter().copied().find(|&m| !self.covers(m))
    }
}

/// Choose a covering subset of the implicants in `table`
///
/// Essential implicants are extracted one at a time, rescanning the shrunken
/// table after each. When a full scan finds none, the implicant covering the
/// most remaining minterms is taken. Both steps remove every minterm in the
/// chosen implicant's expansion. The result covers every minterm the table
/// started with.
pub fn select_cover(mut table: ImplicantTable) -> SelectedCover {
    let mut selected = SelectedCover::default();

    while !table.is_empty() {
        let (implicant, pick) = match table.find_essential() {
            Some(essential) => (essential, Pick::Essential),
            None => match table.best_coverage() {
                Some(best) => (best, Pick::Greedy),
                // Entries are never empty, so some implicant is always present
                None => break,
            },
        };
        trace!("{:?} pick {} ({} minterms left)", pick, implicant, table.len());
        table.remove_covered(&implicant);
        selected.push(implicant, pick);
    }

    debug!(
        "selected {} implicants ({} essential)",
        selected.len(),
        selected.essential_count()
    );
    selected
}
