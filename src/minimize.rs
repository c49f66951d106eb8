//! Per-output minimization driver
//!
//! Each output of a [`PLA`] is minimized on its own: its on-set and
//! don't-care set are collected from the terms, the prime implicants of
//! their union are generated, and a cover of the on-set is selected.

use std::borrow::Cow;
use std::collections::BTreeSet;
use std::sync::Arc;
use std::thread;

use log::{debug, info};

use crate::config::MinimizerConfig;
use crate::cover::{select_cover, ImplicantTable, Pick, SelectedCover};
use crate::error::MinimizeError;
use crate::pattern::{Minterm, Pattern};
use crate::pla::{OutputValue, PLASerialisable, Row, PLA};
use crate::primes::prime_implicants;

/// On-set and don't-care set of one output
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OutputSets {
    /// Minterms for which the output must be 1
    pub on_set: BTreeSet<Minterm>,
    /// Minterms for which the output is unconstrained
    ///
    /// Never overlaps `on_set`: a minterm listed as both is required.
    pub dont_care: BTreeSet<Minterm>,
}

impl OutputSets {
    /// Collect the sets of output `output` from the terms of `pla`
    pub fn for_output(pla: &PLA, output: usize) -> Result<Self, MinimizeError> {
        if output >= pla.num_outputs() {
            return Err(MinimizeError::OutputIndexOutOfBounds {
                index: output,
                num_outputs: pla.num_outputs(),
            });
        }

        let mut sets = OutputSets::default();
        for term in pla.terms() {
            match term.outputs()[output] {
                OutputValue::On => sets.on_set.extend(term.inputs().expand()),
                OutputValue::DontCare => sets.dont_care.extend(term.inputs().expand()),
                OutputValue::Off => {}
            }
        }
        let on_set = &sets.on_set;
        sets.dont_care.retain(|m| !on_set.contains(m));
        Ok(sets)
    }

    /// One minterm pattern per element of the on-set and don't-care set
    pub fn patterns(&self, width: usize) -> BTreeSet<Pattern> {
        self.on_set
            .iter()
            .chain(&self.dont_care)
            .map(|&m| Pattern::from_minterm(m, width))
            .collect()
    }
}

/// The minimized cover of a single output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputCover {
    index: usize,
    on_set_len: usize,
    dont_care_len: usize,
    num_primes: usize,
    cover: SelectedCover,
}

impl OutputCover {
    /// Index of the output this cover belongs to
    pub fn index(&self) -> usize {
        self.index
    }

    /// The selected implicants
    pub fn cover(&self) -> &SelectedCover {
        &self.cover
    }

    /// The selected implicants, in selection order
    pub fn implicants(&self) -> impl Iterator<Item = &Pattern> {
        self.cover.implicants()
    }

    /// Size of the on-set
    pub fn on_set_len(&self) -> usize {
        self.on_set_len
    }

    /// Size of the don't-care set
    pub fn dont_care_len(&self) -> usize {
        self.dont_care_len
    }

    /// Number of prime implicants generated before selection
    pub fn num_primes(&self) -> usize {
        self.num_primes
    }
}

/// Minimize output `output` of `pla` with the default configuration
///
/// # Examples
///
/// ```
/// use quine_logic::{minimize_output, PLAReader, PLA};
///
/// let pla = PLA::from_pla_string(".i 2\n.o 1\n00 1\n01 1\n10 1\n.e\n").unwrap();
/// let cover = minimize_output(&pla, 0).unwrap();
/// let implicants: Vec<String> = cover.implicants().map(|p| p.to_string()).collect();
/// assert_eq!(implicants, vec!["0-", "-0"]);
/// ```
pub fn minimize_output(pla: &PLA, output: usize) -> Result<OutputCover, MinimizeError> {
    minimize_output_with_config(pla, output, &MinimizerConfig::default())
}

fn minimize_output_with_config(
    pla: &PLA,
    output: usize,
    config: &MinimizerConfig,
) -> Result<OutputCover, MinimizeError> {
    let sets = OutputSets::for_output(pla, output)?;
    let primes = prime_implicants(&sets.patterns(pla.num_inputs()));
    debug!(
        "output {}: {} on-set, {} don't-care, {} primes",
        output,
        sets.on_set.len(),
        sets.dont_care.len(),
        primes.len()
    );

    let table = ImplicantTable::build(&primes, &sets.on_set)
        .map_err(|minterm| MinimizeError::UncoverableMinterm { output, minterm })?;
    let cover = select_cover(table);

    if config.verify {
        if let Some(minterm) = cover.first_uncovered(&sets.on_set) {
            return Err(MinimizeError::IncompleteCover { output, minterm });
        }
    }

    Ok(OutputCover {
        index: output,
        on_set_len: sets.on_set.len(),
        dont_care_len: sets.dont_care.len(),
        num_primes: primes.len(),
        cover,
    })
}

/// Types whose Boolean function can be minimized
pub trait Minimizable {
    /// The minimized representation
    type Output;

    /// Minimize with the default [`MinimizerConfig`]
    fn minimize(&self) -> Result<Self::Output, MinimizeError> {
        self.minimize_with_config(&MinimizerConfig::default())
    }

    /// Minimize with an explicit configuration
    fn minimize_with_config(&self, config: &MinimizerConfig)
        -> Result<Self::Output, MinimizeError>;
}

impl Minimizable for PLA {
    type Output = MinimizedPLA;

    fn minimize_with_config(
        &self,
        config: &MinimizerConfig,
    ) -> Result<MinimizedPLA, MinimizeError> {
        let outputs = if config.parallel && self.num_outputs() > 1 {
            thread::scope(|scope| {
                let handles: Vec<_> = (0..self.num_outputs())
                    .map(|output| {
                        scope.spawn(move || minimize_output_with_config(self, output, config))
                    })
                    .collect();
                handles
                    .into_iter()
                    .map(|handle| match handle.join() {
                        Ok(result) => result,
                        Err(panic) => std::panic::resume_unwind(panic),
                    })
                    .collect::<Result<Vec<_>, _>>()
            })?
        } else {
            (0..self.num_outputs())
                .map(|output| minimize_output_with_config(self, output, config))
                .collect::<Result<Vec<_>, _>>()?
        };

        let minimized = MinimizedPLA {
            num_inputs: self.num_inputs(),
            num_outputs: self.num_outputs(),
            input_labels: self.input_labels().map(<[_]>::to_vec),
            output_labels: self.output_labels().map(<[_]>::to_vec),
            outputs,
        };
        info!(
            "minimized {} terms into {} implicants over {} outputs",
            self.terms().len(),
            minimized.num_implicants(),
            minimized.num_outputs
        );
        Ok(minimized)
    }
}

/// A minimized multi-output function
///
/// Holds one [`OutputCover`] per output, in output order, along with the
/// header of the function it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MinimizedPLA {
    num_inputs: usize,
    num_outputs: usize,
    input_labels: Option<Vec<Arc<str>>>,
    output_labels: Option<Vec<Arc<str>>>,
    outputs: Vec<OutputCover>,
}

impl MinimizedPLA {
    /// Get the number of inputs
    pub fn num_inputs(&self) -> usize {
        self.num_inputs
    }

    /// Get the number of outputs
    pub fn num_outputs(&self) -> usize {
        self.num_outputs
    }

    /// Input variable labels, if the source had them
    pub fn input_labels(&self) -> Option<&[Arc<str>]> {
        self.input_labels.as_deref()
    }

    /// Output variable labels, if the source had them
    pub fn output_labels(&self) -> Option<&[Arc<str>]> {
        self.output_labels.as_deref()
    }

    /// Per-output covers in output order
    pub fn outputs(&self) -> &[OutputCover] {
        &self.outputs
    }

    /// The cover of one output
    pub fn output(&self, index: usize) -> Option<&OutputCover> {
        self.outputs.get(index)
    }

    /// Total number of implicants over all outputs
    pub fn num_implicants(&self) -> usize {
        self.outputs.iter().map(|output| output.cover.len()).sum()
    }
}

/// Rows of a [`MinimizedPLA`]: each implicant with a one-hot output mask
pub(crate) struct MinimizedRows<'a> {
    num_outputs: usize,
    outputs: std::slice::Iter<'a, OutputCover>,
    current: Option<(usize, std::slice::Iter<'a, (Pattern, Pick)>)>,
}

impl<'a> Iterator for MinimizedRows<'a> {
    type Item = Row<'a>;

    fn next(&mut self) -> Option<Row<'a>> {
        loop {
            if let Some((index, picks)) = &mut self.current {
                if let Some((implicant, _)) = picks.next() {
                    let mut mask = vec![OutputValue::DontCare; self.num_outputs];
                    mask[*index] = OutputValue::On;
                    return Some(Row {
                        inputs: implicant,
                        outputs: Cow::Owned(mask),
                    });
                }
            }
            let output = self.outputs.next()?;
            self.current = Some((output.index, output.cover.picks().iter()));
        }
    }
}

impl PLASerialisable for MinimizedPLA {
    type Rows<'a> = MinimizedRows<'a>;

    fn num_inputs(&self) -> usize {
        self.num_inputs
    }

    fn num_outputs(&self) -> usize {
        self.num_outputs
    }

    fn input_labels(&self) -> Option<&[Arc<str>]> {
        self.input_labels.as_deref()
    }

    fn output_labels(&self) -> Option<&[Arc<str>]> {
        self.output_labels.as_deref()
    }

    fn num_rows(&self) -> usize {
        self.num_implicants()
    }

    fn rows(&self) -> MinimizedRows<'_> {
        MinimizedRows {
            num_outputs: self.num_outputs,
            outputs: self.outputs.iter(),
            current: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pla::{PLAReader, PLAWriter};
    use test_log::test;

    fn read(text: &str) -> PLA {
        PLA::from_pla_string(text).unwrap()
    }

    fn texts(cover: &OutputCover) -> Vec<String> {
        cover.implicants().map(|p| p.to_string()).collect()
    }

    #[test]
    fn test_output_sets() {
        let pla = read(".i 2\n.o 2\n0- 1-\n11 -1\n01 -0\n");
        let first = OutputSets::for_output(&pla, 0).unwrap();
        assert_eq!(first.on_set, BTreeSet::from([0, 1]));
        assert_eq!(first.dont_care, BTreeSet::from([3]));

        let second = OutputSets::for_output(&pla, 1).unwrap();
        assert_eq!(second.on_set, BTreeSet::from([3]));
        assert_eq!(second.dont_care, BTreeSet::from([0, 1]));
    }

    #[test]
    fn test_on_set_wins_over_dont_care() {
        let pla = read(".i 1\n.o 1\n1 -\n- 1\n");
        let sets = OutputSets::for_output(&pla, 0).unwrap();
        assert_eq!(sets.on_set, BTreeSet::from([0, 1]));
        assert!(sets.dont_care.is_empty());
    }

    #[test]
    fn test_output_index_out_of_bounds() {
        let pla = read(".i 1\n.o 1\n1 1\n");
        assert_eq!(
            minimize_output(&pla, 1),
            Err(MinimizeError::OutputIndexOutOfBounds {
                index: 1,
                num_outputs: 1
            })
        );
    }

    #[test]
    fn test_dont_cares_enable_larger_implicants() {
        // on-set {0, 1}, don't-care {2, 3}: a single dash-dash implicant
        let pla = read(".i 2\n.o 1\n0- 1\n1- -\n");
        let cover = minimize_output(&pla, 0).unwrap();
        assert_eq!(texts(&cover), vec!["--"]);
        assert_eq!(cover.on_set_len(), 2);
        assert_eq!(cover.dont_care_len(), 2);
        assert_eq!(cover.num_primes(), 1);
    }

    #[test]
    fn test_dont_care_only_output_is_empty() {
        let pla = read(".i 2\n.o 1\n0- -\n");
        let cover = minimize_output(&pla, 0).unwrap();
        assert!(cover.cover().is_empty());
    }

    #[test]
    fn test_minimize_writes_one_hot_rows() {
        let pla = read(".i 2\n.o 2\n.ilb a b\n.ob f g\n00 11\n01 10\n10 01\n.e\n");
        let minimized = pla.minimize().unwrap();
        assert_eq!(minimized.num_implicants(), 2);
        assert_eq!(
            minimized.to_pla_string().unwrap(),
            ".i 2\n.o 2\n.ilb a b\n.ob f g\n.p 2\n0- 1-\n-0 -1\n.e\n"
        );
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let pla = read(
            ".i 3\n.o 3\n\
             000 110\n001 101\n010 011\n011 1-0\n\
             100 01-\n101 111\n110 -01\n111 100\n",
        );
        let sequential = pla.minimize().unwrap();
        let parallel = pla
            .minimize_with_config(&MinimizerConfig {
                parallel: true,
                ..Default::default()
            })
            .unwrap();
        assert_eq!(sequential, parallel);
        assert_eq!(
            sequential.to_pla_string().unwrap(),
            parallel.to_pla_string().unwrap()
        );
    }

    #[test]
    fn test_zero_outputs() {
        let pla = read(".i 2\n.o 0\n.e\n");
        let minimized = pla.minimize().unwrap();
        assert!(minimized.outputs().is_empty());
        assert_eq!(minimized.to_pla_string().unwrap(), ".i 2\n.o 0\n.p 0\n.e\n");
    }
}
