//! # Quine-McCluskey Logic Minimizer
//!
//! This crate minimizes multi-output Boolean functions, given as PLA truth
//! tables with optional don't-cares, into a reduced sum-of-products form using
//! the Quine-McCluskey method.
//!
//! ## Overview
//!
//! Each output is minimized independently in two stages:
//!
//! 1. **Prime implicant generation** ([`prime_implicants`]): minterm patterns
//!    of the on-set and don't-care set are merged pairwise, level by level,
//!    until nothing merges. Whatever never merged is a prime implicant.
//! 2. **Cover selection** ([`select_cover`]): an [`ImplicantTable`] maps each
//!    on-set minterm to the primes covering it. Essential primes are taken
//!    first; when none remain, the prime covering the most remaining minterms
//!    is taken.
//!
//! The essential part of the cover is exact; the greedy residue is a
//! heuristic and need not have the fewest implicants possible.
//!
//! ## Minimizing a PLA
//!
//! ```
//! use quine_logic::{Minimizable, PLAReader, PLAWriter, PLA};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let pla = PLA::from_pla_string(
//!     ".i 2\n.o 1\n.ilb a b\n.ob f\n00 1\n01 1\n10 1\n.e\n",
//! )?;
//!
//! let minimized = pla.minimize()?;
//! assert_eq!(
//!     minimized.to_pla_string()?,
//!     ".i 2\n.o 1\n.ilb a b\n.ob f\n.p 2\n0- 1\n-0 1\n.e\n"
//! );
//!
//! for equation in minimized.equations() {
//!     println!("{}", equation); // f = ~a + ~b
//! }
//! # Ok(())
//! # }
//! ```
//!
//! Files are handled the same way through [`PLAReader::from_pla_file`] and
//! [`PLAWriter::to_pla_file`].
//!
//! ## Working with patterns directly
//!
//! ```
//! use quine_logic::{prime_implicants, select_cover, ImplicantTable, Pattern};
//! use std::collections::BTreeSet;
//!
//! let on_set: BTreeSet<u64> = (0..8).collect();
//! let patterns = on_set.iter().map(|&m| Pattern::from_minterm(m, 3)).collect();
//! let primes = prime_implicants(&patterns);
//!
//! let table = ImplicantTable::build(&primes, &on_set).unwrap();
//! let cover = select_cover(table);
//! let implicants: Vec<String> = cover.implicants().map(|p| p.to_string()).collect();
//! assert_eq!(implicants, vec!["---"]);
//! ```
//!
//! ## Determinism
//!
//! Patterns are ordered like their text (`-` < `0` < `1`) and table entries by
//! minterm, so every run on the same input gives the same output. When the
//! greedy step finds several implicants with equal coverage it takes the one
//! counted first.
//!
//! ## Configuration
//!
//! [`MinimizerConfig`] selects parallel minimization across outputs and
//! post-selection coverage checks. Parallel runs produce identical results.
//!
//! ## Logging
//!
//! The crate logs through the [`log`] facade: per-level and per-output
//! statistics at `debug`, individual selections at `trace`.

pub mod config;
pub mod cover;
pub mod display;
pub mod error;
pub mod minimize;
pub mod pattern;
pub mod pla;
pub mod primes;

pub use config::MinimizerConfig;
pub use cover::{select_cover, ImplicantTable, Pick, SelectedCover};
pub use display::{Equation, Product, SumOfProducts};
pub use error::{MinimizeError, PLAError, PLAReadError, PLAWriteError, PatternError};
pub use minimize::{minimize_output, Minimizable, MinimizedPLA, OutputCover, OutputSets};
pub use pattern::{Minterm, Pattern, MAX_WIDTH};
pub use pla::{OutputValue, PLAReader, PLAWriter, Term, PLA};
pub use primes::{combination_pass, prime_implicants};
