//! Error types for the Quine-McCluskey minimizer
//!
//! Each failure mode is a distinct variant so callers can react to it
//! programmatically. PLA format errors live in [`crate::pla`] and are
//! re-exported here.

use std::fmt;
use std::io;

use crate::pattern::Minterm;

pub use crate::pla::error::{PLAError, PLAReadError, PLAWriteError};

/// Errors produced when building a [`Pattern`](crate::Pattern) from text or symbols
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternError {
    /// A symbol other than `0`, `1` or `-`
    InvalidSymbol {
        /// The offending character
        symbol: char,
        /// Position of the character in the pattern
        position: usize,
    },
    /// The pattern has more positions than a minterm can address
    TooWide {
        /// Width of the rejected pattern
        width: usize,
        /// Largest supported width
        max: usize,
    },
}

impl fmt::Display for PatternError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PatternError::InvalidSymbol { symbol, position } => write!(
                f,
                "Invalid pattern symbol '{}' at position {} (expected '0', '1' or '-')",
                symbol, position
            ),
            PatternError::TooWide { width, max } => write!(
                f,
                "Pattern width {} exceeds the supported maximum of {}",
                width, max
            ),
        }
    }
}

impl std::error::Error for PatternError {}

/// Errors raised while minimizing a function
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MinimizeError {
    /// An on-set minterm is covered by no prime implicant
    ///
    /// The prime implicants are generated from the same minterms, so this
    /// indicates a defect in generation rather than bad input.
    UncoverableMinterm {
        /// Output being minimized
        output: usize,
        /// The minterm with an empty implicant list
        minterm: Minterm,
    },
    /// The selected implicants leave an on-set minterm uncovered
    IncompleteCover {
        /// Output being minimized
        output: usize,
        /// First minterm found uncovered
        minterm: Minterm,
    },
    /// Attempted to minimize an output that does not exist
    OutputIndexOutOfBounds {
        /// The index that was requested
        index: usize,
        /// Number of outputs of the function
        num_outputs: usize,
    },
}

impl fmt::Display for MinimizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MinimizeError::UncoverableMinterm { output, minterm } => write!(
                f,
                "Minterm {} of output {} is not covered by any prime implicant",
                minterm, output
            ),
            MinimizeError::IncompleteCover { output, minterm } => write!(
                f,
                "Selected implicants for output {} leave minterm {} uncovered",
                output, minterm
            ),
            MinimizeError::OutputIndexOutOfBounds { index, num_outputs } => write!(
                f,
                "Output index {} out of bounds (function has {} outputs)",
                index, num_outputs
            ),
        }
    }
}

impl std::error::Error for MinimizeError {}

impl From<MinimizeError> for io::Error {
    fn from(err: MinimizeError) -> Self {
        io::Error::other(err)
    }
}
