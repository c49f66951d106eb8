//! Ternary input patterns
//!
//! A [`Pattern`] is a fixed-width product term over the input variables.
//! Every position holds `0`, `1` or `-` (don't care). A pattern is stored as
//! two bitmasks, `care` (set where the position is a literal) and `value`
//! (the literal bits, always clear under a dash), so combining two patterns
//! or testing whether a minterm is covered takes a few bit operations.
//!
//! Position 0 is the leftmost symbol and maps to the most significant bit of
//! a minterm, so `Pattern::from_minterm(5, 3)` prints as `101`.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::error::PatternError;

/// A fully specified input assignment, read as a `width`-bit binary number
pub type Minterm = u64;

/// Largest supported pattern width
pub const MAX_WIDTH: usize = 63;

/// A product term over `width` inputs
///
/// Equality is symbol-by-symbol equality. Ordering is the lexicographic order
/// of the textual form (`-` < `0` < `1`), so ordered collections of patterns
/// iterate in a reproducible order.
///
/// # Examples
///
/// ```
/// use quine_logic::Pattern;
///
/// let a: Pattern = "01".parse().unwrap();
/// let b: Pattern = "00".parse().unwrap();
/// let merged = a.combine(&b).unwrap();
/// assert_eq!(merged.to_string(), "0-");
/// assert_eq!(merged.expand(), vec![0, 1]);
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Pattern {
    width: u8,
    care: u64,
    value: u64,
}

fn assert_width(width: usize) {
    assert!(
        width <= MAX_WIDTH,
        "pattern width {} exceeds the maximum of {}",
        width,
        MAX_WIDTH
    );
}

fn width_mask(width: usize) -> u64 {
    (1u64 << width) - 1
}

impl Pattern {
    /// The pattern that denotes exactly one minterm
    ///
    /// Bits of `minterm` above `width` are ignored.
    ///
    /// # Panics
    ///
    /// Panics if `width` exceeds [`MAX_WIDTH`].
    pub fn from_minterm(minterm: Minterm, width: usize) -> Self {
        assert_width(width);
        let care = width_mask(width);
        Pattern {
            width: width as u8,
            care,
            value: minterm & care,
        }
    }

    /// The all-dash pattern of the given width
    ///
    /// # Panics
    ///
    /// Panics if `width` exceeds [`MAX_WIDTH`].
    pub fn universe(width: usize) -> Self {
        assert_width(width);
        Pattern {
            width: width as u8,
            care: 0,
            value: 0,
        }
    }

    /// Build a pattern from per-position values
    ///
    /// `Some(false)` is `0`, `Some(true)` is `1`, and `None` is `-`.
    pub fn from_symbols(symbols: &[Option<bool>]) -> Result<Self, PatternError> {
        if symbols.len() > MAX_WIDTH {
            return Err(PatternError::TooWide {
                width: symbols.len(),
                max: MAX_WIDTH,
            });
        }
        let mut care = 0;
        let mut value = 0;
        for symbol in symbols {
            care <<= 1;
            value <<= 1;
            if let Some(bit) = symbol {
                care |= 1;
                value |= *bit as u64;
            }
        }
        Ok(Pattern {
            width: symbols.len() as u8,
            care,
            value,
        })
    }

    /// Number of positions
    pub fn width(&self) -> usize {
        self.width as usize
    }

    /// Number of `-` positions
    pub fn dash_count(&self) -> usize {
        self.dash_mask().count_ones() as usize
    }

    /// Number of literal (`0` or `1`) positions
    pub fn literal_count(&self) -> usize {
        self.care.count_ones() as usize
    }

    /// Bit mask of the literal positions
    pub(crate) fn care_mask(&self) -> u64 {
        self.care
    }

    fn dash_mask(&self) -> u64 {
        !self.care & width_mask(self.width())
    }

    /// Per-position values, leftmost first
    pub fn symbols(&self) -> impl Iterator<Item = Option<bool>> + '_ {
        (0..self.width()).rev().map(move |bit| {
            let probe = 1u64 << bit;
            if self.care & probe == 0 {
                None
            } else {
                Some(self.value & probe != 0)
            }
        })
    }

    /// Whether `minterm` (at this pattern's width) is one of the covered minterms
    pub fn covers(&self, minterm: Minterm) -> bool {
        minterm >> self.width == 0 && minterm & self.care == self.value
    }

    /// Every minterm this pattern covers, in ascending order
    ///
    /// A pattern with `k` dashes yields exactly `2^k` distinct minterms.
    pub fn expand(&self) -> Vec<Minterm> {
        let dashes = self.dash_mask();
        let mut minterms = Vec::with_capacity(1usize << dashes.count_ones());
        // Walk the submasks of `dashes` in increasing order
        let mut sub: u64 = 0;
        loop {
            minterms.push(self.value | sub);
            if sub == dashes {
                break;
            }
            sub = sub.wrapping_sub(dashes) & dashes;
        }
        minterms
    }

    /// Merge two patterns that differ in exactly one literal position
    ///
    /// Returns `None` when the widths differ, when the dashes sit in
    /// different positions, or when the number of differing literals is not
    /// exactly one. The differing position becomes `-` in the result.
    pub fn combine(&self, other: &Pattern) -> Option<Pattern> {
        if self.width != other.width || self.care != other.care {
            return None;
        }
        let diff = self.value ^ other.value;
        if diff.count_ones() != 1 {
            return None;
        }
        Some(Pattern {
            width: self.width,
            care: self.care & !diff,
            value: self.value & !diff,
        })
    }
}

impl Ord for Pattern {
    fn cmp(&self, other: &Self) -> Ordering {
        self.symbols().cmp(other.symbols())
    }
}

impl PartialOrd for Pattern {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl FromStr for Pattern {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let symbols = s
            .chars()
            .enumerate()
            .map(|(position, symbol)| match symbol {
                '0' => Ok(Some(false)),
                '1' => Ok(Some(true)),
                '-' => Ok(None),
                _ => Err(PatternError::InvalidSymbol { symbol, position }),
            })
            .collect::<Result<Vec<_>, _>>()?;
        Pattern::from_symbols(&symbols)
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for symbol in self.symbols() {
            let c = match symbol {
                Some(false) => '0',
                Some(true) => '1',
                None => '-',
            };
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Pattern(\"{}\")", self)
    }
}
