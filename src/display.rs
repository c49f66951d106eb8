//! Sum-of-products rendering
//!
//! Implicants print as products of literals and covers as sums of products,
//! using `*` for AND, `+` for OR and `~` for NOT. Unlabelled inputs are named
//! `x0, x1, ...` and unlabelled outputs `y0, y1, ...`.

use std::fmt;
use std::sync::Arc;

use crate::minimize::{MinimizedPLA, OutputCover};
use crate::pattern::Pattern;

fn write_label(
    f: &mut fmt::Formatter<'_>,
    labels: Option<&[Arc<str>]>,
    prefix: char,
    index: usize,
) -> fmt::Result {
    match labels.and_then(|labels| labels.get(index)) {
        Some(label) => write!(f, "{}", label),
        None => write!(f, "{}{}", prefix, index),
    }
}

/// A [`Pattern`] displayed as a product of input literals
#[derive(Debug, Clone, Copy)]
pub struct Product<'a> {
    pattern: &'a Pattern,
    labels: Option<&'a [Arc<str>]>,
}

impl fmt::Display for Product<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (index, symbol) in self.pattern.symbols().enumerate() {
            let Some(bit) = symbol else { continue };
            if !first {
                write!(f, " * ")?;
            }
            first = false;
            if !bit {
                write!(f, "~")?;
            }
            write_label(f, self.labels, 'x', index)?;
        }
        // No literals left: the product is constant true
        if first {
            write!(f, "1")?;
        }
        Ok(())
    }
}

/// An [`OutputCover`] displayed as a sum of products
#[derive(Debug, Clone, Copy)]
pub struct SumOfProducts<'a> {
    cover: &'a OutputCover,
    labels: Option<&'a [Arc<str>]>,
}

impl fmt::Display for SumOfProducts<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.cover.cover().is_empty() {
            return write!(f, "0");
        }
        for (i, implicant) in self.cover.implicants().enumerate() {
            if i > 0 {
                write!(f, " + ")?;
            }
            write!(f, "{}", implicant.product(self.labels))?;
        }
        Ok(())
    }
}

/// One output of a [`MinimizedPLA`] displayed as `name = sum of products`
#[derive(Debug, Clone, Copy)]
pub struct Equation<'a> {
    minimized: &'a MinimizedPLA,
    cover: &'a OutputCover,
}

impl fmt::Display for Equation<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_label(f, self.minimized.output_labels(), 'y', self.cover.index())?;
        write!(
            f,
            " = {}",
            self.cover.sum_of_products(self.minimized.input_labels())
        )
    }
}

impl Pattern {
    /// Display this pattern as a product of literals over `labels`
    ///
    /// ```
    /// use quine_logic::Pattern;
    /// use std::sync::Arc;
    ///
    /// let labels: Vec<Arc<str>> = vec!["a".into(), "b".into(), "c".into()];
    /// let pattern: Pattern = "1-0".parse().unwrap();
    /// assert_eq!(pattern.product(Some(&labels[..])).to_string(), "a * ~c");
    /// assert_eq!(pattern.product(None).to_string(), "x0 * ~x2");
    /// ```
    pub fn product<'a>(&'a self, labels: Option<&'a [Arc<str>]>) -> Product<'a> {
        Product {
            pattern: self,
            labels,
        }
    }
}

impl OutputCover {
    /// Display the selected implicants as a sum of products over `labels`
    pub fn sum_of_products<'a>(&'a self, labels: Option<&'a [Arc<str>]>) -> SumOfProducts<'a> {
        SumOfProducts {
            cover: self,
            labels,
        }
    }
}

impl MinimizedPLA {
    /// One equation per output, in output order
    pub fn equations(&self) -> impl Iterator<Item = Equation<'_>> {
        self.outputs().iter().map(move |cover| Equation {
            minimized: self,
            cover,
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::{Minimizable, PLAReader, Pattern, PLA};
    use std::sync::Arc;

    #[test]
    fn test_product_literals() {
        let pattern: Pattern = "01-1".parse().unwrap();
        assert_eq!(pattern.product(None).to_string(), "~x0 * x1 * x3");
        assert_eq!(Pattern::universe(3).product(None).to_string(), "1");
    }

    #[test]
    fn test_product_with_labels() {
        let labels: Vec<Arc<str>> = vec!["sel".into(), "en".into()];
        let pattern: Pattern = "10".parse().unwrap();
        assert_eq!(pattern.product(Some(&labels[..])).to_string(), "sel * ~en");
    }

    #[test]
    fn test_equations() {
        let pla = PLA::from_pla_string(
            ".i 2\n.o 3\n.ilb a b\n.ob f g h\n00 110\n01 100\n10 010\n11 010\n.e\n",
        )
        .unwrap();
        let minimized = pla.minimize().unwrap();
        let equations: Vec<String> = minimized.equations().map(|e| e.to_string()).collect();
        assert_eq!(equations, vec!["f = ~a", "g = ~b + a", "h = 0"]);
    }

    #[test]
    fn test_equations_default_labels() {
        let pla = PLA::from_pla_string(".i 2\n.o 1\n-- 1\n.e\n").unwrap();
        let minimized = pla.minimize().unwrap();
        let equations: Vec<String> = minimized.equations().map(|e| e.to_string()).collect();
        assert_eq!(equations, vec!["y0 = 1"]);
    }
}
