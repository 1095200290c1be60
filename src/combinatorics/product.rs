//! Cartesian product by odometer.
//!
//! Every position of the expansion is a digit holding a [`Tee`] cursor over its
//! source plus the value currently shown. Each pull advances the last digit;
//! a digit that runs out is rewound to its source's first element and carries
//! into the digit before it. A carry past the first digit ends the product.
//!
//! Repeated positions of one source share a single [`Cloner`], so each source
//! is pulled at most once per element no matter how often it repeats.

use log::debug;

use crate::{
    InitSequence, IntoSequence, Pull, Result, Sequence,
    build::{Staged, staged},
    source::to_sequences,
    tee::{Cloner, Tee},
};

struct Digit<S>
where
    S: Sequence,
{
    cloner: Cloner<S>,
    cursor: Tee<S>,
    value: S::Item,
}

/// Steady state of a [`Product`] after its first tuple.
pub struct Odometer<S>
where
    S: Sequence,
{
    digits: Vec<Digit<S>>,
    exhausted: bool,
}

impl<S> Odometer<S>
where
    S: Sequence,
    S::Item: Clone,
{
    fn reading(&self) -> Vec<S::Item> {
        self.digits.iter().map(|d| d.value.clone()).collect()
    }

    /// Advance by one, carrying leftwards. Returns false once every digit has
    /// wrapped around.
    fn advance(&mut self) -> bool {
        for digit in self.digits.iter_mut().rev() {
            if let Pull::Item(x) = digit.cursor.pull() {
                digit.value = x;
                return true;
            }
            digit.cursor = digit.cloner.clone_iter();
            match digit.cursor.pull() {
                Pull::Item(x) => digit.value = x,
                Pull::Exhausted => return false,
            }
        }
        false
    }
}

impl<S> Sequence for Odometer<S>
where
    S: Sequence,
    S::Item: Clone,
{
    type Item = Vec<S::Item>;

    fn pull(&mut self) -> Pull<Vec<S::Item>> {
        if self.exhausted {
            return Pull::Exhausted;
        }
        if self.advance() {
            Pull::Item(self.reading())
        } else {
            debug!("product of {} positions carried past the first", self.digits.len());
            self.exhausted = true;
            self.digits.clear();
            Pull::Exhausted
        }
    }
}

/// Positions of a [`Product`], wired up but not yet pulled.
pub struct ProductInit<S>
where
    S: Sequence,
{
    cloners: Vec<Cloner<S>>,
    repetition: usize,
}

impl<S> InitSequence for ProductInit<S>
where
    S: Sequence,
    S::Item: Clone,
{
    type Item = Vec<S::Item>;
    type Next = Odometer<S>;

    fn init(self) -> Pull<(Vec<S::Item>, Odometer<S>)> {
        let positions = self.repetition * self.cloners.len();
        debug!("product initializing {positions} positions");
        let mut digits = Vec::with_capacity(positions);
        for _ in 0..self.repetition {
            for cloner in &self.cloners {
                let mut cursor = cloner.clone_iter();
                let Pull::Item(value) = cursor.pull() else {
                    debug!("product has an empty source");
                    return Pull::Exhausted;
                };
                digits.push(Digit {
                    cloner: cloner.clone(),
                    cursor,
                    value,
                });
            }
        }
        let odometer = Odometer {
            digits,
            exhausted: false,
        };
        Pull::Item((odometer.reading(), odometer))
    }
}

/// Cartesian product. Created via [`product`].
pub type Product<S> = Staged<ProductInit<S>>;

/// Cartesian product of `sources` repeated `repetition` times.
///
/// Tuples come out in lexicographic order of positions: the last position
/// varies fastest, and within the repeated block an earlier copy of a source
/// varies slower than a later one. An empty source makes the product empty.
/// With no positions at all (`repetition == 0` or no sources) the product is a
/// single empty tuple.
///
/// ```rust
/// use seqtool::prelude::*;
///
/// let tuples = product(1, vec!["AB", "12"]).unwrap().to_list();
/// let expected = vec![
///     vec!['A', '1'],
///     vec!['A', '2'],
///     vec!['B', '1'],
///     vec!['B', '2'],
/// ];
/// assert_eq!(tuples, expected);
/// ```
pub fn product<S>(repetition: usize, sources: Vec<S>) -> Result<Product<S::IntoSeq>>
where
    S: IntoSequence,
    S::Item: Clone,
{
    Ok(product_of(repetition, to_sequences(sources)?))
}

pub(crate) fn product_of<S>(repetition: usize, sources: Vec<S>) -> Product<S>
where
    S: Sequence,
    S::Item: Clone,
{
    staged(ProductInit {
        cloners: sources.into_iter().map(Cloner::new).collect(),
        repetition,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{empty, from_fn, irange};
    use std::{cell::Cell, rc::Rc};

    fn strings(tuples: Vec<Vec<char>>) -> Vec<String> {
        tuples.into_iter().map(|t| t.into_iter().collect()).collect()
    }

    #[test]
    fn test_product_repeated_block_order() {
        let tuples = strings(product(2, vec!["12", "de"]).unwrap().to_list());
        assert_eq!(
            tuples,
            vec![
                "1d1d", "1d1e", "1d2d", "1d2e", "1e1d", "1e1e", "1e2d", "1e2e", "2d1d", "2d1e",
                "2d2d", "2d2e", "2e1d", "2e1e", "2e2d", "2e2e",
            ]
        );
    }

    #[test]
    fn test_product_single_element_repeated() {
        let tuples = strings(product(4, vec!["A"]).unwrap().to_list());
        assert_eq!(tuples, vec!["AAAA"]);
    }

    #[test]
    fn test_product_of_no_positions() {
        let mut none = product(4, Vec::<Vec<u8>>::new()).unwrap();
        assert_eq!(none.pull().unwrap_item(), Vec::<u8>::new());
        assert!(none.pull().is_exhausted());

        let mut zero = product(0, vec![vec![1, 2]]).unwrap();
        assert_eq!(zero.pull().unwrap_item(), Vec::<i32>::new());
        assert!(zero.pull().is_exhausted());
    }

    #[test]
    fn test_product_with_empty_source() {
        let sources = vec![irange(3).boxed(), empty().boxed()];
        let mut seq = product(1, sources).unwrap();
        assert!(seq.pull().is_exhausted());
        assert!(seq.pull().is_exhausted());
    }

    #[test]
    fn test_product_pulls_each_source_element_once() {
        let pulls = Rc::new(Cell::new(0));
        let counted = Rc::clone(&pulls);
        let mut n = 0;
        let source = from_fn(move || {
            counted.set(counted.get() + 1);
            n += 1;
            if n <= 3 { Pull::Item(n) } else { Pull::Exhausted }
        });
        let count = product(3, vec![source]).unwrap().to_list().len();
        assert_eq!(count, 27);
        assert_eq!(pulls.get(), 4);
    }

    #[test]
    fn test_product_is_lazy() {
        let pulled = Rc::new(Cell::new(false));
        let flag = Rc::clone(&pulled);
        let source = from_fn(move || {
            flag.set(true);
            Pull::Item(1)
        });
        let seq = product(2, vec![source]).unwrap();
        assert!(!pulled.get());
        drop(seq);
    }
}
