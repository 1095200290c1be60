//! Applying callbacks to elements.
//!
//! [`map`] zips its sources and hands every row to the callback as a `Vec`.
//! [`star_map`] spreads each tuple element of a single source into positional
//! closure arguments.

use super::zip::{Zip, zip};
use crate::{IntoSequence, Pull, Result, Sequence};

/// Transforms each element of the wrapped sequence.
///
/// Created via [`map`] or [`Sequence::map`].
pub struct Map<S, F> {
    seq: S,
    f: F,
}

impl<S, F> Map<S, F> {
    pub(crate) fn new(seq: S, f: F) -> Self {
        Self { seq, f }
    }
}

impl<U, S, F> Sequence for Map<S, F>
where
    S: Sequence,
    F: FnMut(S::Item) -> U,
{
    type Item = U;

    fn pull(&mut self) -> Pull<U> {
        self.seq.pull().map(&mut self.f)
    }
}

/// Apply `callback` to one element from each source per step.
///
/// Ends as soon as any source ends.
///
/// ```rust
/// use seqtool::prelude::*;
///
/// let sources = vec![vec![1, 2, 3, 4], vec![2, 3, 2, 5]];
/// let powers = map(|row: Vec<u32>| row[0].pow(row[1]), sources);
/// assert_eq!(powers.unwrap().to_list(), vec![1, 8, 9, 1024]);
/// ```
pub fn map<U, S, F>(callback: F, sources: Vec<S>) -> Result<Map<Zip<S::IntoSeq>, F>>
where
    S: IntoSequence,
    F: FnMut(Vec<S::Item>) -> U,
{
    Ok(Map::new(zip(sources)?, callback))
}

/// A callable that takes the fields of a tuple as separate arguments.
///
/// Implemented for closures of one to six arguments.
pub trait SpreadFn<Args> {
    type Output;

    fn call_spread(&mut self, args: Args) -> Self::Output;
}

macro_rules! impl_spread_fn {
    ($($arg:ident),+) => {
        impl<Func, Out, $($arg),+> SpreadFn<($($arg,)+)> for Func
        where
            Func: FnMut($($arg),+) -> Out,
        {
            type Output = Out;

            #[allow(non_snake_case)]
            fn call_spread(&mut self, ($($arg,)+): ($($arg,)+)) -> Out {
                self($($arg),+)
            }
        }
    };
}

impl_spread_fn!(A);
impl_spread_fn!(A, B);
impl_spread_fn!(A, B, C);
impl_spread_fn!(A, B, C, D);
impl_spread_fn!(A, B, C, D, E);
impl_spread_fn!(A, B, C, D, E, F);

/// Calls a closure with each tuple spread into arguments.
///
/// Created via [`star_map`].
pub struct StarMap<S, F> {
    seq: S,
    f: F,
}

/// Apply `callback` to the fields of each tuple element of `source`.
///
/// ```rust
/// use seqtool::prelude::*;
///
/// let args = vec![(1_u32, 2_u32), (3, 4), (2, 3)];
/// let powers = star_map(|base: u32, exp: u32| base.pow(exp), args);
/// assert_eq!(powers.unwrap().to_list(), vec![1, 81, 8]);
/// ```
pub fn star_map<S, F>(callback: F, source: S) -> Result<StarMap<S::IntoSeq, F>>
where
    S: IntoSequence,
    F: SpreadFn<S::Item>,
{
    Ok(StarMap {
        seq: source.into_sequence()?,
        f: callback,
    })
}

impl<S, F> Sequence for StarMap<S, F>
where
    S: Sequence,
    F: SpreadFn<S::Item>,
{
    type Item = F::Output;

    fn pull(&mut self) -> Pull<F::Output> {
        match self.seq.pull() {
            Pull::Item(args) => Pull::Item(self.f.call_spread(args)),
            Pull::Exhausted => Pull::Exhausted,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{counter, to_sequence};

    #[test]
    fn test_map_single_source() {
        let squares = map(|row: Vec<i32>| row[0] * row[0], vec![vec![1, 2, 4, 7, 3, 9]]);
        let squares = squares.unwrap();
        assert_eq!(squares.to_list(), vec![1, 4, 16, 49, 9, 81]);
    }

    #[test]
    fn test_map_ends_with_shortest() {
        let sums = map(
            |row: Vec<i64>| row.iter().sum::<i64>(),
            vec![counter(0_i64, 1).boxed(), to_sequence(vec![10, 20]).unwrap().boxed()],
        )
        .unwrap();
        assert_eq!(sums.to_list(), vec![10, 21]);
    }

    #[test]
    fn test_map_method_is_lazy() {
        let mut calls = 0;
        let mut seq = counter(1_u8, 1).map(|x| {
            calls += 1;
            x * 2
        });
        assert_eq!(seq.pull().unwrap_item(), 2);
        assert_eq!(seq.pull().unwrap_item(), 4);
        drop(seq);
        assert_eq!(calls, 2);
    }

    #[test]
    fn test_star_map_single_argument() {
        let args = vec![(1_i32,), (2,), (4,), (7,), (3,), (9,)];
        let squares = star_map(|x: i32| x * x, args).unwrap();
        assert_eq!(squares.to_list(), vec![1, 4, 16, 49, 9, 81]);
    }

    #[test]
    fn test_star_map_pow() {
        let powers = star_map(
            |base: i64, exp: u32| base.pow(exp),
            vec![(1_i64, 2_u32), (3, 4), (2, 3), (2, 5)],
        )
        .unwrap();
        assert_eq!(powers.to_list(), vec![1, 81, 8, 32]);
    }

    #[test]
    fn test_star_map_wide_tuple() {
        let joined = star_map(
            |a: char, b: char, c: char, d: char, e: char, f: char| {
                [a, b, c, d, e, f].iter().collect::<String>()
            },
            vec![('s', 'e', 'q', 't', 'o', 'o')],
        )
        .unwrap();
        assert_eq!(joined.to_list(), vec!["seqtoo".to_string()]);
    }
}
