//! Permutations and combinations over a materialized pool.
//!
//! All three arrangements are generate-and-test: the candidates are index
//! tuples from a [`product`](crate::product) (or, for combinations, from
//! permutations of the indices), and only tuples of the right shape survive.
//! Producing the n!/(n-r)! permutations of a pool costs n^r candidates, so
//! these are meant for small pools and small `r`.

use std::fmt;

use log::debug;

use super::product::product_of;
use crate::{
    BoxedSequence, InitSequence, IntoSequence, Pull, Result, Sequence,
    build::{Staged, staged},
    iter::from_iter,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Arrangement {
    Permutations,
    Combinations,
    WithReplacement,
}

impl fmt::Display for Arrangement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arrangement::Permutations => write!(f, "permutations"),
            Arrangement::Combinations => write!(f, "combinations"),
            Arrangement::WithReplacement => write!(f, "combinations with replacement"),
        }
    }
}

fn all_distinct(t: &[usize]) -> bool {
    t.iter().enumerate().all(|(i, x)| !t[..i].contains(x))
}

fn ascending(t: &[usize]) -> bool {
    t.windows(2).all(|w| w[0] < w[1])
}

fn non_decreasing(t: &[usize]) -> bool {
    t.windows(2).all(|w| w[0] <= w[1])
}

type IndexTuples = BoxedSequence<'static, Vec<usize>>;

/// Candidate index tuples for `r` picks out of `n`, or `None` if there are none.
fn index_tuples(arrangement: Arrangement, n: usize, r: usize) -> Option<IndexTuples> {
    let indices = || vec![from_iter(0..n)];
    match arrangement {
        Arrangement::Permutations if r <= n => Some(
            product_of(r, indices())
                .filter(|t: &Vec<usize>| all_distinct(t))
                .boxed(),
        ),
        Arrangement::Combinations if r <= n => Some(
            arranged(from_iter(0..n), Some(r), Arrangement::Permutations)
                .filter(|t: &Vec<usize>| ascending(t))
                .boxed(),
        ),
        Arrangement::WithReplacement => Some(
            product_of(r, indices())
                .filter(|t: &Vec<usize>| non_decreasing(t))
                .boxed(),
        ),
        _ => None,
    }
}

/// Maps index tuples onto the pool.
pub struct Picks<T> {
    pool: Vec<T>,
    indices: IndexTuples,
}

impl<T> Sequence for Picks<T>
where
    T: Clone,
{
    type Item = Vec<T>;

    fn pull(&mut self) -> Pull<Vec<T>> {
        let pool = &self.pool;
        self.indices
            .pull()
            .map(|t| t.iter().map(|&i| pool[i].clone()).collect())
    }
}

/// Source of an arrangement, not yet materialized.
pub struct PoolInit<S> {
    source: S,
    r: Option<usize>,
    arrangement: Arrangement,
}

impl<S> InitSequence for PoolInit<S>
where
    S: Sequence,
    S::Item: Clone,
{
    type Item = Vec<S::Item>;
    type Next = Picks<S::Item>;

    fn init(self) -> Pull<(Vec<S::Item>, Picks<S::Item>)> {
        let pool = self.source.to_list();
        let n = pool.len();
        let r = self.r.unwrap_or(n);
        debug!("{} of {r} from a pool of {n}", self.arrangement);
        let Some(indices) = index_tuples(self.arrangement, n, r) else {
            return Pull::Exhausted;
        };
        let mut picks = Picks { pool, indices };
        picks.pull().map(|first| (first, picks))
    }
}

fn arranged<S>(source: S, r: Option<usize>, arrangement: Arrangement) -> Staged<PoolInit<S>>
where
    S: Sequence,
    S::Item: Clone,
{
    staged(PoolInit {
        source,
        r,
        arrangement,
    })
}

/// Ordered arrangements. Created via [`permutations`].
pub type Permutations<S> = Staged<PoolInit<S>>;

/// Unordered selections. Created via [`combinations`] or
/// [`combinations_with_replacement`].
pub type Combinations<S> = Staged<PoolInit<S>>;

/// All orderings of `r` distinct positions of `source`.
///
/// `source` is drained into a pool on the first pull, so it must be finite.
/// `r` defaults to the pool size; a larger `r` yields nothing.
///
/// ```rust
/// use seqtool::prelude::*;
///
/// let pairs: Vec<String> = permutations("ABC", Some(2))
///     .unwrap()
///     .map(|t| t.into_iter().collect())
///     .to_list();
/// assert_eq!(pairs, vec!["AB", "AC", "BA", "BC", "CA", "CB"]);
/// ```
pub fn permutations<S>(source: S, r: Option<usize>) -> Result<Permutations<S::IntoSeq>>
where
    S: IntoSequence,
    S::Item: Clone,
{
    Ok(arranged(source.into_sequence()?, r, Arrangement::Permutations))
}

/// All `r`-element selections of distinct positions of `source`, in pool order.
///
/// ```rust
/// use seqtool::prelude::*;
///
/// assert_eq!(combinations("ABC", Some(2)).unwrap().to_list().len(), 3);
/// assert!(combinations("ABCD", Some(5)).unwrap().pull().is_exhausted());
/// ```
pub fn combinations<S>(source: S, r: Option<usize>) -> Result<Combinations<S::IntoSeq>>
where
    S: IntoSequence,
    S::Item: Clone,
{
    Ok(arranged(source.into_sequence()?, r, Arrangement::Combinations))
}

/// All `r`-element selections of `source` where a position may repeat.
///
/// Unlike [`combinations`], `r` may exceed the pool size.
pub fn combinations_with_replacement<S>(
    source: S,
    r: Option<usize>,
) -> Result<Combinations<S::IntoSeq>>
where
    S: IntoSequence,
    S::Item: Clone,
{
    Ok(arranged(
        source.into_sequence()?,
        r,
        Arrangement::WithReplacement,
    ))
}
