//! Selecting elements by predicate, by mask, or by position in a leading run.

use log::trace;

use crate::{
    InitSequence, IntoSequence, Pull, Result, Sequence, Truthy,
    build::{Staged, staged},
};

/// Keeps elements whose predicate result equals `keep`.
///
/// Created via [`filter`], [`filter_false`], [`filter_truthy`] or [`filter_falsy`].
pub struct Filter<S, P> {
    seq: S,
    predicate: P,
    keep: bool,
}

impl<S, P> Filter<S, P>
where
    S: Sequence,
    P: FnMut(&S::Item) -> bool,
{
    pub(crate) fn new(seq: S, predicate: P, keep: bool) -> Self {
        Self {
            seq,
            predicate,
            keep,
        }
    }
}

impl<S, P> Sequence for Filter<S, P>
where
    S: Sequence,
    P: FnMut(&S::Item) -> bool,
{
    type Item = S::Item;

    fn pull(&mut self) -> Pull<S::Item> {
        loop {
            match self.seq.pull() {
                Pull::Item(x) if (self.predicate)(&x) == self.keep => return Pull::Item(x),
                Pull::Item(_) => continue,
                Pull::Exhausted => return Pull::Exhausted,
            }
        }
    }
}

/// Yield the elements of `source` for which `predicate` holds.
///
/// ```rust
/// use seqtool::prelude::*;
///
/// let evens = filter(|x: &i32| x % 2 == 0, vec![1, 2, 4, 6, 1, 2]).unwrap();
/// assert_eq!(evens.to_list(), vec![2, 4, 6, 2]);
/// ```
pub fn filter<S, P>(predicate: P, source: S) -> Result<Filter<S::IntoSeq, P>>
where
    S: IntoSequence,
    P: FnMut(&S::Item) -> bool,
{
    Ok(Filter::new(source.into_sequence()?, predicate, true))
}

/// Yield the elements of `source` for which `predicate` fails.
pub fn filter_false<S, P>(predicate: P, source: S) -> Result<Filter<S::IntoSeq, P>>
where
    S: IntoSequence,
    P: FnMut(&S::Item) -> bool,
{
    Ok(Filter::new(source.into_sequence()?, predicate, false))
}

/// Predicate used by the predicate-less filters.
pub type TruthyFn<T> = fn(&T) -> bool;

/// Yield the truthy elements of `source`.
pub fn filter_truthy<S>(source: S) -> Result<Filter<S::IntoSeq, TruthyFn<S::Item>>>
where
    S: IntoSequence,
    S::Item: Truthy,
{
    Ok(Filter::new(
        source.into_sequence()?,
        <S::Item as Truthy>::is_truthy as TruthyFn<S::Item>,
        true,
    ))
}

/// Yield the falsy elements of `source`.
pub fn filter_falsy<S>(source: S) -> Result<Filter<S::IntoSeq, TruthyFn<S::Item>>>
where
    S: IntoSequence,
    S::Item: Truthy,
{
    Ok(Filter::new(
        source.into_sequence()?,
        <S::Item as Truthy>::is_truthy as TruthyFn<S::Item>,
        false,
    ))
}

/// Selection of data elements by a parallel mask. Created via [`compress`].
pub struct Compress<D, M> {
    data: D,
    selectors: M,
}

/// Yield the elements of `data` whose parallel `selectors` element is truthy.
///
/// Both sequences advance in lockstep; the result ends as soon as either does.
///
/// ```rust
/// use seqtool::prelude::*;
///
/// let picked = compress("ABCDEFG", [1, 0, 0, 1, 1, 0, 1]).unwrap();
/// assert_eq!(picked.to_list(), vec!['A', 'D', 'E', 'G']);
/// ```
pub fn compress<D, M>(data: D, selectors: M) -> Result<Compress<D::IntoSeq, M::IntoSeq>>
where
    D: IntoSequence,
    M: IntoSequence,
    M::Item: Truthy,
{
    Ok(Compress {
        data: data.into_sequence()?,
        selectors: selectors.into_sequence()?,
    })
}

impl<D, M> Sequence for Compress<D, M>
where
    D: Sequence,
    M: Sequence,
    M::Item: Truthy,
{
    type Item = D::Item;

    fn pull(&mut self) -> Pull<D::Item> {
        loop {
            let Pull::Item(selector) = self.selectors.pull() else {
                return Pull::Exhausted;
            };
            let Pull::Item(x) = self.data.pull() else {
                return Pull::Exhausted;
            };
            if selector.is_truthy() {
                return Pull::Item(x);
            }
        }
    }
}

/// Scans past the leading run on initialization.
pub struct DropLeading<S, P> {
    seq: S,
    predicate: P,
}

impl<S, P> InitSequence for DropLeading<S, P>
where
    S: Sequence,
    P: FnMut(&S::Item) -> bool,
{
    type Item = S::Item;
    type Next = S;

    fn init(mut self) -> Pull<(S::Item, S)> {
        let mut dropped = 0_usize;
        loop {
            match self.seq.pull() {
                Pull::Item(x) if (self.predicate)(&x) => dropped += 1,
                Pull::Item(x) => {
                    trace!("drop_while skipped {dropped} elements");
                    return Pull::Item((x, self.seq));
                }
                Pull::Exhausted => return Pull::Exhausted,
            }
        }
    }
}

/// Skips a leading run, then passes everything through.
///
/// Created via [`drop_while`]. The predicate is never called again after the
/// first element that fails it.
pub type DropWhile<S, P> = Staged<DropLeading<S, P>>;

impl<S, P> DropWhile<S, P>
where
    S: Sequence,
    P: FnMut(&S::Item) -> bool,
{
    pub(crate) fn new(seq: S, predicate: P) -> Self {
        staged(DropLeading { seq, predicate })
    }
}

/// Skip elements while `predicate` holds, then yield the rest unconditionally.
///
/// ```rust
/// use seqtool::prelude::*;
///
/// let rest = drop_while(|x: &i32| *x < 5, vec![1, 2, 4, 6, 1, 2]).unwrap();
/// assert_eq!(rest.to_list(), vec![6, 1, 2]);
/// ```
pub fn drop_while<S, P>(predicate: P, source: S) -> Result<DropWhile<S::IntoSeq, P>>
where
    S: IntoSequence,
    P: FnMut(&S::Item) -> bool,
{
    Ok(DropWhile::new(source.into_sequence()?, predicate))
}

/// Yields a leading run. Created via [`take_while`].
pub struct TakeWhile<S, P> {
    seq: Option<S>,
    predicate: P,
}

impl<S, P> TakeWhile<S, P>
where
    S: Sequence,
    P: FnMut(&S::Item) -> bool,
{
    pub(crate) fn new(seq: S, predicate: P) -> Self {
        Self {
            seq: Some(seq),
            predicate,
        }
    }
}

/// Yield elements while `predicate` holds.
///
/// The first failing element is consumed and discarded; from then on the
/// sequence is exhausted even if later elements would pass.
///
/// ```rust
/// use seqtool::prelude::*;
///
/// let mut head = take_while(|x: &i32| *x < 5, vec![1, 6, 1]).unwrap();
/// assert_eq!(head.pull().unwrap_item(), 1);
/// assert!(head.pull().is_exhausted());
/// assert!(head.pull().is_exhausted());
/// ```
pub fn take_while<S, P>(predicate: P, source: S) -> Result<TakeWhile<S::IntoSeq, P>>
where
    S: IntoSequence,
    P: FnMut(&S::Item) -> bool,
{
    Ok(TakeWhile::new(source.into_sequence()?, predicate))
}

impl<S, P> Sequence for TakeWhile<S, P>
where
    S: Sequence,
    P: FnMut(&S::Item) -> bool,
{
    type Item = S::Item;

    fn pull(&mut self) -> Pull<S::Item> {
        let Some(seq) = self.seq.as_mut() else {
            return Pull::Exhausted;
        };
        match seq.pull() {
            Pull::Item(x) if (self.predicate)(&x) => Pull::Item(x),
            _ => {
                // the upstream is released once the run ends
                self.seq = None;
                Pull::Exhausted
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{counter, from_fn, to_sequence};

    #[test]
    fn test_filter_and_complement() {
        let odd = filter_false(|x: &i32| x % 2 == 0, vec![1, 3, 2, 4, 7, 6]).unwrap();
        assert_eq!(odd.to_list(), vec![1, 3, 7]);

        let mut none = filter(|x: &i32| *x > 100, vec![1, 2, 4]).unwrap();
        assert!(none.pull().is_exhausted());
    }

    #[test]
    fn test_filter_truthy_and_falsy() {
        let kept = filter_truthy(vec![Some("A"), None, Some(""), Some("B")]).unwrap();
        assert_eq!(kept.to_list(), vec![Some("A"), Some("B")]);

        let dropped = filter_falsy(vec![0, 0, 1, 5]).unwrap();
        assert_eq!(dropped.to_list(), vec![0, 0]);
    }

    #[test]
    fn test_filter_on_infinite_source() {
        let mut multiples = filter(|x: &u32| x % 7 == 0, counter(1_u32, 1)).unwrap();
        assert_eq!(multiples.pull().unwrap_item(), 7);
        assert_eq!(multiples.pull().unwrap_item(), 14);
    }

    #[test]
    fn test_compress_length_mismatch() {
        let short_mask = compress("ABCDE", [1, 0, 1]).unwrap();
        assert_eq!(short_mask.to_list(), vec!['A', 'C']);

        let mut short_data = compress("ZYX", [1, 0, 1, 1, 0]).unwrap();
        assert_eq!(short_data.pull().unwrap_item(), 'Z');
        assert_eq!(short_data.pull().unwrap_item(), 'X');
        assert!(short_data.pull().is_exhausted());
    }

    #[test]
    fn test_compress_boolean_mask() {
        let picked = compress(vec![5, 3, 7, 10], [true, false, false, true]).unwrap();
        assert_eq!(picked.to_list(), vec![5, 10]);
    }

    #[test]
    fn test_drop_while_passes_rest_through() {
        let mut calls = 0;
        let rest = drop_while(
            |x: &i32| {
                calls += 1;
                *x < 5
            },
            vec![1, 2, 4, 6, 1, 2],
        )
        .unwrap()
        .to_list();
        assert_eq!(rest, vec![6, 1, 2]);
        assert_eq!(calls, 4);
    }

    #[test]
    fn test_drop_while_everything() {
        let mut seq = drop_while(|x: &i32| *x < 100, vec![1, 2, 4]).unwrap();
        assert!(seq.pull().is_exhausted());
        assert!(seq.pull().is_exhausted());
    }

    #[test]
    fn test_drop_while_does_not_pull_before_first_pull() {
        let mut pulled = false;
        let source = from_fn(|| {
            pulled = true;
            Pull::<i32>::Exhausted
        });
        let seq = drop_while(|_: &i32| true, source).unwrap();
        drop(seq);
        assert!(!pulled);
    }

    #[test]
    fn test_take_while_stays_exhausted() {
        let head = take_while(|x: &i32| *x < 5, vec![1, 2, 4, 6, 1, 2]).unwrap();
        assert_eq!(head.to_list(), vec![1, 2, 4]);

        let mut none = take_while(|x: &i32| *x > 100, vec![1, 2]).unwrap();
        assert!(none.pull().is_exhausted());
    }

    #[test]
    fn test_take_while_method_bounds_counter() {
        let small = counter(0_i64, 3).take_while(|x| *x < 10).to_list();
        assert_eq!(small, vec![0, 3, 6, 9]);
        let letters = to_sequence("aaB").unwrap().take_while(char::is_ascii_lowercase);
        assert_eq!(letters.to_list(), vec!['a', 'a']);
    }
}
