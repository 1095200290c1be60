//! Bridges between sequences and [`std::iter::Iterator`].
//!
//! [`SeqIter`] drives a [`Sequence`] as an iterator, and [`from_iter`] adapts any
//! [`IntoIterator`] into a sequence. [`to_list`] and [`for_each`] drain a sequence.
//!
//! # Examples
//!
//! ```rust
//! use seqtool::prelude::*;
//!
//! let squares: Vec<u32> = from_iter(1..=4).map(|x| x * x).into_iter().collect();
//! assert_eq!(squares, vec![1, 4, 9, 16]);
//! ```

use crate::{Pull, Sequence};

/// Iterator adapter for a [`Sequence`].
///
/// Pulls the wrapped sequence until it is exhausted. The adapter is fused: after
/// the first `None` the sequence is never pulled again.
pub struct SeqIter<S> {
    state: SeqIterState<S>,
}

enum SeqIterState<S> {
    Active(S),
    Exhausted(S),
    Invalid,
}

impl<S> SeqIterState<S> {
    fn take(&mut self) -> Self {
        std::mem::replace(self, SeqIterState::Invalid)
    }
}

impl<S> SeqIter<S>
where
    S: Sequence,
{
    /// Create a new iterator over a sequence.
    pub fn new(seq: S) -> Self {
        Self {
            state: SeqIterState::Active(seq),
        }
    }

    /// Check if the wrapped sequence has been exhausted.
    pub fn is_exhausted(&self) -> bool {
        matches!(self.state, SeqIterState::Exhausted(_))
    }

    /// Recover the wrapped sequence.
    pub fn into_inner(self) -> Option<S> {
        match self.state {
            SeqIterState::Active(s) | SeqIterState::Exhausted(s) => Some(s),
            SeqIterState::Invalid => None,
        }
    }
}

impl<S> Iterator for SeqIter<S>
where
    S: Sequence,
{
    type Item = S::Item;

    fn next(&mut self) -> Option<Self::Item> {
        match self.state.take() {
            SeqIterState::Active(mut seq) => match seq.pull() {
                Pull::Item(x) => {
                    self.state = SeqIterState::Active(seq);
                    Some(x)
                }
                Pull::Exhausted => {
                    self.state = SeqIterState::Exhausted(seq);
                    None
                }
            },
            state @ SeqIterState::Exhausted(_) => {
                self.state = state;
                None
            }
            SeqIterState::Invalid => None,
        }
    }
}

impl<S> std::iter::FusedIterator for SeqIter<S> where S: Sequence {}

/// Sequence over any standard iterator.
///
/// Created via [`from_iter`].
pub struct FromIter<I> {
    iter: std::iter::Fuse<I>,
}

/// Adapt any [`IntoIterator`] into a sequence.
///
/// ```rust
/// use seqtool::prelude::*;
///
/// let mut seq = from_iter("x y".split(' '));
/// assert_eq!(seq.pull(), Pull::Item("x"));
/// assert_eq!(seq.pull(), Pull::Item("y"));
/// assert_eq!(seq.pull(), Pull::Exhausted);
/// ```
pub fn from_iter<I>(iter: I) -> FromIter<I::IntoIter>
where
    I: IntoIterator,
{
    FromIter {
        iter: iter.into_iter().fuse(),
    }
}

impl<I> Sequence for FromIter<I>
where
    I: Iterator,
{
    type Item = I::Item;

    fn pull(&mut self) -> Pull<Self::Item> {
        self.iter.next().into()
    }
}

/// Drain every remaining element of `seq` into a `Vec`.
///
/// The caller must not pass an infinite sequence; nothing here detects one.
pub fn to_list<S>(mut seq: S) -> Vec<S::Item>
where
    S: Sequence,
{
    let mut items = Vec::new();
    while let Pull::Item(x) = seq.pull() {
        items.push(x);
    }
    items
}

/// Call `f` on every remaining element of `seq`.
pub fn for_each<S, F>(mut seq: S, mut f: F)
where
    S: Sequence,
    F: FnMut(S::Item),
{
    while let Pull::Item(x) = seq.pull() {
        f(x);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{counter, from_fn, repeat_n};

    #[test]
    fn test_seq_iter_collects_until_exhausted() {
        let mut iter = repeat_n('z', 3).into_iter();
        assert_eq!(iter.by_ref().collect::<String>(), "zzz");
        assert!(iter.is_exhausted());
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn test_into_inner_returns_remaining_sequence() {
        let mut iter = from_iter(vec![1, 2, 3]).into_iter();
        assert_eq!(iter.next(), Some(1));

        let mut rest = iter.into_inner().unwrap();
        assert_eq!(rest.pull().unwrap_item(), 2);
        assert_eq!(rest.pull().unwrap_item(), 3);
        assert!(rest.pull().is_exhausted());
    }

    #[test]
    fn test_seq_iter_take_from_infinite() {
        let firsts: Vec<_> = counter(5, 5).into_iter().take(3).collect();
        assert_eq!(firsts, vec![5, 10, 15]);
    }

    #[test]
    fn test_seq_iter_is_fused() {
        let mut calls = 0;
        let flaky = from_fn(move || {
            calls += 1;
            if calls % 2 == 0 { Pull::Item(calls) } else { Pull::Exhausted }
        });
        let mut iter = flaky.into_iter();
        assert_eq!(iter.next(), None);
        // the sequence would now produce an element, but the adapter stays done
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn test_from_iter_and_to_list() {
        assert_eq!(to_list(from_iter(vec![3, 1, 2])), vec![3, 1, 2]);
        assert!(to_list(from_iter(Vec::<u8>::new())).is_empty());
    }

    #[test]
    fn test_for_each_visits_in_order() {
        let mut seen = Vec::new();
        for_each(from_iter("abc".chars()), |c| seen.push(c));
        assert_eq!(seen, vec!['a', 'b', 'c']);
    }
}
