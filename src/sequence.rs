//! Core trait for lazy, pull-based sequences.
//!
//! A [`Sequence`] is a single-pass, stateful source of elements. Each call to
//! [`pull`](Sequence::pull) either produces the next element or reports
//! [`Pull::Exhausted`]. A sequence has no length; the end is discovered only by pulling.
//!
//! # Examples
//!
//! ```rust
//! use seqtool::prelude::*;
//!
//! let mut evens = to_sequence(vec![1, 2, 3, 4, 5, 6])
//!     .unwrap()
//!     .filter(|x| x % 2 == 0);
//!
//! assert_eq!(evens.pull().unwrap_item(), 2);
//! assert_eq!(evens.to_list(), vec![4, 6]);
//! ```

use std::{cell::RefCell, rc::Rc};

use either::Either;

use crate::{
    Pull,
    combinators::{DropWhile, Enumerate, Filter, Map, TakeWhile},
    infinite::Cycle,
    iter::SeqIter,
    tee::{Tee, tee_sequence},
};

/// A sequence boxed behind a trait object, used when heterogeneous sequences
/// must share one type.
pub type BoxedSequence<'a, T> = Box<dyn Sequence<Item = T> + 'a>;

/// Core trait for single-pass sequences that produce elements on demand.
///
/// Implementors only provide [`pull`](Sequence::pull). Once a sequence has
/// returned [`Pull::Exhausted`] it must keep doing so, unless its own contract
/// says otherwise (see [`cycle`](crate::cycle)).
///
/// ```rust
/// use seqtool::prelude::*;
///
/// let mut letters = to_sequence("ab").unwrap();
/// assert_eq!(letters.pull(), Pull::Item('a'));
/// assert_eq!(letters.pull(), Pull::Item('b'));
/// assert_eq!(letters.pull(), Pull::Exhausted);
/// ```
pub trait Sequence {
    /// Type of the produced elements
    type Item;

    /// Produce the next element, or `Exhausted` when there is none.
    fn pull(&mut self) -> Pull<Self::Item>;

    /// Erase the concrete type behind a [`BoxedSequence`].
    fn boxed<'a>(self) -> BoxedSequence<'a, Self::Item>
    where
        Self: Sized + 'a,
    {
        Box::new(self)
    }

    /// Borrow the sequence so an adapter can consume part of it.
    fn by_ref(&mut self) -> &mut Self
    where
        Self: Sized,
    {
        self
    }

    /// Bridge into [`std::iter::Iterator`].
    fn into_iter(self) -> SeqIter<Self>
    where
        Self: Sized,
    {
        SeqIter::new(self)
    }

    /// Drain every remaining element into a `Vec`.
    ///
    /// Must not be called on an infinite sequence.
    fn to_list(self) -> Vec<Self::Item>
    where
        Self: Sized,
    {
        crate::iter::to_list(self)
    }

    /// Call `f` on every remaining element.
    fn for_each<F>(self, f: F)
    where
        Self: Sized,
        F: FnMut(Self::Item),
    {
        crate::iter::for_each(self, f)
    }

    /// Transform each element.
    fn map<U, F>(self, f: F) -> Map<Self, F>
    where
        Self: Sized,
        F: FnMut(Self::Item) -> U,
    {
        Map::new(self, f)
    }

    /// Keep elements for which `predicate` holds.
    fn filter<P>(self, predicate: P) -> Filter<Self, P>
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> bool,
    {
        Filter::new(self, predicate, true)
    }

    /// Keep elements for which `predicate` fails.
    fn filter_false<P>(self, predicate: P) -> Filter<Self, P>
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> bool,
    {
        Filter::new(self, predicate, false)
    }

    /// Skip the leading run of elements for which `predicate` holds.
    fn drop_while<P>(self, predicate: P) -> DropWhile<Self, P>
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> bool,
    {
        DropWhile::new(self, predicate)
    }

    /// Yield the leading run of elements for which `predicate` holds.
    fn take_while<P>(self, predicate: P) -> TakeWhile<Self, P>
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> bool,
    {
        TakeWhile::new(self, predicate)
    }

    /// Pair every element with its position, starting at 0.
    fn enumerate(self) -> Enumerate<Self>
    where
        Self: Sized,
    {
        Enumerate::new(self, 0)
    }

    /// Repeat the elements of this sequence forever.
    fn cycle(self) -> Cycle<Self>
    where
        Self: Sized,
        Self::Item: Clone,
    {
        Cycle::new(self)
    }

    /// Split into `n` independent cursors over the same elements.
    fn tee(self, n: usize) -> Vec<Tee<Self>>
    where
        Self: Sized,
        Self::Item: Clone,
    {
        tee_sequence(self, n)
    }
}

impl<S> Sequence for &'_ mut S
where
    S: Sequence + ?Sized,
{
    type Item = S::Item;

    fn pull(&mut self) -> Pull<Self::Item> {
        (**self).pull()
    }
}

impl<S> Sequence for Box<S>
where
    S: Sequence + ?Sized,
{
    type Item = S::Item;

    fn pull(&mut self) -> Pull<Self::Item> {
        (**self).pull()
    }
}

impl<S> Sequence for Rc<RefCell<S>>
where
    S: Sequence,
{
    type Item = S::Item;

    fn pull(&mut self) -> Pull<Self::Item> {
        let mut s = self.as_ref().borrow_mut();
        s.pull()
    }
}

impl<L, R> Sequence for Either<L, R>
where
    L: Sequence,
    R: Sequence<Item = L::Item>,
{
    type Item = L::Item;

    fn pull(&mut self) -> Pull<Self::Item> {
        match self {
            Either::Left(l) => l.pull(),
            Either::Right(r) => r.pull(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{from_fn, to_sequence};

    #[test]
    fn test_mut_ref_pulls_through() {
        let mut seq = to_sequence(vec![1, 2, 3]).unwrap();
        let first: Vec<_> = seq.by_ref().take_while(|x| *x < 2).to_list();
        assert_eq!(first, vec![1]);
        // take_while consumed the boundary element
        assert_eq!(seq.pull().unwrap_item(), 3);
    }

    #[test]
    fn test_boxed_heterogeneous_sequences() {
        let mut counter = 0;
        let sequences: Vec<BoxedSequence<'_, i32>> = vec![
            to_sequence(vec![1, 2]).unwrap().boxed(),
            from_fn(move || {
                counter += 1;
                if counter <= 2 { Pull::Item(counter * 10) } else { Pull::Exhausted }
            })
            .boxed(),
        ];

        let all: Vec<i32> = sequences.into_iter().flat_map(|s| s.to_list()).collect();
        assert_eq!(all, vec![1, 2, 10, 20]);
    }

    #[test]
    fn test_shared_rc_refcell_sequence() {
        let shared = Rc::new(RefCell::new(to_sequence(vec!['a', 'b', 'c']).unwrap()));
        let mut left = Rc::clone(&shared);
        let mut right = Rc::clone(&shared);

        assert_eq!(left.pull().unwrap_item(), 'a');
        assert_eq!(right.pull().unwrap_item(), 'b');
        assert_eq!(left.pull().unwrap_item(), 'c');
        assert!(right.pull().is_exhausted());
    }

    #[test]
    fn test_either_dispatches_to_active_side() {
        let mut seq: Either<_, crate::build::Empty<i32>> =
            Either::Left(to_sequence(vec![7]).unwrap());
        assert_eq!(seq.pull().unwrap_item(), 7);
        assert!(seq.pull().is_exhausted());

        let mut seq: Either<crate::source::Items<i32>, _> = Either::Right(crate::empty::<i32>());
        assert!(seq.pull().is_exhausted());
    }

    #[test]
    fn test_map_method() {
        let doubled = to_sequence(vec![1, 2, 3]).unwrap().map(|x| x * 2).to_list();
        assert_eq!(doubled, vec![2, 4, 6]);
    }
}
