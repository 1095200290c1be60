use either::Either;

use crate::{Pull, Sequence};

/// A sequence whose first element is produced by a one-shot initialization step.
///
/// `init` consumes the value and returns either the first element together with
/// the steady-state sequence that produces the rest, or `Exhausted` if there is
/// nothing to produce at all. [`staged`](crate::staged) turns an `InitSequence`
/// into a regular [`Sequence`] that runs `init` on its first pull.
///
/// ```rust
/// use seqtool::prelude::*;
///
/// let first = (0, to_sequence(vec![1, 2]).unwrap());
/// let (head, mut rest) = first.init().unwrap_item();
/// assert_eq!(head, 0);
/// assert_eq!(rest.pull().unwrap_item(), 1);
/// ```
pub trait InitSequence {
    type Item;
    type Next: Sequence<Item = Self::Item>;

    /// Run the initialization step.
    fn init(self) -> Pull<(Self::Item, Self::Next)>;
}

impl<T, S> InitSequence for (T, S)
where
    S: Sequence<Item = T>,
{
    type Item = T;
    type Next = S;

    fn init(self) -> Pull<(T, S)> {
        Pull::Item(self)
    }
}

impl<T, S> InitSequence for Pull<(T, S)>
where
    S: Sequence<Item = T>,
{
    type Item = T;
    type Next = S;

    fn init(self) -> Pull<(T, S)> {
        self
    }
}

impl<L, R> InitSequence for Either<L, R>
where
    L: InitSequence,
    R: InitSequence<Item = L::Item>,
{
    type Item = L::Item;
    type Next = Either<L::Next, R::Next>;

    fn init(self) -> Pull<(Self::Item, Self::Next)> {
        match self {
            Either::Left(l) => l.init().map(|(x, next)| (x, Either::Left(next))),
            Either::Right(r) => r.init().map(|(x, next)| (x, Either::Right(next))),
        }
    }
}
