use std::marker::PhantomData;

use crate::{Pull, Sequence};

pub struct FromFn<F>(F);

impl<T, F> Sequence for FromFn<F>
where
    F: FnMut() -> Pull<T>,
{
    type Item = T;

    fn pull(&mut self) -> Pull<T> {
        (self.0)()
    }
}

/// Create a sequence from a step function.
///
/// Every pull calls `step`. The function is responsible for staying exhausted
/// once it has returned [`Pull::Exhausted`].
///
/// ```rust
/// use seqtool::prelude::*;
///
/// let mut n = 0;
/// let mut evens = from_fn(move || {
///     n += 2;
///     if n <= 4 { Pull::Item(n) } else { Pull::Exhausted }
/// });
/// assert_eq!(evens.pull().unwrap_item(), 2);
/// assert_eq!(evens.pull().unwrap_item(), 4);
/// assert!(evens.pull().is_exhausted());
/// ```
pub fn from_fn<T, F>(step: F) -> FromFn<F>
where
    F: FnMut() -> Pull<T>,
{
    FromFn(step)
}

/// A sequence that is exhausted from the start.
pub struct Empty<T>(PhantomData<fn() -> T>);

/// Create a sequence that never produces an element.
pub fn empty<T>() -> Empty<T> {
    Empty(PhantomData)
}

impl<T> Sequence for Empty<T> {
    type Item = T;

    fn pull(&mut self) -> Pull<T> {
        Pull::Exhausted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_fn_constant() {
        let mut seq = from_fn(|| Pull::Item("Test"));
        assert_eq!(seq.pull().unwrap_item(), "Test");
        assert_eq!(seq.pull().unwrap_item(), "Test");
    }

    #[test]
    fn test_empty_stays_exhausted() {
        let mut seq = empty::<u8>();
        assert!(seq.pull().is_exhausted());
        assert!(seq.pull().is_exhausted());
    }
}
