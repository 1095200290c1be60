//! Sequences with a distinct first pull.
//!
//! [`Staged`] runs an [`InitSequence`] on its first pull and afterwards
//! dispatches every pull to the steady-state sequence it produced. Operators use
//! it for lazy initialization (scanning, materializing a pool) without
//! re-checking an "initialized" flag in their steady state.

use crate::{InitSequence, Pull, Sequence};

/// Sequence that initializes on its first pull.
///
/// Created via [`staged`] or [`lazy`].
pub struct Staged<I>
where
    I: InitSequence,
{
    state: StagedState<I>,
}

enum StagedState<I>
where
    I: InitSequence,
{
    Pending(I),
    Running(I::Next),
    Exhausted,
    Invalid,
}

impl<I> StagedState<I>
where
    I: InitSequence,
{
    fn take(&mut self) -> Self {
        std::mem::replace(self, StagedState::Invalid)
    }
}

/// Wrap an [`InitSequence`] so that it runs on the first pull.
///
/// ```rust
/// use seqtool::prelude::*;
///
/// let seq = staged(("head", to_sequence(vec!["tail"]).unwrap()));
/// assert_eq!(seq.to_list(), vec!["head", "tail"]);
/// ```
pub fn staged<I>(init: I) -> Staged<I>
where
    I: InitSequence,
{
    Staged {
        state: StagedState::Pending(init),
    }
}

impl<I> Sequence for Staged<I>
where
    I: InitSequence,
{
    type Item = I::Item;

    fn pull(&mut self) -> Pull<Self::Item> {
        match &mut self.state {
            StagedState::Running(next) => next.pull(),
            StagedState::Exhausted | StagedState::Invalid => Pull::Exhausted,
            StagedState::Pending(_) => match self.state.take() {
                StagedState::Pending(init) => match init.init() {
                    Pull::Item((x, next)) => {
                        self.state = StagedState::Running(next);
                        Pull::Item(x)
                    }
                    Pull::Exhausted => {
                        self.state = StagedState::Exhausted;
                        Pull::Exhausted
                    }
                },
                _ => Pull::Exhausted,
            },
        }
    }
}

/// An [`InitSequence`] computed by a closure at initialization time.
pub struct Deferred<F>(F);

/// Defer building an [`InitSequence`] until it is initialized.
pub fn deferred<F, I>(f: F) -> Deferred<F>
where
    F: FnOnce() -> I,
    I: InitSequence,
{
    Deferred(f)
}

impl<F, I> InitSequence for Deferred<F>
where
    F: FnOnce() -> I,
    I: InitSequence,
{
    type Item = I::Item;
    type Next = I::Next;

    fn init(self) -> Pull<(Self::Item, Self::Next)> {
        (self.0)().init()
    }
}

/// Create a sequence whose construction is deferred to the first pull.
///
/// Nothing captured by `f` is touched until the sequence is pulled.
///
/// ```rust
/// use seqtool::prelude::*;
///
/// let seq = lazy(|| {
///     let mut rest = to_sequence(vec![3, 1, 2]).unwrap();
///     rest.pull().map(|first| (first, rest))
/// });
/// assert_eq!(seq.to_list(), vec![3, 1, 2]);
/// ```
pub fn lazy<F, I>(f: F) -> Staged<Deferred<F>>
where
    F: FnOnce() -> I,
    I: InitSequence,
{
    staged(deferred(f))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{empty, from_fn, to_sequence};
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn test_lazy_does_not_run_before_first_pull() {
        let ran = Rc::new(Cell::new(false));
        let flag = Rc::clone(&ran);
        let mut seq = lazy(move || {
            flag.set(true);
            (1, empty())
        });

        assert!(!ran.get());
        assert_eq!(seq.pull().unwrap_item(), 1);
        assert!(ran.get());
        assert!(seq.pull().is_exhausted());
    }

    #[test]
    fn test_staged_exhausted_init_stays_exhausted() {
        let mut seq = lazy(|| -> Pull<(i32, crate::build::Empty<i32>)> { Pull::Exhausted });
        assert!(seq.pull().is_exhausted());
        assert!(seq.pull().is_exhausted());
    }

    #[test]
    fn test_staged_switches_to_steady_state() {
        let mut n = 0;
        let steady = from_fn(move || {
            n += 1;
            Pull::Item(n)
        });
        let mut seq = staged((100, steady));

        assert_eq!(seq.pull().unwrap_item(), 100);
        assert_eq!(seq.pull().unwrap_item(), 1);
        assert_eq!(seq.pull().unwrap_item(), 2);
    }

    #[test]
    fn test_lazy_scan_then_pass_through() {
        let seq = lazy(|| {
            let mut rest = to_sequence(vec![0, 0, 5, 0, 6]).unwrap();
            loop {
                match rest.pull() {
                    Pull::Item(0) => continue,
                    other => break other.map(|x| (x, rest)),
                }
            }
        });
        assert_eq!(seq.to_list(), vec![5, 0, 6]);
    }
}
