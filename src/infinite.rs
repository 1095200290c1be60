//! Generators that never exhaust on their own.
//!
//! [`counter`], [`cycle`] and [`repeat`] produce elements forever. Combine them
//! with a bounding operator ([`zip`](crate::zip), [`take_while`](crate::take_while),
//! [`slice`](crate::slice)) before draining. [`repeat_n`] is the bounded variant.

use std::ops::Add;

use log::debug;

use crate::{IntoSequence, Pull, Result, Sequence};

/// Arithmetic progression. Created via [`counter`].
pub struct Counter<T> {
    next: T,
    step: T,
    started: bool,
}

/// Yield `start`, `start + step`, `start + 2 * step`, ... forever.
///
/// The next value is computed only when it is pulled.
///
/// ```rust
/// use seqtool::prelude::*;
///
/// let mut odd = counter(1, 2);
/// assert_eq!(odd.pull().unwrap_item(), 1);
/// assert_eq!(odd.pull().unwrap_item(), 3);
/// assert_eq!(odd.pull().unwrap_item(), 5);
/// ```
pub fn counter<T>(start: T, step: T) -> Counter<T>
where
    T: Copy + Add<Output = T>,
{
    Counter {
        next: start,
        step,
        started: false,
    }
}

impl<T> Sequence for Counter<T>
where
    T: Copy + Add<Output = T>,
{
    type Item = T;

    fn pull(&mut self) -> Pull<T> {
        if self.started {
            self.next = self.next + self.step;
        } else {
            self.started = true;
        }
        Pull::Item(self.next)
    }
}

/// Round-robin replay of a sequence. Created via [`cycle`].
pub struct Cycle<S>
where
    S: Sequence,
{
    state: CycleState<S>,
}

enum CycleState<S>
where
    S: Sequence,
{
    Recording { source: S, seen: Vec<S::Item> },
    Replaying { seen: Vec<S::Item>, idx: usize },
    Exhausted,
    Invalid,
}

impl<S> CycleState<S>
where
    S: Sequence,
{
    fn take(&mut self) -> Self {
        std::mem::replace(self, CycleState::Invalid)
    }
}

impl<S> Cycle<S>
where
    S: Sequence,
    S::Item: Clone,
{
    pub(crate) fn new(source: S) -> Self {
        Self {
            state: CycleState::Recording {
                source,
                seen: Vec::new(),
            },
        }
    }
}

/// Yield the elements of `source`, then replay them forever.
///
/// Elements are recorded during the first pass. An empty source gives a cycle
/// that is exhausted on every pull.
///
/// ```rust
/// use seqtool::prelude::*;
///
/// let mut abc = cycle("AB").unwrap();
/// let first: Vec<char> = (0..5).map(|_| abc.pull().unwrap_item()).collect();
/// assert_eq!(first, vec!['A', 'B', 'A', 'B', 'A']);
/// ```
pub fn cycle<S>(source: S) -> Result<Cycle<S::IntoSeq>>
where
    S: IntoSequence,
    S::Item: Clone,
{
    Ok(Cycle::new(source.into_sequence()?))
}

impl<S> Sequence for Cycle<S>
where
    S: Sequence,
    S::Item: Clone,
{
    type Item = S::Item;

    fn pull(&mut self) -> Pull<S::Item> {
        match &mut self.state {
            CycleState::Recording { source, seen } => match source.pull() {
                Pull::Item(x) => {
                    seen.push(x.clone());
                    Pull::Item(x)
                }
                Pull::Exhausted => match self.state.take() {
                    CycleState::Recording { seen, .. } if seen.is_empty() => {
                        debug!("cycle source was empty");
                        self.state = CycleState::Exhausted;
                        Pull::Exhausted
                    }
                    CycleState::Recording { seen, .. } => {
                        debug!("cycle replaying {} recorded elements", seen.len());
                        let first = seen[0].clone();
                        self.state = CycleState::Replaying { seen, idx: 1 };
                        Pull::Item(first)
                    }
                    _ => Pull::Exhausted,
                },
            },
            CycleState::Replaying { seen, idx } => {
                if *idx >= seen.len() {
                    *idx = 0;
                }
                let x = seen[*idx].clone();
                *idx += 1;
                Pull::Item(x)
            }
            CycleState::Exhausted | CycleState::Invalid => Pull::Exhausted,
        }
    }
}

/// Endless repetition of one element. Created via [`repeat`].
pub struct Repeat<T> {
    element: T,
}

/// Yield `element` forever.
pub fn repeat<T>(element: T) -> Repeat<T>
where
    T: Clone,
{
    Repeat { element }
}

impl<T> Sequence for Repeat<T>
where
    T: Clone,
{
    type Item = T;

    fn pull(&mut self) -> Pull<T> {
        Pull::Item(self.element.clone())
    }
}

/// Bounded repetition of one element. Created via [`repeat_n`].
pub struct RepeatN<T> {
    element: Option<T>,
    remaining: usize,
}

/// Yield `element` exactly `n` times.
///
/// ```rust
/// use seqtool::prelude::*;
///
/// assert_eq!(repeat_n("x", 3).to_list(), vec!["x", "x", "x"]);
/// assert!(repeat_n(0, 0).pull().is_exhausted());
/// ```
pub fn repeat_n<T>(element: T, n: usize) -> RepeatN<T>
where
    T: Clone,
{
    RepeatN {
        element: (n > 0).then_some(element),
        remaining: n,
    }
}

impl<T> Sequence for RepeatN<T>
where
    T: Clone,
{
    type Item = T;

    fn pull(&mut self) -> Pull<T> {
        match self.remaining {
            0 => Pull::Exhausted,
            1 => {
                self.remaining = 0;
                self.element.take().into()
            }
            _ => {
                self.remaining -= 1;
                self.element.clone().into()
            }
        }
    }
}
