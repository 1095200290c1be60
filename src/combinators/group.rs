//! Run-length grouping of consecutive elements with equal keys.
//!
//! [`GroupBy`] and every [`Group`] it hands out share one cursor over the
//! source. Advancing the outer sequence moves the cursor past whatever remains
//! of the current run, so a [`Group`] is only readable until the next outer
//! pull. After that it reports exhaustion.
//!
//! # Examples
//!
//! ```rust
//! use seqtool::prelude::*;
//!
//! let mut groups = group_by("AAB").unwrap();
//! let (key, run) = groups.pull().unwrap_item();
//! assert_eq!((key, run.to_list()), ('A', vec!['A', 'A']));
//! let (key, run) = groups.pull().unwrap_item();
//! assert_eq!((key, run.to_list()), ('B', vec!['B']));
//! assert!(groups.pull().is_exhausted());
//! ```

use std::{cell::RefCell, rc::Rc};

use crate::{IntoSequence, Pull, Result, Sequence};

struct GroupState<S, F, K>
where
    S: Sequence,
{
    source: S,
    key_fn: F,
    /// Element under the cursor with its key, not yet handed out.
    current: Option<(K, S::Item)>,
    /// Key of the run the most recent group belongs to.
    target: Option<K>,
    generation: u64,
    exhausted: bool,
}

impl<S, F, K> GroupState<S, F, K>
where
    S: Sequence,
    F: FnMut(&S::Item) -> K,
{
    /// Fill `current` from the source unless it already holds an element.
    fn fill(&mut self) -> bool {
        if self.current.is_some() {
            return true;
        }
        if self.exhausted {
            return false;
        }
        match self.source.pull() {
            Pull::Item(x) => {
                let key = (self.key_fn)(&x);
                self.current = Some((key, x));
                true
            }
            Pull::Exhausted => {
                self.exhausted = true;
                false
            }
        }
    }
}

/// Groups consecutive elements by key. Created via [`group_by`] or [`group_by_key`].
pub struct GroupBy<S, F, K>
where
    S: Sequence,
{
    state: Rc<RefCell<GroupState<S, F, K>>>,
}

/// One run of equal keys, readable until the outer [`GroupBy`] advances.
pub struct Group<S, F, K>
where
    S: Sequence,
{
    state: Rc<RefCell<GroupState<S, F, K>>>,
    generation: u64,
}

/// Key function of [`group_by`].
pub type IdentityKey<T> = fn(&T) -> T;

fn identity<T: Clone>(x: &T) -> T {
    x.clone()
}

/// Group consecutive equal elements.
pub fn group_by<S>(source: S) -> Result<GroupBy<S::IntoSeq, IdentityKey<S::Item>, S::Item>>
where
    S: IntoSequence,
    S::Item: Clone + PartialEq,
{
    group_by_key(source, identity::<S::Item> as IdentityKey<S::Item>)
}

/// Group consecutive elements whose `key_fn` results are equal.
///
/// ```rust
/// use seqtool::prelude::*;
///
/// let mut thirds = group_by_key(irange(10), |n: &i64| n / 3).unwrap();
/// let (key, run) = thirds.pull().unwrap_item();
/// assert_eq!((key, run.to_list()), (0, vec![0, 1, 2]));
/// ```
pub fn group_by_key<S, F, K>(source: S, key_fn: F) -> Result<GroupBy<S::IntoSeq, F, K>>
where
    S: IntoSequence,
    F: FnMut(&S::Item) -> K,
    K: Clone + PartialEq,
{
    Ok(GroupBy {
        state: Rc::new(RefCell::new(GroupState {
            source: source.into_sequence()?,
            key_fn,
            current: None,
            target: None,
            generation: 0,
            exhausted: false,
        })),
    })
}

impl<S, F, K> Sequence for GroupBy<S, F, K>
where
    S: Sequence,
    F: FnMut(&S::Item) -> K,
    K: Clone + PartialEq,
{
    type Item = (K, Group<S, F, K>);

    fn pull(&mut self) -> Pull<Self::Item> {
        let mut state = self.state.borrow_mut();
        // skip what is left of the previous run
        loop {
            if !state.fill() {
                return Pull::Exhausted;
            }
            let same_run = match (&state.current, &state.target) {
                (Some((key, _)), Some(target)) => key == target,
                _ => false,
            };
            if !same_run {
                break;
            }
            state.current = None;
        }
        let key = match &state.current {
            Some((key, _)) => key.clone(),
            None => return Pull::Exhausted,
        };
        state.target = Some(key.clone());
        state.generation += 1;
        let group = Group {
            state: Rc::clone(&self.state),
            generation: state.generation,
        };
        Pull::Item((key, group))
    }
}

impl<S, F, K> Sequence for Group<S, F, K>
where
    S: Sequence,
    F: FnMut(&S::Item) -> K,
    K: PartialEq,
{
    type Item = S::Item;

    fn pull(&mut self) -> Pull<S::Item> {
        let mut state = self.state.borrow_mut();
        if state.generation != self.generation || !state.fill() {
            return Pull::Exhausted;
        }
        let in_run = match (&state.current, &state.target) {
            (Some((key, _)), Some(target)) => key == target,
            _ => false,
        };
        if !in_run {
            return Pull::Exhausted;
        }
        state.current.take().map(|(_, x)| x).into()
    }
}
