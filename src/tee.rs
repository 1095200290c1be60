//! Independent cursors over one upstream sequence.
//!
//! A [`Cloner`] owns an upstream sequence and an append-only buffer of the
//! elements pulled from it so far. Every [`Tee`] produced by
//! [`Cloner::clone_iter`] reads that buffer through its own cursor; the
//! upstream is pulled only when the most advanced cursor reads past the end of
//! the buffer. Memory therefore follows the high-water mark of pulled elements,
//! not the number of cursors.
//!
//! The buffer is shared through `Rc<RefCell<_>>`: all cursors of one group must
//! be driven from the same thread.
//!
//! # Examples
//!
//! ```rust
//! use seqtool::prelude::*;
//!
//! let mut clones = tee(vec![1, 2], 2).unwrap();
//! assert_eq!(clones[0].pull().unwrap_item(), 1);
//! assert_eq!(clones[1].pull().unwrap_item(), 1);
//! assert_eq!(clones[1].pull().unwrap_item(), 2);
//! assert_eq!(clones[0].pull().unwrap_item(), 2);
//! ```

use std::{cell::RefCell, rc::Rc};

use log::trace;

use crate::{IntoSequence, Pull, Result, Sequence};

struct Shared<S>
where
    S: Sequence,
{
    upstream: S,
    buffer: Vec<S::Item>,
    exhausted: bool,
}

impl<S> Shared<S>
where
    S: Sequence,
    S::Item: Clone,
{
    fn get(&mut self, idx: usize) -> Pull<S::Item> {
        if let Some(x) = self.buffer.get(idx) {
            return Pull::Item(x.clone());
        }
        if self.exhausted {
            return Pull::Exhausted;
        }
        match self.upstream.pull() {
            Pull::Item(x) => {
                self.buffer.push(x.clone());
                trace!("cloner buffer grew to {} elements", self.buffer.len());
                Pull::Item(x)
            }
            Pull::Exhausted => {
                trace!("cloner upstream exhausted after {} elements", self.buffer.len());
                self.exhausted = true;
                Pull::Exhausted
            }
        }
    }
}

/// Shared buffer over one upstream sequence, handing out independent cursors.
///
/// Created via [`create_cloner`]. Cloning a `Cloner` shares the same buffer.
pub struct Cloner<S>
where
    S: Sequence,
{
    shared: Rc<RefCell<Shared<S>>>,
}

impl<S> Clone for Cloner<S>
where
    S: Sequence,
{
    fn clone(&self) -> Self {
        Self {
            shared: Rc::clone(&self.shared),
        }
    }
}

impl<S> Cloner<S>
where
    S: Sequence,
    S::Item: Clone,
{
    pub(crate) fn new(upstream: S) -> Self {
        Self {
            shared: Rc::new(RefCell::new(Shared {
                upstream,
                buffer: Vec::new(),
                exhausted: false,
            })),
        }
    }

    /// Create a new cursor positioned at the first element.
    pub fn clone_iter(&self) -> Tee<S> {
        Tee {
            shared: Rc::clone(&self.shared),
            idx: 0,
        }
    }

    /// Number of elements pulled from the upstream so far.
    pub fn buffered(&self) -> usize {
        self.shared.borrow().buffer.len()
    }
}

/// Wrap a source in a [`Cloner`].
///
/// The source is validated and adapted here, but not pulled.
pub fn create_cloner<S>(source: S) -> Result<Cloner<S::IntoSeq>>
where
    S: IntoSequence,
    S::Item: Clone,
{
    Ok(Cloner::new(source.into_sequence()?))
}

/// One cursor of a [`Cloner`].
pub struct Tee<S>
where
    S: Sequence,
{
    shared: Rc<RefCell<Shared<S>>>,
    idx: usize,
}

impl<S> Sequence for Tee<S>
where
    S: Sequence,
    S::Item: Clone,
{
    type Item = S::Item;

    fn pull(&mut self) -> Pull<S::Item> {
        let next = self.shared.borrow_mut().get(self.idx);
        if next.is_item() {
            self.idx += 1;
        }
        next
    }
}

/// Split a source into `n` independent cursors over the same elements.
///
/// Each cursor sees every element in order, regardless of how far the others
/// have advanced.
pub fn tee<S>(source: S, n: usize) -> Result<Vec<Tee<S::IntoSeq>>>
where
    S: IntoSequence,
    S::Item: Clone,
{
    Ok(tee_sequence(source.into_sequence()?, n))
}

pub(crate) fn tee_sequence<S>(seq: S, n: usize) -> Vec<Tee<S>>
where
    S: Sequence,
    S::Item: Clone,
{
    let cloner = Cloner::new(seq);
    (0..n).map(|_| cloner.clone_iter()).collect()
}
