use log::debug;

use crate::{Error, IntoSequence, Pull, Result, Sequence};

/// Positional selection. Created via [`slice`].
pub struct Slice<S> {
    seq: S,
    position: usize,
    target: Option<usize>,
    stop: Option<usize>,
    step: usize,
}

/// Yield the elements of `source` at positions `start, start + step, ...`
/// below `stop`.
///
/// `stop = None` selects without an upper bound. Unselected elements are
/// pulled and discarded; nothing is pulled past the last selected position.
///
/// ```rust
/// use seqtool::prelude::*;
///
/// let picked = slice("ABCDEFGHIJK", 3, Some(10), 3).unwrap();
/// assert_eq!(picked.to_list(), vec!['D', 'G', 'J']);
/// ```
pub fn slice<S>(
    source: S,
    start: usize,
    stop: Option<usize>,
    step: usize,
) -> Result<Slice<S::IntoSeq>>
where
    S: IntoSequence,
{
    if step == 0 {
        return Err(Error::ZeroStep);
    }
    Ok(Slice {
        seq: source.into_sequence()?,
        position: 0,
        target: Some(start),
        stop,
        step,
    })
}

impl<S> Sequence for Slice<S>
where
    S: Sequence,
{
    type Item = S::Item;

    fn pull(&mut self) -> Pull<S::Item> {
        let Some(target) = self.target else {
            return Pull::Exhausted;
        };
        if self.stop.is_some_and(|stop| target >= stop) {
            self.target = None;
            return Pull::Exhausted;
        }
        loop {
            match self.seq.pull() {
                Pull::Item(x) => {
                    let position = self.position;
                    self.position += 1;
                    if position == target {
                        self.target = target.checked_add(self.step);
                        return Pull::Item(x);
                    }
                }
                Pull::Exhausted => {
                    self.target = None;
                    return Pull::Exhausted;
                }
            }
        }
    }
}

/// Pairs elements with a running index. Created via [`enumerate`].
pub struct Enumerate<S> {
    seq: S,
    index: i64,
    started: bool,
}

impl<S> Enumerate<S> {
    pub(crate) fn new(seq: S, start: i64) -> Self {
        Self {
            seq,
            index: start,
            started: false,
        }
    }
}

/// Yield `(index, element)` pairs, counting from 0.
///
/// ```rust
/// use seqtool::prelude::*;
///
/// let pairs = enumerate("AB").unwrap().to_list();
/// assert_eq!(pairs, vec![(0, 'A'), (1, 'B')]);
/// ```
pub fn enumerate<S>(source: S) -> Result<Enumerate<S::IntoSeq>>
where
    S: IntoSequence,
{
    enumerate_from(source, 0)
}

/// Yield `(index, element)` pairs, counting from `start`.
///
/// The index advances only when another element is pulled. An element whose
/// index would pass `i64::MAX` is not produced and the sequence ends.
pub fn enumerate_from<S>(source: S, start: i64) -> Result<Enumerate<S::IntoSeq>>
where
    S: IntoSequence,
{
    Ok(Enumerate::new(source.into_sequence()?, start))
}

impl<S> Sequence for Enumerate<S>
where
    S: Sequence,
{
    type Item = (i64, S::Item);

    fn pull(&mut self) -> Pull<(i64, S::Item)> {
        let index = if self.started {
            let Some(next) = self.index.checked_add(1) else {
                debug!("enumerate index reached i64::MAX");
                return Pull::Exhausted;
            };
            next
        } else {
            self.index
        };
        let x = match self.seq.pull() {
            Pull::Item(x) => x,
            Pull::Exhausted => return Pull::Exhausted,
        };
        self.index = index;
        self.started = true;
        Pull::Item((index, x))
    }
}
