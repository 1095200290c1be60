use crate::{Error, Pull, Result, Sequence};

/// Arithmetic range with a precomputed length.
///
/// Created via [`irange`], [`irange_from`] or [`irange_step`].
#[derive(Debug, Clone)]
pub struct IRange {
    next: i64,
    step: i64,
    remaining: u64,
}

impl IRange {
    fn new(start: i64, stop: i64, step: i64) -> Self {
        Self {
            next: start,
            step,
            remaining: range_len(start, stop, step),
        }
    }

    /// Number of values left to yield.
    pub fn remaining(&self) -> u64 {
        self.remaining
    }
}

/// `max(ceil((stop - start) / step), 0)`, for a nonzero step.
fn range_len(start: i64, stop: i64, step: i64) -> u64 {
    let span = i128::from(stop) - i128::from(start);
    let step = i128::from(step);
    let mut len = span / step;
    let rem = span % step;
    if rem != 0 && (rem > 0) == (step > 0) {
        len += 1;
    }
    u64::try_from(len.max(0)).unwrap_or(u64::MAX)
}

/// Yield `0, 1, ..., stop - 1`.
///
/// ```rust
/// use seqtool::prelude::*;
///
/// assert_eq!(irange(4).to_list(), vec![0, 1, 2, 3]);
/// assert!(irange(0).pull().is_exhausted());
/// ```
pub fn irange(stop: i64) -> IRange {
    IRange::new(0, stop, 1)
}

/// Yield `start, start + 1, ..., stop - 1`. Empty when `stop <= start`.
pub fn irange_from(start: i64, stop: i64) -> IRange {
    IRange::new(start, stop, 1)
}

/// Yield `start, start + step, ...` while short of `stop`.
///
/// A negative `step` counts down. A zero `step` is rejected.
///
/// ```rust
/// use seqtool::prelude::*;
///
/// assert_eq!(irange_step(12, 7, -2).unwrap().to_list(), vec![12, 10, 8]);
/// assert_eq!(irange_step(0, 1, 0).unwrap_err(), Error::ZeroStep);
/// ```
pub fn irange_step(start: i64, stop: i64, step: i64) -> Result<IRange> {
    if step == 0 {
        return Err(Error::ZeroStep);
    }
    Ok(IRange::new(start, stop, step))
}

impl Sequence for IRange {
    type Item = i64;

    fn pull(&mut self) -> Pull<i64> {
        if self.remaining == 0 {
            return Pull::Exhausted;
        }
        let x = self.next;
        self.remaining -= 1;
        if self.remaining > 0 {
            // still inside [start, stop), so this cannot overflow
            self.next += self.step;
        }
        Pull::Item(x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_irange_single_argument() {
        assert_eq!(irange(0).to_list(), Vec::<i64>::new());
        assert_eq!(irange(4).to_list(), vec![0, 1, 2, 3]);
        assert_eq!(irange(-3).to_list(), Vec::<i64>::new());
    }

    #[test]
    fn test_irange_from() {
        assert_eq!(irange_from(5, 8).to_list(), vec![5, 6, 7]);
        assert!(irange_from(8, 5).pull().is_exhausted());
    }

    #[test]
    fn test_irange_step() {
        assert_eq!(irange_step(3, 10, 3).unwrap().to_list(), vec![3, 6, 9]);
        assert_eq!(irange_step(3, 10, 15).unwrap().to_list(), vec![3]);
        assert_eq!(irange_step(12, 7, -2).unwrap().to_list(), vec![12, 10, 8]);
        assert_eq!(
            irange_step(0, -10, -1).unwrap().to_list(),
            vec![0, -1, -2, -3, -4, -5, -6, -7, -8, -9]
        );
        assert!(irange_step(0, 10, -1).unwrap().pull().is_exhausted());
    }

    #[test]
    fn test_irange_zero_step_is_rejected() {
        assert_eq!(irange_step(0, 10, 0).unwrap_err(), Error::ZeroStep);
    }

    #[test]
    fn test_irange_stays_exhausted() {
        let mut seq = irange(1);
        assert_eq!(seq.pull().unwrap_item(), 0);
        assert!(seq.pull().is_exhausted());
        assert!(seq.pull().is_exhausted());
    }

    #[test]
    fn test_irange_at_numeric_limits() {
        let mut seq = irange_from(i64::MAX - 2, i64::MAX);
        assert_eq!(seq.remaining(), 2);
        assert_eq!(seq.pull().unwrap_item(), i64::MAX - 2);
        assert_eq!(seq.pull().unwrap_item(), i64::MAX - 1);
        assert!(seq.pull().is_exhausted());

        assert_eq!(range_len(i64::MIN, i64::MAX, i64::MAX), 3);
    }
}
