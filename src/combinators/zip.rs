use crate::{IntoSequence, Pull, Result, Sequence, source::to_sequences};

/// Lockstep pull over several sequences, ending with the shortest.
///
/// Created via [`zip`].
pub struct Zip<S> {
    sources: Vec<S>,
    exhausted: bool,
}

/// Yield one `Vec` per step holding the next element of every source.
///
/// The result ends as soon as any source ends. With no sources at all it is
/// exhausted from the start.
///
/// ```rust
/// use seqtool::prelude::*;
///
/// let mut pairs = zip(vec![vec![1, 2, 4], vec![1, 3]]).unwrap();
/// assert_eq!(pairs.pull().unwrap_item(), vec![1, 1]);
/// assert_eq!(pairs.pull().unwrap_item(), vec![2, 3]);
/// assert!(pairs.pull().is_exhausted());
/// ```
pub fn zip<S>(sources: Vec<S>) -> Result<Zip<S::IntoSeq>>
where
    S: IntoSequence,
{
    let sources = to_sequences(sources)?;
    Ok(Zip {
        exhausted: sources.is_empty(),
        sources,
    })
}

impl<S> Sequence for Zip<S>
where
    S: Sequence,
{
    type Item = Vec<S::Item>;

    fn pull(&mut self) -> Pull<Vec<S::Item>> {
        if self.exhausted {
            return Pull::Exhausted;
        }
        let mut row = Vec::with_capacity(self.sources.len());
        for s in &mut self.sources {
            match s.pull() {
                Pull::Item(x) => row.push(x),
                Pull::Exhausted => {
                    self.exhausted = true;
                    return Pull::Exhausted;
                }
            }
        }
        Pull::Item(row)
    }
}

/// Lockstep pull over several sequences, ending with the longest.
///
/// Created via [`zip_longest`].
pub struct ZipLongest<S>
where
    S: Sequence,
{
    sources: Vec<Option<S>>,
    fill: S::Item,
}

/// Like [`zip`], but continue until every source has ended.
///
/// Positions whose source has already ended hold a clone of `fill`. An ended
/// source is never pulled again.
///
/// ```rust
/// use seqtool::prelude::*;
///
/// let rows = zip_longest('-', vec!["AB", "C"]).unwrap().to_list();
/// assert_eq!(rows, vec![vec!['A', 'C'], vec!['B', '-']]);
/// ```
pub fn zip_longest<S>(fill: S::Item, sources: Vec<S>) -> Result<ZipLongest<S::IntoSeq>>
where
    S: IntoSequence,
    S::Item: Clone,
{
    Ok(ZipLongest {
        sources: to_sequences(sources)?.into_iter().map(Some).collect(),
        fill,
    })
}

impl<S> Sequence for ZipLongest<S>
where
    S: Sequence,
    S::Item: Clone,
{
    type Item = Vec<S::Item>;

    fn pull(&mut self) -> Pull<Vec<S::Item>> {
        let mut row = Vec::with_capacity(self.sources.len());
        let mut live = 0;
        for slot in &mut self.sources {
            let next = match slot {
                Some(s) => s.pull(),
                None => Pull::Exhausted,
            };
            match next {
                Pull::Item(x) => {
                    live += 1;
                    row.push(x);
                }
                Pull::Exhausted => {
                    *slot = None;
                    row.push(self.fill.clone());
                }
            }
        }
        if live == 0 {
            Pull::Exhausted
        } else {
            Pull::Item(row)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{counter, from_fn, irange};

    fn render(rows: Vec<Vec<String>>) -> String {
        rows.iter()
            .map(|row| format!("[{}]", row.join(" ")))
            .collect::<Vec<_>>()
            .join(", ")
    }

    #[test]
    fn test_zip_shortest_wins() {
        let rows = zip(vec![vec![1, 2, 4, 7, 3, 9], vec![1, 3, 5, 5, 7]])
            .unwrap()
            .map(|row| row.iter().map(i32::to_string).collect())
            .to_list();
        assert_eq!(render(rows), "[1 1], [2 3], [4 5], [7 5], [3 7]");
    }

    #[test]
    fn test_zip_of_nothing() {
        let mut seq = zip(Vec::<Vec<u8>>::new()).unwrap();
        assert!(seq.pull().is_exhausted());
    }

    #[test]
    fn test_zip_bounds_infinite_source() {
        let rows = zip(vec![counter(0_i64, 1).boxed(), irange(3).boxed()])
            .unwrap()
            .to_list();
        assert_eq!(rows, vec![vec![0, 0], vec![1, 1], vec![2, 2]]);
    }

    #[test]
    fn test_zip_stays_exhausted() {
        let mut toggle = false;
        // alternates between an element and exhaustion
        let flaky = from_fn(move || {
            toggle = !toggle;
            if toggle { Pull::Item(1) } else { Pull::Exhausted }
        });
        let mut seq = zip(vec![flaky]).unwrap();
        assert_eq!(seq.pull().unwrap_item(), vec![1]);
        assert!(seq.pull().is_exhausted());
        assert!(seq.pull().is_exhausted());
    }

    #[test]
    fn test_zip_longest_fills() {
        let sources = vec![
            vec!["1", "2", "4", "7"],
            vec!["1", "3", "5", "5", "7", "4"],
            vec!["A", "B", "D"],
        ];
        let rows = zip_longest("-", sources)
            .unwrap()
            .map(|row| row.into_iter().map(String::from).collect())
            .to_list();
        assert_eq!(
            render(rows),
            "[1 1 A], [2 3 B], [4 5 D], [7 5 -], [- 7 -], [- 4 -]"
        );
    }

    #[test]
    fn test_zip_longest_never_repulls_ended_source() {
        let mut pulls = 0;
        let short = from_fn(|| {
            pulls += 1;
            Pull::<i32>::Exhausted
        });
        let long = from_fn({
            let mut n = 0;
            move || {
                n += 1;
                if n <= 3 { Pull::Item(n) } else { Pull::Exhausted }
            }
        });
        let rows = zip_longest(0, vec![short.boxed(), long.boxed()])
            .unwrap()
            .to_list();
        assert_eq!(rows, vec![vec![0, 1], vec![0, 2], vec![0, 3]]);
        assert_eq!(pulls, 1);
    }

    #[test]
    fn test_zip_longest_of_nothing() {
        let mut seq = zip_longest(0, Vec::<Vec<i32>>::new()).unwrap();
        assert!(seq.pull().is_exhausted());
    }
}
