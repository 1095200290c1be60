use crate::{IntoSequence, Pull, Result, Sequence, source::to_sequences};

/// Yield every element of the first source, then of the second, and so on.
///
/// Sources must share one type; box them ([`Sequence::boxed`]) to chain
/// heterogeneous sequences. Every source is validated before anything is
/// pulled.
///
/// ```rust
/// use seqtool::prelude::*;
///
/// let seq = chain(vec![vec![1, 2], vec![], vec![3]]).unwrap();
/// assert_eq!(seq.to_list(), vec![1, 2, 3]);
/// ```
pub fn chain<S>(sources: Vec<S>) -> Result<Chain<S::IntoSeq>>
where
    S: IntoSequence,
{
    Ok(Chain {
        sources: to_sequences(sources)?.into_iter().map(Some).collect(),
        index: 0,
    })
}

/// Concatenates a list of sequences.
///
/// Created via [`chain`]. A source is dropped as soon as it is exhausted.
pub struct Chain<S> {
    sources: Vec<Option<S>>,
    index: usize,
}

impl<S> Sequence for Chain<S>
where
    S: Sequence,
{
    type Item = S::Item;

    fn pull(&mut self) -> Pull<S::Item> {
        loop {
            match self.sources.get_mut(self.index) {
                Some(Some(s)) => match s.pull() {
                    Pull::Item(x) => return Pull::Item(x),
                    Pull::Exhausted => {
                        self.sources[self.index] = None;
                        self.index += 1;
                    }
                },
                Some(None) => self.index += 1,
                None => return Pull::Exhausted,
            }
        }
    }
}

/// Concatenates the sequences produced by an outer sequence.
///
/// Created via [`chain_from_iterable`]. The outer sequence is pulled only when
/// the current inner sequence is exhausted.
pub struct ChainFromIterable<S>
where
    S: Sequence,
{
    outer: S,
    current: Option<S::Item>,
}

/// Flatten a source whose elements are themselves sequences.
///
/// ```rust
/// use seqtool::prelude::*;
///
/// let inner = vec![to_sequence("AB").unwrap(), to_sequence("C").unwrap()];
/// let seq = chain_from_iterable(inner).unwrap();
/// assert_eq!(seq.to_list(), vec!['A', 'B', 'C']);
/// ```
pub fn chain_from_iterable<S>(source: S) -> Result<ChainFromIterable<S::IntoSeq>>
where
    S: IntoSequence,
    S::Item: Sequence,
{
    Ok(ChainFromIterable {
        outer: source.into_sequence()?,
        current: None,
    })
}

impl<S> Sequence for ChainFromIterable<S>
where
    S: Sequence,
    S::Item: Sequence,
{
    type Item = <S::Item as Sequence>::Item;

    fn pull(&mut self) -> Pull<Self::Item> {
        loop {
            if let Some(inner) = &mut self.current {
                if let Pull::Item(x) = inner.pull() {
                    return Pull::Item(x);
                }
            }
            match self.outer.pull() {
                Pull::Item(inner) => self.current = Some(inner),
                Pull::Exhausted => {
                    self.current = None;
                    return Pull::Exhausted;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BoxedSequence, empty, from_iter, to_sequence};

    #[test]
    fn test_chain_heterogeneous_boxed() {
        let sources: Vec<BoxedSequence<'_, char>> = vec![
            to_sequence("AB").unwrap().boxed(),
            from_iter(['2']).boxed(),
            to_sequence(String::from("T")).unwrap().boxed(),
        ];
        let items = chain(sources).unwrap().to_list();
        assert_eq!(items, vec!['A', 'B', '2', 'T']);
    }

    #[test]
    fn test_chain_single_source_is_identity() {
        let mut seq = chain(vec![[1, 2, 3, 4]]).unwrap();
        for expected in 1..=4 {
            assert_eq!(seq.pull().unwrap_item(), expected);
        }
        assert!(seq.pull().is_exhausted());
        assert!(seq.pull().is_exhausted());
    }

    #[test]
    fn test_chain_skips_empty_sources() {
        let sources = vec![
            empty().boxed(),
            empty().boxed(),
            to_sequence(vec![9]).unwrap().boxed(),
        ];
        assert_eq!(chain(sources).unwrap().to_list(), vec![9]);
    }

    #[test]
    fn test_chain_of_nothing() {
        let mut seq = chain(Vec::<Vec<u8>>::new()).unwrap();
        assert!(seq.pull().is_exhausted());
    }

    #[test]
    fn test_chain_from_iterable_lazy_outer() {
        let mut made = 0;
        let outer = crate::from_fn(move || {
            made += 1;
            match made {
                1 => Pull::Item(to_sequence(vec![1, 2]).unwrap()),
                2 => Pull::Item(to_sequence(vec![]).unwrap()),
                3 => Pull::Item(to_sequence(vec![3]).unwrap()),
                _ => Pull::Exhausted,
            }
        });
        let mut seq = chain_from_iterable(outer).unwrap();
        assert_eq!(seq.pull().unwrap_item(), 1);
        assert_eq!(seq.pull().unwrap_item(), 2);
        assert_eq!(seq.pull().unwrap_item(), 3);
        assert!(seq.pull().is_exhausted());
    }
}
