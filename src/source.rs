//! Adapting raw data into sequences.
//!
//! [`IntoSequence`] is implemented for every kind of source the combinators
//! accept: owned collections, arrays, text (one `char` per pull), ordered maps
//! (key/value pairs), and any existing [`Sequence`], which passes through
//! unchanged. With the `value` feature, dynamic [`serde_json::Value`] sources are
//! accepted too (see [`crate::value`]).
//!
//! Conversion never pulls anything; it only rearranges the source so that it
//! can be pulled.

use std::collections::BTreeMap;

use crate::{Pull, Result, Sequence};

/// Conversion into a [`Sequence`].
///
/// Conversion is fallible because dynamic sources may be of a kind that cannot
/// be sequenced. Typed sources always convert successfully.
pub trait IntoSequence {
    /// Element type of the resulting sequence
    type Item;
    /// The resulting sequence
    type IntoSeq: Sequence<Item = Self::Item>;

    /// Convert `self` into a sequence.
    fn into_sequence(self) -> Result<Self::IntoSeq>;
}

impl<S> IntoSequence for S
where
    S: Sequence,
{
    type Item = S::Item;
    type IntoSeq = S;

    fn into_sequence(self) -> Result<S> {
        Ok(self)
    }
}

/// Sequence over an owned, ordered collection.
pub struct Items<T> {
    items: std::vec::IntoIter<T>,
}

impl<T> Items<T> {
    pub(crate) fn new(items: Vec<T>) -> Self {
        Self {
            items: items.into_iter(),
        }
    }
}

impl<T> Sequence for Items<T> {
    type Item = T;

    fn pull(&mut self) -> Pull<T> {
        self.items.next().into()
    }
}

impl<T> IntoSequence for Vec<T> {
    type Item = T;
    type IntoSeq = Items<T>;

    fn into_sequence(self) -> Result<Items<T>> {
        Ok(Items::new(self))
    }
}

impl<T, const N: usize> IntoSequence for [T; N] {
    type Item = T;
    type IntoSeq = Items<T>;

    fn into_sequence(self) -> Result<Items<T>> {
        Ok(Items::new(Vec::from(self)))
    }
}

impl IntoSequence for &'_ str {
    type Item = char;
    type IntoSeq = Items<char>;

    fn into_sequence(self) -> Result<Items<char>> {
        Ok(Items::new(self.chars().collect()))
    }
}

impl IntoSequence for String {
    type Item = char;
    type IntoSeq = Items<char>;

    fn into_sequence(self) -> Result<Items<char>> {
        self.as_str().into_sequence()
    }
}

impl<K, V> IntoSequence for BTreeMap<K, V> {
    type Item = (K, V);
    type IntoSeq = Items<(K, V)>;

    fn into_sequence(self) -> Result<Items<(K, V)>> {
        Ok(Items::new(self.into_iter().collect()))
    }
}

/// Convert any source into a sequence.
///
/// Existing sequences are returned unchanged.
///
/// ```rust
/// use seqtool::prelude::*;
///
/// assert_eq!(to_sequence([1, 2, 4]).unwrap().to_list(), vec![1, 2, 4]);
/// assert_eq!(to_sequence("ABC").unwrap().to_list(), vec!['A', 'B', 'C']);
/// ```
pub fn to_sequence<S>(source: S) -> Result<S::IntoSeq>
where
    S: IntoSequence,
{
    source.into_sequence()
}

/// Convert every source of a list, failing on the first invalid one.
pub(crate) fn to_sequences<S>(sources: Vec<S>) -> Result<Vec<S::IntoSeq>>
where
    S: IntoSequence,
{
    sources.into_iter().map(IntoSequence::into_sequence).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::from_fn;

    #[test]
    fn test_vec_source_in_order() {
        let mut seq = to_sequence(vec![1, -1, 7]).unwrap();
        assert_eq!(seq.pull().unwrap_item(), 1);
        assert_eq!(seq.pull().unwrap_item(), -1);
        assert_eq!(seq.pull().unwrap_item(), 7);
        assert!(seq.pull().is_exhausted());
        assert!(seq.pull().is_exhausted());
    }

    #[test]
    fn test_text_source_yields_characters() {
        assert_eq!(to_sequence("AbCdEfG").unwrap().to_list().len(), 7);
        assert_eq!(
            to_sequence(String::from("héllo")).unwrap().to_list(),
            vec!['h', 'é', 'l', 'l', 'o']
        );
    }

    #[test]
    fn test_map_source_yields_pairs_in_key_order() {
        let map = BTreeMap::from([("b", 2), ("a", 1)]);
        assert_eq!(to_sequence(map).unwrap().to_list(), vec![("a", 1), ("b", 2)]);
    }

    #[test]
    fn test_existing_sequence_is_identity() {
        let mut calls = 0;
        let seq = from_fn(move || {
            calls += 1;
            if calls == 1 { Pull::Item("only") } else { Pull::Exhausted }
        });
        let mut same = to_sequence(seq).unwrap();
        assert_eq!(same.pull().unwrap_item(), "only");
        assert!(same.pull().is_exhausted());
    }

    #[test]
    fn test_to_sequences_converts_all() {
        let seqs = to_sequences(vec![vec![1], vec![2, 3]]).unwrap();
        assert_eq!(seqs.len(), 2);
    }
}
