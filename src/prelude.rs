//! Commonly used imports
//!
//! Use `use seqtool::prelude::*;` for quick access to the most common types and functions.

// Core types
pub use crate::{BoxedSequence, Error, InitSequence, IntoSequence, Pull, Sequence, Truthy};

// Sources and draining
pub use crate::{for_each, from_iter, to_list, to_sequence};

// Builders
pub use crate::build::{empty, from_fn, lazy, staged};

// Generators
pub use crate::{counter, cycle, irange, irange_from, irange_step, repeat, repeat_n};

// Operators
pub use crate::{
    chain, chain_from_iterable, compress, drop_while, enumerate, enumerate_from, filter,
    filter_falsy, filter_false, filter_truthy, group_by, group_by_key, map, slice, star_map,
    take_while, zip, zip_longest,
};

// Clones
pub use crate::{create_cloner, tee};

// Combinatorics
pub use crate::{combinations, combinations_with_replacement, permutations, product};
