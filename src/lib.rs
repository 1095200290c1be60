//! # Seqtool: Lazy, Pull-Based Sequence Combinators
//!
//! Compose finite or infinite sources into new sequences that compute one
//! element per pull and nothing ahead of demand.
//!
//! ## Core Traits
//!
//! - **[`Sequence`]**: Single-pass sources that produce an element or report exhaustion on each pull
//! - **[`InitSequence`]**: Sequences whose first pull runs a one-shot initialization
//! - **[`IntoSequence`]**: Anything that can be adapted into a sequence (collections, text, maps, sequences)
//!
//! ## Key Features
//!
//! - **Lazy**: Constructing an operator never pulls its sources
//! - **Composable**: Every operator takes sources and returns a sequence
//! - **Combinatorial**: Cartesian products, permutations and combinations built on shared clones
//! - **Dynamic values**: With the `value` feature, `serde_json::Value` sources are adapted by kind
//!
//! ## Example
//!
//! ```
//! use seqtool::prelude::*;
//!
//! // Pair every letter with a running count, keep the even positions
//! let picked = zip(vec![
//!     counter(0_i64, 1).map(|n| n.to_string()).boxed(),
//!     to_sequence("ABCDEF").unwrap().map(String::from).boxed(),
//! ])
//! .unwrap()
//! .filter(|row| row[0].parse::<i64>().is_ok_and(|n| n % 2 == 0))
//! .map(|row| row.concat())
//! .to_list();
//!
//! assert_eq!(picked, vec!["0A", "2C", "4E"]);
//! ```
//!
//! ## Common Functions
//!
//! **Sources and draining:**
//! - [`to_sequence(source)`] - Adapt a source into a sequence
//! - [`to_list(seq)`] - Drain a finite sequence
//! - [`from_fn(step)`] - Build a sequence from a step function
//!
//! **Operators:**
//! - [`chain`], [`zip`], [`zip_longest`], [`map`], [`star_map`]
//! - [`filter`], [`filter_false`], [`compress`], [`drop_while`], [`take_while`]
//! - [`slice`], [`enumerate`], [`group_by`], [`tee`]
//!
//! **Generators:**
//! - [`irange`], [`counter`], [`cycle`], [`repeat`]
//! - [`product`], [`permutations`], [`combinations`], [`combinations_with_replacement`]
//!
//! [`to_sequence(source)`]: to_sequence
//! [`to_list(seq)`]: to_list
//! [`from_fn(step)`]: from_fn

pub mod build;
mod combinators;
mod combinatorics;
mod error;
mod infinite;
mod init;
mod iter;
pub mod prelude;
mod pull;
mod sequence;
pub mod source;
mod tee;
mod truthy;
#[cfg(feature = "value")]
pub mod value;

pub use build::{empty, from_fn, lazy, staged};
pub use combinators::*;
pub use combinatorics::*;
pub use error::{Error, Result};
pub use infinite::*;
pub use init::*;
pub use iter::*;
pub use pull::*;
pub use sequence::*;
pub use source::{IntoSequence, to_sequence};
pub use tee::*;
pub use truthy::*;
