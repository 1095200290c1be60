//! Operators that build new sequences out of existing sources.
//!
//! Every constructor adapts its sources through [`IntoSequence`](crate::IntoSequence)
//! and returns a [`Result`](crate::Result): invalid sources are reported at
//! construction, before anything is pulled.

mod chain;
mod filter;
mod group;
mod map;
mod range;
mod slice;
mod zip;

pub use chain::*;
pub use filter::*;
pub use group::*;
pub use map::*;
pub use range::*;
pub use slice::*;
pub use zip::*;
