//! Building sequences from scratch
//!
//! This module provides the escape hatches for constructing bespoke sequences:
//! step functions, staged initialization, and the empty sequence.

mod func;
mod staged;

pub use func::{Empty, FromFn, empty, from_fn};
pub use staged::{Deferred, Staged, deferred, lazy, staged};
