//! Construction-time failures.
//!
//! Exhaustion is not an error and never appears here; it is reported through
//! [`Pull::Exhausted`](crate::Pull::Exhausted).

use thiserror::Error;

/// Result alias used by every constructor that validates its arguments.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Invalid arguments rejected when a sequence is built.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A dynamic source of a kind that cannot be adapted into a sequence.
    #[error("invalid source: {kind} cannot be adapted into a sequence")]
    InvalidSource {
        /// Kind of the rejected value, e.g. `"number"` or `"null"`.
        kind: &'static str,
    },

    /// A range or slice was requested with a step of zero.
    #[error("step must not be zero")]
    ZeroStep,

    /// A split delimiter pattern failed to compile.
    #[error("invalid delimiter pattern: {0}")]
    InvalidPattern(String),
}
