//! Sequences over dynamic JSON-like values.
//!
//! A [`serde_json::Value`] is adapted by kind: arrays yield their elements,
//! strings yield one-character strings, objects yield their values (or keys, or
//! `[key, value]` pairs, see [`Mode`]) in insertion order. Numbers, booleans and
//! `null` are not sequences and are rejected with [`Error::InvalidSource`].
//!
//! [`Source`] adds what a bare `Value` cannot express: text split on a
//! delimiter, and an existing sequence of values.
//!
//! ```rust
//! use seqtool::prelude::*;
//! use seqtool::value::{Mode, to_sequence_with_mode};
//! use serde_json::json;
//!
//! let keys = to_sequence_with_mode(json!({"b": 1, "a": 2}), Mode::Keys).unwrap();
//! assert_eq!(keys.to_list(), vec![json!("b"), json!("a")]);
//! ```

use either::Either;
use regex::Regex;
use serde_json::Value;

use crate::{BoxedSequence, Error, IntoSequence, Result, Sequence, source::Items};

/// What an object source yields.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Mode {
    /// Each property value.
    #[default]
    Values,
    /// Each property name, as a string value.
    Keys,
    /// A two-element array `[key, value]` per property.
    Pairs,
}

/// Where a text source is split.
#[derive(Debug, Clone)]
pub enum Delimiter {
    /// Split on every occurrence of a fixed string. An empty string splits
    /// between characters.
    Literal(String),
    /// Split on every match of a regular expression.
    Pattern(Regex),
}

impl Delimiter {
    /// Split on a fixed string.
    pub fn literal(delimiter: impl Into<String>) -> Self {
        Delimiter::Literal(delimiter.into())
    }

    /// Compile a regular-expression delimiter.
    pub fn pattern(pattern: &str) -> Result<Self> {
        Regex::new(pattern)
            .map(Delimiter::Pattern)
            .map_err(|e| Error::InvalidPattern(e.to_string()))
    }

    fn split(&self, text: &str) -> Vec<Value> {
        match self {
            Delimiter::Literal(d) if d.is_empty() => chars(text),
            Delimiter::Literal(d) => text.split(d.as_str()).map(Value::from).collect(),
            Delimiter::Pattern(re) => re.split(text).map(Value::from).collect(),
        }
    }
}

fn chars(text: &str) -> Vec<Value> {
    text.chars().map(|c| Value::String(c.to_string())).collect()
}

/// A dynamic source.
pub enum Source {
    /// Adapted by kind, see the [module documentation](self).
    Value(Value),
    /// Text, optionally split on a delimiter.
    Text {
        text: String,
        delimiter: Option<Delimiter>,
    },
    /// An existing sequence, passed through unchanged.
    Sequence(BoxedSequence<'static, Value>),
}

impl Source {
    /// Text split on `delimiter`.
    pub fn split(text: impl Into<String>, delimiter: Delimiter) -> Self {
        Source::Text {
            text: text.into(),
            delimiter: Some(delimiter),
        }
    }

    /// Wrap an existing sequence of values.
    pub fn sequence<S>(seq: S) -> Self
    where
        S: Sequence<Item = Value> + 'static,
    {
        Source::Sequence(seq.boxed())
    }
}

impl From<Value> for Source {
    fn from(value: Value) -> Self {
        Source::Value(value)
    }
}

impl From<&str> for Source {
    fn from(text: &str) -> Self {
        Source::from(text.to_owned())
    }
}

impl From<String> for Source {
    fn from(text: String) -> Self {
        Source::Text {
            text,
            delimiter: None,
        }
    }
}

/// Sequence produced from a dynamic source.
pub type ValueSequence = Either<Items<Value>, BoxedSequence<'static, Value>>;

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Adapt a dynamic source, choosing what object sources yield.
///
/// ```rust
/// use seqtool::value::{Delimiter, Mode, Source, to_sequence_with_mode};
/// use seqtool::{Error, Sequence};
/// use serde_json::json;
///
/// let words = Source::split("a,b", Delimiter::literal(","));
/// let words = to_sequence_with_mode(words, Mode::Values).unwrap();
/// assert_eq!(words.to_list(), vec![json!("a"), json!("b")]);
///
/// let err = to_sequence_with_mode(json!(12), Mode::Values).err();
/// assert_eq!(err, Some(Error::InvalidSource { kind: "number" }));
/// ```
pub fn to_sequence_with_mode(source: impl Into<Source>, mode: Mode) -> Result<ValueSequence> {
    let items = match source.into() {
        Source::Sequence(seq) => return Ok(Either::Right(seq)),
        Source::Text { text, delimiter } => match delimiter {
            Some(d) => d.split(&text),
            None => chars(&text),
        },
        Source::Value(value) => match value {
            Value::Array(items) => items,
            Value::String(text) => chars(&text),
            Value::Object(map) => map
                .into_iter()
                .map(|(k, v)| match mode {
                    Mode::Values => v,
                    Mode::Keys => Value::String(k),
                    Mode::Pairs => Value::Array(vec![Value::String(k), v]),
                })
                .collect(),
            other => return Err(Error::InvalidSource { kind: kind(&other) }),
        },
    };
    Ok(Either::Left(Items::new(items)))
}

impl IntoSequence for Value {
    type Item = Value;
    type IntoSeq = ValueSequence;

    fn into_sequence(self) -> Result<ValueSequence> {
        to_sequence_with_mode(self, Mode::default())
    }
}

impl IntoSequence for Source {
    type Item = Value;
    type IntoSeq = ValueSequence;

    fn into_sequence(self) -> Result<ValueSequence> {
        to_sequence_with_mode(self, Mode::default())
    }
}
