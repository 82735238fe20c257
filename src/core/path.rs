//! Purpose: Model one navigation step (field name or sequence index) and whole paths.
//! Exports: `Segment`, `segments_from_values`, `display_path`, `path!`.
//! Role: Typed replacement for heterogeneous path arguments at the query boundary.
//! Invariants: A segment is exactly a field name or a non-negative index; nothing else converts.
//! Invariants: Field names borrow from the caller when possible.

use crate::core::error::{Error, ErrorKind};
use crate::core::node::{NodeKind, value_preview};
use serde_json::Value;
use std::borrow::Cow;
use std::fmt;

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum Segment<'a> {
    Field(Cow<'a, str>),
    Index(usize),
}

impl<'a> Segment<'a> {
    pub fn field(name: impl Into<Cow<'a, str>>) -> Self {
        Self::Field(name.into())
    }

    pub fn index(index: usize) -> Self {
        Self::Index(index)
    }

    /// Classify a dynamic JSON value as a path step.
    ///
    /// Strings become field names and non-negative integers become indices.
    /// Everything else (floats, negatives, booleans, null, containers) is an
    /// `UnsupportedSegment` error.
    pub fn try_from_value(value: &'a Value) -> Result<Self, Error> {
        match value {
            Value::String(name) => Ok(Self::Field(Cow::Borrowed(name.as_str()))),
            Value::Number(n) => n
                .as_u64()
                .and_then(|index| usize::try_from(index).ok())
                .map(Self::Index)
                .ok_or_else(|| unsupported(value)),
            other => Err(unsupported(other)),
        }
    }

    pub fn into_owned(self) -> Segment<'static> {
        match self {
            Self::Field(name) => Segment::Field(Cow::Owned(name.into_owned())),
            Self::Index(index) => Segment::Index(index),
        }
    }
}

fn unsupported(value: &Value) -> Error {
    Error::new(ErrorKind::UnsupportedSegment)
        .with_message("can not index by this value")
        .with_node(NodeKind::of(value))
        .with_value(value_preview(value))
}

impl<'a> From<&'a str> for Segment<'a> {
    fn from(value: &'a str) -> Self {
        Self::Field(Cow::Borrowed(value))
    }
}

impl<'a> From<&'a String> for Segment<'a> {
    fn from(value: &'a String) -> Self {
        Self::Field(Cow::Borrowed(value.as_str()))
    }
}

impl From<String> for Segment<'static> {
    fn from(value: String) -> Self {
        Self::Field(Cow::Owned(value))
    }
}

impl From<usize> for Segment<'static> {
    fn from(value: usize) -> Self {
        Self::Index(value)
    }
}

impl TryFrom<i64> for Segment<'static> {
    type Error = Error;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        usize::try_from(value).map(Self::Index).map_err(|_| {
            Error::new(ErrorKind::UnsupportedSegment)
                .with_message("index must be non-negative")
                .with_value(value.to_string())
        })
    }
}

impl TryFrom<i32> for Segment<'static> {
    type Error = Error;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::try_from(i64::from(value))
    }
}

impl fmt::Display for Segment<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Field(name) => write!(f, ".{name}"),
            Self::Index(index) => write!(f, "[{index}]"),
        }
    }
}

/// Convert dynamic path arguments, stopping at the first unsupported one.
pub fn segments_from_values(values: &[Value]) -> Result<Vec<Segment<'_>>, Error> {
    values.iter().map(Segment::try_from_value).collect()
}

pub fn display_path(path: &[Segment<'_>]) -> String {
    if path.is_empty() {
        return ".".to_string();
    }
    path.iter().map(Segment::to_string).collect()
}

/// Build a `Vec<Segment>` from mixed field-name and index arguments.
///
/// ```
/// use jsonq::path;
/// use jsonq::api::Segment;
///
/// let p = path!["collection", 1];
/// assert_eq!(p, vec![Segment::field("collection"), Segment::Index(1)]);
/// ```
#[macro_export]
macro_rules! path {
    () => {
        ::std::vec::Vec::<$crate::core::path::Segment<'static>>::new()
    };
    ($($seg:expr),+ $(,)?) => {
        ::std::vec![$($crate::core::path::Segment::from($seg)),+]
    };
}
