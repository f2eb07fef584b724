//! Converted values.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::Representation;

/// One value or an ordered sequence of values.
///
/// Decided once when the input is parsed: a single token is a `Scalar`,
/// several whitespace-separated tokens are a `Sequence`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MaybeSeq<T> {
    Scalar(T),
    Sequence(Vec<T>),
}

impl<T> MaybeSeq<T> {
    /// Builds a scalar from a single-element vector and a sequence otherwise.
    ///
    /// Returns `None` for an empty vector.
    pub fn from_vec(mut values: Vec<T>) -> Option<Self> {
        match values.len() {
            0 => None,
            1 => values.pop().map(MaybeSeq::Scalar),
            _ => Some(MaybeSeq::Sequence(values)),
        }
    }

    pub fn as_slice(&self) -> &[T] {
        match self {
            MaybeSeq::Scalar(value) => std::slice::from_ref(value),
            MaybeSeq::Sequence(values) => values,
        }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.as_slice().iter()
    }

}

impl<'a, T> IntoIterator for &'a MaybeSeq<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: fmt::Display> fmt::Display for MaybeSeq<T> {
    /// Elements separated by a single space.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, value) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{value}")?;
        }
        Ok(())
    }
}

/// A value in one of the five representations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum ConvertibleValue {
    Text(String),
    Integer(MaybeSeq<i64>),
    /// Hex digits, possibly several space-separated tokens.
    Hex(String),
    /// `0`/`1` digits, possibly several space-separated tokens.
    Binary(String),
    Base64(String),
}

impl ConvertibleValue {
    pub fn representation(&self) -> Representation {
        match self {
            ConvertibleValue::Text(_) => Representation::Ascii,
            ConvertibleValue::Integer(_) => Representation::Decimal,
            ConvertibleValue::Hex(_) => Representation::Hex,
            ConvertibleValue::Binary(_) => Representation::Binary,
            ConvertibleValue::Base64(_) => Representation::Base64,
        }
    }

    /// The string payload, for every variant except `Integer`.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ConvertibleValue::Text(s)
            | ConvertibleValue::Hex(s)
            | ConvertibleValue::Binary(s)
            | ConvertibleValue::Base64(s) => Some(s),
            ConvertibleValue::Integer(_) => None,
        }
    }

    pub fn as_integer(&self) -> Option<&MaybeSeq<i64>> {
        match self {
            ConvertibleValue::Integer(n) => Some(n),
            _ => None,
        }
    }
}

impl fmt::Display for ConvertibleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConvertibleValue::Integer(n) => fmt::Display::fmt(n, f),
            ConvertibleValue::Text(s)
            | ConvertibleValue::Hex(s)
            | ConvertibleValue::Binary(s)
            | ConvertibleValue::Base64(s) => f.write_str(s),
        }
    }
}
