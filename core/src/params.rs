//! Ordered request parameters, presence validation, and query-string
//! serialization.
//!
//! # Design
//! `Parameters` is an ordered list rather than a map: the service receives
//! the fields in exactly the order the caller inserted them, and that order
//! is part of the observable request. Re-inserting a key replaces its value
//! without moving it.
//!
//! The query string is built verbatim, with no percent-encoding. Datum names
//! such as `NAD83(1986)` reach the service exactly as written.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::NcatError;

/// A scalar parameter value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    Int(i64),
    Float(f64),
    Text(String),
    Bool(bool),
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamValue::Int(v) => write!(f, "{v}"),
            // f64's Display is the shortest round-trip form and drops a
            // trailing ".0", so 100.0 renders as "100".
            ParamValue::Float(v) => write!(f, "{v}"),
            ParamValue::Text(v) => f.write_str(v),
            ParamValue::Bool(true) => f.write_str("1"),
            ParamValue::Bool(false) => Ok(()),
        }
    }
}

impl From<&str> for ParamValue {
    fn from(v: &str) -> Self {
        ParamValue::Text(v.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(v: String) -> Self {
        ParamValue::Text(v)
    }
}

impl From<&String> for ParamValue {
    fn from(v: &String) -> Self {
        ParamValue::Text(v.clone())
    }
}

/// Widened through the shortest decimal form, so `0.1f32` renders as `0.1`
/// rather than `0.10000000149011612`.
impl From<f32> for ParamValue {
    fn from(v: f32) -> Self {
        ParamValue::Float(v.to_string().parse().unwrap_or(f64::from(v)))
    }
}

impl From<f64> for ParamValue {
    fn from(v: f64) -> Self {
        ParamValue::Float(v)
    }
}

impl From<bool> for ParamValue {
    fn from(v: bool) -> Self {
        ParamValue::Bool(v)
    }
}

macro_rules! int_param {
    ($($t:ty),*) => {
        $(
            impl From<$t> for ParamValue {
                fn from(v: $t) -> Self {
                    ParamValue::Int(i64::from(v))
                }
            }
        )*
    };
}

int_param!(i8, i16, i32, i64, u8, u16, u32);

// Wider integers stay exact: values outside the i64 range are kept as their
// decimal text, which renders identically in the query string.
macro_rules! wide_int_param {
    ($($t:ty),*) => {
        $(
            impl From<$t> for ParamValue {
                fn from(v: $t) -> Self {
                    i64::try_from(v).map_or_else(|_| ParamValue::Text(v.to_string()), ParamValue::Int)
                }
            }
        )*
    };
}

wide_int_param!(i128, isize, u64, u128, usize);

/// Caller-supplied request parameters, insertion order preserved.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<(String, ParamValue)>", into = "Vec<(String, ParamValue)>")]
pub struct Parameters {
    entries: Vec<(String, ParamValue)>,
}

impl Parameters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of `insert`.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Set `key` to `value`. An existing key keeps its position.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<ParamValue>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.iter().any(|(k, _)| k == key)
    }

    pub fn remove(&mut self, key: &str) -> Option<ParamValue> {
        let index = self.entries.iter().position(|(k, _)| k == key)?;
        Some(self.entries.remove(index).1)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Serialize as `key1=value1&key2=value2`, in insertion order, with no
    /// leading `?`, no trailing `&`, and no percent-encoding.
    pub fn to_query_string(&self) -> String {
        self.entries
            .iter()
            .map(|(k, v)| format!("{k}={v}"))
            .collect::<Vec<_>>()
            .join("&")
    }
}

impl<K: Into<String>, V: Into<ParamValue>> FromIterator<(K, V)> for Parameters {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Parameters::new();
        params.extend(iter);
        params
    }
}

impl<K: Into<String>, V: Into<ParamValue>> Extend<(K, V)> for Parameters {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (k, v) in iter {
            self.insert(k, v);
        }
    }
}

impl From<Vec<(String, ParamValue)>> for Parameters {
    fn from(entries: Vec<(String, ParamValue)>) -> Self {
        entries.into_iter().collect()
    }
}

impl From<Parameters> for Vec<(String, ParamValue)> {
    fn from(params: Parameters) -> Self {
        params.entries
    }
}

/// Check that every name in `required` is a key of `params`.
///
/// Presence is key membership only: `0`, `""` and `false` all count. The
/// first missing name, in `required` order, is reported.
pub fn check_required(required: &[&'static str], params: &Parameters) -> Result<(), NcatError> {
    match required.iter().find(|name| !params.contains_key(name)) {
        Some(name) => Err(NcatError::MissingParameter(*name)),
        None => Ok(()),
    }
}
