// Copyright (c) 2021 James O. D. Hunt.
//
// SPDX-License-Identifier: Apache-2.0
//

use std::fmt;

use serde::ser::{Serialize, SerializeMap, Serializer};

/// A normalized argument value.
///
/// Value strings are converted into one of these variants when they are
/// valid literals (see [crate::parse_literal]); anything else stays a
/// [Value::Str].
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// The `None` literal.
    None,
    /// A boolean: either a flag or a `True`/`False` literal.
    Bool(bool),
    /// An integer literal or an occurrence count.
    Int(i64),
    /// A floating point literal.
    Float(f64),
    /// A quoted string literal, or the original text of a non-literal.
    Str(String),
    /// A `[...]` literal, or the values of a repeated argument.
    List(Vec<Value>),
    /// A `(...)` literal.
    Tuple(Vec<Value>),
    /// A `{a, b}` literal. Elements are unique.
    Set(Vec<Value>),
    /// A `{k: v}` literal. Keys are unique and keep their first position.
    Dict(Vec<(Value, Value)>),
}

impl Value {
    /// Returns the boolean, if this is a [Value::Bool].
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the integer, if this is a [Value::Int].
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Returns the number as a float for both [Value::Int] and [Value::Float].
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int(i) => Some(*i as f64),
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Returns the text, if this is a [Value::Str].
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the elements of a list, tuple or set.
    pub fn as_slice(&self) -> Option<&[Value]> {
        match self {
            Value::List(v) | Value::Tuple(v) | Value::Set(v) => Some(v),
            _ => None,
        }
    }

    /// Returns true for the `None` literal.
    pub fn is_none(&self) -> bool {
        matches!(self, Value::None)
    }

    /// Lists, sets and dicts cannot be set elements or dict keys.
    pub(crate) fn is_hashable(&self) -> bool {
        match self {
            Value::List(_) | Value::Set(_) | Value::Dict(_) => false,
            Value::Tuple(items) => items.iter().all(Value::is_hashable),
            _ => true,
        }
    }

    /// Equality of set elements and dict keys: numbers compare by value
    /// across [Value::Bool], [Value::Int] and [Value::Float], so `True`, `1`
    /// and `1.0` are the same key.
    pub(crate) fn same_key(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Bool(a), _) => Value::Int(*a as i64).same_key(other),
            (_, Value::Bool(b)) => self.same_key(&Value::Int(*b as i64)),
            (Value::Int(i), Value::Float(f)) | (Value::Float(f), Value::Int(i)) => {
                // Only whole floats inside the i64 range convert exactly.
                let min = i64::MIN as f64;
                f.fract() == 0.0 && *f >= min && *f < -min && *f as i64 == *i
            }
            (Value::Tuple(a), Value::Tuple(b)) => {
                a.len() == b.len() && a.iter().zip(b).all(|(x, y)| x.same_key(y))
            }
            _ => self == other,
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.into())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

fn write_seq(f: &mut fmt::Formatter, items: &[Value]) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{}", item)?;
    }

    Ok(())
}

fn write_quoted(f: &mut fmt::Formatter, s: &str) -> fmt::Result {
    let quote = if s.contains('\'') && !s.contains('"') {
        '"'
    } else {
        '\''
    };

    write!(f, "{}", quote)?;

    for c in s.chars() {
        match c {
            '\\' => write!(f, "\\\\")?,
            '\n' => write!(f, "\\n")?,
            '\r' => write!(f, "\\r")?,
            '\t' => write!(f, "\\t")?,
            c if c == quote => write!(f, "\\{}", c)?,
            c if (c as u32) < 0x20 || c as u32 == 0x7f => write!(f, "\\x{:02x}", c as u32)?,
            c => write!(f, "{}", c)?,
        }
    }

    write!(f, "{}", quote)
}

/// Formats the value back into literal syntax, so that
/// `parse_literal(&v.to_string()) == Some(v)` for any finite value.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Value::None => write!(f, "None"),
            Value::Bool(true) => write!(f, "True"),
            Value::Bool(false) => write!(f, "False"),
            Value::Int(i) => write!(f, "{}", i),
            // Debug always keeps a decimal point or exponent.
            Value::Float(x) => write!(f, "{:?}", x),
            Value::Str(s) => write_quoted(f, s),
            Value::List(items) => {
                write!(f, "[")?;
                write_seq(f, items)?;
                write!(f, "]")
            }
            Value::Tuple(items) => {
                write!(f, "(")?;
                write_seq(f, items)?;
                if items.len() == 1 {
                    write!(f, ",")?;
                }
                write!(f, ")")
            }
            Value::Set(items) if items.is_empty() => write!(f, "set()"),
            Value::Set(items) => {
                write!(f, "{{")?;
                write_seq(f, items)?;
                write!(f, "}}")
            }
            Value::Dict(entries) => {
                write!(f, "{{")?;
                for (i, (k, v)) in entries.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}: {}", k, v)?;
                }
                write!(f, "}}")
            }
        }
    }
}

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Value::None => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Int(i) => serializer.serialize_i64(*i),
            Value::Float(x) => serializer.serialize_f64(*x),
            Value::Str(s) => serializer.serialize_str(s),
            Value::List(items) | Value::Tuple(items) | Value::Set(items) => {
                serializer.collect_seq(items)
            }
            Value::Dict(entries) => {
                let mut map = serializer.serialize_map(Some(entries.len()))?;
                for (k, v) in entries {
                    // Most formats only allow string keys.
                    match k {
                        Value::Str(s) => map.serialize_entry(s, v)?,
                        other => map.serialize_entry(&other.to_string(), v)?,
                    }
                }
                map.end()
            }
        }
    }
}
