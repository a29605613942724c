// SPDX-License-Identifier: MIT OR Apache-2.0

//! Typed configuration values.
//!
//! A [`TypedValue`] is what the converter produces from a raw environment
//! string. It serializes into the host's generic structured value format,
//! which is plain JSON data.

use serde::Serialize;
use serde_json::{Map, Number, Value};
use std::fmt;

/// A converted configuration value.
///
/// # Examples
///
/// ```
/// use env_provider::domain::TypedValue;
///
/// let value = TypedValue::Number(8080.0);
/// assert_eq!(value.type_name(), "number");
/// assert_eq!(value.into_json(), serde_json::json!(8080.0));
/// ```
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum TypedValue {
    /// The raw value, unchanged
    String(String),
    /// A finite floating-point number
    Number(f64),
    /// `true`/`yes` or `false`/`no`
    Boolean(bool),
    /// A JSON object
    Object(Map<String, Value>),
    /// A JSON array
    Array(Vec<Value>),
}

impl TypedValue {
    /// Returns the name of the value's type.
    pub fn type_name(&self) -> &'static str {
        match self {
            TypedValue::String(_) => "string",
            TypedValue::Number(_) => "number",
            TypedValue::Boolean(_) => "boolean",
            TypedValue::Object(_) => "object",
            TypedValue::Array(_) => "array",
        }
    }

    /// Returns the string if this is a `String` value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            TypedValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the number if this is a `Number` value.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            TypedValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the boolean if this is a `Boolean` value.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            TypedValue::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Converts the value into a `serde_json::Value`.
    pub fn into_json(self) -> Value {
        match self {
            TypedValue::String(s) => Value::String(s),
            // Numbers are finite by construction; from_f64 only rejects NaN and infinities.
            TypedValue::Number(n) => Number::from_f64(n).map_or(Value::Null, Value::Number),
            TypedValue::Boolean(b) => Value::Bool(b),
            TypedValue::Object(map) => Value::Object(map),
            TypedValue::Array(items) => Value::Array(items),
        }
    }
}

impl From<TypedValue> for Value {
    fn from(value: TypedValue) -> Self {
        value.into_json()
    }
}

impl fmt::Display for TypedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypedValue::String(s) => f.write_str(s),
            TypedValue::Number(n) => write!(f, "{n}"),
            TypedValue::Boolean(b) => write!(f, "{b}"),
            TypedValue::Object(map) => write!(f, "{}", Value::Object(map.clone())),
            TypedValue::Array(items) => write!(f, "{}", Value::Array(items.clone())),
        }
    }
}
