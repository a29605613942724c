// SPDX-License-Identifier: MIT OR Apache-2.0

//! Raw string to typed value conversion.
//!
//! Precedence is fixed: JSON (sniffed by a leading `{` or `[`), then number,
//! then boolean, then string. `"1"` is therefore always the number 1, never
//! `true`.

use crate::domain::{ProviderError, Result, TypedValue};
use crate::service::store::MAX_VALUE_SIZE;
use serde_json::Value;

/// Maximum JSON nesting depth.
///
/// The depth of a value is the number of objects and arrays enclosing it; the
/// top-level value has depth 0.
pub const MAX_JSON_DEPTH: usize = 100;

/// Converts a raw value into a typed value.
///
/// Errors carry an empty variable name; the caller fills it in with
/// [`ProviderError::with_name`].
///
/// # Errors
///
/// * `TooLarge` - the value exceeds the maximum size
/// * `InvalidJson` - JSON parsing is enabled and a value starting with `{` or
///   `[` does not parse; there is no fallback to string
/// * `JsonTooDeep` - the JSON nests deeper than [`MAX_JSON_DEPTH`]
///
/// # Examples
///
/// ```
/// use env_provider::domain::TypedValue;
/// use env_provider::service::converter::convert;
///
/// assert_eq!(convert("42", true, true).unwrap(), TypedValue::Number(42.0));
/// assert_eq!(convert("yes", true, true).unwrap(), TypedValue::Boolean(true));
/// assert_eq!(convert("1", true, true).unwrap(), TypedValue::Number(1.0));
/// assert_eq!(convert("42", false, true).unwrap(), TypedValue::String("42".into()));
/// ```
pub fn convert(
    raw: &str,
    enable_type_conversion: bool,
    enable_json_parsing: bool,
) -> Result<TypedValue> {
    if raw.len() > MAX_VALUE_SIZE {
        return Err(ProviderError::TooLarge {
            name: String::new(),
            size: raw.len(),
            max: MAX_VALUE_SIZE,
        });
    }

    if raw.is_empty() {
        return Ok(TypedValue::String(String::new()));
    }

    let trimmed = raw.trim();
    if enable_json_parsing && (trimmed.starts_with('{') || trimmed.starts_with('[')) {
        return parse_json(raw);
    }

    if !enable_type_conversion {
        return Ok(TypedValue::String(raw.to_string()));
    }

    if let Some(n) = parse_number(raw) {
        return Ok(TypedValue::Number(n));
    }

    if let Some(b) = parse_bool(raw) {
        return Ok(TypedValue::Boolean(b));
    }

    Ok(TypedValue::String(raw.to_string()))
}

/// Parses a finite floating-point literal: integers, decimals and exponents.
///
/// `inf`, `NaN` and literals that overflow to infinity are not numbers.
pub fn parse_number(raw: &str) -> Option<f64> {
    raw.parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Parses `true`/`yes` and `false`/`no`, case-insensitively, ignoring
/// surrounding whitespace.
pub fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_lowercase().as_str() {
        "true" | "yes" => Some(true),
        "false" | "no" => Some(false),
        _ => None,
    }
}

fn parse_json(raw: &str) -> Result<TypedValue> {
    // Measure depth before parsing: serde_json's own recursion limit would
    // otherwise turn very deep input into a syntax error.
    if max_nesting_depth(raw) > MAX_JSON_DEPTH {
        return Err(ProviderError::JsonTooDeep {
            name: String::new(),
            max_depth: MAX_JSON_DEPTH,
        });
    }

    let value: Value = serde_json::from_str(raw).map_err(|source| ProviderError::InvalidJson {
        name: String::new(),
        source,
    })?;

    match value {
        Value::Object(map) => Ok(TypedValue::Object(map)),
        Value::Array(items) => Ok(TypedValue::Array(items)),
        // Unreachable after the prefix sniff: a document starting with '{' or
        // '[' that parses is always an object or array.
        other => Ok(TypedValue::String(other.to_string())),
    }
}

/// Returns the greatest depth of any value in a JSON document.
///
/// Works on the raw text so it is safe on input too deep to parse. Every token
/// that starts a value or a key is counted at the current container depth;
/// keys sit at the same depth as their values.
fn max_nesting_depth(text: &str) -> usize {
    let mut depth = 0usize;
    let mut max = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for b in text.bytes() {
        if in_string {
            match (escaped, b) {
                (true, _) => escaped = false,
                (false, b'\\') => escaped = true,
                (false, b'"') => in_string = false,
                _ => {}
            }
            continue;
        }

        match b {
            b'{' | b'[' => {
                max = max.max(depth);
                depth += 1;
            }
            b'}' | b']' => depth = depth.saturating_sub(1),
            b',' | b':' | b' ' | b'\t' | b'\n' | b'\r' => {}
            b'"' => {
                max = max.max(depth);
                in_string = true;
            }
            _ => max = max.max(depth),
        }
    }

    max
}
