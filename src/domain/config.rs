// SPDX-License-Identifier: MIT OR Apache-2.0

//! Provider configuration.
//!
//! Configuration arrives from the host as a generic structured map. It is
//! deserialized in one step into [`RawConfig`], with defaults filled in for
//! every missing field, and then validated into the immutable
//! [`ProviderConfig`] by [`crate::service::validator::validate`].

use crate::domain::errors::{ProviderError, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Configuration keys recognised by the provider.
///
/// `alias`, `type` and `version` are owned by the host and never read here.
pub const CONFIG_FIELDS: [&str; 7] = [
    "separator",
    "case_transform",
    "prefix",
    "prefix_mode",
    "required_variables",
    "enable_type_conversion",
    "enable_json_parsing",
];

/// Configuration as supplied by the host, before validation.
///
/// Every field is optional in the input; missing fields take the defaults
/// shown below and unknown fields are ignored.
///
/// | field | default |
/// |---|---|
/// | `separator` | `"_"` |
/// | `case_transform` | `"upper"` |
/// | `prefix` | `""` |
/// | `prefix_mode` | `"prepend"` |
/// | `required_variables` | `[]` |
/// | `enable_type_conversion` | `true` |
/// | `enable_json_parsing` | `true` |
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawConfig {
    /// Joins path segments; must be exactly one character
    pub separator: String,
    /// One of `upper`, `lower`, `preserve`
    pub case_transform: String,
    /// Prefix string, may be empty
    pub prefix: String,
    /// One of `prepend`, `filter_only`
    pub prefix_mode: String,
    /// Variables that must exist at init time
    pub required_variables: Vec<String>,
    /// Enables number and boolean conversion
    pub enable_type_conversion: bool,
    /// Enables JSON object/array parsing
    pub enable_json_parsing: bool,
}

impl Default for RawConfig {
    fn default() -> Self {
        Self {
            separator: "_".to_string(),
            case_transform: "upper".to_string(),
            prefix: String::new(),
            prefix_mode: "prepend".to_string(),
            required_variables: Vec::new(),
            enable_type_conversion: true,
            enable_json_parsing: true,
        }
    }
}

impl RawConfig {
    /// Deserializes a structured configuration map.
    ///
    /// `null` is treated as an empty map, and a field set to `null` takes its
    /// default. A field with the wrong type fails with
    /// [`ProviderError::InvalidConfig`] naming that field.
    ///
    /// # Examples
    ///
    /// ```
    /// use env_provider::domain::config::RawConfig;
    /// use serde_json::json;
    ///
    /// let raw = RawConfig::from_value(&json!({"prefix": "APP_", "alias": "ignored"})).unwrap();
    /// assert_eq!(raw.prefix, "APP_");
    /// assert_eq!(raw.separator, "_");
    /// ```
    pub fn from_value(value: &Value) -> Result<Self> {
        let map = match value {
            Value::Null => return Ok(Self::default()),
            Value::Object(map) => map,
            other => {
                return Err(ProviderError::invalid_config(
                    "config",
                    format!("expected a map, got {}", json_type_name(other)),
                ))
            }
        };

        let map: Map<String, Value> = map
            .iter()
            .filter(|(_, v)| !v.is_null())
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();

        serde_json::from_value(Value::Object(map.clone())).map_err(|e| {
            let key = offending_field(&map).unwrap_or("config");
            ProviderError::invalid_config(key, e.to_string())
        })
    }
}

/// Finds the first recognised field whose value does not deserialize.
fn offending_field(map: &Map<String, Value>) -> Option<&'static str> {
    CONFIG_FIELDS.into_iter().find(|field| {
        map.get(*field).is_some_and(|v| {
            let mut single = Map::new();
            single.insert((*field).to_string(), v.clone());
            serde_json::from_value::<RawConfig>(Value::Object(single)).is_err()
        })
    })
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "a map",
    }
}

/// Case rule applied to each path segment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum CaseTransform {
    /// Full Unicode uppercase mapping
    #[default]
    Upper,
    /// Full Unicode lowercase mapping
    Lower,
    /// Segments are used unchanged
    Preserve,
}

impl CaseTransform {
    /// Parses the configuration spelling (`upper`, `lower`, `preserve`).
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "upper" => Some(CaseTransform::Upper),
            "lower" => Some(CaseTransform::Lower),
            "preserve" => Some(CaseTransform::Preserve),
            _ => None,
        }
    }

    /// Returns the configuration spelling.
    pub fn as_str(self) -> &'static str {
        match self {
            CaseTransform::Upper => "upper",
            CaseTransform::Lower => "lower",
            CaseTransform::Preserve => "preserve",
        }
    }

    /// Applies the rule to a single segment.
    pub fn apply(self, segment: &str) -> String {
        match self {
            CaseTransform::Upper => segment.to_uppercase(),
            CaseTransform::Lower => segment.to_lowercase(),
            CaseTransform::Preserve => segment.to_string(),
        }
    }
}

impl fmt::Display for CaseTransform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How the configured prefix is used.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum PrefixMode {
    /// The prefix is concatenated onto every resolved name.
    #[default]
    Prepend,
    /// Names are left as resolved; those not starting with the prefix are rejected.
    FilterOnly,
}

impl PrefixMode {
    /// Parses the configuration spelling (`prepend`, `filter_only`).
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "prepend" => Some(PrefixMode::Prepend),
            "filter_only" => Some(PrefixMode::FilterOnly),
            _ => None,
        }
    }

    /// Returns the configuration spelling.
    pub fn as_str(self) -> &'static str {
        match self {
            PrefixMode::Prepend => "prepend",
            PrefixMode::FilterOnly => "filter_only",
        }
    }
}

impl fmt::Display for PrefixMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validated, immutable provider configuration.
///
/// Produced by [`crate::service::validator::validate`]; never mutated after
/// init. A later successful init would replace it wholesale.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProviderConfig {
    /// Joins path segments
    pub separator: char,
    /// Case rule for each segment
    pub case_transform: CaseTransform,
    /// Prefix, may be empty
    pub prefix: String,
    /// Prefix policy
    pub prefix_mode: PrefixMode,
    /// Variables that must exist at init time
    pub required_variables: Vec<String>,
    /// Enables number and boolean conversion
    pub enable_type_conversion: bool,
    /// Enables JSON object/array parsing
    pub enable_json_parsing: bool,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            separator: '_',
            case_transform: CaseTransform::Upper,
            prefix: String::new(),
            prefix_mode: PrefixMode::Prepend,
            required_variables: Vec::new(),
            enable_type_conversion: true,
            enable_json_parsing: true,
        }
    }
}

impl ProviderConfig {
    /// Returns true if `name` passes the prefix filter.
    ///
    /// Only meaningful in [`PrefixMode::FilterOnly`]; an empty prefix accepts
    /// everything. The comparison is a literal, case-sensitive byte prefix
    /// match.
    pub fn passes_prefix_filter(&self, name: &str) -> bool {
        match self.prefix_mode {
            PrefixMode::Prepend => true,
            PrefixMode::FilterOnly => self.prefix.is_empty() || name.starts_with(&self.prefix),
        }
    }
}
