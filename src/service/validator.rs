// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration validation.
//!
//! Turns a deserialized [`RawConfig`] into a [`ProviderConfig`]. The rules are
//! checked in a fixed order and the first failure is reported:
//!
//! 1. `case_transform` is `upper`, `lower` or `preserve`
//! 2. `prefix_mode` is `prepend` or `filter_only`
//! 3. `separator` is exactly one character
//! 4. no entry of `required_variables` is empty or whitespace-only
//!
//! Whether required variables exist is checked by the provider at init, not
//! here; validation has no side effects.

use crate::domain::{CaseTransform, PrefixMode, ProviderConfig, ProviderError, RawConfig, Result};

/// Validates a raw configuration.
///
/// # Examples
///
/// ```
/// use env_provider::domain::{CaseTransform, RawConfig};
/// use env_provider::service::validator::validate;
///
/// let raw = RawConfig {
///     case_transform: "lower".to_string(),
///     ..RawConfig::default()
/// };
/// let config = validate(&raw).unwrap();
/// assert_eq!(config.case_transform, CaseTransform::Lower);
/// assert_eq!(config.separator, '_');
/// ```
pub fn validate(raw: &RawConfig) -> Result<ProviderConfig> {
    let case_transform = CaseTransform::parse(&raw.case_transform).ok_or_else(|| {
        ProviderError::invalid_config(
            "case_transform",
            format!(
                "invalid case_transform: {:?} (must be upper, lower, or preserve)",
                raw.case_transform
            ),
        )
    })?;

    let prefix_mode = PrefixMode::parse(&raw.prefix_mode).ok_or_else(|| {
        ProviderError::invalid_config(
            "prefix_mode",
            format!(
                "invalid prefix_mode: {:?} (must be prepend or filter_only)",
                raw.prefix_mode
            ),
        )
    })?;

    let separator = single_char(&raw.separator).ok_or_else(|| {
        ProviderError::invalid_config(
            "separator",
            format!("separator must be a single character, got: {:?}", raw.separator),
        )
    })?;

    if let Some(index) = raw
        .required_variables
        .iter()
        .position(|name| name.trim().is_empty())
    {
        return Err(ProviderError::invalid_config(
            format!("required_variables[{index}]"),
            "required variable name is empty",
        ));
    }

    Ok(ProviderConfig {
        separator,
        case_transform,
        prefix: raw.prefix.clone(),
        prefix_mode,
        required_variables: raw.required_variables.clone(),
        enable_type_conversion: raw.enable_type_conversion,
        enable_json_parsing: raw.enable_json_parsing,
    })
}

/// Returns the only character of `s`, counting characters rather than bytes.
fn single_char(s: &str) -> Option<char> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}
