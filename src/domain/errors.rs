// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the environment provider.
//!
//! Every failure the provider can report is a variant of [`ProviderError`].
//! Each variant carries the variable name, path segment, or configuration key
//! that triggered it, and [`ProviderError::kind`] gives a fieldless
//! [`ErrorKind`] for matching without destructuring.

use crate::domain::lifecycle::LifecycleState;
use std::fmt;
use thiserror::Error;

/// The main error type for provider operations.
///
/// All errors are terminal for the request that produced them. None of them
/// is retried internally, since every failure is deterministic for a given
/// environment and input.
///
/// # Examples
///
/// ```
/// use env_provider::domain::errors::{ErrorKind, ProviderError};
///
/// let err = ProviderError::NotFound {
///     name: "DATABASE_HOST".to_string(),
/// };
/// assert_eq!(err.kind(), ErrorKind::NotFound);
/// assert_eq!(err.to_string(), "environment variable not found: DATABASE_HOST");
/// ```
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ProviderError {
    /// The configuration supplied to `init` is invalid.
    #[error("invalid configuration for '{key}': {message}")]
    InvalidConfig {
        /// The configuration key that failed validation
        key: String,
        /// What was wrong with it
        message: String,
    },

    /// One or more required variables are absent from the environment.
    #[error("required environment variables missing: {}", .names.join(", "))]
    MissingRequiredVariables {
        /// Every missing name, in configuration order
        names: Vec<String>,
    },

    /// The lookup path has no segments.
    #[error("path cannot be empty")]
    EmptyPath,

    /// A path segment is empty or whitespace-only.
    #[error("path[{index}] cannot be empty")]
    EmptySegment {
        /// Index of the offending segment
        index: usize,
    },

    /// The variable is unset, or rejected by the prefix filter.
    #[error("environment variable not found: {name}")]
    NotFound {
        /// The resolved variable name
        name: String,
    },

    /// The raw value exceeds the maximum size.
    #[error("environment variable '{name}' is {size} bytes, exceeding the maximum of {max} bytes")]
    TooLarge {
        /// The resolved variable name (empty when unknown)
        name: String,
        /// Size of the value in bytes
        size: usize,
        /// The maximum permitted size in bytes
        max: usize,
    },

    /// The value looks like JSON but does not parse.
    #[error("environment variable '{name}' contains invalid JSON: {source}")]
    InvalidJson {
        /// The resolved variable name (empty when unknown)
        name: String,
        /// The parser diagnostic
        #[source]
        source: serde_json::Error,
    },

    /// The JSON value nests deeper than the permitted maximum.
    #[error("environment variable '{name}' contains JSON nested deeper than {max_depth} levels")]
    JsonTooDeep {
        /// The resolved variable name (empty when unknown)
        name: String,
        /// The maximum permitted depth
        max_depth: usize,
    },

    /// The operation is not legal in the provider's current state.
    #[error("{operation} is not permitted while the provider is {state}")]
    FailedPrecondition {
        /// The attempted operation
        operation: &'static str,
        /// The state the provider was in
        state: LifecycleState,
    },
}

/// The kind of a [`ProviderError`], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ErrorKind {
    /// See [`ProviderError::InvalidConfig`]
    InvalidConfig,
    /// See [`ProviderError::MissingRequiredVariables`]
    MissingRequiredVariable,
    /// See [`ProviderError::EmptyPath`]
    EmptyPath,
    /// See [`ProviderError::EmptySegment`]
    EmptySegment,
    /// See [`ProviderError::NotFound`]
    NotFound,
    /// See [`ProviderError::TooLarge`]
    TooLarge,
    /// See [`ProviderError::InvalidJson`]
    InvalidJson,
    /// See [`ProviderError::JsonTooDeep`]
    JsonTooDeep,
    /// See [`ProviderError::FailedPrecondition`]
    FailedPrecondition,
}

/// Status vocabulary of the request/response transport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    /// The request or configuration was rejected.
    InvalidArgument,
    /// The variable does not exist.
    NotFound,
    /// The provider is not in a state that permits the call.
    FailedPrecondition,
}

impl ErrorKind {
    /// Maps the kind onto the transport status it is reported with.
    pub fn status_code(self) -> StatusCode {
        match self {
            ErrorKind::NotFound => StatusCode::NotFound,
            ErrorKind::FailedPrecondition => StatusCode::FailedPrecondition,
            _ => StatusCode::InvalidArgument,
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

impl ProviderError {
    /// Returns the kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ProviderError::InvalidConfig { .. } => ErrorKind::InvalidConfig,
            ProviderError::MissingRequiredVariables { .. } => ErrorKind::MissingRequiredVariable,
            ProviderError::EmptyPath => ErrorKind::EmptyPath,
            ProviderError::EmptySegment { .. } => ErrorKind::EmptySegment,
            ProviderError::NotFound { .. } => ErrorKind::NotFound,
            ProviderError::TooLarge { .. } => ErrorKind::TooLarge,
            ProviderError::InvalidJson { .. } => ErrorKind::InvalidJson,
            ProviderError::JsonTooDeep { .. } => ErrorKind::JsonTooDeep,
            ProviderError::FailedPrecondition { .. } => ErrorKind::FailedPrecondition,
        }
    }

    /// Creates an `InvalidConfig` error for the given key.
    pub fn invalid_config(key: impl Into<String>, message: impl Into<String>) -> Self {
        ProviderError::InvalidConfig {
            key: key.into(),
            message: message.into(),
        }
    }

    /// Attaches a variable name to errors raised before the name was known.
    ///
    /// The converter works on raw values only; the provider calls this once it
    /// knows which variable the value came from. Errors that already carry a
    /// name are returned unchanged.
    pub fn with_name(self, var_name: &str) -> Self {
        match self {
            ProviderError::TooLarge { name, size, max } if name.is_empty() => {
                ProviderError::TooLarge {
                    name: var_name.to_string(),
                    size,
                    max,
                }
            }
            ProviderError::InvalidJson { name, source } if name.is_empty() => {
                ProviderError::InvalidJson {
                    name: var_name.to_string(),
                    source,
                }
            }
            ProviderError::JsonTooDeep { name, max_depth } if name.is_empty() => {
                ProviderError::JsonTooDeep {
                    name: var_name.to_string(),
                    max_depth,
                }
            }
            other => other,
        }
    }
}

/// A specialized Result type for provider operations.
pub type Result<T> = std::result::Result<T, ProviderError>;
