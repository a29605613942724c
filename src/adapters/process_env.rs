// SPDX-License-Identifier: MIT OR Apache-2.0

//! Process environment adapter.
//!
//! This module provides the adapter that reads variables from the environment
//! of the running process.

use crate::ports::EnvironmentSource;
use std::env;

/// Environment source backed by the process environment.
///
/// Every call reads the live environment; caching is the variable store's job.
///
/// # Examples
///
/// ```rust
/// use env_provider::adapters::ProcessEnvironment;
/// use env_provider::ports::EnvironmentSource;
///
/// let env = ProcessEnvironment::new();
/// assert_eq!(env.name(), "process");
/// assert!(!env.contains("ENV_PROVIDER_DOC_SURELY_UNSET"));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnvironment;

impl ProcessEnvironment {
    /// Creates a new process environment adapter.
    pub fn new() -> Self {
        Self
    }
}

impl EnvironmentSource for ProcessEnvironment {
    fn name(&self) -> &str {
        "process"
    }

    fn lookup(&self, name: &str) -> Option<String> {
        // A name containing '=' or NUL can never be set; std would panic on it.
        if name.is_empty() || name.contains(['=', '\0']) {
            return None;
        }

        let value = env::var_os(name)?;
        match value.into_string() {
            Ok(value) => Some(value),
            Err(raw) => {
                tracing::warn!(
                    "Environment variable {} is not valid Unicode; invalid sequences replaced",
                    name
                );
                Some(raw.to_string_lossy().into_owned())
            }
        }
    }

    fn contains(&self, name: &str) -> bool {
        if name.is_empty() || name.contains(['=', '\0']) {
            return false;
        }
        env::var_os(name).is_some()
    }
}
