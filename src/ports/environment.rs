// SPDX-License-Identifier: MIT OR Apache-2.0

//! Environment source trait definition.
//!
//! This module defines the `EnvironmentSource` trait, the port through which
//! the provider reads variables. The process environment is the production
//! implementation; an in-memory map stands in for it in tests and embedders.

/// A read-only source of environment variables.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync`: the variable store calls `lookup`
/// from whichever worker thread serves a fetch.
///
/// # Examples
///
/// ```rust
/// use env_provider::ports::EnvironmentSource;
///
/// struct Fixed;
///
/// impl EnvironmentSource for Fixed {
///     fn name(&self) -> &str {
///         "fixed"
///     }
///
///     fn lookup(&self, name: &str) -> Option<String> {
///         (name == "HOME").then(|| "/root".to_string())
///     }
/// }
///
/// assert!(Fixed.contains("HOME"));
/// assert_eq!(Fixed.lookup("PATH"), None);
/// ```
pub trait EnvironmentSource: Send + Sync {
    /// Returns a short identifier for logging, like `"process"`.
    fn name(&self) -> &str;

    /// Reads a variable.
    ///
    /// Returns `None` when the variable is unset, which is distinct from
    /// `Some(String::new())` for a variable set to the empty string. Name
    /// matching follows the platform: case-sensitive on POSIX,
    /// case-insensitive on Windows.
    fn lookup(&self, name: &str) -> Option<String>;

    /// Returns true if the variable is set, even to the empty string.
    fn contains(&self, name: &str) -> bool {
        self.lookup(name).is_some()
    }
}

impl<T: EnvironmentSource + ?Sized> EnvironmentSource for std::sync::Arc<T> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn lookup(&self, name: &str) -> Option<String> {
        (**self).lookup(name)
    }

    fn contains(&self, name: &str) -> bool {
        (**self).contains(name)
    }
}
