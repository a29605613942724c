// SPDX-License-Identifier: MIT OR Apache-2.0

//! In-memory environment adapter.

use crate::ports::EnvironmentSource;
use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

/// Environment source backed by an in-memory map.
///
/// Useful for tests and for hosts that want to serve a fixed set of variables
/// without touching the process environment. Variables can be changed after
/// construction through a shared reference, which is how tests observe that
/// the provider keeps serving the value it read first.
///
/// Names are matched case-sensitively on every platform.
///
/// # Examples
///
/// ```rust
/// use env_provider::adapters::MapEnvironment;
/// use env_provider::ports::EnvironmentSource;
///
/// let env = MapEnvironment::new().with_var("API_KEY", "secret");
/// assert_eq!(env.lookup("API_KEY").as_deref(), Some("secret"));
///
/// env.set("API_KEY", "rotated");
/// assert_eq!(env.lookup("API_KEY").as_deref(), Some("rotated"));
/// ```
#[derive(Debug, Default)]
pub struct MapEnvironment {
    vars: RwLock<HashMap<String, String>>,
}

impl MapEnvironment {
    /// Creates an empty environment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an environment holding the given variables.
    pub fn with_values(values: HashMap<String, String>) -> Self {
        Self {
            vars: RwLock::new(values),
        }
    }

    /// Adds a variable, builder style.
    pub fn with_var(self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(name, value);
        self
    }

    /// Sets or replaces a variable.
    pub fn set(&self, name: impl Into<String>, value: impl Into<String>) {
        self.vars
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(name.into(), value.into());
    }

    /// Removes a variable.
    pub fn remove(&self, name: &str) {
        self.vars
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(name);
    }

    /// Returns the number of variables.
    pub fn len(&self) -> usize {
        self.vars.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    /// Returns true if no variables are set.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl EnvironmentSource for MapEnvironment {
    fn name(&self) -> &str {
        "map"
    }

    fn lookup(&self, name: &str) -> Option<String> {
        self.vars
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(name)
            .cloned()
    }
}
