// SPDX-License-Identifier: MIT OR Apache-2.0

//! Variable store with a lifetime cache.
//!
//! The store reads a variable from its [`EnvironmentSource`] the first time it
//! is asked for, and serves the same raw string for every later request until
//! [`VariableStore::clear`] is called at shutdown. Changes to the environment
//! after the first read are deliberately not observed.

use crate::domain::{ProviderError, Result};
use crate::ports::EnvironmentSource;
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

/// Maximum size of a raw value, in bytes (1 MiB).
pub const MAX_VALUE_SIZE: usize = 1024 * 1024;

/// Caching reader of environment variables.
///
/// Safe to share between threads. Concurrent misses on the same name may both
/// read the source; the first insert wins and every caller gets the cached
/// string, so once any caller has observed a value all later callers observe
/// the same one.
pub struct VariableStore {
    source: Arc<dyn EnvironmentSource>,
    cache: RwLock<HashMap<String, String>>,
}

impl VariableStore {
    /// Creates an empty store over the given source.
    pub fn new(source: Arc<dyn EnvironmentSource>) -> Self {
        Self {
            source,
            cache: RwLock::new(HashMap::new()),
        }
    }

    /// Returns the raw value of `name`.
    ///
    /// # Errors
    ///
    /// * `NotFound` - the variable is unset
    /// * `TooLarge` - the value exceeds [`MAX_VALUE_SIZE`]; it is not cached
    pub fn fetch(&self, name: &str) -> Result<String> {
        if let Some(value) = self
            .cache
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(name)
        {
            tracing::debug!("Cache hit for {}", name);
            return Ok(value.clone());
        }

        tracing::debug!("Cache miss for {}; reading from {}", name, self.source.name());
        let value = self
            .source
            .lookup(name)
            .ok_or_else(|| ProviderError::NotFound {
                name: name.to_string(),
            })?;

        if value.len() > MAX_VALUE_SIZE {
            return Err(ProviderError::TooLarge {
                name: name.to_string(),
                size: value.len(),
                max: MAX_VALUE_SIZE,
            });
        }

        let mut cache = self.cache.write().unwrap_or_else(PoisonError::into_inner);
        Ok(cache.entry(name.to_string()).or_insert(value).clone())
    }

    /// Removes every cached entry.
    pub fn clear(&self) {
        let mut cache = self.cache.write().unwrap_or_else(PoisonError::into_inner);
        tracing::debug!("Clearing {} cached variables", cache.len());
        cache.clear();
    }

    /// Returns the number of cached entries.
    pub fn cached_len(&self) -> usize {
        self.cache.read().unwrap_or_else(PoisonError::into_inner).len()
    }
}

impl std::fmt::Debug for VariableStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VariableStore")
            .field("source", &self.source.name())
            .field("cached", &self.cached_len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::MapEnvironment;
    use std::thread;

    fn store_with(env: &Arc<MapEnvironment>) -> VariableStore {
        VariableStore::new(env.clone())
    }

    #[test]
    fn test_fetch_reads_and_caches() {
        let env = Arc::new(MapEnvironment::new().with_var("DATABASE_HOST", "localhost"));
        let store = store_with(&env);

        assert_eq!(store.fetch("DATABASE_HOST").unwrap(), "localhost");
        assert_eq!(store.cached_len(), 1);
    }

    #[test]
    fn test_fetch_serves_stale_value() {
        let env = Arc::new(MapEnvironment::new().with_var("TOKEN", "first"));
        let store = store_with(&env);

        assert_eq!(store.fetch("TOKEN").unwrap(), "first");
        env.set("TOKEN", "second");
        env.remove("TOKEN");
        for _ in 0..3 {
            assert_eq!(store.fetch("TOKEN").unwrap(), "first");
        }
    }

    #[test]
    fn test_fetch_missing_is_not_found() {
        let env = Arc::new(MapEnvironment::new());
        let store = store_with(&env);

        let err = store.fetch("MISSING").unwrap_err();
        assert!(matches!(err, ProviderError::NotFound { ref name } if name == "MISSING"));
        assert_eq!(store.cached_len(), 0);
    }

    #[test]
    fn test_not_found_is_not_cached() {
        let env = Arc::new(MapEnvironment::new());
        let store = store_with(&env);

        assert!(store.fetch("LATE").is_err());
        env.set("LATE", "now set");
        assert_eq!(store.fetch("LATE").unwrap(), "now set");
    }

    #[test]
    fn test_empty_value_is_found() {
        let env = Arc::new(MapEnvironment::new().with_var("EMPTY", ""));
        let store = store_with(&env);
        assert_eq!(store.fetch("EMPTY").unwrap(), "");
    }

    #[test]
    fn test_size_boundary() {
        let env = Arc::new(
            MapEnvironment::new()
                .with_var("AT_LIMIT", "a".repeat(MAX_VALUE_SIZE))
                .with_var("OVER_LIMIT", "a".repeat(MAX_VALUE_SIZE + 1)),
        );
        let store = store_with(&env);

        assert_eq!(store.fetch("AT_LIMIT").unwrap().len(), MAX_VALUE_SIZE);
        let err = store.fetch("OVER_LIMIT").unwrap_err();
        assert!(matches!(
            err,
            ProviderError::TooLarge { ref name, size, max }
                if name == "OVER_LIMIT" && size == MAX_VALUE_SIZE + 1 && max == MAX_VALUE_SIZE
        ));
        assert_eq!(store.cached_len(), 1);
    }

    #[test]
    fn test_clear_forces_reread() {
        let env = Arc::new(MapEnvironment::new().with_var("KEY", "old"));
        let store = store_with(&env);

        store.fetch("KEY").unwrap();
        env.set("KEY", "new");
        store.clear();
        assert_eq!(store.cached_len(), 0);
        assert_eq!(store.fetch("KEY").unwrap(), "new");
    }

    #[test]
    fn test_concurrent_fetches_agree() {
        let env = Arc::new(MapEnvironment::new().with_var("SHARED", "value"));
        let store = Arc::new(store_with(&env));

        let handles: Vec<_> = (0..16)
            .map(|_| {
                let store = Arc::clone(&store);
                thread::spawn(move || store.fetch("SHARED").unwrap())
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), "value");
        }
        assert_eq!(store.cached_len(), 1);
    }
}
