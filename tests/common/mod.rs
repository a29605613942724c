// SPDX-License-Identifier: MIT OR Apache-2.0

//! Shared helpers for the integration tests.

#![allow(dead_code)]

use env_provider::adapters::MapEnvironment;
use env_provider::ports::EnvironmentSource;
use env_provider::prelude::*;
use serde_json::Value;
use std::env;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Sets process environment variables and removes them on drop.
pub struct EnvGuard {
    keys: Vec<String>,
}

impl EnvGuard {
    pub fn new() -> Self {
        EnvGuard { keys: Vec::new() }
    }

    pub fn set(&mut self, key: &str, value: &str) {
        env::set_var(key, value);
        self.keys.push(key.to_string());
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        for key in &self.keys {
            env::remove_var(key);
        }
    }
}

/// An environment that counts how often it is read.
#[derive(Debug, Default)]
pub struct CountingEnvironment {
    inner: MapEnvironment,
    lookups: AtomicUsize,
}

impl CountingEnvironment {
    pub fn new(vars: &[(&str, &str)]) -> Self {
        let inner = MapEnvironment::new();
        for (name, value) in vars {
            inner.set(*name, *value);
        }
        Self {
            inner,
            lookups: AtomicUsize::new(0),
        }
    }

    pub fn set(&self, name: &str, value: &str) {
        self.inner.set(name, value);
    }

    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }
}

impl EnvironmentSource for CountingEnvironment {
    fn name(&self) -> &str {
        "counting"
    }

    fn lookup(&self, name: &str) -> Option<String> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        self.inner.lookup(name)
    }
}

/// Routes provider logs to the test harness output.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}

/// Builds a provider over an in-memory environment and initializes it.
pub fn ready_provider(
    vars: &[(&str, &str)],
    config: Value,
) -> (EnvironmentProvider, Arc<CountingEnvironment>) {
    init_tracing();
    let env = Arc::new(CountingEnvironment::new(vars));
    let provider = EnvironmentProvider::with_source(Arc::clone(&env));
    provider
        .init("test", &config)
        .expect("provider should initialize");
    (provider, env)
}
