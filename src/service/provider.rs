// SPDX-License-Identifier: MIT OR Apache-2.0

//! The environment provider: lifecycle control and the fetch pipeline.
//!
//! [`EnvironmentProvider`] owns the validated configuration, the resolver and
//! the variable store, and gates every operation on its lifecycle state.

use crate::adapters::ProcessEnvironment;
use crate::domain::{
    HealthReport, LifecycleState, Lookup, LookupPath, ProviderConfig, ProviderError,
    ProviderInfo, ProviderService, RawConfig, Result, TypedValue,
};
use crate::ports::EnvironmentSource;
use crate::service::converter;
use crate::service::resolver::PathResolver;
use crate::service::store::VariableStore;
use crate::service::validator;
use serde_json::Value;
use std::sync::{Arc, Mutex, PoisonError, RwLock};

/// Everything built by a successful init.
#[derive(Debug)]
struct Runtime {
    config: ProviderConfig,
    resolver: PathResolver,
    store: VariableStore,
}

/// Serves environment variables as typed configuration values.
///
/// One instance owns exactly one configuration and one cache. `init` and
/// `shutdown` are serialized behind a single lock; `fetch`, `info` and
/// `health` never wait on it, and fetches run concurrently.
///
/// # Examples
///
/// ```rust
/// use env_provider::adapters::MapEnvironment;
/// use env_provider::domain::{LifecycleState, ProviderService, TypedValue};
/// use env_provider::service::EnvironmentProvider;
/// use serde_json::json;
///
/// # fn main() -> env_provider::domain::Result<()> {
/// let env = MapEnvironment::new().with_var("MYAPP_PORT", "8080");
/// let provider = EnvironmentProvider::with_source(env);
///
/// provider.init("env", &json!({"prefix": "MYAPP_", "prefix_mode": "prepend"}))?;
/// assert_eq!(provider.fetch_path(&["port"])?, TypedValue::Number(8080.0));
///
/// provider.shutdown();
/// assert_eq!(provider.state(), LifecycleState::Stopped);
/// # Ok(())
/// # }
/// ```
pub struct EnvironmentProvider {
    source: Arc<dyn EnvironmentSource>,
    state: RwLock<LifecycleState>,
    transition: Mutex<()>,
    runtime: RwLock<Option<Arc<Runtime>>>,
    alias: RwLock<Option<String>>,
}

impl EnvironmentProvider {
    /// Creates an uninitialized provider over the process environment.
    pub fn new() -> Self {
        Self::with_source(ProcessEnvironment::new())
    }

    /// Creates an uninitialized provider over any environment source.
    pub fn with_source<S>(source: S) -> Self
    where
        S: EnvironmentSource + 'static,
    {
        Self {
            source: Arc::new(source),
            state: RwLock::new(LifecycleState::Uninitialized),
            transition: Mutex::new(()),
            runtime: RwLock::new(None),
            alias: RwLock::new(None),
        }
    }

    /// Returns the current lifecycle state.
    pub fn state(&self) -> LifecycleState {
        *self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Returns the active configuration, if the provider has been initialized.
    pub fn config(&self) -> Option<ProviderConfig> {
        self.current_runtime().map(|runtime| runtime.config.clone())
    }

    /// Fetches a hierarchical path. Shorthand for `fetch(&Lookup::Path(..))`.
    pub fn fetch_path<S: AsRef<str>>(&self, segments: &[S]) -> Result<TypedValue> {
        let path = LookupPath::new(segments.iter().map(|s| s.as_ref().to_string()).collect());
        self.fetch(&Lookup::Path(path))
    }

    fn set_state(&self, state: LifecycleState) {
        let mut guard = self.state.write().unwrap_or_else(PoisonError::into_inner);
        tracing::info!("State transition: {} -> {}", *guard, state);
        *guard = state;
    }

    fn current_runtime(&self) -> Option<Arc<Runtime>> {
        self.runtime
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Returns the runtime if the provider is ready to serve `operation`.
    fn ready_runtime(&self, operation: &'static str) -> Result<Arc<Runtime>> {
        let state = self.state();
        if state != LifecycleState::Ready {
            tracing::error!("{} called while provider is {}", operation, state);
            return Err(ProviderError::FailedPrecondition { operation, state });
        }
        self.current_runtime()
            .ok_or_else(|| ProviderError::FailedPrecondition {
                operation,
                state: self.state(),
            })
    }

    /// Parses and validates the configuration and checks required variables.
    fn prepare(&self, config: &Value) -> Result<Runtime> {
        let raw = RawConfig::from_value(config)?;
        let config = validator::validate(&raw)?;

        // Checked against the live environment, not through the cache.
        let missing: Vec<String> = config
            .required_variables
            .iter()
            .filter(|name| !self.source.contains(name))
            .cloned()
            .collect();
        if !missing.is_empty() {
            return Err(ProviderError::MissingRequiredVariables { names: missing });
        }

        tracing::debug!(
            "Configuration accepted: separator={:?}, case_transform={}, prefix={:?}, \
             prefix_mode={}, type_conversion={}, json_parsing={}",
            config.separator,
            config.case_transform,
            config.prefix,
            config.prefix_mode,
            config.enable_type_conversion,
            config.enable_json_parsing
        );

        Ok(Runtime {
            resolver: PathResolver::new(&config),
            store: VariableStore::new(Arc::clone(&self.source)),
            config,
        })
    }
}

impl Default for EnvironmentProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for EnvironmentProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EnvironmentProvider")
            .field("source", &self.source.name())
            .field("state", &self.state())
            .finish()
    }
}

impl ProviderService for EnvironmentProvider {
    fn init(&self, alias: &str, config: &Value) -> Result<()> {
        let _transition = self.transition.lock().unwrap_or_else(PoisonError::into_inner);

        let state = self.state();
        if state != LifecycleState::Uninitialized {
            tracing::error!("init called while provider is {}", state);
            return Err(ProviderError::FailedPrecondition {
                operation: "init",
                state,
            });
        }

        tracing::info!("Initializing provider with alias: {}", alias);
        self.set_state(LifecycleState::Initializing);

        match self.prepare(config) {
            Ok(runtime) => {
                *self.runtime.write().unwrap_or_else(PoisonError::into_inner) =
                    Some(Arc::new(runtime));
                *self.alias.write().unwrap_or_else(PoisonError::into_inner) =
                    Some(alias.to_string());
                self.set_state(LifecycleState::Ready);
                tracing::info!("Provider initialized successfully");
                Ok(())
            }
            Err(e) => {
                tracing::error!("Initialization failed: {}", e);
                self.set_state(LifecycleState::Uninitialized);
                Err(e)
            }
        }
    }

    fn fetch(&self, lookup: &Lookup) -> Result<TypedValue> {
        let runtime = self.ready_runtime("fetch")?;

        let name = runtime.resolver.resolve_lookup(lookup).map_err(|e| {
            tracing::error!("Could not resolve {}: {}", lookup, e);
            e
        })?;
        tracing::debug!("Fetching environment variable {} for {}", name, lookup);

        if !runtime.config.passes_prefix_filter(&name) {
            tracing::warn!(
                "Environment variable does not match prefix filter: {} (prefix: {})",
                name,
                runtime.config.prefix
            );
            return Err(ProviderError::NotFound { name });
        }

        let raw = runtime.store.fetch(&name).map_err(|e| {
            match &e {
                ProviderError::NotFound { .. } => tracing::warn!("{}", e),
                _ => tracing::error!("{}", e),
            }
            e
        })?;

        let value = converter::convert(
            &raw,
            runtime.config.enable_type_conversion,
            runtime.config.enable_json_parsing,
        )
        .map_err(|e| {
            let e = e.with_name(&name);
            tracing::error!("Type conversion failed: {}", e);
            e
        })?;

        tracing::debug!("Fetched {} as {}", name, value.type_name());
        Ok(value)
    }

    fn info(&self) -> ProviderInfo {
        ProviderInfo::new(self.alias.read().unwrap_or_else(PoisonError::into_inner).clone())
    }

    fn health(&self) -> HealthReport {
        HealthReport::for_state(self.state())
    }

    fn shutdown(&self) {
        let _transition = self.transition.lock().unwrap_or_else(PoisonError::into_inner);

        if self.state() == LifecycleState::Stopped {
            tracing::debug!("Shutdown requested but provider is already stopped");
            return;
        }

        tracing::info!("Shutting down provider");
        self.set_state(LifecycleState::ShuttingDown);

        let runtime = self.runtime.write().unwrap_or_else(PoisonError::into_inner).take();
        if let Some(runtime) = runtime {
            runtime.store.clear();
        }

        self.set_state(LifecycleState::Stopped);
        tracing::info!("Provider shut down successfully");
    }
}
