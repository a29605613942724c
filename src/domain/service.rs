// SPDX-License-Identifier: MIT OR Apache-2.0

//! Provider service trait definition.
//!
//! This module defines the `ProviderService` trait, the five operations a host
//! transport exposes to the build tool. The transport deserializes requests
//! into these calls and serializes the results back.

use crate::domain::{HealthReport, Lookup, ProviderInfo, Result, TypedValue};
use serde_json::Value;

/// The request/response contract of a configuration provider.
///
/// All methods take `&self`: a provider is shared between the transport's
/// worker threads, and `fetch` may run concurrently for any names.
///
/// # Examples
///
/// ```rust
/// use env_provider::adapters::MapEnvironment;
/// use env_provider::domain::{Lookup, ProviderService, TypedValue};
/// use env_provider::service::EnvironmentProvider;
/// use serde_json::json;
///
/// # fn main() -> env_provider::domain::Result<()> {
/// let env = MapEnvironment::new().with_var("DATABASE_HOST", "localhost");
/// let provider = EnvironmentProvider::with_source(env);
///
/// provider.init("env", &json!({"separator": "_", "case_transform": "upper"}))?;
/// let value = provider.fetch(&Lookup::path(["database", "host"]))?;
/// assert_eq!(value, TypedValue::String("localhost".to_string()));
/// provider.shutdown();
/// # Ok(())
/// # }
/// ```
pub trait ProviderService: Send + Sync {
    /// Validates `config`, checks required variables and makes the provider ready.
    ///
    /// Legal only while uninitialized. On failure the provider stays
    /// uninitialized and may be initialized again with a corrected
    /// configuration.
    ///
    /// # Errors
    ///
    /// * `InvalidConfig` - the configuration is malformed
    /// * `MissingRequiredVariables` - lists every required variable that is unset
    /// * `FailedPrecondition` - the provider is not uninitialized
    fn init(&self, alias: &str, config: &Value) -> Result<()>;

    /// Resolves a lookup to a variable and returns its typed value.
    ///
    /// # Errors
    ///
    /// * `FailedPrecondition` - the provider is not ready
    /// * `EmptyPath` / `EmptySegment` - the lookup is malformed
    /// * `NotFound` - the variable is unset or rejected by the prefix filter
    /// * `TooLarge`, `InvalidJson`, `JsonTooDeep` - the value cannot be served
    fn fetch(&self, lookup: &Lookup) -> Result<TypedValue>;

    /// Returns identity metadata. Legal in any state.
    fn info(&self) -> ProviderInfo;

    /// Returns the provider's health. Legal in any state.
    fn health(&self) -> HealthReport;

    /// Clears the cache and stops the provider.
    ///
    /// Best effort from any state; a second call is a no-op.
    fn shutdown(&self);
}
