// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain layer containing core types.
//!
//! This module contains the types shared by every layer of the provider:
//! configuration, lookups, typed values, lifecycle states and errors. It has
//! no dependency on the process environment.

pub mod config;
pub mod errors;
pub mod lifecycle;
pub mod lookup;
pub mod service;
pub mod typed_value;

// Re-export commonly used types
pub use config::{CaseTransform, PrefixMode, ProviderConfig, RawConfig};
pub use errors::{ErrorKind, ProviderError, Result, StatusCode};
pub use lifecycle::{HealthReport, HealthStatus, LifecycleState, ProviderInfo, PROVIDER_TYPE};
pub use lookup::{Lookup, LookupPath};
pub use service::ProviderService;
pub use typed_value::TypedValue;
