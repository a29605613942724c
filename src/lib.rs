// SPDX-License-Identifier: MIT OR Apache-2.0

//! Environment variables as typed configuration values.
//!
//! This crate implements a configuration provider for build tools: the host
//! asks for a hierarchical path such as `["database", "host"]`, and the
//! provider resolves it to an environment variable name (`DATABASE_HOST`),
//! reads and caches the raw value, and converts it into a typed value.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain Layer**: Core types (`ProviderConfig`, `Lookup`, `TypedValue`, errors)
//!   and the `ProviderService` trait
//! - **Ports**: The `EnvironmentSource` trait through which variables are read
//! - **Adapters**: The process environment and an in-memory environment
//! - **Service**: Validation, resolution, caching, conversion and the lifecycle
//!   controller that ties them together
//!
//! # Resolution
//!
//! - Segments are case-transformed (`upper`, `lower`, `preserve`) and joined
//!   with a one-character separator
//! - In `prepend` mode the prefix is concatenated verbatim; in `filter_only`
//!   mode names not starting with the prefix are rejected
//! - `Lookup::Literal` bypasses all of this and uses a name as given
//!
//! # Conversion
//!
//! JSON objects and arrays first (sniffed by a leading `{` or `[`), then
//! numbers, then `true`/`false`/`yes`/`no`, then the raw string. Values are
//! limited to 1 MiB and JSON to 100 levels of nesting.
//!
//! # Feature Flags
//!
//! - `cli`: Build the `envprov` command-line front end (default)
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use env_provider::prelude::*;
//! use serde_json::json;
//!
//! # fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
//! let provider = EnvironmentProvider::new();
//! provider.init("env", &json!({"prefix": "MYAPP_"}))?;
//!
//! let port = provider.fetch(&Lookup::path(["port"]))?;
//! println!("MYAPP_PORT = {port}");
//!
//! provider.shutdown();
//! # Ok(())
//! # }
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![warn(clippy::all)]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

/// Commonly used types and traits.
///
/// This module re-exports the most commonly used types and traits for convenient access.
pub mod prelude {
    pub use crate::adapters::{MapEnvironment, ProcessEnvironment};
    pub use crate::domain::{
        ErrorKind, HealthStatus, LifecycleState, Lookup, LookupPath, ProviderError,
        ProviderService, Result, TypedValue,
    };
    pub use crate::ports::EnvironmentSource;
    pub use crate::service::EnvironmentProvider;
}
