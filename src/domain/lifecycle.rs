// SPDX-License-Identifier: MIT OR Apache-2.0

//! Lifecycle state and the status types reported by `info` and `health`.

use serde::Serialize;
use std::fmt;

/// The provider type reported by `info`.
pub const PROVIDER_TYPE: &str = "environment-variables";

/// The state of a provider instance.
///
/// Transitions are strict:
///
/// ```text
/// Uninitialized --init--> Initializing --ok--> Ready --shutdown--> ShuttingDown --> Stopped
///                         Initializing --err--> Uninitialized
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LifecycleState {
    /// Created, or a previous init failed.
    #[default]
    Uninitialized,
    /// Validating configuration and required variables.
    Initializing,
    /// Serving fetches.
    Ready,
    /// Clearing the cache.
    ShuttingDown,
    /// Terminal.
    Stopped,
}

impl LifecycleState {
    /// Returns the lowercase name of the state.
    pub fn as_str(self) -> &'static str {
        match self {
            LifecycleState::Uninitialized => "uninitialized",
            LifecycleState::Initializing => "initializing",
            LifecycleState::Ready => "ready",
            LifecycleState::ShuttingDown => "shutting_down",
            LifecycleState::Stopped => "stopped",
        }
    }
}

impl fmt::Display for LifecycleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Coarse health of a provider instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HealthStatus {
    /// Ready to serve.
    Ok,
    /// Not ready: uninitialized, shutting down or stopped.
    Degraded,
    /// Initialization in progress.
    Starting,
}

/// Result of a `health` call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HealthReport {
    /// The coarse status
    pub status: HealthStatus,
    /// Human readable detail
    pub message: String,
}

impl HealthReport {
    /// Derives the health report for a lifecycle state.
    pub fn for_state(state: LifecycleState) -> Self {
        let (status, message) = match state {
            LifecycleState::Ready => (HealthStatus::Ok, "provider is ready"),
            LifecycleState::Initializing => (HealthStatus::Starting, "provider is initializing"),
            _ => (HealthStatus::Degraded, "provider is not ready"),
        };
        Self {
            status,
            message: message.to_string(),
        }
    }
}

/// Static identity metadata returned by `info`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProviderInfo {
    /// Alias set by the last successful init, if any
    pub alias: Option<String>,
    /// Crate version
    pub version: String,
    /// Always [`PROVIDER_TYPE`]
    #[serde(rename = "type")]
    pub provider_type: String,
}

impl ProviderInfo {
    /// Builds the info record for the given alias.
    pub fn new(alias: Option<String>) -> Self {
        Self {
            alias,
            version: env!("CARGO_PKG_VERSION").to_string(),
            provider_type: PROVIDER_TYPE.to_string(),
        }
    }
}
