// SPDX-License-Identifier: MIT OR Apache-2.0

//! Adapters layer containing environment source implementations.
//!
//! This module contains the concrete implementations of the
//! [`EnvironmentSource`](crate::ports::EnvironmentSource) port.

pub mod map_env;
pub mod process_env;

// Re-export adapters
pub use map_env::MapEnvironment;
pub use process_env::ProcessEnvironment;
