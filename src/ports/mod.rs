// SPDX-License-Identifier: MIT OR Apache-2.0

//! Ports layer containing trait definitions.
//!
//! Ports are the interfaces the core uses to reach the outside world. The
//! only one the provider needs is read access to environment variables.

pub mod environment;

// Re-export commonly used traits
pub use environment::EnvironmentSource;
