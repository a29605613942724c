// SPDX-License-Identifier: MIT OR Apache-2.0

//! Service layer: the resolution and conversion pipeline and the provider
//! that drives it.

pub mod converter;
pub mod provider;
pub mod resolver;
pub mod store;
pub mod validator;

pub use provider::EnvironmentProvider;
pub use resolver::PathResolver;
pub use store::{VariableStore, MAX_VALUE_SIZE};
