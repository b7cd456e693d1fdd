//! # Phrases Config
//!
//! Layered configuration for the phrases microservice: defaults, optional
//! environment-specific files and `PHRASES_`-prefixed environment variables.

pub mod app_config;
pub mod loader;
pub mod validation;

pub use app_config::*;
pub use loader::*;
pub use validation::*;
