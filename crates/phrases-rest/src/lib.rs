//! # Phrases REST
//!
//! REST API layer using Axum. One controller per resource, all four
//! following the same pipeline: validate payload, dispatch to the
//! service, translate the outcome into a status code and the shared
//! `{msg, ...}` / `{errors, ...}` envelope.

pub mod controllers;
pub mod middleware;
pub mod responses;
pub mod router;
pub mod state;
pub mod validation;

pub use router::*;
pub use state::*;

#[cfg(test)]
pub(crate) mod test_support;
