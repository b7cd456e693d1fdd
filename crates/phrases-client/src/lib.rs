//! # Phrases Client
//!
//! Remote-call plumbing for the users service: a pluggable service
//! discovery strategy, an HTTP client resolving the service by name on
//! every call, and a circuit-breaker decorator substituting a fixed
//! fallback string when the remote is unavailable.

pub mod discovery;
pub mod resilient;
pub mod users_client;

pub use discovery::*;
pub use resilient::*;
pub use users_client::*;
