//! # Phrases Resilience
//!
//! Circuit breaker guarding the remote users-service call. The breaker is
//! a CLOSED/OPEN/HALF_OPEN state machine; callers decorate a remote-call
//! interface with it and substitute a fallback value whenever the call is
//! rejected or fails.

pub mod circuit_breaker;

pub use circuit_breaker::*;
