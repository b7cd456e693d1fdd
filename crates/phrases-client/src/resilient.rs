//! Circuit-breaker decorator over the users-service client.

use crate::users_client::UserRemoteCall;
use phrases_config::UsersServiceConfig;
use phrases_resilience::{CircuitBreaker, CircuitBreakerConfig, CircuitState};
use std::sync::Arc;
use tracing::warn;

/// Wraps a [`UserRemoteCall`] with a circuit breaker and a fixed fallback.
///
/// Any failure or open-circuit rejection yields the configured fallback
/// string instead of an error, so callers can never observe a remote
/// fault directly.
pub struct ResilientUsersClient {
    inner: Arc<dyn UserRemoteCall>,
    breaker: CircuitBreaker,
    fallback: String,
}

impl ResilientUsersClient {
    /// Creates a decorator with an explicit breaker configuration.
    pub fn new(
        inner: Arc<dyn UserRemoteCall>,
        breaker_config: CircuitBreakerConfig,
        fallback: impl Into<String>,
    ) -> Self {
        Self {
            inner,
            breaker: CircuitBreaker::new("users-service", breaker_config),
            fallback: fallback.into(),
        }
    }

    /// Creates a decorator from the users-service configuration section.
    pub fn from_config(inner: Arc<dyn UserRemoteCall>, config: &UsersServiceConfig) -> Self {
        let breaker_config = CircuitBreakerConfig {
            failure_threshold: config.failure_threshold,
            success_threshold: config.success_threshold,
            recovery_timeout: config.open_timeout(),
            half_open_requests: config.half_open_requests,
        };
        Self::new(inner, breaker_config, config.fallback_message.clone())
    }

    /// Calls the users service; on failure or open circuit returns the
    /// fallback string.
    pub async fn get_service_route(&self) -> String {
        let inner = Arc::clone(&self.inner);
        match self.breaker.call(|| async move { inner.get_service_route().await }).await {
            Ok(route) => route,
            Err(e) => {
                warn!("Users service call failed, using fallback: {}", e);
                self.fallback.clone()
            }
        }
    }

    /// Returns the current circuit state.
    pub fn circuit_state(&self) -> CircuitState {
        self.breaker.state()
    }
}

impl std::fmt::Debug for ResilientUsersClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResilientUsersClient")
            .field("fallback", &self.fallback)
            .field("circuit_state", &self.circuit_state())
            .finish_non_exhaustive()
    }
}
