//! Circuit breaker implementation.

use phrases_core::PhrasesError;
use std::sync::atomic::{AtomicU64, AtomicU8, Ordering};
use std::time::{Duration, Instant};
use tokio::sync::RwLock;
use tracing::{debug, warn};

/// Circuit breaker state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum CircuitState {
    /// Requests are allowed.
    Closed = 0,
    /// Requests are rejected without reaching the remote.
    Open = 1,
    /// A limited number of probe requests are allowed.
    HalfOpen = 2,
}

impl From<u8> for CircuitState {
    fn from(value: u8) -> Self {
        match value {
            1 => Self::Open,
            2 => Self::HalfOpen,
            _ => Self::Closed,
        }
    }
}

/// Circuit breaker configuration.
#[derive(Debug, Clone)]
pub struct CircuitBreakerConfig {
    /// Consecutive failures before opening the circuit.
    pub failure_threshold: u64,
    /// Successes needed to close the circuit from half-open.
    pub success_threshold: u64,
    /// Duration to wait before transitioning from open to half-open.
    pub recovery_timeout: Duration,
    /// Probe requests allowed in half-open state.
    pub half_open_requests: u64,
}

impl Default for CircuitBreakerConfig {
    fn default() -> Self {
        Self {
            failure_threshold: 5,
            success_threshold: 3,
            recovery_timeout: Duration::from_secs(30),
            half_open_requests: 3,
        }
    }
}

/// Circuit breaker protecting a remote dependency from cascading failures.
pub struct CircuitBreaker {
    name: String,
    state: AtomicU8,
    failure_count: AtomicU64,
    success_count: AtomicU64,
    half_open_requests: AtomicU64,
    last_failure_time: RwLock<Option<Instant>>,
    config: CircuitBreakerConfig,
}

impl CircuitBreaker {
    /// Creates a new circuit breaker.
    pub fn new(name: impl Into<String>, config: CircuitBreakerConfig) -> Self {
        Self {
            name: name.into(),
            state: AtomicU8::new(CircuitState::Closed as u8),
            failure_count: AtomicU64::new(0),
            success_count: AtomicU64::new(0),
            half_open_requests: AtomicU64::new(0),
            last_failure_time: RwLock::new(None),
            config,
        }
    }

    /// Creates a new circuit breaker with default configuration.
    pub fn with_defaults(name: impl Into<String>) -> Self {
        Self::new(name, CircuitBreakerConfig::default())
    }

    /// Returns the current state of the circuit breaker.
    pub fn state(&self) -> CircuitState {
        CircuitState::from(self.state.load(Ordering::SeqCst))
    }

    /// Returns the name of the circuit breaker.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Executes a remote call under circuit breaker protection.
    ///
    /// The call is rejected outright while the circuit is open; otherwise
    /// the outcome is recorded and drives the state machine.
    pub async fn call<F, Fut, T, E>(&self, f: F) -> Result<T, CircuitBreakerError<E>>
    where
        F: FnOnce() -> Fut,
        Fut: std::future::Future<Output = Result<T, E>>,
    {
        if !self.allow_request().await {
            return Err(CircuitBreakerError::Open(self.name.clone()));
        }

        match f().await {
            Ok(result) => {
                self.record_success();
                Ok(result)
            }
            Err(e) => {
                self.record_failure().await;
                Err(CircuitBreakerError::Failure(e))
            }
        }
    }

    /// Checks if a request should be allowed.
    async fn allow_request(&self) -> bool {
        match self.state() {
            CircuitState::Closed => true,
            CircuitState::Open => {
                let last_failure = self.last_failure_time.read().await;
                if let Some(time) = *last_failure {
                    if time.elapsed() >= self.config.recovery_timeout {
                        self.state.store(CircuitState::HalfOpen as u8, Ordering::SeqCst);
                        self.success_count.store(0, Ordering::SeqCst);
                        self.half_open_requests.store(0, Ordering::SeqCst);
                        debug!("Circuit breaker '{}' transitioning to half-open", self.name);
                        return true;
                    }
                }
                false
            }
            CircuitState::HalfOpen => {
                let requests = self.half_open_requests.fetch_add(1, Ordering::SeqCst);
                requests < self.config.half_open_requests
            }
        }
    }

    /// Records a successful call.
    fn record_success(&self) {
        match self.state() {
            CircuitState::Closed => {
                self.failure_count.store(0, Ordering::SeqCst);
            }
            CircuitState::HalfOpen => {
                let successes = self.success_count.fetch_add(1, Ordering::SeqCst) + 1;
                if successes >= self.config.success_threshold {
                    self.state.store(CircuitState::Closed as u8, Ordering::SeqCst);
                    self.failure_count.store(0, Ordering::SeqCst);
                    debug!("Circuit breaker '{}' closed after successful recovery", self.name);
                }
            }
            CircuitState::Open => {}
        }
    }

    /// Records a failed call.
    async fn record_failure(&self) {
        match self.state() {
            CircuitState::Closed => {
                let failures = self.failure_count.fetch_add(1, Ordering::SeqCst) + 1;
                *self.last_failure_time.write().await = Some(Instant::now());

                if failures >= self.config.failure_threshold {
                    self.state.store(CircuitState::Open as u8, Ordering::SeqCst);
                    warn!(
                        "Circuit breaker '{}' opened after {} failures",
                        self.name, failures
                    );
                }
            }
            CircuitState::HalfOpen => {
                // Any failure while probing reopens the circuit
                self.state.store(CircuitState::Open as u8, Ordering::SeqCst);
                *self.last_failure_time.write().await = Some(Instant::now());
                warn!(
                    "Circuit breaker '{}' reopened after failure in half-open state",
                    self.name
                );
            }
            CircuitState::Open => {
                *self.last_failure_time.write().await = Some(Instant::now());
            }
        }
    }

    /// Manually resets the circuit breaker to closed state.
    pub async fn reset(&self) {
        self.state.store(CircuitState::Closed as u8, Ordering::SeqCst);
        self.failure_count.store(0, Ordering::SeqCst);
        self.success_count.store(0, Ordering::SeqCst);
        *self.last_failure_time.write().await = None;
        debug!("Circuit breaker '{}' manually reset", self.name);
    }
}

impl std::fmt::Debug for CircuitBreaker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CircuitBreaker")
            .field("name", &self.name)
            .field("state", &self.state())
            .finish_non_exhaustive()
    }
}

/// Error type for circuit breaker operations.
#[derive(Debug)]
pub enum CircuitBreakerError<E> {
    /// Circuit is open, request was rejected without calling the remote.
    Open(String),
    /// The underlying operation failed.
    Failure(E),
}

impl<E: std::fmt::Display> std::fmt::Display for CircuitBreakerError<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Open(name) => write!(f, "Circuit breaker '{}' is open", name),
            Self::Failure(e) => write!(f, "Operation failed: {}", e),
        }
    }
}

impl<E: std::error::Error + 'static> std::error::Error for CircuitBreakerError<E> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Open(_) => None,
            Self::Failure(e) => Some(e),
        }
    }
}

impl From<CircuitBreakerError<PhrasesError>> for PhrasesError {
    fn from(err: CircuitBreakerError<PhrasesError>) -> Self {
        match err {
            CircuitBreakerError::Open(name) => PhrasesError::CircuitBreakerOpen(name),
            CircuitBreakerError::Failure(e) => e,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tripping_config(failure_threshold: u64) -> CircuitBreakerConfig {
        CircuitBreakerConfig {
            failure_threshold,
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_closed_circuit_passes_result_through() {
        let cb = CircuitBreaker::with_defaults("users-service");

        let result = cb.call(|| async { Ok::<i32, &str>(42) }).await;
        assert_eq!(result.unwrap(), 42);
        assert_eq!(cb.state(), CircuitState::Closed);
    }

    #[tokio::test]
    async fn test_initial_state_is_closed() {
        let cb = CircuitBreaker::with_defaults("users-service");
        assert_eq!(cb.state(), CircuitState::Closed);
        assert_eq!(cb.name(), "users-service");
    }

    #[tokio::test]
    async fn test_circuit_opens_after_threshold_failures() {
        let cb = CircuitBreaker::new("users-service", tripping_config(2));

        let _ = cb.call(|| async { Err::<i32, &str>("refused") }).await;
        assert_eq!(cb.state(), CircuitState::Closed);

        let _ = cb.call(|| async { Err::<i32, &str>("refused") }).await;
        assert_eq!(cb.state(), CircuitState::Open);

        // Next call is rejected without reaching the remote
        let result = cb.call(|| async { Ok::<i32, &str>(42) }).await;
        assert!(matches!(result, Err(CircuitBreakerError::Open(_))));
    }

    #[tokio::test]
    async fn test_failure_returns_underlying_error() {
        let cb = CircuitBreaker::with_defaults("users-service");
        let result = cb.call(|| async { Err::<i32, &str>("connection refused") }).await;
        match result {
            Err(CircuitBreakerError::Failure(e)) => assert_eq!(e, "connection refused"),
            other => panic!("Expected Failure error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_success_resets_failure_count_while_closed() {
        let cb = CircuitBreaker::new("users-service", tripping_config(2));

        let _ = cb.call(|| async { Err::<i32, &str>("refused") }).await;
        let _ = cb.call(|| async { Ok::<i32, &str>(1) }).await;
        let _ = cb.call(|| async { Err::<i32, &str>("refused") }).await;

        // One failure, one success, one failure: never two in a row
        assert_eq!(cb.state(), CircuitState::Closed);
    }

    #[tokio::test]
    async fn test_open_circuit_recovers_through_half_open() {
        let config = CircuitBreakerConfig {
            failure_threshold: 1,
            success_threshold: 1,
            recovery_timeout: Duration::from_millis(20),
            half_open_requests: 3,
        };
        let cb = CircuitBreaker::new("users-service", config);

        let _ = cb.call(|| async { Err::<i32, &str>("refused") }).await;
        assert_eq!(cb.state(), CircuitState::Open);

        tokio::time::sleep(Duration::from_millis(40)).await;

        // Probe request is allowed and its success closes the circuit
        let result = cb.call(|| async { Ok::<i32, &str>(7) }).await;
        assert_eq!(result.unwrap(), 7);
        assert_eq!(cb.state(), CircuitState::Closed);
    }

    #[tokio::test]
    async fn test_half_open_failure_reopens() {
        let config = CircuitBreakerConfig {
            failure_threshold: 1,
            success_threshold: 2,
            recovery_timeout: Duration::from_millis(20),
            half_open_requests: 3,
        };
        let cb = CircuitBreaker::new("users-service", config);

        let _ = cb.call(|| async { Err::<i32, &str>("refused") }).await;
        tokio::time::sleep(Duration::from_millis(40)).await;

        let _ = cb.call(|| async { Err::<i32, &str>("refused") }).await;
        assert_eq!(cb.state(), CircuitState::Open);
    }

    #[tokio::test]
    async fn test_manual_reset() {
        let cb = CircuitBreaker::new("users-service", tripping_config(1));

        let _ = cb.call(|| async { Err::<i32, &str>("refused") }).await;
        assert_eq!(cb.state(), CircuitState::Open);

        cb.reset().await;
        assert_eq!(cb.state(), CircuitState::Closed);
    }

    #[tokio::test]
    async fn test_open_error_converts_to_domain_error() {
        let err: PhrasesError =
            CircuitBreakerError::<PhrasesError>::Open("users-service".to_string()).into();
        assert!(matches!(err, PhrasesError::CircuitBreakerOpen(_)));
    }

    #[test]
    fn test_circuit_state_from_u8() {
        assert_eq!(CircuitState::from(0), CircuitState::Closed);
        assert_eq!(CircuitState::from(1), CircuitState::Open);
        assert_eq!(CircuitState::from(2), CircuitState::HalfOpen);
        assert_eq!(CircuitState::from(255), CircuitState::Closed);
    }
}
