//! Service discovery abstraction.
//!
//! The concrete address of a sibling service is not known at compile time
//! and may change between calls; resolution happens by logical name on
//! every call through a pluggable strategy.

use async_trait::async_trait;
use phrases_core::{PhrasesError, PhrasesResult};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use tracing::debug;

/// Resolves a logical service name to a base URL.
#[async_trait]
pub trait ServiceDiscovery: Send + Sync {
    /// Returns the base URL of an instance of the named service.
    async fn resolve(&self, service_name: &str) -> PhrasesResult<String>;
}

/// Static, configuration-seeded discovery with round-robin balancing.
///
/// Each registered service maps to a fixed list of instance base URLs;
/// successive resolutions rotate through them.
pub struct StaticServiceDiscovery {
    services: HashMap<String, Vec<String>>,
    cursor: AtomicUsize,
}

impl StaticServiceDiscovery {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            services: HashMap::new(),
            cursor: AtomicUsize::new(0),
        }
    }

    /// Registers a service with its known instances.
    #[must_use]
    pub fn with_service(mut self, name: impl Into<String>, instances: Vec<String>) -> Self {
        let instances = instances
            .into_iter()
            .map(|url| url.trim_end_matches('/').to_string())
            .collect();
        self.services.insert(name.into(), instances);
        self
    }
}

impl Default for StaticServiceDiscovery {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ServiceDiscovery for StaticServiceDiscovery {
    async fn resolve(&self, service_name: &str) -> PhrasesResult<String> {
        let instances = self.services.get(service_name).ok_or_else(|| {
            PhrasesError::Configuration(format!("Unknown service: {}", service_name))
        })?;

        if instances.is_empty() {
            return Err(PhrasesError::Configuration(format!(
                "No instances registered for service: {}",
                service_name
            )));
        }

        let index = self.cursor.fetch_add(1, Ordering::Relaxed) % instances.len();
        let instance = instances[index].clone();
        debug!("Resolved {} -> {}", service_name, instance);
        Ok(instance)
    }
}

impl std::fmt::Debug for StaticServiceDiscovery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StaticServiceDiscovery")
            .field("services", &self.services.keys().collect::<Vec<_>>())
            .finish_non_exhaustive()
    }
}
