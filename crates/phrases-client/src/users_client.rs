//! HTTP client for the remote users service.

use crate::discovery::ServiceDiscovery;
use async_trait::async_trait;
use phrases_core::{PhrasesError, PhrasesResult};
use reqwest::Client;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// Remote call contract of the users service.
#[async_trait]
pub trait UserRemoteCall: Send + Sync {
    /// GET on the users service's well-known route endpoint; returns the
    /// plain-text body.
    async fn get_service_route(&self) -> PhrasesResult<String>;
}

/// HTTP implementation resolving the users service by name on every call.
pub struct HttpUsersClient {
    client: Client,
    discovery: Arc<dyn ServiceDiscovery>,
    service_name: String,
    route_path: String,
}

impl HttpUsersClient {
    /// Creates a new client.
    pub fn new(
        discovery: Arc<dyn ServiceDiscovery>,
        service_name: impl Into<String>,
        route_path: impl Into<String>,
        timeout: Duration,
    ) -> PhrasesResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| PhrasesError::Internal(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            discovery,
            service_name: service_name.into(),
            route_path: route_path.into(),
        })
    }

    /// Creates a client around a pre-built reqwest client.
    pub fn with_client(
        client: Client,
        discovery: Arc<dyn ServiceDiscovery>,
        service_name: impl Into<String>,
        route_path: impl Into<String>,
    ) -> Self {
        Self {
            client,
            discovery,
            service_name: service_name.into(),
            route_path: route_path.into(),
        }
    }
}

#[async_trait]
impl UserRemoteCall for HttpUsersClient {
    async fn get_service_route(&self) -> PhrasesResult<String> {
        let base_url = self.discovery.resolve(&self.service_name).await?;
        let url = format!("{}{}", base_url, self.route_path);

        debug!("Calling users service: GET {}", url);

        let response = self.client.get(&url).send().await.map_err(|e| {
            PhrasesError::external_service(self.service_name.clone(), format!("HTTP error: {}", e))
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(PhrasesError::external_service(
                self.service_name.clone(),
                format!("HTTP status {}", status),
            ));
        }

        response.text().await.map_err(|e| {
            PhrasesError::external_service(self.service_name.clone(), format!("Body error: {}", e))
        })
    }
}

impl std::fmt::Debug for HttpUsersClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpUsersClient")
            .field("service_name", &self.service_name)
            .field("route_path", &self.route_path)
            .finish_non_exhaustive()
    }
}
