//! Phrase service.
//!
//! Besides the usual CRUD pass-through, the phrase service owns the one
//! inter-service call of this application: asking the users service for
//! its route banner, guarded by a circuit breaker with a fixed fallback.

use async_trait::async_trait;
use phrases_client::ResilientUsersClient;
use phrases_core::{Phrase, PhrasesResult};
use phrases_repository::PhraseRepository;
use std::sync::Arc;
use tracing::debug;

/// Phrase service contract.
#[async_trait]
pub trait PhraseService: Send + Sync {
    /// Returns every phrase.
    async fn find_all(&self) -> PhrasesResult<Vec<Phrase>>;

    /// Finds a phrase by id; `None` when the record is absent.
    async fn find_by_id(&self, id: i64) -> PhrasesResult<Option<Phrase>>;

    /// Creates or updates a phrase, returning the persisted state.
    async fn save(&self, phrase: Phrase) -> PhrasesResult<Phrase>;

    /// Deletes a phrase by id.
    async fn delete(&self, id: i64) -> PhrasesResult<()>;

    /// Calls the remote users service. Infallible: a remote failure or an
    /// open circuit yields the configured fallback string.
    async fn call_user_service(&self) -> String;
}

/// Default phrase service.
pub struct PhraseServiceImpl {
    repository: Arc<dyn PhraseRepository>,
    users_client: Arc<ResilientUsersClient>,
}

impl PhraseServiceImpl {
    /// Creates a new phrase service.
    pub fn new(repository: Arc<dyn PhraseRepository>, users_client: Arc<ResilientUsersClient>) -> Self {
        Self {
            repository,
            users_client,
        }
    }
}

#[async_trait]
impl PhraseService for PhraseServiceImpl {
    async fn find_all(&self) -> PhrasesResult<Vec<Phrase>> {
        self.repository.find_all().await
    }

    async fn find_by_id(&self, id: i64) -> PhrasesResult<Option<Phrase>> {
        self.repository.find_by_id(id).await
    }

    async fn save(&self, phrase: Phrase) -> PhrasesResult<Phrase> {
        debug!("Saving phrase");
        self.repository.save(&phrase).await
    }

    async fn delete(&self, id: i64) -> PhrasesResult<()> {
        debug!("Deleting phrase: {}", id);
        self.repository.delete_by_id(id).await
    }

    async fn call_user_service(&self) -> String {
        self.users_client.get_service_route().await
    }
}
