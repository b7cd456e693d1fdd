//! Phrase type service.

use async_trait::async_trait;
use phrases_core::{PhraseType, PhrasesResult};
use phrases_repository::TypeRepository;
use std::sync::Arc;
use tracing::debug;

/// Phrase type service contract.
#[async_trait]
pub trait TypeService: Send + Sync {
    /// Returns every type.
    async fn find_all(&self) -> PhrasesResult<Vec<PhraseType>>;

    /// Finds a type by id; `None` when the record is absent.
    async fn find_by_id(&self, id: i64) -> PhrasesResult<Option<PhraseType>>;

    /// Creates or updates a type, returning the persisted state.
    async fn save(&self, phrase_type: PhraseType) -> PhrasesResult<PhraseType>;

    /// Deletes a type by id.
    async fn delete(&self, id: i64) -> PhrasesResult<()>;
}

/// Default type service, a pass-through to the repository.
pub struct TypeServiceImpl {
    repository: Arc<dyn TypeRepository>,
}

impl TypeServiceImpl {
    /// Creates a new type service.
    pub fn new(repository: Arc<dyn TypeRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl TypeService for TypeServiceImpl {
    async fn find_all(&self) -> PhrasesResult<Vec<PhraseType>> {
        self.repository.find_all().await
    }

    async fn find_by_id(&self, id: i64) -> PhrasesResult<Option<PhraseType>> {
        self.repository.find_by_id(id).await
    }

    async fn save(&self, phrase_type: PhraseType) -> PhrasesResult<PhraseType> {
        debug!("Saving type: {}", phrase_type.name);
        self.repository.save(&phrase_type).await
    }

    async fn delete(&self, id: i64) -> PhrasesResult<()> {
        debug!("Deleting type: {}", id);
        self.repository.delete_by_id(id).await
    }
}
