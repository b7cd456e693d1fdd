//! Author service.

use async_trait::async_trait;
use phrases_core::{Author, PhrasesResult};
use phrases_repository::AuthorRepository;
use std::sync::Arc;
use tracing::debug;

/// Author service contract.
#[async_trait]
pub trait AuthorService: Send + Sync {
    /// Returns every author.
    async fn find_all(&self) -> PhrasesResult<Vec<Author>>;

    /// Finds an author by id; `None` when the record is absent.
    async fn find_by_id(&self, id: i64) -> PhrasesResult<Option<Author>>;

    /// Creates or updates an author, returning the persisted state.
    async fn save(&self, author: Author) -> PhrasesResult<Author>;

    /// Deletes an author by id.
    async fn delete(&self, id: i64) -> PhrasesResult<()>;
}

/// Default author service, a pass-through to the repository.
pub struct AuthorServiceImpl {
    repository: Arc<dyn AuthorRepository>,
}

impl AuthorServiceImpl {
    /// Creates a new author service.
    pub fn new(repository: Arc<dyn AuthorRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl AuthorService for AuthorServiceImpl {
    async fn find_all(&self) -> PhrasesResult<Vec<Author>> {
        self.repository.find_all().await
    }

    async fn find_by_id(&self, id: i64) -> PhrasesResult<Option<Author>> {
        self.repository.find_by_id(id).await
    }

    async fn save(&self, author: Author) -> PhrasesResult<Author> {
        debug!("Saving author: {}", author.name);
        self.repository.save(&author).await
    }

    async fn delete(&self, id: i64) -> PhrasesResult<()> {
        debug!("Deleting author: {}", id);
        self.repository.delete_by_id(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::mock;
    use mockall::predicate::eq;
    use phrases_core::PhrasesError;

    mock! {
        AuthorRepo {}

        #[async_trait]
        impl AuthorRepository for AuthorRepo {
            async fn find_all(&self) -> PhrasesResult<Vec<Author>>;
            async fn find_by_id(&self, id: i64) -> PhrasesResult<Option<Author>>;
            async fn save(&self, author: &Author) -> PhrasesResult<Author>;
            async fn delete_by_id(&self, id: i64) -> PhrasesResult<()>;
        }
    }

    fn persisted(name: &str, id: i64) -> Author {
        let mut author = Author::new(name);
        author.id = Some(id);
        author
    }

    #[tokio::test]
    async fn test_find_all_passes_through() {
        let mut repo = MockAuthorRepo::new();
        repo.expect_find_all()
            .times(1)
            .returning(|| Ok(vec![persisted("Seneca", 1), persisted("Epictetus", 2)]));

        let service = AuthorServiceImpl::new(Arc::new(repo));
        let authors = service.find_all().await.unwrap();
        assert_eq!(authors.len(), 2);
    }

    #[tokio::test]
    async fn test_find_by_id_absent_is_none() {
        let mut repo = MockAuthorRepo::new();
        repo.expect_find_by_id()
            .with(eq(999))
            .times(1)
            .returning(|_| Ok(None));

        let service = AuthorServiceImpl::new(Arc::new(repo));
        assert!(service.find_by_id(999).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_save_returns_persisted_state() {
        let mut repo = MockAuthorRepo::new();
        repo.expect_save()
            .times(1)
            .returning(|author| {
                let mut persisted = author.clone();
                persisted.id = Some(1);
                Ok(persisted)
            });

        let service = AuthorServiceImpl::new(Arc::new(repo));
        let saved = service.save(Author::new("Seneca")).await.unwrap();
        assert_eq!(saved.id, Some(1));
    }

    #[tokio::test]
    async fn test_delete_propagates_store_fault() {
        let mut repo = MockAuthorRepo::new();
        repo.expect_delete_by_id()
            .with(eq(1))
            .times(1)
            .returning(|_| Err(PhrasesError::database("gone away")));

        let service = AuthorServiceImpl::new(Arc::new(repo));
        let result = service.delete(1).await;
        assert!(matches!(result, Err(PhrasesError::Database(_))));
    }
}
