//! Repository trait definitions.
//!
//! One trait per entity, each with the same four operations against the
//! store: find-all, find-by-id, save (create-or-update) and delete-by-id.
//! `find_by_id` reports a missing record as `Ok(None)`, never as an error;
//! `delete_by_id` treats a missing id as a no-op success.

use async_trait::async_trait;
use phrases_core::{Author, Image, Phrase, PhraseType, PhrasesResult};

/// Author repository.
#[async_trait]
pub trait AuthorRepository: Send + Sync {
    /// Returns every author in store iteration order.
    async fn find_all(&self) -> PhrasesResult<Vec<Author>>;

    /// Finds an author by id.
    async fn find_by_id(&self, id: i64) -> PhrasesResult<Option<Author>>;

    /// Creates the author when it has no id, updates it otherwise.
    /// Returns the persisted state.
    async fn save(&self, author: &Author) -> PhrasesResult<Author>;

    /// Deletes an author by id. Missing ids are a no-op.
    async fn delete_by_id(&self, id: i64) -> PhrasesResult<()>;
}

/// Phrase repository.
#[async_trait]
pub trait PhraseRepository: Send + Sync {
    /// Returns every phrase in store iteration order.
    async fn find_all(&self) -> PhrasesResult<Vec<Phrase>>;

    /// Finds a phrase by id.
    async fn find_by_id(&self, id: i64) -> PhrasesResult<Option<Phrase>>;

    /// Creates the phrase when it has no id, updates it otherwise.
    /// Returns the persisted state.
    async fn save(&self, phrase: &Phrase) -> PhrasesResult<Phrase>;

    /// Deletes a phrase by id. Missing ids are a no-op.
    async fn delete_by_id(&self, id: i64) -> PhrasesResult<()>;
}

/// Phrase type repository.
#[async_trait]
pub trait TypeRepository: Send + Sync {
    /// Returns every type in store iteration order.
    async fn find_all(&self) -> PhrasesResult<Vec<PhraseType>>;

    /// Finds a type by id.
    async fn find_by_id(&self, id: i64) -> PhrasesResult<Option<PhraseType>>;

    /// Creates the type when it has no id, updates it otherwise.
    /// Returns the persisted state.
    async fn save(&self, phrase_type: &PhraseType) -> PhrasesResult<PhraseType>;

    /// Deletes a type by id. Missing ids are a no-op.
    async fn delete_by_id(&self, id: i64) -> PhrasesResult<()>;
}

/// Image repository.
#[async_trait]
pub trait ImageRepository: Send + Sync {
    /// Returns every image in store iteration order.
    async fn find_all(&self) -> PhrasesResult<Vec<Image>>;

    /// Finds an image by id.
    async fn find_by_id(&self, id: i64) -> PhrasesResult<Option<Image>>;

    /// Creates the image when it has no id, updates it otherwise.
    /// Returns the persisted state.
    async fn save(&self, image: &Image) -> PhrasesResult<Image>;

    /// Deletes an image by id. Missing ids are a no-op.
    async fn delete_by_id(&self, id: i64) -> PhrasesResult<()>;
}
