//! Image service.

use async_trait::async_trait;
use phrases_core::{Image, PhrasesResult};
use phrases_repository::ImageRepository;
use std::sync::Arc;
use tracing::debug;

/// Image service contract.
#[async_trait]
pub trait ImageService: Send + Sync {
    /// Returns every image.
    async fn find_all(&self) -> PhrasesResult<Vec<Image>>;

    /// Finds an image by id; `None` when the record is absent.
    async fn find_by_id(&self, id: i64) -> PhrasesResult<Option<Image>>;

    /// Creates or updates an image, returning the persisted state.
    async fn save(&self, image: Image) -> PhrasesResult<Image>;

    /// Deletes an image by id.
    async fn delete(&self, id: i64) -> PhrasesResult<()>;
}

/// Default image service, a pass-through to the repository.
pub struct ImageServiceImpl {
    repository: Arc<dyn ImageRepository>,
}

impl ImageServiceImpl {
    /// Creates a new image service.
    pub fn new(repository: Arc<dyn ImageRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl ImageService for ImageServiceImpl {
    async fn find_all(&self) -> PhrasesResult<Vec<Image>> {
        self.repository.find_all().await
    }

    async fn find_by_id(&self, id: i64) -> PhrasesResult<Option<Image>> {
        self.repository.find_by_id(id).await
    }

    async fn save(&self, image: Image) -> PhrasesResult<Image> {
        debug!("Saving image: {}", image.name);
        self.repository.save(&image).await
    }

    async fn delete(&self, id: i64) -> PhrasesResult<()> {
        debug!("Deleting image: {}", id);
        self.repository.delete_by_id(id).await
    }
}
