//! MySQL image repository implementation.

use crate::{pool::DatabasePool, traits::ImageRepository};
use async_trait::async_trait;
use chrono::NaiveDate;
use phrases_core::{Image, PhrasesError, PhrasesResult};
use sqlx::FromRow;
use std::sync::Arc;
use tracing::debug;

/// MySQL image repository.
///
/// The `images.name` column carries a unique index; a duplicate name
/// surfaces as a store fault on save.
#[derive(Clone)]
pub struct MySqlImageRepository {
    pool: Arc<DatabasePool>,
}

impl MySqlImageRepository {
    /// Creates a new MySQL image repository.
    #[must_use]
    pub fn new(pool: Arc<DatabasePool>) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ImageRow {
    id: i64,
    name: String,
    created_at: NaiveDate,
}

impl From<ImageRow> for Image {
    fn from(row: ImageRow) -> Self {
        Self {
            id: Some(row.id),
            name: row.name,
            created_at: row.created_at,
        }
    }
}

#[async_trait]
impl ImageRepository for MySqlImageRepository {
    async fn find_all(&self) -> PhrasesResult<Vec<Image>> {
        debug!("Finding all images");

        let rows = sqlx::query_as::<_, ImageRow>(
            "SELECT id, name, created_at FROM images ORDER BY id",
        )
        .fetch_all(self.pool.inner())
        .await?;

        Ok(rows.into_iter().map(Image::from).collect())
    }

    async fn find_by_id(&self, id: i64) -> PhrasesResult<Option<Image>> {
        debug!("Finding image by id: {}", id);

        let row = sqlx::query_as::<_, ImageRow>(
            "SELECT id, name, created_at FROM images WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(self.pool.inner())
        .await?;

        Ok(row.map(Image::from))
    }

    async fn save(&self, image: &Image) -> PhrasesResult<Image> {
        match image.id {
            None => {
                debug!("Inserting new image: {}", image.name);

                let result = sqlx::query("INSERT INTO images (name, created_at) VALUES (?, ?)")
                    .bind(&image.name)
                    .bind(image.created_at)
                    .execute(self.pool.inner())
                    .await?;

                let id = result.last_insert_id() as i64;
                self.find_by_id(id).await?.ok_or_else(|| {
                    PhrasesError::Internal("Failed to fetch inserted image".to_string())
                })
            }
            Some(id) => {
                debug!("Updating image: {}", id);

                sqlx::query("UPDATE images SET name = ? WHERE id = ?")
                    .bind(&image.name)
                    .bind(id)
                    .execute(self.pool.inner())
                    .await?;

                self.find_by_id(id).await?.ok_or_else(|| {
                    PhrasesError::Internal("Failed to fetch updated image".to_string())
                })
            }
        }
    }

    async fn delete_by_id(&self, id: i64) -> PhrasesResult<()> {
        debug!("Deleting image: {}", id);

        sqlx::query("DELETE FROM images WHERE id = ?")
            .bind(id)
            .execute(self.pool.inner())
            .await?;

        Ok(())
    }
}

impl std::fmt::Debug for MySqlImageRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MySqlImageRepository").finish_non_exhaustive()
    }
}
