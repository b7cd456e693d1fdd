//! MySQL author repository implementation.

use crate::{pool::DatabasePool, traits::AuthorRepository};
use async_trait::async_trait;
use chrono::NaiveDate;
use phrases_core::{Author, PhrasesError, PhrasesResult};
use sqlx::FromRow;
use std::sync::Arc;
use tracing::debug;

/// MySQL author repository.
#[derive(Clone)]
pub struct MySqlAuthorRepository {
    pool: Arc<DatabasePool>,
}

impl MySqlAuthorRepository {
    /// Creates a new MySQL author repository.
    #[must_use]
    pub fn new(pool: Arc<DatabasePool>) -> Self {
        Self { pool }
    }
}

/// Database row representation of an author.
#[derive(Debug, FromRow)]
struct AuthorRow {
    id: i64,
    name: String,
    created_at: NaiveDate,
}

impl From<AuthorRow> for Author {
    fn from(row: AuthorRow) -> Self {
        Self {
            id: Some(row.id),
            name: row.name,
            created_at: row.created_at,
        }
    }
}

#[async_trait]
impl AuthorRepository for MySqlAuthorRepository {
    async fn find_all(&self) -> PhrasesResult<Vec<Author>> {
        debug!("Finding all authors");

        let rows = sqlx::query_as::<_, AuthorRow>(
            "SELECT id, name, created_at FROM authors ORDER BY id",
        )
        .fetch_all(self.pool.inner())
        .await?;

        Ok(rows.into_iter().map(Author::from).collect())
    }

    async fn find_by_id(&self, id: i64) -> PhrasesResult<Option<Author>> {
        debug!("Finding author by id: {}", id);

        let row = sqlx::query_as::<_, AuthorRow>(
            "SELECT id, name, created_at FROM authors WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(self.pool.inner())
        .await?;

        Ok(row.map(Author::from))
    }

    async fn save(&self, author: &Author) -> PhrasesResult<Author> {
        match author.id {
            None => {
                debug!("Inserting new author: {}", author.name);

                // MySQL doesn't support RETURNING, so insert then select
                let result = sqlx::query("INSERT INTO authors (name, created_at) VALUES (?, ?)")
                    .bind(&author.name)
                    .bind(author.created_at)
                    .execute(self.pool.inner())
                    .await?;

                let id = result.last_insert_id() as i64;
                self.find_by_id(id).await?.ok_or_else(|| {
                    PhrasesError::Internal("Failed to fetch inserted author".to_string())
                })
            }
            Some(id) => {
                debug!("Updating author: {}", id);

                // created_at is never touched on update
                sqlx::query("UPDATE authors SET name = ? WHERE id = ?")
                    .bind(&author.name)
                    .bind(id)
                    .execute(self.pool.inner())
                    .await?;

                self.find_by_id(id).await?.ok_or_else(|| {
                    PhrasesError::Internal("Failed to fetch updated author".to_string())
                })
            }
        }
    }

    async fn delete_by_id(&self, id: i64) -> PhrasesResult<()> {
        debug!("Deleting author: {}", id);

        // Deleting a missing id affects zero rows and is a no-op success
        sqlx::query("DELETE FROM authors WHERE id = ?")
            .bind(id)
            .execute(self.pool.inner())
            .await?;

        Ok(())
    }
}

impl std::fmt::Debug for MySqlAuthorRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MySqlAuthorRepository").finish_non_exhaustive()
    }
}
