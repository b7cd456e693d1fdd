//! MySQL phrase repository implementation.

use crate::{pool::DatabasePool, traits::PhraseRepository};
use async_trait::async_trait;
use chrono::NaiveDate;
use phrases_core::{Phrase, PhrasesError, PhrasesResult};
use sqlx::FromRow;
use std::sync::Arc;
use tracing::debug;

/// MySQL phrase repository.
///
/// `author_id` and `type_id` carry foreign-key constraints; saving a
/// phrase with a dangling reference surfaces as a store fault.
#[derive(Clone)]
pub struct MySqlPhraseRepository {
    pool: Arc<DatabasePool>,
}

impl MySqlPhraseRepository {
    /// Creates a new MySQL phrase repository.
    #[must_use]
    pub fn new(pool: Arc<DatabasePool>) -> Self {
        Self { pool }
    }
}

/// Database row representation of a phrase.
#[derive(Debug, FromRow)]
struct PhraseRow {
    id: i64,
    body: String,
    author_id: i64,
    type_id: i64,
    image_id: Option<i64>,
    likes_counter: i64,
    created_at: NaiveDate,
}

impl From<PhraseRow> for Phrase {
    fn from(row: PhraseRow) -> Self {
        Self {
            id: Some(row.id),
            body: row.body,
            author_id: row.author_id,
            type_id: row.type_id,
            image_id: row.image_id,
            likes_counter: row.likes_counter,
            created_at: row.created_at,
        }
    }
}

const SELECT_COLUMNS: &str =
    "SELECT id, body, author_id, type_id, image_id, likes_counter, created_at FROM phrases";

#[async_trait]
impl PhraseRepository for MySqlPhraseRepository {
    async fn find_all(&self) -> PhrasesResult<Vec<Phrase>> {
        debug!("Finding all phrases");

        let rows = sqlx::query_as::<_, PhraseRow>(&format!("{} ORDER BY id", SELECT_COLUMNS))
            .fetch_all(self.pool.inner())
            .await?;

        Ok(rows.into_iter().map(Phrase::from).collect())
    }

    async fn find_by_id(&self, id: i64) -> PhrasesResult<Option<Phrase>> {
        debug!("Finding phrase by id: {}", id);

        let row = sqlx::query_as::<_, PhraseRow>(&format!("{} WHERE id = ?", SELECT_COLUMNS))
            .bind(id)
            .fetch_optional(self.pool.inner())
            .await?;

        Ok(row.map(Phrase::from))
    }

    async fn save(&self, phrase: &Phrase) -> PhrasesResult<Phrase> {
        match phrase.id {
            None => {
                debug!("Inserting new phrase");

                // MySQL doesn't support RETURNING, so insert then select
                let result = sqlx::query(
                    r#"
                    INSERT INTO phrases (body, author_id, type_id, image_id, likes_counter, created_at)
                    VALUES (?, ?, ?, ?, ?, ?)
                    "#,
                )
                .bind(&phrase.body)
                .bind(phrase.author_id)
                .bind(phrase.type_id)
                .bind(phrase.image_id)
                .bind(phrase.likes_counter)
                .bind(phrase.created_at)
                .execute(self.pool.inner())
                .await?;

                let id = result.last_insert_id() as i64;
                self.find_by_id(id).await?.ok_or_else(|| {
                    PhrasesError::Internal("Failed to fetch inserted phrase".to_string())
                })
            }
            Some(id) => {
                debug!("Updating phrase: {}", id);

                // id, created_at and likes_counter are never touched here
                sqlx::query(
                    r#"
                    UPDATE phrases
                    SET body = ?, author_id = ?, type_id = ?, image_id = ?
                    WHERE id = ?
                    "#,
                )
                .bind(&phrase.body)
                .bind(phrase.author_id)
                .bind(phrase.type_id)
                .bind(phrase.image_id)
                .bind(id)
                .execute(self.pool.inner())
                .await?;

                self.find_by_id(id).await?.ok_or_else(|| {
                    PhrasesError::Internal("Failed to fetch updated phrase".to_string())
                })
            }
        }
    }

    async fn delete_by_id(&self, id: i64) -> PhrasesResult<()> {
        debug!("Deleting phrase: {}", id);

        sqlx::query("DELETE FROM phrases WHERE id = ?")
            .bind(id)
            .execute(self.pool.inner())
            .await?;

        Ok(())
    }
}

impl std::fmt::Debug for MySqlPhraseRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MySqlPhraseRepository").finish_non_exhaustive()
    }
}
