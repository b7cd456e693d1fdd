//! MySQL phrase type repository implementation.

use crate::{pool::DatabasePool, traits::TypeRepository};
use async_trait::async_trait;
use chrono::NaiveDate;
use phrases_core::{PhraseType, PhrasesError, PhrasesResult};
use sqlx::FromRow;
use std::sync::Arc;
use tracing::debug;

/// MySQL phrase type repository.
#[derive(Clone)]
pub struct MySqlTypeRepository {
    pool: Arc<DatabasePool>,
}

impl MySqlTypeRepository {
    /// Creates a new MySQL type repository.
    #[must_use]
    pub fn new(pool: Arc<DatabasePool>) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct TypeRow {
    id: i64,
    name: String,
    created_at: NaiveDate,
}

impl From<TypeRow> for PhraseType {
    fn from(row: TypeRow) -> Self {
        Self {
            id: Some(row.id),
            name: row.name,
            created_at: row.created_at,
        }
    }
}

#[async_trait]
impl TypeRepository for MySqlTypeRepository {
    async fn find_all(&self) -> PhrasesResult<Vec<PhraseType>> {
        debug!("Finding all types");

        let rows = sqlx::query_as::<_, TypeRow>(
            "SELECT id, name, created_at FROM types ORDER BY id",
        )
        .fetch_all(self.pool.inner())
        .await?;

        Ok(rows.into_iter().map(PhraseType::from).collect())
    }

    async fn find_by_id(&self, id: i64) -> PhrasesResult<Option<PhraseType>> {
        debug!("Finding type by id: {}", id);

        let row = sqlx::query_as::<_, TypeRow>(
            "SELECT id, name, created_at FROM types WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(self.pool.inner())
        .await?;

        Ok(row.map(PhraseType::from))
    }

    async fn save(&self, phrase_type: &PhraseType) -> PhrasesResult<PhraseType> {
        match phrase_type.id {
            None => {
                debug!("Inserting new type: {}", phrase_type.name);

                let result = sqlx::query("INSERT INTO types (name, created_at) VALUES (?, ?)")
                    .bind(&phrase_type.name)
                    .bind(phrase_type.created_at)
                    .execute(self.pool.inner())
                    .await?;

                let id = result.last_insert_id() as i64;
                self.find_by_id(id).await?.ok_or_else(|| {
                    PhrasesError::Internal("Failed to fetch inserted type".to_string())
                })
            }
            Some(id) => {
                debug!("Updating type: {}", id);

                sqlx::query("UPDATE types SET name = ? WHERE id = ?")
                    .bind(&phrase_type.name)
                    .bind(id)
                    .execute(self.pool.inner())
                    .await?;

                self.find_by_id(id).await?.ok_or_else(|| {
                    PhrasesError::Internal("Failed to fetch updated type".to_string())
                })
            }
        }
    }

    async fn delete_by_id(&self, id: i64) -> PhrasesResult<()> {
        debug!("Deleting type: {}", id);

        sqlx::query("DELETE FROM types WHERE id = ?")
            .bind(id)
            .execute(self.pool.inner())
            .await?;

        Ok(())
    }
}

impl std::fmt::Debug for MySqlTypeRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MySqlTypeRepository").finish_non_exhaustive()
    }
}
