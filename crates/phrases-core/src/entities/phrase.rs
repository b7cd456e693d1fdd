//! Phrase entity.

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A quotable phrase, the central entity of the service.
///
/// Relations to [`Author`](super::Author), [`PhraseType`](super::PhraseType)
/// and [`Image`](super::Image) are carried as foreign-key ids; referential
/// integrity is the store's responsibility. The image reference is optional.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Phrase {
    /// Unique identifier, `None` until the store assigns one.
    pub id: Option<i64>,

    /// Phrase text.
    pub body: String,

    /// Referenced author, must exist in the store.
    pub author_id: i64,

    /// Referenced type, must exist in the store.
    pub type_id: i64,

    /// Referenced image, optional.
    pub image_id: Option<i64>,

    /// Number of likes, starts at zero.
    pub likes_counter: i64,

    /// Creation date, server-assigned.
    pub created_at: NaiveDate,
}

impl Phrase {
    /// Creates a new phrase, stamping the creation date.
    #[must_use]
    pub fn new(body: impl Into<String>, author_id: i64, type_id: i64, image_id: Option<i64>) -> Self {
        Self {
            id: None,
            body: body.into(),
            author_id,
            type_id,
            image_id,
            likes_counter: 0,
            created_at: Utc::now().date_naive(),
        }
    }

    /// Checks whether the store has assigned an identifier yet.
    #[must_use]
    pub const fn is_persisted(&self) -> bool {
        self.id.is_some()
    }
}
