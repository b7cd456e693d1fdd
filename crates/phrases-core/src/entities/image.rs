//! Image entity.

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Image attachable to a phrase.
///
/// The name is unique across all images (enforced by the store). The
/// phrase-to-image relation is owned by [`Phrase`](super::Phrase); no
/// back-reference is carried here, so serialization stays cycle-free.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Image {
    /// Unique identifier, `None` until the store assigns one.
    pub id: Option<i64>,

    /// Image name, unique across all images.
    pub name: String,

    /// Creation date, server-assigned.
    pub created_at: NaiveDate,
}

impl Image {
    /// Creates a new image, stamping the creation date.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            created_at: Utc::now().date_naive(),
        }
    }

    /// Checks whether the store has assigned an identifier yet.
    #[must_use]
    pub const fn is_persisted(&self) -> bool {
        self.id.is_some()
    }
}
