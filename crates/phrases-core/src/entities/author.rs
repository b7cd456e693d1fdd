//! Author entity.

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Author of one or more phrases.
///
/// The identifier is assigned by the store on creation; `created_at` is
/// stamped exactly once when the entity is constructed and never updated
/// afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Author {
    /// Unique identifier, `None` until the store assigns one.
    pub id: Option<i64>,

    /// Author display name.
    pub name: String,

    /// Creation date, server-assigned.
    pub created_at: NaiveDate,
}

impl Author {
    /// Creates a new author, stamping the creation date.
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
