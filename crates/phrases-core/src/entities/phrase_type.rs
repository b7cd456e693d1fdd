//! Phrase type entity.

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Category a phrase belongs to (motivational, stoic, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhraseType {
    /// Unique identifier, `None` until the store assigns one.
    pub id: Option<i64>,

    /// Type display name.
    pub name: String,

    /// Creation date, server-assigned.
    pub created_at: NaiveDate,
}

impl PhraseType {
    /// Creates a new type, stamping the creation date.
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
