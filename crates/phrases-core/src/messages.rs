//! Message catalog shared by every resource controller.
//!
//! The confirmation and failure strings are enum-based so all four
//! controllers answer with exactly the same wording.

/// Confirmation messages for mutating CRUD operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrudMessage {
    Created,
    Updated,
    Deleted,
}

impl CrudMessage {
    /// Returns the client-facing confirmation text.
    #[must_use]
    pub const fn text(self) -> &'static str {
        match self {
            Self::Created => "Record succesfully created",
            Self::Updated => "Record succesfully updated",
            Self::Deleted => "Record succesfully deleted",
        }
    }
}

/// Client-facing messages for store-access failures, one per operation.
///
/// The underlying cause is logged server-side; the client only ever sees
/// these fixed strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatabaseMessage {
    Access,
    Save,
    Update,
    Delete,
}

impl DatabaseMessage {
    /// Returns the client-facing failure text.
    #[must_use]
    pub const fn text(self) -> &'static str {
        match self {
            Self::Access => "error accessing the database",
            Self::Save => "error saving record",
            Self::Update => "error updating record",
            Self::Delete => "error deleting record",
        }
    }
}
