//! Shared result alias.

use crate::error::PhrasesError;

/// Result type used across all layers of the phrases service.
pub type PhrasesResult<T> = Result<T, PhrasesError>;
