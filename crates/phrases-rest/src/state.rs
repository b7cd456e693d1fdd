//! Application state for Axum handlers.

use phrases_service::{AuthorService, ImageService, PhraseService, TypeService};
use std::sync::Arc;

/// Shared application state: one service handle per resource.
#[derive(Clone)]
pub struct AppState {
    pub author_service: Arc<dyn AuthorService>,
    pub phrase_service: Arc<dyn PhraseService>,
    pub type_service: Arc<dyn TypeService>,
    pub image_service: Arc<dyn ImageService>,
}

impl AppState {
    /// Creates a new application state.
    pub fn new(
        author_service: Arc<dyn AuthorService>,
        phrase_service: Arc<dyn PhraseService>,
        type_service: Arc<dyn TypeService>,
        image_service: Arc<dyn ImageService>,
    ) -> Self {
        Self {
            author_service,
            phrase_service,
            type_service,
            image_service,
        }
    }
}
