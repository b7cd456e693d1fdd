//! Application wiring: repositories, services and the remote client.

use phrases_client::{HttpUsersClient, ResilientUsersClient, StaticServiceDiscovery};
use phrases_config::AppConfig;
use phrases_core::PhrasesResult;
use phrases_repository::{
    DatabasePool, MySqlAuthorRepository, MySqlImageRepository, MySqlPhraseRepository,
    MySqlTypeRepository,
};
use phrases_rest::AppState;
use phrases_service::{
    AuthorServiceImpl, ImageServiceImpl, PhraseServiceImpl, TypeServiceImpl,
};
use std::sync::Arc;

/// Builds the application state from the database pool and configuration.
pub fn build_state(db_pool: Arc<DatabasePool>, config: &AppConfig) -> PhrasesResult<AppState> {
    let users = &config.users_service;

    let discovery = Arc::new(
        StaticServiceDiscovery::new()
            .with_service(users.service_name.clone(), users.instances.clone()),
    );

    let users_client = HttpUsersClient::new(
        discovery,
        users.service_name.clone(),
        users.route_path.clone(),
        users.request_timeout(),
    )?;
    let users_client = Arc::new(ResilientUsersClient::from_config(
        Arc::new(users_client),
        users,
    ));

    let author_repository = Arc::new(MySqlAuthorRepository::new(Arc::clone(&db_pool)));
    let phrase_repository = Arc::new(MySqlPhraseRepository::new(Arc::clone(&db_pool)));
    let type_repository = Arc::new(MySqlTypeRepository::new(Arc::clone(&db_pool)));
    let image_repository = Arc::new(MySqlImageRepository::new(db_pool));

    Ok(AppState::new(
        Arc::new(AuthorServiceImpl::new(author_repository)),
        Arc::new(PhraseServiceImpl::new(phrase_repository, users_client)),
        Arc::new(TypeServiceImpl::new(type_repository)),
        Arc::new(ImageServiceImpl::new(image_repository)),
    ))
}
