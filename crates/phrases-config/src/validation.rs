//! Configuration sanity checks.

use crate::AppConfig;
use phrases_core::PhrasesError;

/// Validates a loaded configuration before the server starts.
pub fn validate(config: &AppConfig) -> Result<(), PhrasesError> {
    if config.server.port == 0 {
        return Err(PhrasesError::Configuration(
            "server.port must not be 0".to_string(),
        ));
    }

    if config.database.max_connections == 0 {
        return Err(PhrasesError::Configuration(
            "database.max_connections must be at least 1".to_string(),
        ));
    }

    if config.database.min_connections > config.database.max_connections {
        return Err(PhrasesError::Configuration(
            "database.min_connections must not exceed max_connections".to_string(),
        ));
    }

    if config.users_service.instances.is_empty() {
        return Err(PhrasesError::Configuration(
            "users_service.instances must list at least one base URL".to_string(),
        ));
    }

    if config.users_service.failure_threshold == 0 {
        return Err(PhrasesError::Configuration(
            "users_service.failure_threshold must be at least 1".to_string(),
        ));
    }

    Ok(())
}
