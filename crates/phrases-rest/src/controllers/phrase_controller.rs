//! Phrase resource controller.
//!
//! Same pipeline as the other resources, plus the two plain-text
//! endpoints: the service banner and the guarded users-service call.

use crate::{
    responses::{deleted, not_found, record_envelope, store_failure, validation_failure},
    state::AppState,
    validation::field_violation_messages,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use phrases_core::{CrudMessage, DatabaseMessage};
use phrases_service::PhrasePayload;
use tracing::debug;
use validator::Validate;

/// Creates the phrase router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/phrases", get(index).post(create))
        .route("/phrases/users", get(users))
        .route("/phrases/:id", get(show).put(update).delete(remove))
        .route("/service-route", get(service_route))
}

/// List all phrases.
async fn index(State(state): State<AppState>) -> Response {
    debug!("List phrases request");

    match state.phrase_service.find_all().await {
        Ok(phrases) => Json(phrases).into_response(),
        Err(e) => store_failure(&e, DatabaseMessage::Access),
    }
}

/// Identification banner, the counterpart of the users service's own
/// route endpoint.
async fn service_route() -> &'static str {
    "Hi from phrases service"
}

/// Call the remote users service. Always 200: a remote failure yields
/// the fallback string, never an error status.
async fn users(State(state): State<AppState>) -> String {
    debug!("Users service call request");

    state.phrase_service.call_user_service().await
}

/// Get a phrase by id.
async fn show(State(state): State<AppState>, Path(id): Path<i64>) -> Response {
    debug!("Show phrase request: {}", id);

    match state.phrase_service.find_by_id(id).await {
        Ok(Some(phrase)) => (StatusCode::OK, Json(phrase)).into_response(),
        Ok(None) => not_found("phrase", id),
        Err(e) => store_failure(&e, DatabaseMessage::Access),
    }
}

/// Create a new phrase.
async fn create(State(state): State<AppState>, Json(payload): Json<PhrasePayload>) -> Response {
    debug!("Create phrase request");

    if let Err(violations) = payload.validate() {
        return validation_failure(field_violation_messages(&violations));
    }

    match state.phrase_service.save(payload.into_entity()).await {
        Ok(phrase) => record_envelope(CrudMessage::Created, "phrase", &phrase),
        Err(e) => store_failure(&e, DatabaseMessage::Save),
    }
}

/// Update an existing phrase.
async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<PhrasePayload>,
) -> Response {
    debug!("Update phrase request: {}", id);

    let loaded = match state.phrase_service.find_by_id(id).await {
        Ok(loaded) => loaded,
        Err(e) => return store_failure(&e, DatabaseMessage::Access),
    };

    // Validation is checked before the not-found branch
    if let Err(violations) = payload.validate() {
        return validation_failure(field_violation_messages(&violations));
    }

    let Some(mut phrase) = loaded else {
        return not_found("phrase", id);
    };

    payload.apply_to(&mut phrase);

    match state.phrase_service.save(phrase).await {
        Ok(updated) => record_envelope(CrudMessage::Updated, "phrase", &updated),
        Err(e) => store_failure(&e, DatabaseMessage::Update),
    }
}

/// Delete a phrase by id. Deleting a missing id is a no-op success.
async fn remove(State(state): State<AppState>, Path(id): Path<i64>) -> Response {
    debug!("Delete phrase request: {}", id);

    match state.phrase_service.delete(id).await {
        Ok(()) => deleted(),
        Err(e) => store_failure(&e, DatabaseMessage::Delete),
    }
}
