//! Phrase type resource controller.

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
use phrases_service::TypePayload;
use tracing::debug;
use validator::Validate;

/// Creates the type router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/types", get(index).post(create))
        .route("/types/:id", get(show).put(update).delete(remove))
}

/// List all types.
async fn index(State(state): State<AppState>) -> Response {
    debug!("List types request");

    match state.type_service.find_all().await {
        Ok(types) => Json(types).into_response(),
        Err(e) => store_failure(&e, DatabaseMessage::Access),
    }
}

/// Get a type by id.
async fn show(State(state): State<AppState>, Path(id): Path<i64>) -> Response {
    debug!("Show type request: {}", id);

    match state.type_service.find_by_id(id).await {
        Ok(Some(phrase_type)) => (StatusCode::OK, Json(phrase_type)).into_response(),
        Ok(None) => not_found("type", id),
        Err(e) => store_failure(&e, DatabaseMessage::Access),
    }
}

/// Create a new type.
async fn create(State(state): State<AppState>, Json(payload): Json<TypePayload>) -> Response {
    debug!("Create type request");

    if let Err(violations) = payload.validate() {
        return validation_failure(field_violation_messages(&violations));
    }

    match state.type_service.save(payload.into_entity()).await {
        Ok(phrase_type) => record_envelope(CrudMessage::Created, "type", &phrase_type),
        Err(e) => store_failure(&e, DatabaseMessage::Save),
    }
}

/// Update an existing type.
async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<TypePayload>,
) -> Response {
    debug!("Update type request: {}", id);

    let loaded = match state.type_service.find_by_id(id).await {
        Ok(loaded) => loaded,
        Err(e) => return store_failure(&e, DatabaseMessage::Access),
    };

    // Validation is checked before the not-found branch
    if let Err(violations) = payload.validate() {
        return validation_failure(field_violation_messages(&violations));
    }

    let Some(mut phrase_type) = loaded else {
        return not_found("type", id);
    };

    payload.apply_to(&mut phrase_type);

    match state.type_service.save(phrase_type).await {
        Ok(updated) => record_envelope(CrudMessage::Updated, "type", &updated),
        Err(e) => store_failure(&e, DatabaseMessage::Update),
    }
}

/// Delete a type by id. Deleting a missing id is a no-op success.
async fn remove(State(state): State<AppState>, Path(id): Path<i64>) -> Response {
    debug!("Delete type request: {}", id);

    match state.type_service.delete(id).await {
        Ok(()) => deleted(),
        Err(e) => store_failure(&e, DatabaseMessage::Delete),
    }
}
