//! Image resource controller.

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
use phrases_service::ImagePayload;
use tracing::debug;
use validator::Validate;

/// Creates the image router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/images", get(index).post(create))
        .route("/images/:id", get(show).put(update).delete(remove))
}

/// List all images.
async fn index(State(state): State<AppState>) -> Response {
    debug!("List images request");

    match state.image_service.find_all().await {
        Ok(images) => Json(images).into_response(),
        Err(e) => store_failure(&e, DatabaseMessage::Access),
    }
}

/// Get an image by id.
async fn show(State(state): State<AppState>, Path(id): Path<i64>) -> Response {
    debug!("Show image request: {}", id);

    match state.image_service.find_by_id(id).await {
        Ok(Some(image)) => (StatusCode::OK, Json(image)).into_response(),
        Ok(None) => not_found("image", id),
        Err(e) => store_failure(&e, DatabaseMessage::Access),
    }
}

/// Create a new image. A duplicate name surfaces as a store fault.
async fn create(State(state): State<AppState>, Json(payload): Json<ImagePayload>) -> Response {
    debug!("Create image request");

    if let Err(violations) = payload.validate() {
        return validation_failure(field_violation_messages(&violations));
    }

    match state.image_service.save(payload.into_entity()).await {
        Ok(image) => record_envelope(CrudMessage::Created, "image", &image),
        Err(e) => store_failure(&e, DatabaseMessage::Save),
    }
}

/// Update an existing image.
async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<ImagePayload>,
) -> Response {
    debug!("Update image request: {}", id);

    let loaded = match state.image_service.find_by_id(id).await {
        Ok(loaded) => loaded,
        Err(e) => return store_failure(&e, DatabaseMessage::Access),
    };

    // Validation is checked before the not-found branch
    if let Err(violations) = payload.validate() {
        return validation_failure(field_violation_messages(&violations));
    }

    let Some(mut image) = loaded else {
        return not_found("image", id);
    };

    payload.apply_to(&mut image);

    match state.image_service.save(image).await {
        Ok(updated) => record_envelope(CrudMessage::Updated, "image", &updated),
        Err(e) => store_failure(&e, DatabaseMessage::Update),
    }
}

/// Delete an image by id. Deleting a missing id is a no-op success.
async fn remove(State(state): State<AppState>, Path(id): Path<i64>) -> Response {
    debug!("Delete image request: {}", id);

    match state.image_service.delete(id).await {
        Ok(()) => deleted(),
        Err(e) => store_failure(&e, DatabaseMessage::Delete),
    }
}
