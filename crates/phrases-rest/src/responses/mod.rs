//! API response envelopes.
//!
//! Every mutating operation answers with `{msg, <entityName>: entity}` or
//! `{msg}`; validation failures answer with `{errors: [...]}`. The
//! helpers here keep status codes and bodies identical across the four
//! resource controllers.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use phrases_core::{CrudMessage, DatabaseMessage, PhrasesError};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::error;

/// Message-only response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub msg: String,
}

/// Validation failure body: one message per violated constraint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorsResponse {
    pub errors: Vec<String>,
}

/// 201 envelope for create/update: `{msg, <entityName>: entity}`.
///
/// Update reuses the created status by convention.
pub fn record_envelope<T: Serialize>(msg: CrudMessage, entity_name: &str, entity: &T) -> Response {
    let mut body = serde_json::Map::new();
    body.insert("msg".to_string(), Value::String(msg.text().to_string()));
    body.insert(
        entity_name.to_string(),
        serde_json::to_value(entity).unwrap_or(Value::Null),
    );
    (StatusCode::CREATED, Json(Value::Object(body))).into_response()
}

/// 200 confirmation for delete.
pub fn deleted() -> Response {
    (
        StatusCode::OK,
        Json(MessageResponse {
            msg: CrudMessage::Deleted.text().to_string(),
        }),
    )
        .into_response()
}

/// 404 for a lookup that yielded no record.
pub fn not_found(resource: &'static str, id: i64) -> Response {
    let err = PhrasesError::not_found(resource, id);
    (
        StatusCode::NOT_FOUND,
        Json(MessageResponse {
            msg: err.to_string(),
        }),
    )
        .into_response()
}

/// 500 for a store fault. The underlying cause is logged; the client only
/// sees the fixed, operation-specific message.
pub fn store_failure(err: &PhrasesError, msg: DatabaseMessage) -> Response {
    error!("Store failure ({}): {}", msg.text(), err);
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(MessageResponse {
            msg: msg.text().to_string(),
        }),
    )
        .into_response()
}

/// 400 for a payload that violated its constraints.
pub fn validation_failure(errors: Vec<String>) -> Response {
    (StatusCode::BAD_REQUEST, Json(ErrorsResponse { errors })).into_response()
}
