//! Author resource controller.
//!
//! Every handler follows the shared pipeline: validate the payload,
//! dispatch to the service, translate the outcome into a status code and
//! the uniform envelope. A non-numeric path id never reaches a handler:
//! the `Path<i64>` extractor rejects it with 400 first.

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
use phrases_service::AuthorPayload;
use tracing::debug;
use validator::Validate;

/// Creates the author router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/authors", get(index).post(create))
        .route("/authors/:id", get(show).put(update).delete(remove))
}

/// List all authors.
async fn index(State(state): State<AppState>) -> Response {
    debug!("List authors request");

    match state.author_service.find_all().await {
        Ok(authors) => Json(authors).into_response(),
        Err(e) => store_failure(&e, DatabaseMessage::Access),
    }
}

/// Get an author by id.
async fn show(State(state): State<AppState>, Path(id): Path<i64>) -> Response {
    debug!("Show author request: {}", id);

    match state.author_service.find_by_id(id).await {
        Ok(Some(author)) => (StatusCode::OK, Json(author)).into_response(),
        Ok(None) => not_found("author", id),
        Err(e) => store_failure(&e, DatabaseMessage::Access),
    }
}

/// Create a new author.
async fn create(State(state): State<AppState>, Json(payload): Json<AuthorPayload>) -> Response {
    debug!("Create author request");

    if let Err(violations) = payload.validate() {
        return validation_failure(field_violation_messages(&violations));
    }

    match state.author_service.save(payload.into_entity()).await {
        Ok(author) => record_envelope(CrudMessage::Created, "author", &author),
        Err(e) => store_failure(&e, DatabaseMessage::Save),
    }
}

/// Update an existing author.
async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<AuthorPayload>,
) -> Response {
    debug!("Update author request: {}", id);

    let loaded = match state.author_service.find_by_id(id).await {
        Ok(loaded) => loaded,
        Err(e) => return store_failure(&e, DatabaseMessage::Access),
    };

    // Validation is checked before the not-found branch
    if let Err(violations) = payload.validate() {
        return validation_failure(field_violation_messages(&violations));
    }

    let Some(mut author) = loaded else {
        return not_found("author", id);
    };

    payload.apply_to(&mut author);

    match state.author_service.save(author).await {
        Ok(updated) => record_envelope(CrudMessage::Updated, "author", &updated),
        Err(e) => store_failure(&e, DatabaseMessage::Update),
    }
}

/// Delete an author by id. Deleting a missing id is a no-op success.
async fn remove(State(state): State<AppState>, Path(id): Path<i64>) -> Response {
    debug!("Delete author request: {}", id);

    match state.author_service.delete(id).await {
        Ok(()) => deleted(),
        Err(e) => store_failure(&e, DatabaseMessage::Delete),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{
        delete as delete_request, get as get_request, json_request, response_json,
        state_with_author, MockAuthorSvc,
    };
    use axum::http::StatusCode;
    use chrono::NaiveDate;
    use mockall::predicate::eq;
    use phrases_core::{Author, PhrasesError};
    use tower::ServiceExt;

    fn persisted(name: &str, id: i64) -> Author {
        let mut author = Author::new(name);
        author.id = Some(id);
        author
    }

    fn app(service: MockAuthorSvc) -> Router {
        router().with_state(state_with_author(service))
    }

    #[tokio::test]
    async fn test_index_returns_all_authors() {
        let mut service = MockAuthorSvc::new();
        service
            .expect_find_all()
            .times(1)
            .returning(|| Ok(vec![persisted("Seneca", 1), persisted("Epictetus", 2)]));

        let response = app(service).oneshot(get_request("/authors")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = response_json(response).await;
        assert_eq!(body.as_array().unwrap().len(), 2);
        assert_eq!(body[0]["name"], "Seneca");
    }

    #[tokio::test]
    async fn test_index_maps_store_fault_to_500() {
        let mut service = MockAuthorSvc::new();
        service
            .expect_find_all()
            .times(1)
            .returning(|| Err(PhrasesError::database("gone away")));

        let response = app(service).oneshot(get_request("/authors")).await.unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = response_json(response).await;
        assert_eq!(body["msg"], "error accessing the database");
    }

    #[tokio::test]
    async fn test_show_with_proper_id() {
        let mut service = MockAuthorSvc::new();
        service
            .expect_find_by_id()
            .with(eq(1))
            .times(1)
            .returning(|_| Ok(Some(persisted("Seneca", 1))));

        let response = app(service).oneshot(get_request("/authors/1")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = response_json(response).await;
        assert_eq!(body["name"], "Seneca");
        assert_eq!(body["id"], 1);
    }

    #[tokio::test]
    async fn test_show_with_non_numeric_id_is_400_without_service_call() {
        // No expectations: any service call would panic the test
        let response = app(MockAuthorSvc::new())
            .oneshot(get_request("/authors/randomString"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_show_when_record_does_not_exist() {
        let mut service = MockAuthorSvc::new();
        service
            .expect_find_by_id()
            .with(eq(999))
            .times(1)
            .returning(|_| Ok(None));

        let response = app(service).oneshot(get_request("/authors/999")).await.unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = response_json(response).await;
        assert_eq!(body["msg"], "Record with id 999 not found");
    }

    #[tokio::test]
    async fn test_show_when_store_fails() {
        let mut service = MockAuthorSvc::new();
        service
            .expect_find_by_id()
            .times(1)
            .returning(|_| Err(PhrasesError::database("gone away")));

        let response = app(service).oneshot(get_request("/authors/1")).await.unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = response_json(response).await;
        assert_eq!(body["msg"], "error accessing the database");
    }

    #[tokio::test]
    async fn test_create_with_valid_payload() {
        let mut service = MockAuthorSvc::new();
        service.expect_save().times(1).returning(|author| {
            let mut persisted = author;
            persisted.id = Some(1);
            Ok(persisted)
        });

        let response = app(service)
            .oneshot(json_request("POST", "/authors", r#"{"name":"Seneca"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        let body = response_json(response).await;
        assert_eq!(body["msg"], "Record succesfully created");
        assert_eq!(body["author"]["name"], "Seneca");
        assert_eq!(body["author"]["id"], 1);
        assert!(body["author"]["createdAt"].is_string());
    }

    #[tokio::test]
    async fn test_create_with_empty_name_lists_both_violations() {
        // No save expectation: validation must short-circuit
        let response = app(MockAuthorSvc::new())
            .oneshot(json_request("POST", "/authors", r#"{"name":""}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = response_json(response).await;
        let errors = body["errors"].as_array().unwrap();
        assert_eq!(errors.len(), 2);
        assert!(errors.contains(&serde_json::json!("The name field can't be empty")));
        assert!(errors.contains(&serde_json::json!(
            "The name field must have between 1 and 100 characters"
        )));
    }

    #[tokio::test]
    async fn test_create_with_overlong_name() {
        let name = "x".repeat(101);
        let payload = format!(r#"{{"name":"{}"}}"#, name);

        let response = app(MockAuthorSvc::new())
            .oneshot(json_request("POST", "/authors", &payload))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = response_json(response).await;
        assert_eq!(
            body["errors"],
            serde_json::json!(["The name field must have between 1 and 100 characters"])
        );
    }

    #[tokio::test]
    async fn test_create_when_store_fails() {
        let mut service = MockAuthorSvc::new();
        service
            .expect_save()
            .times(1)
            .returning(|_| Err(PhrasesError::database("gone away")));

        let response = app(service)
            .oneshot(json_request("POST", "/authors", r#"{"name":"Seneca"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = response_json(response).await;
        assert_eq!(body["msg"], "error saving record");
    }

    #[tokio::test]
    async fn test_update_with_valid_payload() {
        let created_at = NaiveDate::from_ymd_opt(2020, 5, 17).unwrap();

        let mut service = MockAuthorSvc::new();
        service.expect_find_by_id().with(eq(1)).times(1).returning(move |_| {
            let mut author = persisted("Seneca", 1);
            author.created_at = created_at;
            Ok(Some(author))
        });
        service
            .expect_save()
            .withf(move |author: &Author| {
                // id and created_at survive the update untouched
                author.id == Some(1)
                    && author.created_at == created_at
                    && author.name == "Marcus Aurelius"
            })
            .times(1)
            .returning(|author| Ok(author));

        let response = app(service)
            .oneshot(json_request("PUT", "/authors/1", r#"{"name":"Marcus Aurelius"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        let body = response_json(response).await;
        assert_eq!(body["msg"], "Record succesfully updated");
        assert_eq!(body["author"]["name"], "Marcus Aurelius");
        assert_eq!(body["author"]["createdAt"], "2020-05-17");
    }

    #[tokio::test]
    async fn test_update_ignores_client_supplied_id_and_created_at() {
        let created_at = NaiveDate::from_ymd_opt(2020, 5, 17).unwrap();

        let mut service = MockAuthorSvc::new();
        service.expect_find_by_id().with(eq(1)).times(1).returning(move |_| {
            let mut author = persisted("Seneca", 1);
            author.created_at = created_at;
            Ok(Some(author))
        });
        service
            .expect_save()
            .withf(move |author: &Author| {
                author.id == Some(1) && author.created_at == created_at
            })
            .times(1)
            .returning(|author| Ok(author));

        let response = app(service)
            .oneshot(json_request(
                "PUT",
                "/authors/1",
                r#"{"name":"Seneca","id":777,"createdAt":"1999-01-01"}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
    }

    #[tokio::test]
    async fn test_update_checks_validation_before_not_found() {
        // The record is loaded first, but an invalid payload still wins
        let mut service = MockAuthorSvc::new();
        service
            .expect_find_by_id()
            .with(eq(999))
            .times(1)
            .returning(|_| Ok(None));

        let response = app(service)
            .oneshot(json_request("PUT", "/authors/999", r#"{"name":""}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = response_json(response).await;
        assert!(body["errors"].is_array());
    }

    #[tokio::test]
    async fn test_update_when_record_does_not_exist() {
        let mut service = MockAuthorSvc::new();
        service
            .expect_find_by_id()
            .with(eq(999))
            .times(1)
            .returning(|_| Ok(None));

        let response = app(service)
            .oneshot(json_request("PUT", "/authors/999", r#"{"name":"Seneca"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = response_json(response).await;
        assert_eq!(body["msg"], "Record with id 999 not found");
    }

    #[tokio::test]
    async fn test_update_when_store_fails_on_save() {
        let mut service = MockAuthorSvc::new();
        service
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(Some(persisted("Seneca", 1))));
        service
            .expect_save()
            .times(1)
            .returning(|_| Err(PhrasesError::database("gone away")));

        let response = app(service)
            .oneshot(json_request("PUT", "/authors/1", r#"{"name":"Marcus Aurelius"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = response_json(response).await;
        assert_eq!(body["msg"], "error updating record");
    }

    #[tokio::test]
    async fn test_delete_succeeds() {
        let mut service = MockAuthorSvc::new();
        service
            .expect_delete()
            .with(eq(1))
            .times(1)
            .returning(|_| Ok(()));

        let response = app(service).oneshot(delete_request("/authors/1")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = response_json(response).await;
        assert_eq!(body["msg"], "Record succesfully deleted");
    }

    #[tokio::test]
    async fn test_delete_is_idempotent_for_missing_id() {
        let mut service = MockAuthorSvc::new();
        service.expect_delete().with(eq(999)).times(2).returning(|_| Ok(()));
        let app = app(service);

        let first = app.clone().oneshot(delete_request("/authors/999")).await.unwrap();
        let second = app.oneshot(delete_request("/authors/999")).await.unwrap();

        assert_eq!(first.status(), StatusCode::OK);
        assert_eq!(second.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_delete_when_store_fails() {
        let mut service = MockAuthorSvc::new();
        service
            .expect_delete()
            .times(1)
            .returning(|_| Err(PhrasesError::database("gone away")));

        let response = app(service).oneshot(delete_request("/authors/1")).await.unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = response_json(response).await;
        assert_eq!(body["msg"], "error deleting record");
    }

    #[tokio::test]
    async fn test_delete_with_non_numeric_id_is_400_without_service_call() {
        let response = app(MockAuthorSvc::new())
            .oneshot(delete_request("/authors/randomString"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
