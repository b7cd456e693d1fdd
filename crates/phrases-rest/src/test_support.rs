//! Shared mocks and helpers for controller tests.
//!
//! Mocked services stand in for the real pass-through layer; a mock with
//! no expectations panics when called, which doubles as a "no service
//! method was invoked" assertion.

use crate::state::AppState;
use async_trait::async_trait;
use axum::body::Body;
use axum::http::Request;
use axum::response::Response;
use http_body_util::BodyExt;
use mockall::mock;
use phrases_core::{Author, Image, Phrase, PhraseType, PhrasesResult};
use phrases_service::{AuthorService, ImageService, PhraseService, TypeService};
use std::sync::Arc;

mock! {
    pub AuthorSvc {}

    #[async_trait]
    impl AuthorService for AuthorSvc {
        async fn find_all(&self) -> PhrasesResult<Vec<Author>>;
        async fn find_by_id(&self, id: i64) -> PhrasesResult<Option<Author>>;
        async fn save(&self, author: Author) -> PhrasesResult<Author>;
        async fn delete(&self, id: i64) -> PhrasesResult<()>;
    }
}

mock! {
    pub PhraseSvc {}

    #[async_trait]
    impl PhraseService for PhraseSvc {
        async fn find_all(&self) -> PhrasesResult<Vec<Phrase>>;
        async fn find_by_id(&self, id: i64) -> PhrasesResult<Option<Phrase>>;
        async fn save(&self, phrase: Phrase) -> PhrasesResult<Phrase>;
        async fn delete(&self, id: i64) -> PhrasesResult<()>;
        async fn call_user_service(&self) -> String;
    }
}

mock! {
    pub TypeSvc {}

    #[async_trait]
    impl TypeService for TypeSvc {
        async fn find_all(&self) -> PhrasesResult<Vec<PhraseType>>;
        async fn find_by_id(&self, id: i64) -> PhrasesResult<Option<PhraseType>>;
        async fn save(&self, phrase_type: PhraseType) -> PhrasesResult<PhraseType>;
        async fn delete(&self, id: i64) -> PhrasesResult<()>;
    }
}

mock! {
    pub ImageSvc {}

    #[async_trait]
    impl ImageService for ImageSvc {
        async fn find_all(&self) -> PhrasesResult<Vec<Image>>;
        async fn find_by_id(&self, id: i64) -> PhrasesResult<Option<Image>>;
        async fn save(&self, image: Image) -> PhrasesResult<Image>;
        async fn delete(&self, id: i64) -> PhrasesResult<()>;
    }
}

pub fn app_state(
    author: MockAuthorSvc,
    phrase: MockPhraseSvc,
    phrase_type: MockTypeSvc,
    image: MockImageSvc,
) -> AppState {
    AppState::new(
        Arc::new(author),
        Arc::new(phrase),
        Arc::new(phrase_type),
        Arc::new(image),
    )
}

pub fn state_with_author(author: MockAuthorSvc) -> AppState {
    app_state(author, MockPhraseSvc::new(), MockTypeSvc::new(), MockImageSvc::new())
}

pub fn state_with_phrase(phrase: MockPhraseSvc) -> AppState {
    app_state(MockAuthorSvc::new(), phrase, MockTypeSvc::new(), MockImageSvc::new())
}

pub fn state_with_type(phrase_type: MockTypeSvc) -> AppState {
    app_state(MockAuthorSvc::new(), MockPhraseSvc::new(), phrase_type, MockImageSvc::new())
}

pub fn state_with_image(image: MockImageSvc) -> AppState {
    app_state(MockAuthorSvc::new(), MockPhraseSvc::new(), MockTypeSvc::new(), image)
}

/// Builds a GET request.
pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

/// Builds a JSON request with the given method and body.
pub fn json_request(method: &str, uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Builds a DELETE request.
pub fn delete(uri: &str) -> Request<Body> {
    Request::builder()
        .method("DELETE")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// Collects a response body as JSON.
pub async fn response_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Collects a response body as plain text.
pub async fn response_text(response: Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}
