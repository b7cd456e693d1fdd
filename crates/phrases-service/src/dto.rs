//! Request payload DTOs with their validation constraints.
//!
//! Payload fields are separate from the entities so that `id` and
//! `created_at` can never be client-supplied. String fields default to
//! empty when absent, which trips the same constraints as an explicit
//! empty string; reference ids are `Option` so a missing reference
//! violates its required rule.

use phrases_core::{Author, Image, Phrase, PhraseType};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("not_blank");
        error.message = Some("can't be empty".into());
        return Err(error);
    }
    Ok(())
}

/// Payload for creating or updating an author.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AuthorPayload {
    #[serde(default)]
    #[validate(
        custom(function = not_blank),
        length(min = 1, max = 100, message = "must have between 1 and 100 characters")
    )]
    pub name: String,
}

impl AuthorPayload {
    /// Builds a fresh entity from the payload.
    #[must_use]
    pub fn into_entity(self) -> Author {
        Author::new(self.name)
    }

    /// Copies the mutable fields onto a loaded entity, leaving `id` and
    /// `created_at` untouched.
    pub fn apply_to(&self, author: &mut Author) {
        author.name = self.name.clone();
    }
}

/// Payload for creating or updating a phrase type.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct TypePayload {
    #[serde(default)]
    #[validate(
        custom(function = not_blank),
        length(min = 1, max = 100, message = "must have between 1 and 100 characters")
    )]
    pub name: String,
}

impl TypePayload {
    /// Builds a fresh entity from the payload.
    #[must_use]
    pub fn into_entity(self) -> PhraseType {
        PhraseType::new(self.name)
    }

    /// Copies the mutable fields onto a loaded entity.
    pub fn apply_to(&self, phrase_type: &mut PhraseType) {
        phrase_type.name = self.name.clone();
    }
}

/// Payload for creating or updating an image.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ImagePayload {
    #[serde(default)]
    #[validate(
        custom(function = not_blank),
        length(min = 1, max = 100, message = "must have between 1 and 100 characters")
    )]
    pub name: String,
}

impl ImagePayload {
    /// Builds a fresh entity from the payload.
    #[must_use]
    pub fn into_entity(self) -> Image {
        Image::new(self.name)
    }

    /// Copies the mutable fields onto a loaded entity.
    pub fn apply_to(&self, image: &mut Image) {
        image.name = self.name.clone();
    }
}

/// Payload for creating or updating a phrase.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PhrasePayload {
    #[serde(default)]
    #[validate(
        custom(function = not_blank),
        length(min = 1, max = 200, message = "must have between 1 and 200 characters")
    )]
    pub body: String,

    #[validate(required(message = "can't be empty"))]
    pub author_id: Option<i64>,

    #[validate(required(message = "can't be empty"))]
    pub type_id: Option<i64>,

    /// Optional image reference.
    pub image_id: Option<i64>,

    /// Initial likes on create; ignored on update.
    pub likes_counter: Option<i64>,
}

impl PhrasePayload {
    /// Builds a fresh entity from the payload. Must only be called on a
    /// payload that passed validation.
    #[must_use]
    pub fn into_entity(self) -> Phrase {
        let mut phrase = Phrase::new(
            self.body,
            self.author_id.unwrap_or_default(),
            self.type_id.unwrap_or_default(),
            self.image_id,
        );
        if let Some(likes) = self.likes_counter {
            phrase.likes_counter = likes;
        }
        phrase
    }

    /// Copies the mutable fields (body and references) onto a loaded
    /// entity. `id`, `created_at` and `likes_counter` stay as loaded.
    pub fn apply_to(&self, phrase: &mut Phrase) {
        phrase.body = self.body.clone();
        phrase.author_id = self.author_id.unwrap_or_default();
        phrase.type_id = self.type_id.unwrap_or_default();
        phrase.image_id = self.image_id;
    }
}
