//! # Phrases Service
//!
//! Business logic layer: one service per entity wrapping its repository,
//! plus the request payload DTOs with their validation constraints. The
//! phrase service additionally owns the guarded users-service call.

pub mod author_service;
pub mod dto;
pub mod image_service;
pub mod phrase_service;
pub mod type_service;

pub use author_service::*;
pub use dto::*;
pub use image_service::*;
pub use phrase_service::*;
pub use type_service::*;
