//! # Phrases Core
//!
//! Core types for the phrases microservice: the four domain entities,
//! the shared error taxonomy and the CRUD message catalog used by every
//! resource controller.

pub mod entities;
pub mod error;
pub mod messages;
pub mod result;

pub use entities::*;
pub use error::*;
pub use messages::*;
pub use result::*;
