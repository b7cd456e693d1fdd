//! Resource controllers.

pub mod author_controller;
pub mod health_controller;
pub mod image_controller;
pub mod phrase_controller;
pub mod type_controller;
