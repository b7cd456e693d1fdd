//! Domain entities.

pub mod author;
pub mod image;
pub mod phrase;
pub mod phrase_type;

pub use author::Author;
pub use image::Image;
pub use phrase::Phrase;
pub use phrase_type::PhraseType;
