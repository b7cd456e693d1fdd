//! MySQL repository implementations.

pub mod author_repository;
pub mod image_repository;
pub mod phrase_repository;
pub mod type_repository;

pub use author_repository::MySqlAuthorRepository;
pub use image_repository::MySqlImageRepository;
pub use phrase_repository::MySqlPhraseRepository;
pub use type_repository::MySqlTypeRepository;
