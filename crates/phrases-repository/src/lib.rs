//! # Phrases Repository
//!
//! Data access layer for the phrases microservice. One trait per entity
//! (`AuthorRepository`, `PhraseRepository`, `TypeRepository`,
//! `ImageRepository`), each implemented against MySQL via SQLx:
//!
//! ```text
//! Service
//!   ↓  Arc<dyn AuthorRepository>   (domain interface)
//! MySqlAuthorRepository            (SQLx / MySQL)
//!   ↓
//! MySQL
//! ```

pub mod mysql;
pub mod pool;
pub mod traits;

pub use mysql::*;
pub use pool::*;
pub use traits::*;
