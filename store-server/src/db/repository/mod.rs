//! Repository module
//!
//! One repository per table, all sharing [`BaseRepository`] for the database
//! handle. Ids follow the `"table:id"` string convention end to end and are
//! parsed into `RecordId` at the boundary.

pub mod cart;
pub mod category;
pub mod media;
pub mod order;
pub mod product;
pub mod review;
pub mod user;

pub use cart::CartRepository;
pub use category::CategoryRepository;
pub use media::MediaRepository;
pub use order::OrderRepository;
pub use product::{ProductQuery, ProductRepository, ProductSort};
pub use review::ReviewRepository;
pub use user::UserRepository;

use surrealdb::Surreal;
use surrealdb::engine::local::Db;
use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Duplicate: {0}")]
    Duplicate(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<surrealdb::Error> for RepoError {
    fn from(err: surrealdb::Error) -> Self {
        RepoError::Database(err.to_string())
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

/// Base repository with database reference
#[derive(Clone)]
pub struct BaseRepository {
    db: Surreal<Db>,
}

impl BaseRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self { db }
    }

    pub fn db(&self) -> &Surreal<Db> {
        &self.db
    }
}
