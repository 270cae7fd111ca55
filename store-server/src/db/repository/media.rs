//! Media repository

use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::Media;

const TABLE: &str = "media";

#[derive(Clone)]
pub struct MediaRepository {
    base: BaseRepository,
}

impl MediaRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    pub async fn create(&self, media: Media) -> RepoResult<Media> {
        let created: Option<Media> = self.base.db().create(TABLE).content(media).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create media record".to_string()))
    }
}
