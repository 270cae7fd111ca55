//! Review repository

use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::Review;

const TABLE: &str = "review";

#[derive(Clone)]
pub struct ReviewRepository {
    base: BaseRepository,
}

impl ReviewRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    pub async fn create(&self, review: Review) -> RepoResult<Review> {
        let created: Option<Review> = self.base.db().create(TABLE).content(review).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create review".to_string()))
    }

    /// Approved reviews for a product, newest first. Pending reviews never
    /// leave the server.
    pub async fn find_approved_by_product(&self, product_id: &str) -> RepoResult<Vec<Review>> {
        let reviews: Vec<Review> = self
            .base
            .db()
            .query(
                "SELECT * FROM review WHERE product = $product AND approved = true \
                 ORDER BY createdAt DESC",
            )
            .bind(("product", product_id.to_string()))
            .await?
            .take(0)?;
        Ok(reviews)
    }
}
