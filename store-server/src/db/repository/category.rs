//! Category repository

use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use shared::models::product::slugify;

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::{Category, CategoryCreate};

const TABLE: &str = "category";

#[derive(Clone)]
pub struct CategoryRepository {
    base: BaseRepository,
}

impl CategoryRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    pub async fn find_all(&self) -> RepoResult<Vec<Category>> {
        let categories: Vec<Category> = self
            .base
            .db()
            .query("SELECT * FROM category ORDER BY name")
            .await?
            .take(0)?;
        Ok(categories)
    }

    pub async fn find_by_slug(&self, slug: &str) -> RepoResult<Option<Category>> {
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM category WHERE slug = $slug LIMIT 1")
            .bind(("slug", slug.to_string()))
            .await?;
        let categories: Vec<Category> = result.take(0)?;
        Ok(categories.into_iter().next())
    }

    pub async fn create(&self, data: CategoryCreate) -> RepoResult<Category> {
        let slug = data.slug.unwrap_or_else(|| slugify(&data.name));
        if self.find_by_slug(&slug).await?.is_some() {
            return Err(RepoError::Duplicate(format!(
                "Category '{}' already exists",
                slug
            )));
        }

        let category = Category {
            id: None,
            name: data.name,
            slug,
            description: data.description,
            image: data.image,
        };

        let created: Option<Category> = self.base.db().create(TABLE).content(category).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create category".to_string()))
    }
}
