//! Cart repository
//!
//! One document per user. Saves replace the item list wholesale
//! (last-write-wins); an empty save leaves storage untouched so a session
//! ending with an empty local cart cannot wipe a previously persisted one.

use chrono::Utc;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use shared::cart::CartItem;

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::CartRecord;

const TABLE: &str = "cart";

#[derive(Clone)]
pub struct CartRepository {
    base: BaseRepository,
}

impl CartRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    pub async fn find_by_user(&self, user_id: &str) -> RepoResult<Option<CartRecord>> {
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM cart WHERE user = $user LIMIT 1")
            .bind(("user", user_id.to_string()))
            .await?;
        let carts: Vec<CartRecord> = result.take(0)?;
        Ok(carts.into_iter().next())
    }

    /// Create or replace the user's cart. Empty item lists are accepted but
    /// persist nothing.
    pub async fn upsert(&self, user_id: &str, items: Vec<CartItem>) -> RepoResult<()> {
        if items.is_empty() {
            return Ok(());
        }

        match self.find_by_user(user_id).await? {
            Some(existing) => {
                let id = existing
                    .id
                    .ok_or_else(|| RepoError::Database("Cart record without id".to_string()))?;
                self.base
                    .db()
                    .query("UPDATE $cart SET items = $items, updated_at = $now")
                    .bind(("cart", id))
                    .bind(("items", items))
                    .bind(("now", Utc::now()))
                    .await?;
            }
            None => {
                let record = CartRecord {
                    id: None,
                    user: user_id.to_string(),
                    items,
                    updated_at: Utc::now(),
                };
                let _: Option<CartRecord> =
                    self.base.db().create(TABLE).content(record).await?;
            }
        }
        Ok(())
    }
}
