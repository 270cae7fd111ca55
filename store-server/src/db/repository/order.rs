//! Order repository

use chrono::Utc;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use shared::checkout::OrderRequest;
use shared::models::order::OrderStatus;

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::Order;

const TABLE: &str = "order";

#[derive(Clone)]
pub struct OrderRepository {
    base: BaseRepository,
}

impl OrderRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Persist a derived order request. The initial status is always
    /// `pending` regardless of what the payload carried.
    pub async fn create(&self, request: OrderRequest, user: Option<String>) -> RepoResult<Order> {
        let order = Order {
            id: None,
            order_id: Order::generate_order_id(),
            user,
            customer: request.customer,
            items: request.items,
            total_price: request.total_price,
            status: OrderStatus::Pending,
            created_at: Utc::now(),
        };

        let created: Option<Order> = self.base.db().create(TABLE).content(order).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create order".to_string()))
    }

    /// Order history for a user, newest first.
    pub async fn find_by_user(&self, user_id: &str) -> RepoResult<Vec<Order>> {
        let orders: Vec<Order> = self
            .base
            .db()
            .query("SELECT * FROM order WHERE user = $user ORDER BY createdAt DESC")
            .bind(("user", user_id.to_string()))
            .await?
            .take(0)?;
        Ok(orders)
    }

    /// Look up by the human-facing order number.
    pub async fn find_by_order_id(&self, order_id: &str) -> RepoResult<Option<Order>> {
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM order WHERE orderId = $order_id LIMIT 1")
            .bind(("order_id", order_id.to_string()))
            .await?;
        let orders: Vec<Order> = result.take(0)?;
        Ok(orders.into_iter().next())
    }

    /// Apply a status change, enforcing the lifecycle. Returns the updated
    /// order.
    pub async fn update_status(&self, order_id: &str, next: OrderStatus) -> RepoResult<Order> {
        let order = self
            .find_by_order_id(order_id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Order {} not found", order_id)))?;

        if !order.status.can_transition_to(next) {
            return Err(RepoError::Validation(format!(
                "Cannot move order from {} to {}",
                order.status.as_str(),
                next.as_str()
            )));
        }

        let id = order
            .id
            .clone()
            .ok_or_else(|| RepoError::Database("Order record without id".to_string()))?;
        self.base
            .db()
            .query("UPDATE $order SET status = $status")
            .bind(("order", id))
            .bind(("status", next))
            .await?;

        self.find_by_order_id(order_id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Order {} not found", order_id)))
    }
}
