//! Order entity

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

use shared::models::order::{Customer, OrderItem, OrderStatus};

use super::serde_helpers;

pub type OrderId = RecordId;

/// Order entity. Immutable after creation except for `status`; the customer
/// group is a snapshot taken at checkout, independent of later profile
/// edits.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub id: Option<OrderId>,
    /// Human-facing order number, `ORD-{millis}`
    pub order_id: String,
    /// Owning user id, absent for guest checkout
    #[serde(default)]
    pub user: Option<String>,
    pub customer: Customer,
    pub items: Vec<OrderItem>,
    pub total_price: Decimal,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
}

impl Order {
    /// Generate the human-facing order number from the current time.
    pub fn generate_order_id() -> String {
        format!("ORD-{}", Utc::now().timestamp_millis())
    }
}
