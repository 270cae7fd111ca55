//! Persisted cart snapshot

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

use shared::cart::CartItem;

use super::serde_helpers;

/// One cart document per user; saves replace the item list wholesale.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartRecord {
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub id: Option<RecordId>,
    /// Owning user id
    pub user: String,
    pub items: Vec<CartItem>,
    pub updated_at: DateTime<Utc>,
}
