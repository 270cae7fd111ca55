//! Review entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

use super::serde_helpers;

pub type ReviewId = RecordId;

/// A product review. Guest-submitted reviews are allowed (email required);
/// nothing is published until `approved` flips to true.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub id: Option<ReviewId>,
    /// Reviewed product id
    pub product: String,
    /// Order the purchase belongs to, when known
    #[serde(default)]
    pub order: Option<String>,
    pub email: String,
    /// 1–5
    pub rating: u8,
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub verified_purchase: bool,
    /// Public URLs of attached review images
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub approved: bool,
    pub created_at: DateTime<Utc>,
}
