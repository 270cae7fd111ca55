//! Product category

use serde::{Deserialize, Serialize};

/// A catalog category. Products reference categories by slug, which doubles
/// as the listing filter value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    pub slug: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Public URL of the category image, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}
