//! Media document

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

use super::serde_helpers;

/// A stored media file. The bytes live under `work_dir/media`; this record
/// carries the public URL and alt text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Media {
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub id: Option<RecordId>,
    pub filename: String,
    pub url: String,
    #[serde(default)]
    pub alt: Option<String>,
    pub mime_type: String,
    pub size: usize,
    pub created_at: DateTime<Utc>,
}
