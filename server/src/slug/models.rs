use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The persisted slug mapping, stored as JSON under key = slug.
///
/// The key itself is not part of the stored value; it is the store key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlugRecord {
    pub name: String,
    pub url: String,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

/// Result of a successful create: the assigned key plus the stored record.
#[derive(Debug, Clone, PartialEq)]
pub struct CreatedSlug {
    pub key: String,
    pub record: SlugRecord,
}
