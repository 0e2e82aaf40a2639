//! Link entity representing a shortened URL mapping.

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// A shortened URL with its click counter.
///
/// `short_code` is the public lookup key. Only `clicks` changes after creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub id: Uuid,
    pub short_code: String,
    pub original_url: String,
    pub created_at: DateTime<Utc>,
    pub clicks: i64,
}

impl Link {
    /// Creates a new Link instance.
    pub fn new(
        id: Uuid,
        short_code: String,
        original_url: String,
        created_at: DateTime<Utc>,
        clicks: i64,
    ) -> Self {
        Self {
            id,
            short_code,
            original_url,
            created_at,
            clicks,
        }
    }
}

/// Input data for creating a new link.
///
/// `created_at` and `clicks` are assigned by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewLink {
    pub id: Uuid,
    pub short_code: String,
    pub original_url: String,
}

impl NewLink {
    /// Builds a link record with a fresh random identifier.
    pub fn with_random_id(short_code: String, original_url: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            short_code,
            original_url,
        }
    }
}
