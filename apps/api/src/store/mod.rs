//! Ephemeral document store.
//!
//! Saved records live for 24 hours. The logical expiry is stored inside the
//! envelope and checked at read time, so a fetch between the logical expiry
//! and the backend's physical sweep still reports `Expired` rather than
//! `NotFound`.

pub mod handlers;
pub mod memory;
pub mod redis;

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::resume::ResumeRecord;

pub use self::memory::InMemoryStore;
pub use self::redis::RedisStore;

pub const DOCUMENT_TTL_HOURS: i64 = 24;

pub fn default_ttl() -> Duration {
    Duration::hours(DOCUMENT_TTL_HOURS)
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("document {0} not found")]
    NotFound(String),

    #[error("document {0} has expired")]
    Expired(String),

    #[error("store backend error: {0}")]
    Backend(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Returned by a successful save.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedDocument {
    pub id: String,
}

/// What actually gets persisted: the record plus its lifetime bounds.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredEnvelope {
    pub record: ResumeRecord,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl StoredEnvelope {
    pub fn new(record: ResumeRecord, now: DateTime<Utc>, ttl: Duration) -> Self {
        Self {
            record,
            created_at: now,
            expires_at: now + ttl,
        }
    }

    /// Pure expiry check so the 24h window is testable with synthetic clocks.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }
}

/// Storage seam for saved resumes. Object-safe so the backend is swappable
/// at startup without touching the handlers.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Persists a record under a fresh opaque id.
    async fn save(&self, record: &ResumeRecord) -> Result<SavedDocument, StoreError>;

    /// Returns the record unchanged if it exists and is within its TTL.
    async fn fetch(&self, id: &str) -> Result<ResumeRecord, StoreError>;
}
