//! In-memory store.
//!
//! The default backend when no `REDIS_URL` is configured, and the backend
//! tests run against. Same envelope and expiry semantics as the redis store.

use std::collections::HashMap;

use chrono::{Duration, Utc};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::models::resume::ResumeRecord;
use crate::store::{default_ttl, DocumentStore, SavedDocument, StoreError, StoredEnvelope};

pub struct InMemoryStore {
    ttl: Duration,
    documents: RwLock<HashMap<String, StoredEnvelope>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::with_ttl(default_ttl())
    }

    /// Override the TTL so expiry is observable in tests without a clock.
    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            ttl,
            documents: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl DocumentStore for InMemoryStore {
    async fn save(&self, record: &ResumeRecord) -> Result<SavedDocument, StoreError> {
        let id = Uuid::new_v4().to_string();
        let envelope = StoredEnvelope::new(record.clone(), Utc::now(), self.ttl);
        self.documents.write().await.insert(id.clone(), envelope);
        Ok(SavedDocument { id })
    }

    async fn fetch(&self, id: &str) -> Result<ResumeRecord, StoreError> {
        let documents = self.documents.read().await;
        let envelope = documents
            .get(id)
            .ok_or_else(|| StoreError::NotFound(id.to_owned()))?;
        if envelope.is_expired_at(Utc::now()) {
            return Err(StoreError::Expired(id.to_owned()));
        }
        Ok(envelope.record.clone())
    }
}
