//! Redis-backed store.
//!
//! Envelopes are stored as JSON under `resume:{id}` with a physical TTL one
//! hour past the logical 24h expiry. The margin keeps just-expired envelopes
//! readable so fetches in that window report `Expired` instead of `NotFound`.

use chrono::Utc;
use redis::AsyncCommands;
use uuid::Uuid;

use crate::models::resume::ResumeRecord;
use crate::store::{default_ttl, DocumentStore, SavedDocument, StoreError, StoredEnvelope};

const KEY_PREFIX: &str = "resume:";
const SWEEP_MARGIN_SECS: u64 = 3600;

pub struct RedisStore {
    client: redis::Client,
}

impl RedisStore {
    pub fn connect(url: &str) -> Result<Self, StoreError> {
        let client = redis::Client::open(url)?;
        Ok(Self { client })
    }

    fn key(id: &str) -> String {
        format!("{KEY_PREFIX}{id}")
    }
}

impl From<redis::RedisError> for StoreError {
    fn from(err: redis::RedisError) -> Self {
        StoreError::Backend(err.to_string())
    }
}

#[async_trait::async_trait]
impl DocumentStore for RedisStore {
    async fn save(&self, record: &ResumeRecord) -> Result<SavedDocument, StoreError> {
        let id = Uuid::new_v4().to_string();
        let envelope = StoredEnvelope::new(record.clone(), Utc::now(), default_ttl());
        let payload = serde_json::to_string(&envelope)?;

        let physical_ttl = default_ttl().num_seconds() as u64 + SWEEP_MARGIN_SECS;
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        let _: () = conn.set_ex(Self::key(&id), payload, physical_ttl).await?;

        tracing::debug!(id = %id, "resume saved");
        Ok(SavedDocument { id })
    }

    async fn fetch(&self, id: &str) -> Result<ResumeRecord, StoreError> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        let payload: Option<String> = conn.get(Self::key(id)).await?;
        let payload = payload.ok_or_else(|| StoreError::NotFound(id.to_owned()))?;

        let envelope: StoredEnvelope = serde_json::from_str(&payload)?;
        if envelope.is_expired_at(Utc::now()) {
            return Err(StoreError::Expired(id.to_owned()));
        }
        Ok(envelope.record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_are_namespaced() {
        assert_eq!(RedisStore::key("abc"), "resume:abc");
    }

    #[test]
    fn test_physical_ttl_outlives_logical_expiry() {
        let physical = default_ttl().num_seconds() as u64 + SWEEP_MARGIN_SECS;
        assert!(physical > default_ttl().num_seconds() as u64);
    }
}
