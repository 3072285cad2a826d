use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::auth::ports::RevocationStore;
use crate::domain::shared::AppError;

/// Process-wide revocation set held in memory.
///
/// Cloning shares the underlying map.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRevocationStore {
    /// Map of raw token -> `exp` claim, when one could be read
    entries: Arc<RwLock<HashMap<String, Option<i64>>>>,
}

impl InMemoryRevocationStore {
    pub fn new() -> Self {
        Self {
            entries: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

#[async_trait]
impl RevocationStore for InMemoryRevocationStore {
    async fn revoke(&self, token: &str, expires_at: Option<i64>) -> Result<(), AppError> {
        self.entries
            .write()
            .await
            .entry(token.to_string())
            .or_insert(expires_at);

        Ok(())
    }

    async fn is_revoked(&self, token: &str) -> Result<bool, AppError> {
        Ok(self.entries.read().await.contains_key(token))
    }

    async fn purge_expired(&self, now: i64) -> Result<usize, AppError> {
        let mut entries = self.entries.write().await;
        let before = entries.len();

        // Entries without a readable expiry never become irrelevant on their own
        entries.retain(|_, expires_at| expires_at.map_or(true, |exp| exp >= now));

        let purged = before - entries.len();
        if purged > 0 {
            tracing::debug!(purged, remaining = entries.len(), "Purged expired revocations");
        }

        Ok(purged)
    }
}
