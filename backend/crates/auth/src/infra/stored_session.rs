//! Session persistence on durable client storage
//!
//! The current identity is kept as one JSON entry under a fixed key.

use platform::KeyValueStore;

use crate::domain::entity::identity::Identity;
use crate::domain::repository::SessionRepository;
use crate::error::AuthResult;

/// Session repository backed by a [`KeyValueStore`]
#[derive(Debug, Clone)]
pub struct StoredSessionRepository<S> {
    store: S,
    key: String,
}

impl<S> StoredSessionRepository<S>
where
    S: KeyValueStore + Sync,
{
    pub fn new(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }
}

impl<S> SessionRepository for StoredSessionRepository<S>
where
    S: KeyValueStore + Sync,
{
    async fn load(&self) -> AuthResult<Option<Identity>> {
        match self.store.get(&self.key).await? {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    async fn save(&self, identity: &Identity) -> AuthResult<()> {
        let raw = serde_json::to_string(identity)?;
        self.store.set(&self.key, &raw).await?;
        Ok(())
    }

    async fn clear(&self) -> AuthResult<()> {
        self.store.remove(&self.key).await?;
        Ok(())
    }
}
