//! Session Store
//!
//! Single source of truth for who, if anyone, is signed in. One store
//! holds at most one identity; it is constructed explicitly and shared
//! through `Arc`, never as a global.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::domain::entity::{identity::Identity, session::SessionState};
use crate::domain::repository::{CredentialProvider, SessionRepository};
use crate::error::{AuthError, AuthResult};

pub struct SessionStore<P, R>
where
    P: CredentialProvider,
    R: SessionRepository,
{
    provider: Arc<P>,
    repo: Arc<R>,
    state: RwLock<SessionState>,
}

impl<P, R> SessionStore<P, R>
where
    P: CredentialProvider + Sync,
    R: SessionRepository + Sync,
{
    /// New store, signed out until [`restore`](Self::restore) or
    /// [`login`](Self::login) says otherwise.
    pub fn new(provider: Arc<P>, repo: Arc<R>) -> Self {
        Self {
            provider,
            repo,
            state: RwLock::new(SessionState::Unauthenticated),
        }
    }

    /// Adopt the persisted identity, if any.
    ///
    /// Presence alone is enough; nothing is re-validated. An entry that
    /// cannot be decoded counts as no session. Storage failures propagate.
    pub async fn restore(&self) -> AuthResult<Option<Identity>> {
        let mut state = self.state.write().await;
        let restored = match self.repo.load().await {
            Ok(identity) => identity,
            Err(AuthError::Serialization(e)) => {
                tracing::warn!(error = %e, "Persisted session is unreadable, starting signed out");
                None
            }
            Err(e) => return Err(e),
        };

        *state = SessionState::from(restored.clone());
        drop(state);

        match &restored {
            Some(identity) => tracing::info!(
                identity_id = %identity.id,
                role = %identity.role,
                "Session restored"
            ),
            None => tracing::debug!("No persisted session"),
        }

        Ok(restored)
    }

    /// Sign in with an exact email/password match.
    ///
    /// The identity is persisted before it becomes current, so a failed
    /// match or a failed write leaves the session untouched.
    pub async fn login(&self, email: &str, password: &str) -> AuthResult<Identity> {
        let identity = self
            .provider
            .authenticate(email, password)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        let mut state = self.state.write().await;
        self.repo.save(&identity).await?;
        *state = SessionState::Authenticated(identity.clone());

        tracing::info!(
            identity_id = %identity.id,
            role = %identity.role,
            "Identity signed in"
        );

        Ok(identity)
    }

    /// Sign out and drop the persisted copy. Fine when nobody is signed in.
    ///
    /// The persisted copy goes first; if removing it fails the session
    /// stays current, matching what a restart would restore.
    pub async fn logout(&self) -> AuthResult<()> {
        let mut state = self.state.write().await;
        self.repo.clear().await?;
        let previous = std::mem::take(&mut *state);

        if let Some(identity) = previous.identity() {
            tracing::info!(identity_id = %identity.id, "Identity signed out");
        }

        Ok(())
    }

    pub async fn current_identity(&self) -> Option<Identity> {
        self.state.read().await.identity().cloned()
    }

    pub async fn is_authenticated(&self) -> bool {
        self.state.read().await.is_authenticated()
    }

    /// Snapshot of the session state
    pub async fn state(&self) -> SessionState {
        self.state.read().await.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_object::role::Role;
    use crate::infra::{StaticCredentialProvider, StoredSessionRepository};
    use platform::{KeyValueStore, MemoryStore, StorageError, StorageResult};

    type TestStore = SessionStore<StaticCredentialProvider, StoredSessionRepository<MemoryStore>>;

    fn store_on(storage: &MemoryStore) -> TestStore {
        SessionStore::new(
            Arc::new(StaticCredentialProvider::builtin()),
            Arc::new(StoredSessionRepository::new(storage.clone(), "user")),
        )
    }

    fn disk_full() -> StorageError {
        StorageError::Io {
            path: "user.json".into(),
            source: std::io::Error::other("disk full"),
        }
    }

    /// Repository whose writes always fail
    struct BrokenRepository;

    impl SessionRepository for BrokenRepository {
        async fn load(&self) -> AuthResult<Option<Identity>> {
            Ok(None)
        }

        async fn save(&self, _identity: &Identity) -> AuthResult<()> {
            Err(disk_full().into())
        }

        async fn clear(&self) -> AuthResult<()> {
            Err(disk_full().into())
        }
    }

    /// Storage that accepts writes but cannot delete
    #[derive(Clone)]
    struct UndeletableStore(MemoryStore);

    impl KeyValueStore for UndeletableStore {
        async fn get(&self, key: &str) -> StorageResult<Option<String>> {
            self.0.get(key).await
        }

        async fn set(&self, key: &str, value: &str) -> StorageResult<()> {
            self.0.set(key, value).await
        }

        async fn remove(&self, _key: &str) -> StorageResult<()> {
            Err(disk_full())
        }
    }

    #[tokio::test]
    async fn test_unknown_credentials_rejected() {
        let storage = MemoryStore::new();
        let store = store_on(&storage);

        for (email, password) in [
            ("admin@malanyusdi.com", "wrong"),
            ("ADMIN@malanyusdi.com", "admin123"),
            ("someone@malanyusdi.com", "admin123"),
            ("", ""),
        ] {
            let result = store.login(email, password).await;
            assert!(matches!(result, Err(AuthError::InvalidCredentials)));
        }

        assert!(store.current_identity().await.is_none());
        assert!(storage.is_empty().await);
    }

    #[tokio::test]
    async fn test_admin_login() {
        let storage = MemoryStore::new();
        let store = store_on(&storage);

        let identity = store.login("admin@malanyusdi.com", "admin123").await.unwrap();

        assert_eq!(identity.role, Role::Administrator);
        assert_eq!(store.current_identity().await, Some(identity));
        assert!(store.is_authenticated().await);

        let raw = storage.get("user").await.unwrap().unwrap();
        let persisted: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert!(persisted.get("password").is_none());
        assert_eq!(persisted["role"], "admin");
    }

    #[tokio::test]
    async fn test_logout_clears_session_and_storage() {
        let storage = MemoryStore::new();
        let store = store_on(&storage);
        store.login("admin@malanyusdi.com", "admin123").await.unwrap();

        store.logout().await.unwrap();

        assert!(store.current_identity().await.is_none());
        assert_eq!(store.state().await, SessionState::Unauthenticated);
        assert!(storage.get("user").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_logout_when_signed_out() {
        let store = store_on(&MemoryStore::new());
        assert!(store.logout().await.is_ok());
        assert!(store.current_identity().await.is_none());
    }

    #[tokio::test]
    async fn test_restore_after_restart() {
        let storage = MemoryStore::new();
        let first = store_on(&storage);
        let identity = first
            .login("manager@malanyusdi.com", "manager123")
            .await
            .unwrap();
        drop(first);

        let second = store_on(&storage);
        assert!(second.current_identity().await.is_none());

        let restored = second.restore().await.unwrap();

        assert_eq!(restored, Some(identity.clone()));
        assert_eq!(second.current_identity().await, Some(identity));
    }

    #[tokio::test]
    async fn test_restore_with_empty_storage_signs_out() {
        let storage = MemoryStore::new();
        let store = store_on(&storage);
        store.login("admin@malanyusdi.com", "admin123").await.unwrap();
        storage.remove("user").await.unwrap();

        assert_eq!(store.restore().await.unwrap(), None);
        assert!(!store.is_authenticated().await);
    }

    #[tokio::test]
    async fn test_restore_ignores_corrupt_entry() {
        let storage = MemoryStore::new();
        storage.set("user", "{\"id\":").await.unwrap();
        let store = store_on(&storage);

        assert_eq!(store.restore().await.unwrap(), None);
        assert!(store.current_identity().await.is_none());
    }

    #[tokio::test]
    async fn test_failed_login_keeps_current_identity() {
        let store = store_on(&MemoryStore::new());
        let admin = store.login("admin@malanyusdi.com", "admin123").await.unwrap();

        let result = store.login("manager@malanyusdi.com", "admin123").await;

        assert!(matches!(result, Err(AuthError::InvalidCredentials)));
        assert_eq!(store.current_identity().await, Some(admin));
    }

    #[tokio::test]
    async fn test_login_replaces_identity() {
        let storage = MemoryStore::new();
        let store = store_on(&storage);
        store.login("admin@malanyusdi.com", "admin123").await.unwrap();

        let manager = store
            .login("manager@malanyusdi.com", "manager123")
            .await
            .unwrap();

        assert_eq!(store.current_identity().await, Some(manager));
        let raw = storage.get("user").await.unwrap().unwrap();
        assert!(raw.contains("manager@malanyusdi.com"));
    }

    #[tokio::test]
    async fn test_failed_persist_leaves_state_unchanged() {
        let store = SessionStore::new(
            Arc::new(StaticCredentialProvider::builtin()),
            Arc::new(BrokenRepository),
        );

        let result = store.login("admin@malanyusdi.com", "admin123").await;

        assert!(matches!(result, Err(AuthError::Storage(_))));
        assert!(store.current_identity().await.is_none());
    }

    #[tokio::test]
    async fn test_failed_logout_keeps_session_in_step_with_storage() {
        let storage = MemoryStore::new();
        let store = SessionStore::new(
            Arc::new(StaticCredentialProvider::builtin()),
            Arc::new(StoredSessionRepository::new(
                UndeletableStore(storage.clone()),
                "user",
            )),
        );
        let admin = store.login("admin@malanyusdi.com", "admin123").await.unwrap();

        let result = store.logout().await;

        assert!(matches!(result, Err(AuthError::Storage(_))));
        assert_eq!(store.current_identity().await, Some(admin.clone()));

        let after_restart = store_on(&storage);
        assert_eq!(after_restart.restore().await.unwrap(), Some(admin));
    }

    #[tokio::test]
    async fn test_failed_clear_propagates() {
        let store = SessionStore::new(
            Arc::new(StaticCredentialProvider::builtin()),
            Arc::new(BrokenRepository),
        );

        let result = store.logout().await;

        assert!(matches!(result, Err(AuthError::Storage(_))));
        assert_eq!(store.state().await, SessionState::Unauthenticated);
    }

    #[tokio::test]
    async fn test_concurrent_login_and_restore_agree() {
        let storage = MemoryStore::new();
        let store = Arc::new(store_on(&storage));

        let login = {
            let store = store.clone();
            tokio::spawn(async move { store.login("admin@malanyusdi.com", "admin123").await })
        };
        let restore = {
            let store = store.clone();
            tokio::spawn(async move { store.restore().await })
        };
        login.await.unwrap().unwrap();
        restore.await.unwrap().unwrap();

        let persisted = storage.get("user").await.unwrap();
        assert_eq!(store.is_authenticated().await, persisted.is_some());
    }
}
