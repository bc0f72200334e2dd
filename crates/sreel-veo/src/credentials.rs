//! Process-wide credential state.
//!
//! A single API key authorizes both job submission and retrieval of the
//! generated video. The key is selected through the onboarding surface
//! (or seeded from the environment) and can be invalidated when the
//! remote service rejects it, forcing re-selection before further
//! attempts.

use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{info, warn};

/// Shared handle to the configured API key.
///
/// Cheap to clone; all clones observe the same state.
#[derive(Debug, Clone, Default)]
pub struct CredentialStore {
    inner: Arc<RwLock<Option<String>>>,
}

impl CredentialStore {
    /// Create an empty store (no credential configured).
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store seeded from the `GEMINI_API_KEY` environment
    /// variable, empty when unset.
    pub fn from_env() -> Self {
        let key = std::env::var("GEMINI_API_KEY").ok().filter(|k| !k.is_empty());
        if key.is_some() {
            info!("Credential seeded from GEMINI_API_KEY");
        }
        Self {
            inner: Arc::new(RwLock::new(key)),
        }
    }

    /// Store a credential, replacing any previous one.
    pub async fn set(&self, key: impl Into<String>) {
        *self.inner.write().await = Some(key.into());
    }

    /// Get a copy of the current credential, if configured.
    pub async fn get(&self) -> Option<String> {
        self.inner.read().await.clone()
    }

    /// Whether a credential is currently configured.
    pub async fn is_configured(&self) -> bool {
        self.inner.read().await.is_some()
    }

    /// Drop the current credential.
    ///
    /// Called when the remote service reports the key as invalid or
    /// unknown; the next generation attempt fails fast until a new key
    /// is selected.
    pub async fn invalidate(&self) {
        let mut guard = self.inner.write().await;
        if guard.take().is_some() {
            warn!("Credential invalidated; re-selection required before further generation");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_set_get_invalidate() {
        let store = CredentialStore::new();
        assert!(!store.is_configured().await);
        assert!(store.get().await.is_none());

        store.set("abc").await;
        assert!(store.is_configured().await);
        assert_eq!(store.get().await.as_deref(), Some("abc"));

        store.invalidate().await;
        assert!(!store.is_configured().await);
    }

    #[tokio::test]
    async fn test_clones_share_state() {
        let store = CredentialStore::new();
        let clone = store.clone();
        store.set("abc").await;
        assert_eq!(clone.get().await.as_deref(), Some("abc"));
        clone.invalidate().await;
        assert!(!store.is_configured().await);
    }
}
