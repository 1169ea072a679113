//! Session token handling
//!
//! The session owns the bearer token for one logical client instance. It is
//! created once by the composition root and cloned into every transport
//! client; there is no ambient or static token state. Absence of a token
//! means the client is unauthenticated and requests go out without an
//! `Authorization` header.

use std::path::PathBuf;
use std::sync::{Arc, Mutex, RwLock};

/// Durable storage for the session bearer token
///
/// Mirrors the single-key durable client storage of the original platform:
/// one opaque string, read at session construction, written on login,
/// removed on logout.
pub trait TokenStorage: Send + Sync {
    /// Read the persisted token, if any
    fn load(&self) -> Option<String>;

    /// Persist the token
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying storage write fails.
    fn store(&self, token: &str) -> std::io::Result<()>;

    /// Remove the persisted token
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying storage write fails.
    fn clear(&self) -> std::io::Result<()>;
}

/// In-memory token storage for tests and headless environments
#[derive(Debug, Default)]
pub struct MemoryTokenStorage {
    slot: Mutex<Option<String>>,
}

impl MemoryTokenStorage {
    /// Create empty storage
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl TokenStorage for MemoryTokenStorage {
    fn load(&self) -> Option<String> {
        self.slot.lock().unwrap_or_else(std::sync::PoisonError::into_inner).clone()
    }

    fn store(&self, token: &str) -> std::io::Result<()> {
        *self.slot.lock().unwrap_or_else(std::sync::PoisonError::into_inner) =
            Some(token.to_string());
        Ok(())
    }

    fn clear(&self) -> std::io::Result<()> {
        *self.slot.lock().unwrap_or_else(std::sync::PoisonError::into_inner) = None;
        Ok(())
    }
}

/// File-backed token storage
///
/// Stores the bearer token as the entire contents of one file.
#[derive(Debug, Clone)]
pub struct FileTokenStorage {
    path: PathBuf,
}

impl FileTokenStorage {
    /// Create storage backed by the given file path
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl TokenStorage for FileTokenStorage {
    fn load(&self) -> Option<String> {
        let token = std::fs::read_to_string(&self.path).ok()?;
        let token = token.trim();
        if token.is_empty() {
            return None;
        }
        Some(token.to_string())
    }

    fn store(&self, token: &str) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, token)
    }

    fn clear(&self) -> std::io::Result<()> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e),
        }
    }
}

/// The session bearer token for one client instance
///
/// Cloning a `Session` shares the underlying token: every transport client
/// built from the same session observes login and logout immediately.
#[derive(Clone)]
pub struct Session {
    token: Arc<RwLock<String>>,
    storage: Arc<dyn TokenStorage>,
}

impl Session {
    /// Create a session backed by the given durable storage
    ///
    /// The in-memory token is seeded from storage, so a previously
    /// persisted login survives process restarts.
    #[must_use]
    pub fn new(storage: Arc<dyn TokenStorage>) -> Self {
        let token = storage.load().unwrap_or_default();
        Self {
            token: Arc::new(RwLock::new(token)),
            storage,
        }
    }

    /// Create a session with in-memory storage only
    #[must_use]
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryTokenStorage::new()))
    }

    /// Set or clear the bearer token
    ///
    /// A non-empty token is persisted to durable storage and becomes the
    /// in-memory token. `None` or an empty string clears both. Storage
    /// failures are logged; the in-memory token is updated regardless so
    /// the current process keeps working.
    pub fn set_token(&self, token: Option<&str>) {
        let token = token.unwrap_or_default();
        tracing::debug!(authenticated = !token.is_empty(), "session token updated");

        if token.is_empty() {
            if let Err(e) = self.storage.clear() {
                tracing::warn!(error = %e, "failed to clear persisted token");
            }
        } else if let Err(e) = self.storage.store(token) {
            tracing::warn!(error = %e, "failed to persist token");
        }

        *self
            .token
            .write()
            .unwrap_or_else(std::sync::PoisonError::into_inner) = token.to_string();
    }

    /// The current in-memory token (empty string when unset)
    #[must_use]
    pub fn token(&self) -> String {
        self.token
            .read()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .clone()
    }

    /// Whether a token is currently set
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        !self
            .token
            .read()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .is_empty()
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("authenticated", &self.is_authenticated())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn token_round_trip() {
        let storage = Arc::new(MemoryTokenStorage::new());
        let session = Session::new(Arc::clone(&storage) as Arc<dyn TokenStorage>);

        session.set_token(Some("abc"));
        assert_eq!(session.token(), "abc");
        assert_eq!(storage.load(), Some("abc".to_string()));

        session.set_token(None);
        assert_eq!(session.token(), "");
        assert_eq!(storage.load(), None);
        assert!(!session.is_authenticated());
    }

    #[test]
    fn empty_token_clears_storage() {
        let storage = Arc::new(MemoryTokenStorage::new());
        let session = Session::new(Arc::clone(&storage) as Arc<dyn TokenStorage>);

        session.set_token(Some("abc"));
        session.set_token(Some(""));
        assert_eq!(session.token(), "");
        assert_eq!(storage.load(), None);
    }

    #[test]
    fn session_seeds_from_storage() {
        let storage = Arc::new(MemoryTokenStorage::new());
        storage.store("persisted").ok();

        let session = Session::new(storage);
        assert_eq!(session.token(), "persisted");
        assert!(session.is_authenticated());
    }

    #[test]
    fn clones_share_the_token() {
        let session = Session::in_memory();
        let clone = session.clone();

        session.set_token(Some("shared"));
        assert_eq!(clone.token(), "shared");

        clone.set_token(None);
        assert!(!session.is_authenticated());
    }

    #[test]
    fn file_storage_round_trip() {
        let dir = tempfile::tempdir().ok();
        let Some(dir) = dir else {
            return;
        };
        let storage = FileTokenStorage::new(dir.path().join("access_token"));

        assert_eq!(storage.load(), None);
        storage.store("abc").ok();
        assert_eq!(storage.load(), Some("abc".to_string()));
        storage.clear().ok();
        assert_eq!(storage.load(), None);
        // Clearing twice is not an error
        assert!(storage.clear().is_ok());
    }

    proptest! {
        #[test]
        fn any_nonempty_token_round_trips(token in "[ -~]{1,64}") {
            prop_assume!(!token.trim().is_empty());
            let storage = Arc::new(MemoryTokenStorage::new());
            let session = Session::new(Arc::clone(&storage) as Arc<dyn TokenStorage>);

            session.set_token(Some(&token));
            prop_assert_eq!(session.token(), token.clone());
            prop_assert_eq!(storage.load(), Some(token));
        }
    }
}
