//! Session state for authenticated calls.
//!
//! The gateway is stateless on purpose: the bearer token and the logout
//! procedure are owned here and passed in per call. [`SessionStore`] keeps
//! the current token in memory, optionally rehydrated from and persisted to
//! a [`TokenStorage`] backend, and tells subscribers whenever the token
//! changes. [`SessionStore::logout_hook`] produces the one-shot callback a
//! request attaches via `on_logout`.

use crate::error::ApiResult;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, warn};

type Listener = Box<dyn Fn(Option<&str>) + Send + Sync>;

/// Persistence seam for the bearer token.
pub trait TokenStorage: Send + Sync {
    /// Load the previously stored token, `None` when nothing is stored.
    fn load(&self) -> ApiResult<Option<String>>;
    /// Persist the token; `None` clears it.
    fn persist(&self, token: Option<&str>) -> ApiResult<()>;
}

/// Owner of the current bearer token.
pub struct SessionStore {
    token: RwLock<Option<String>>,
    listeners: RwLock<Vec<Listener>>,
    storage: Option<Box<dyn TokenStorage>>,
}

impl SessionStore {
    /// In-memory store with no token and no persistence
    pub fn new() -> Self {
        Self {
            token: RwLock::new(None),
            listeners: RwLock::new(Vec::new()),
            storage: None,
        }
    }

    /// In-memory store seeded with a token
    pub fn with_token(token: impl Into<String>) -> Self {
        let store = Self::new();
        *store.token.write() = Some(token.into());
        store
    }

    /// Store backed by `storage`, rehydrating the token it holds.
    /// Fails when the backend cannot be read.
    pub fn with_storage(storage: impl TokenStorage + 'static) -> ApiResult<Self> {
        let token = storage.load()?;
        if token.is_some() {
            debug!("Session rehydrated from storage");
        }

        Ok(Self {
            token: RwLock::new(token),
            listeners: RwLock::new(Vec::new()),
            storage: Some(Box::new(storage)),
        })
    }

    /// Current token, if any
    pub fn token(&self) -> Option<String> {
        self.token.read().clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.read().is_some()
    }

    /// Set the token, persist it, and notify subscribers
    pub fn set_token(&self, token: impl Into<String>) -> ApiResult<()> {
        let token = token.into();
        *self.token.write() = Some(token.clone());
        if let Some(storage) = &self.storage {
            storage.persist(Some(&token))?;
        }
        self.notify(Some(&token));
        Ok(())
    }

    /// Drop the token, persist the cleared state, and notify subscribers
    pub fn clear(&self) -> ApiResult<()> {
        *self.token.write() = None;
        if let Some(storage) = &self.storage {
            storage.persist(None)?;
        }
        self.notify(None);
        Ok(())
    }

    /// Register a callback observing every token change
    pub fn subscribe(&self, listener: impl Fn(Option<&str>) + Send + Sync + 'static) {
        self.listeners.write().push(Box::new(listener));
    }

    /// One-shot callback for `ApiRequest::on_logout`: clears the session
    /// when the backend rejects the token. Persistence failures are logged
    /// rather than raised, since the hook runs inside error handling.
    pub fn logout_hook(self: &Arc<Self>) -> Box<dyn FnOnce() + Send> {
        let store = Arc::clone(self);
        Box::new(move || {
            if let Err(err) = store.clear() {
                warn!("Failed to clear session on logout: {}", err);
            }
        })
    }

    fn notify(&self, token: Option<&str>) {
        for listener in self.listeners.read().iter() {
            listener(token);
        }
    }
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStore")
            .field("authenticated", &self.is_authenticated())
            .finish_non_exhaustive()
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct StoredSession {
    token: Option<String>,
}

/// Token storage backed by a JSON file
pub struct FileTokenStorage {
    path: PathBuf,
}

impl FileTokenStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl TokenStorage for FileTokenStorage {
    fn load(&self) -> ApiResult<Option<String>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let raw = std::fs::read_to_string(&self.path)?;
        let stored: StoredSession = serde_json::from_str(&raw)?;
        Ok(stored.token)
    }

    fn persist(&self, token: Option<&str>) -> ApiResult<()> {
        let stored = StoredSession {
            token: token.map(str::to_string),
        };
        std::fs::write(&self.path, serde_json::to_string(&stored)?)?;
        Ok(())
    }
}
