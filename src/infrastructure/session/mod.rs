pub mod file;

pub use file::FileSessionStore;

use std::collections::HashMap;
use std::sync::Mutex;

/// Storage keys, fixed by the platform contract.
pub const ACCESS_TOKEN_KEY: &str = "access_token";
pub const REFRESH_TOKEN_KEY: &str = "refresh_token";
pub const USER_KEY: &str = "user";

/// Key-value storage capability for the client's session. Implementations
/// must be internally synchronized; mutations are synchronous.
pub trait SessionStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
    fn clear(&self);
}

/// An authenticated session: the token pair plus the optional profile blob
/// returned by login. Valid only fully present; `load` returns `None` unless
/// both tokens are stored.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub access_token: String,
    pub refresh_token: String,
    pub user: Option<serde_json::Value>,
}

impl Session {
    pub fn load(store: &dyn SessionStore) -> Option<Self> {
        let access_token = store.get(ACCESS_TOKEN_KEY)?;
        let refresh_token = store.get(REFRESH_TOKEN_KEY)?;
        let user = store
            .get(USER_KEY)
            .and_then(|raw| serde_json::from_str(&raw).ok());
        Some(Self {
            access_token,
            refresh_token,
            user,
        })
    }

    pub fn save(&self, store: &dyn SessionStore) {
        store.set(ACCESS_TOKEN_KEY, &self.access_token);
        store.set(REFRESH_TOKEN_KEY, &self.refresh_token);
        if let Some(user) = &self.user {
            store.set(USER_KEY, &user.to_string());
        }
    }
}

/// In-memory store, for tests and embedding.
#[derive(Default)]
pub struct MemorySessionStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().unwrap().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.entries.lock().unwrap().remove(key);
    }

    fn clear(&self) {
        self.entries.lock().unwrap().clear();
    }
}
