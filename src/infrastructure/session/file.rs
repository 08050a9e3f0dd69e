use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;

use crate::error::{ClientError, ClientResult};

use super::SessionStore;

/// File-backed session store: a flat JSON object of key-value pairs, the
/// command-line analog of the browser's local storage. Every mutation is
/// written through to disk.
pub struct FileSessionStore {
    path: PathBuf,
    entries: Mutex<HashMap<String, String>>,
}

impl FileSessionStore {
    /// Default location under the user's home directory.
    pub fn default_path() -> ClientResult<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| ClientError::Storage("cannot find home directory".to_string()))?;
        Ok(home.join(".career-advisor").join("session.json"))
    }

    pub fn open(path: PathBuf) -> ClientResult<Self> {
        let entries = if path.exists() {
            let content = fs::read_to_string(&path)
                .map_err(|e| ClientError::Storage(format!("reading {}: {}", path.display(), e)))?;
            serde_json::from_str(&content)
                .map_err(|e| ClientError::Storage(format!("parsing {}: {}", path.display(), e)))?
        } else {
            HashMap::new()
        };

        Ok(Self {
            path,
            entries: Mutex::new(entries),
        })
    }

    fn persist(&self, entries: &HashMap<String, String>) {
        if let Some(parent) = self.path.parent() {
            if let Err(error) = fs::create_dir_all(parent) {
                tracing::warn!(%error, path = %parent.display(), "cannot create session directory");
                return;
            }
        }
        match serde_json::to_string_pretty(entries) {
            Ok(content) => {
                if let Err(error) = fs::write(&self.path, content) {
                    tracing::warn!(%error, path = %self.path.display(), "cannot write session file");
                }
            }
            Err(error) => {
                tracing::warn!(%error, "cannot serialize session entries");
            }
        }
    }
}

impl SessionStore for FileSessionStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().unwrap().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        let mut entries = self.entries.lock().unwrap();
        entries.insert(key.to_string(), value.to_string());
        self.persist(&entries);
    }

    fn remove(&self, key: &str) {
        let mut entries = self.entries.lock().unwrap();
        entries.remove(key);
        self.persist(&entries);
    }

    fn clear(&self) {
        let mut entries = self.entries.lock().unwrap();
        entries.clear();
        self.persist(&entries);
    }
}
