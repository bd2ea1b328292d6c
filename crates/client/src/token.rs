//! Durable storage for the session token.
//!
//! The token lives under a fixed key in a small JSON document, the terminal
//! counterpart of browser local storage. Reads and writes are uncoordinated;
//! the last write wins.
use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
    sync::{Mutex, PoisonError},
};

use crate::error::Result;

/// Key the token is stored under.
pub const TOKEN_KEY: &str = "token";

pub trait TokenStore: Send + Sync {
    /// Returns the stored token, if any.
    fn get(&self) -> Option<String>;
    fn set(&self, token: &str) -> Result<()>;
    fn remove(&self) -> Result<()>;

    fn is_present(&self) -> bool {
        self.get().is_some()
    }
}

/// Token store backed by a JSON file.
#[derive(Debug, Clone)]
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<BTreeMap<String, String>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Ok(BTreeMap::new());
            }
            Err(err) => return Err(err.into()),
        };
        if content.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        Ok(serde_json::from_str(&content)?)
    }

    fn save(&self, entries: &BTreeMap<String, String>) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let payload = serde_json::to_string_pretty(entries)?;
        fs::write(&self.path, payload)?;
        Ok(())
    }
}

impl TokenStore for FileTokenStore {
    fn get(&self) -> Option<String> {
        match self.load() {
            Ok(mut entries) => entries.remove(TOKEN_KEY).filter(|token| !token.is_empty()),
            Err(err) => {
                tracing::warn!("failed to read token store {}: {err}", self.path.display());
                None
            }
        }
    }

    fn set(&self, token: &str) -> Result<()> {
        // A corrupt document is replaced rather than blocking login.
        let mut entries = self.load().unwrap_or_default();
        entries.insert(TOKEN_KEY.to_string(), token.to_string());
        self.save(&entries)
    }

    fn remove(&self) -> Result<()> {
        let mut entries = match self.load() {
            Ok(entries) => entries,
            Err(err) => {
                tracing::warn!("discarding unreadable token store: {err}");
                BTreeMap::new()
            }
        };
        entries.remove(TOKEN_KEY);
        self.save(&entries)
    }
}

/// In-process token store, for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: Mutex<Option<String>>,
}

impl MemoryTokenStore {
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: Mutex::new(Some(token.into())),
        }
    }
}

impl TokenStore for MemoryTokenStore {
    fn get(&self) -> Option<String> {
        self.token
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn set(&self, token: &str) -> Result<()> {
        *self.token.lock().unwrap_or_else(PoisonError::into_inner) = Some(token.to_string());
        Ok(())
    }

    fn remove(&self) -> Result<()> {
        *self.token.lock().unwrap_or_else(PoisonError::into_inner) = None;
        Ok(())
    }
}
