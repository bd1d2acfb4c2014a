//! Durable persistence for the garage collection
//!
//! The whole collection lives in one JSON document under a well-known
//! filename. Every mutation rewrites the full document - the collection is
//! small and the single-writer model makes partial writes unnecessary.

use crate::garage::types::SavedItem;
use anyhow::{Context, Result};
use parking_lot::Mutex;
use std::fs;
use std::path::{Path, PathBuf};

/// Well-known filename for the serialized collection
pub const GARAGE_FILE: &str = "garage.json";

/// Backend seam for the garage store
///
/// `load` returns `Ok(None)` when nothing has been persisted yet - a brand
/// new garage, not an error.
pub trait StorageBackend {
    fn load(&self) -> Result<Option<Vec<SavedItem>>>;
    fn save(&self, items: &[SavedItem]) -> Result<()>;
}

/// Production backend: one JSON document on disk
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    /// Backend rooted at a data directory; the directory is created if missing
    pub fn open<P: AsRef<Path>>(data_dir: P) -> Result<Self> {
        let data_dir = data_dir.as_ref();
        fs::create_dir_all(data_dir)
            .with_context(|| format!("Failed to create data directory: {}", data_dir.display()))?;

        Ok(Self {
            path: data_dir.join(GARAGE_FILE),
        })
    }

    /// Path of the serialized document
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StorageBackend for JsonFileStorage {
    fn load(&self) -> Result<Option<Vec<SavedItem>>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let contents = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read garage file: {}", self.path.display()))?;

        let items = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse garage file: {}", self.path.display()))?;

        Ok(Some(items))
    }

    fn save(&self, items: &[SavedItem]) -> Result<()> {
        let contents = serde_json::to_string_pretty(items)?;
        fs::write(&self.path, contents)
            .with_context(|| format!("Failed to write garage file: {}", self.path.display()))?;
        Ok(())
    }
}

/// In-memory backend for tests and embedding applications
///
/// The failing variant exercises the store's non-fatal write path: saves
/// error, loads still answer from whatever was stored last.
#[derive(Default)]
pub struct MemoryStorage {
    items: Mutex<Option<Vec<SavedItem>>>,
    fail_saves: bool,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Backend whose every `save` fails (quota-exceeded stand-in)
    pub fn failing() -> Self {
        Self {
            items: Mutex::new(None),
            fail_saves: true,
        }
    }

    /// Number of items in the last successful save, if any
    pub fn saved_len(&self) -> Option<usize> {
        self.items.lock().as_ref().map(|items| items.len())
    }
}

impl StorageBackend for MemoryStorage {
    fn load(&self) -> Result<Option<Vec<SavedItem>>> {
        Ok(self.items.lock().clone())
    }

    fn save(&self, items: &[SavedItem]) -> Result<()> {
        if self.fail_saves {
            anyhow::bail!("storage quota exceeded");
        }
        *self.items.lock() = Some(items.to_vec());
        Ok(())
    }
}
