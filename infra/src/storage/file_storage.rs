//! File-backed key-value storage scoped to one origin.
//!
//! Every origin gets its own JSON file holding a flat string map. The file is
//! rewritten through a temporary sibling and a rename, so a reader never sees
//! a half-written map.

use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::process;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

use gig_core::errors::StorageError;
use gig_core::repositories::KeyValueStorage;
use gig_shared::config::StorageConfig;
use sha2::{Digest, Sha256};
use tracing::{debug, warn};

type Entries = BTreeMap<String, String>;

/// Distinguishes temporary files of writers sharing one backing file
static TMP_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Key-value storage persisted as `<directory>/<origin>-<digest>.json`
pub struct FileStorage {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileStorage {
    /// Storage for the configured directory and origin
    pub fn new(config: &StorageConfig) -> Self {
        Self::with_path(config.directory.join(file_name_for_origin(&config.origin)))
    }

    /// Storage backed by an explicit file
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the whole map; a missing file is an empty map
    fn read_entries(&self) -> Result<Entries, StorageError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Entries::new()),
            Err(e) => return Err(e.into()),
        };

        match serde_json::from_str(&content) {
            Ok(entries) => Ok(entries),
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Corrupt storage file, treating as empty");
                Ok(Entries::new())
            }
        }
    }

    fn write_entries(&self, entries: &Entries) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let tmp = self.path.with_extension(format!(
            "json.{}-{}.tmp",
            process::id(),
            TMP_COUNTER.fetch_add(1, Ordering::Relaxed)
        ));
        fs::write(&tmp, serde_json::to_vec_pretty(entries)?)?;
        fs::rename(&tmp, &self.path)?;
        debug!(path = %self.path.display(), keys = entries.len(), "Storage file written");
        Ok(())
    }

    /// Applies `change` under the lock and writes back only if it reports a change
    fn update(&self, change: impl FnOnce(&mut Entries) -> bool) -> Result<(), StorageError> {
        let _guard = self.lock.lock().map_err(|_| StorageError::Poisoned)?;
        let mut entries = self.read_entries()?;
        if change(&mut entries) {
            self.write_entries(&entries)?;
        }
        Ok(())
    }
}

impl KeyValueStorage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let _guard = self.lock.lock().map_err(|_| StorageError::Poisoned)?;
        Ok(self.read_entries()?.remove(key))
    }

    fn get_many(&self, keys: &[&str]) -> Result<Vec<Option<String>>, StorageError> {
        let _guard = self.lock.lock().map_err(|_| StorageError::Poisoned)?;
        let mut entries = self.read_entries()?;
        Ok(keys.iter().map(|key| entries.remove(*key)).collect())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.set_many(&[(key, value)])
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.remove_many(&[key])
    }

    fn set_many(&self, entries: &[(&str, &str)]) -> Result<(), StorageError> {
        self.update(|stored| {
            for (key, value) in entries {
                stored.insert(key.to_string(), value.to_string());
            }
            true
        })
    }

    fn remove_many(&self, keys: &[&str]) -> Result<(), StorageError> {
        self.update(|stored| {
            keys.iter()
                .fold(false, |changed, key| stored.remove(*key).is_some() || changed)
        })
    }
}

/// File name for an origin: readable prefix plus a digest to keep distinct
/// origins apart after sanitizing
fn file_name_for_origin(origin: &str) -> String {
    let readable: String = origin
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect();
    let digest = hex::encode(Sha256::digest(origin.as_bytes()));
    format!("{}-{}.json", readable.trim_matches('_'), &digest[..12])
}
