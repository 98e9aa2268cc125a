//! File-backed store: one file per key under a local data directory.

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use crate::{KeyValueStore, StorageError, StorageResult};

/// Key/value store persisting each key as `{root}/<sanitized-key>.json`.
///
/// The default root is `{app_data_dir}/luxfinds`; tests and portable installs
/// can point it anywhere with [`FileStore::with_root`].
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Open the store under the OS application-data directory.
    pub fn open_default() -> StorageResult<Self> {
        let base = dirs::data_dir()
            .or_else(|| {
                dirs::home_dir().map(|mut h| {
                    h.push(".local");
                    h.push("share");
                    h
                })
            })
            .ok_or_else(|| {
                StorageError::Path(
                    "failed to resolve OS app data directory - tried data_dir() and home_dir()/.local/share".into(),
                )
            })?;

        let mut root = base;
        root.push("luxfinds");
        Self::with_root(root)
    }

    /// Open the store under an explicit root directory, creating it if needed.
    pub fn with_root(root: impl Into<PathBuf>) -> StorageResult<Self> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &std::path::Path {
        &self.root
    }

    fn entry_path(&self, key: &str) -> StorageResult<PathBuf> {
        // Disallowed characters are dropped, not replaced: a key made up
        // entirely of them sanitizes to empty and is rejected below.
        let sanitized: String = key
            .chars()
            .filter(|c| c.is_ascii_alphanumeric() || *c == '-' || *c == '_')
            .collect();
        if sanitized.is_empty() {
            return Err(StorageError::Path(format!("empty storage key: {key:?}")));
        }
        Ok(self.root.join(format!("{sanitized}.json")))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        let path = self.entry_path(key)?;
        match fs::read_to_string(&path) {
            Ok(value) => Ok(Some(value)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        let path = self.entry_path(key)?;
        // Write a sibling temp file, then rename over the target: an
        // interrupted write leaves the previous value intact.
        let tmp = path.with_extension("json.tmp");
        {
            let mut file = fs::File::create(&tmp)?;
            file.write_all(value.as_bytes())?;
            file.sync_all()?;
        }
        fs::rename(&tmp, &path)?;
        Ok(())
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        let path = self.entry_path(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_store() -> FileStore {
        let mut root = std::env::temp_dir();
        root.push(format!("luxfinds-storage-test-{}", uuid::Uuid::now_v7()));
        FileStore::with_root(root).unwrap()
    }

    #[test]
    fn absent_key_reads_as_none() {
        let store = temp_store();
        assert!(store.get("luxfinds_cart").unwrap().is_none());
        fs::remove_dir_all(store.root()).unwrap();
    }

    #[test]
    fn set_then_get_round_trips() {
        let store = temp_store();
        store.set("luxfinds_cart", r#"[{"id":"sku1","quantity":2}]"#).unwrap();
        assert_eq!(
            store.get("luxfinds_cart").unwrap().as_deref(),
            Some(r#"[{"id":"sku1","quantity":2}]"#)
        );
        fs::remove_dir_all(store.root()).unwrap();
    }

    #[test]
    fn set_replaces_the_whole_value() {
        let store = temp_store();
        store.set("luxfinds_cart", "old").unwrap();
        store.set("luxfinds_cart", "new").unwrap();
        assert_eq!(store.get("luxfinds_cart").unwrap().as_deref(), Some("new"));
        fs::remove_dir_all(store.root()).unwrap();
    }

    #[test]
    fn remove_deletes_the_entry_and_tolerates_absence() {
        let store = temp_store();
        store.set("luxfinds_cart", "[]").unwrap();
        store.remove("luxfinds_cart").unwrap();
        assert!(store.get("luxfinds_cart").unwrap().is_none());
        store.remove("luxfinds_cart").unwrap();
        fs::remove_dir_all(store.root()).unwrap();
    }

    #[test]
    fn keys_are_sanitized_to_filenames() {
        let store = temp_store();
        store.set("cart/with:odd chars", "x").unwrap();
        assert_eq!(store.get("cart/with:odd chars").unwrap().as_deref(), Some("x"));
        assert!(store.root().join("cartwithoddchars.json").exists());
        fs::remove_dir_all(store.root()).unwrap();
    }

    #[test]
    fn fully_unsafe_key_is_rejected() {
        let store = temp_store();
        assert!(matches!(store.set("///", "x"), Err(StorageError::Path(_))));
        fs::remove_dir_all(store.root()).unwrap();
    }
}
