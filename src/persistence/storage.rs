use super::files::{atomic_write, read_file};
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// String key-value storage that survives restarts
pub trait Storage {
    /// Read the value stored under `key`, None if nothing was stored
    fn get_item(&self, key: &str) -> Result<Option<String>>;

    /// Replace the value stored under `key`
    fn set_item(&mut self, key: &str, value: &str) -> Result<()>;
}

/// Storage backed by one `<key>.json` file per key in a directory
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn open<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let dir = dir.as_ref().to_path_buf();
        if !dir.exists() {
            fs::create_dir_all(&dir)
                .with_context(|| format!("Failed to create storage directory: {}", dir.display()))?;
        }
        Ok(Self { dir })
    }

    fn key_path(&self, key: &str) -> Result<PathBuf> {
        if key.is_empty() || key.contains(&['/', '\\'][..]) || key.starts_with('.') {
            anyhow::bail!("Invalid storage key: {:?}", key);
        }
        Ok(self.dir.join(format!("{}.json", key)))
    }
}

impl Storage for FileStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        read_file(self.key_path(key)?)
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<()> {
        atomic_write(self.key_path(key)?, value)
    }
}

/// In-memory storage for tests
#[cfg(test)]
#[derive(Debug, Default, Clone)]
pub struct MemoryStorage {
    pub items: std::collections::HashMap<String, String>,
}

#[cfg(test)]
impl Storage for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        Ok(self.items.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<()> {
        self.items.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_storage_roundtrip() {
        let temp_dir = tempfile::tempdir().unwrap();
        let mut storage = FileStorage::open(temp_dir.path()).unwrap();

        assert_eq!(storage.get_item("brutalTasks").unwrap(), None);

        storage.set_item("brutalTasks", "[]").unwrap();
        assert_eq!(storage.get_item("brutalTasks").unwrap().as_deref(), Some("[]"));
        assert!(temp_dir.path().join("brutalTasks.json").exists());
    }

    #[test]
    fn test_file_storage_creates_directory() {
        let temp_dir = tempfile::tempdir().unwrap();
        let nested = temp_dir.path().join("nested").join("store");

        let mut storage = FileStorage::open(&nested).unwrap();
        storage.set_item("k", "v").unwrap();

        assert!(nested.join("k.json").exists());
    }

    #[test]
    fn test_file_storage_rejects_path_keys() {
        let temp_dir = tempfile::tempdir().unwrap();
        let mut storage = FileStorage::open(temp_dir.path()).unwrap();

        assert!(storage.set_item("../escape", "x").is_err());
        assert!(storage.get_item("").is_err());
        assert!(storage.get_item(".hidden").is_err());
    }

    #[test]
    fn test_memory_storage() {
        let mut storage = MemoryStorage::default();
        assert_eq!(storage.get_item("k").unwrap(), None);
        storage.set_item("k", "v").unwrap();
        assert_eq!(storage.get_item("k").unwrap().as_deref(), Some("v"));
    }
}
