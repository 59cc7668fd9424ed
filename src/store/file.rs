use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde_json::Value;

use super::{RecordStore, StoreError};
use crate::core::config::Settings;

/// One JSON document per key under a data directory. This is the crate's
/// stand-in for the original's browser local storage: best-effort,
/// last-write-wins, no locking across processes.
#[derive(Debug, Clone)]
pub struct FileStore {
    data_dir: PathBuf,
}

impl FileStore {
    pub fn open(data_dir: impl AsRef<Path>) -> Result<Self, StoreError> {
        let data_dir = data_dir.as_ref().to_path_buf();
        std::fs::create_dir_all(&data_dir).map_err(|source| StoreError::Io {
            key: data_dir.display().to_string(),
            source,
        })?;
        Ok(Self { data_dir })
    }

    pub fn from_settings(settings: &Settings) -> Result<Self, StoreError> {
        Self::open(&settings.store().data_dir)
    }

    fn path_for(&self, key: &str) -> PathBuf {
        let name: String = key
            .chars()
            .map(|ch| if ch.is_ascii_alphanumeric() || ch == '-' || ch == '_' { ch } else { '-' })
            .collect();
        self.data_dir.join(format!("{name}.json"))
    }
}

#[async_trait]
impl RecordStore for FileStore {
    async fn get(&self, key: &str) -> Result<Option<Value>, StoreError> {
        let path = self.path_for(key);
        let raw = match tokio::fs::read(&path).await {
            Ok(raw) => raw,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(source) => return Err(StoreError::Io { key: key.to_string(), source }),
        };

        let value = serde_json::from_slice(&raw)
            .map_err(|source| StoreError::Corrupt { key: key.to_string(), source })?;
        Ok(Some(value))
    }

    async fn put(&self, key: &str, value: Value) -> Result<(), StoreError> {
        let raw = serde_json::to_vec_pretty(&value)
            .map_err(|source| StoreError::Corrupt { key: key.to_string(), source })?;
        tokio::fs::write(self.path_for(key), raw)
            .await
            .map_err(|source| StoreError::Io { key: key.to_string(), source })
    }

    async fn remove(&self, key: &str) -> Result<(), StoreError> {
        match tokio::fs::remove_file(self.path_for(key)).await {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(source) => Err(StoreError::Io { key: key.to_string(), source }),
        }
    }
}
