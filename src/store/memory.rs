use std::collections::HashMap;

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::RwLock;

use super::{RecordStore, StoreError};

/// In-process store used by tests and by embedders that do not need
/// anything to survive a restart.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: RwLock<HashMap<String, Value>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RecordStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<Value>, StoreError> {
        Ok(self.records.read().await.get(key).cloned())
    }

    async fn put(&self, key: &str, value: Value) -> Result<(), StoreError> {
        self.records.write().await.insert(key.to_string(), value);
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.records.write().await.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn put_get_remove_round_trip() {
        let store = MemoryStore::new();
        assert!(store.get("exam:cs101").await.expect("get").is_none());

        store.put("exam:cs101", json!({"courseCode": "CSC 101"})).await.expect("put");
        let value = store.get("exam:cs101").await.expect("get").expect("present");
        assert_eq!(value["courseCode"], "CSC 101");

        store.remove("exam:cs101").await.expect("remove");
        assert!(store.get("exam:cs101").await.expect("get").is_none());
    }

    #[tokio::test]
    async fn last_write_wins() {
        let store = MemoryStore::new();
        store.put("k", json!(1)).await.expect("put");
        store.put("k", json!(2)).await.expect("put");
        assert_eq!(store.get("k").await.expect("get"), Some(json!(2)));
    }
}
