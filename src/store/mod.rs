mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store i/o failure at '{key}'")]
    Io {
        key: String,
        #[source]
        source: std::io::Error,
    },
    #[error("stored document at '{key}' is not valid JSON")]
    Corrupt {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

/// The injected persistence surface: a flat key-value space of JSON
/// documents with last-write-wins semantics and no transactions.
#[async_trait]
pub trait RecordStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<Value>, StoreError>;
    async fn put(&self, key: &str, value: Value) -> Result<(), StoreError>;
    async fn remove(&self, key: &str) -> Result<(), StoreError>;
}

/// Logical key layout shared by every store implementation.
pub mod keys {
    pub const DEPARTMENTS: &str = "catalog:departments";
    pub const LEVELS: &str = "catalog:levels";
    pub const COURSES: &str = "catalog:courses";

    pub fn exam(course_id: &str) -> String {
        format!("exam:{course_id}")
    }

    pub fn results(course_id: &str) -> String {
        format!("results:{course_id}")
    }

    pub fn student(reg_number: &str) -> String {
        format!("student:{reg_number}")
    }

    pub fn lecturer(lecturer_id: &str) -> String {
        format!("lecturer:{lecturer_id}")
    }
}
