use serde_json::json;

use crate::errors::PortalError;
use crate::schemas::result::ExamResult;
use crate::store::{keys, RecordStore};

pub async fn list_by_course(
    store: &dyn RecordStore,
    course_id: &str,
) -> Result<Vec<ExamResult>, PortalError> {
    let key = keys::results(course_id);
    match store.get(&key).await? {
        Some(value) => super::decode(&key, value),
        None => Ok(Vec::new()),
    }
}

/// Read-then-append. Not transactional: interleaved appends from concurrent
/// attempts on the same course may race, which the portal accepts. Lists are
/// never deduped by registration number.
pub async fn append(
    store: &dyn RecordStore,
    course_id: &str,
    result: ExamResult,
) -> Result<(), PortalError> {
    let mut results = list_by_course(store, course_id).await?;
    results.push(result);
    store.put(&keys::results(course_id), json!(results)).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use crate::test_support;

    #[tokio::test]
    async fn empty_course_lists_no_results() {
        let store = MemoryStore::new();
        let results = list_by_course(&store, "cs101").await.expect("list");
        assert!(results.is_empty());
    }

    #[tokio::test]
    async fn appends_accumulate_without_dedup() {
        let store = MemoryStore::new();
        append(&store, "cs101", test_support::sample_result("2021/123456", 67)).await.expect("append");
        append(&store, "cs101", test_support::sample_result("2021/123456", 80)).await.expect("append");

        let results = list_by_course(&store, "cs101").await.expect("list");
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].score, 67);
        assert_eq!(results[1].score, 80);
    }

    #[tokio::test]
    async fn results_are_scoped_per_course() {
        let store = MemoryStore::new();
        append(&store, "cs101", test_support::sample_result("2021/123456", 50)).await.expect("append");

        let other = list_by_course(&store, "ee202").await.expect("list");
        assert!(other.is_empty());
    }
}
