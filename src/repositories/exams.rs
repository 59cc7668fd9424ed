use serde_json::json;

use crate::errors::PortalError;
use crate::schemas::exam::Exam;
use crate::store::{keys, RecordStore};

pub async fn find_by_course(
    store: &dyn RecordStore,
    course_id: &str,
) -> Result<Option<Exam>, PortalError> {
    let key = keys::exam(course_id);
    let Some(value) = store.get(&key).await? else {
        return Ok(None);
    };

    let exam: Exam = super::decode(&key, value)?;
    if exam.questions.is_empty() {
        return Err(PortalError::Malformed {
            key,
            detail: "exam record has no questions".to_string(),
        });
    }

    Ok(Some(exam))
}

pub async fn fetch_by_course(store: &dyn RecordStore, course_id: &str) -> Result<Exam, PortalError> {
    find_by_course(store, course_id)
        .await?
        .ok_or_else(|| PortalError::not_found("exam", course_id))
}

/// Writes the exam record for its course, replacing any previous version
/// wholesale. Edits go through the same path.
pub async fn save(store: &dyn RecordStore, exam: &Exam) -> Result<(), PortalError> {
    let key = keys::exam(&exam.course_id);
    store.put(&key, json!(exam)).await?;
    tracing::info!(course_id = %exam.course_id, questions = exam.questions.len(), "Exam saved");
    Ok(())
}

pub async fn delete_by_course(store: &dyn RecordStore, course_id: &str) -> Result<(), PortalError> {
    store.remove(&keys::exam(course_id)).await?;
    Ok(())
}
