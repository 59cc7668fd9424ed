use uuid::Uuid;

use crate::core::time::{format_primitive, primitive_now_utc};
use crate::errors::PortalError;
use crate::repositories::{exams, results};
use crate::schemas::result::ExamResult;
use crate::schemas::user::Student;
use crate::store::RecordStore;

use super::engine::ExamSession;
use super::grading::GradeSummary;

/// Loads the exam for a course and opens a session over it. The session
/// never starts when no exam is stored for the course.
pub async fn start(store: &dyn RecordStore, course_id: &str) -> Result<ExamSession, PortalError> {
    let exam = exams::fetch_by_course(store, course_id).await?;
    tracing::info!(
        course_id,
        questions = exam.questions.len(),
        duration_minutes = exam.duration_minutes,
        "Exam session started"
    );
    ExamSession::new(exam)
}

/// Appends exactly one result for a completed attempt. When the current
/// user cannot be resolved the write is aborted and nothing is recorded.
pub async fn record_outcome(
    store: &dyn RecordStore,
    course_id: &str,
    student: Option<&Student>,
    summary: GradeSummary,
) -> Result<ExamResult, PortalError> {
    let student = student.ok_or(PortalError::IdentityUnresolved)?;

    let result = ExamResult {
        id: Uuid::new_v4().to_string(),
        student_name: student.full_name.clone(),
        reg_number: student.reg_number.clone(),
        score: summary.percentage,
        grade: summary.grade,
        submitted_at: format_primitive(primitive_now_utc()),
    };

    results::append(store, course_id, result.clone()).await?;
    tracing::info!(
        course_id,
        reg_number = %result.reg_number,
        score = result.score,
        grade = result.grade.as_str(),
        "Exam result recorded"
    );
    Ok(result)
}
