use validator::Validate;

use crate::core::config::ExamSettings;
use crate::core::time::{format_primitive, primitive_now_utc};
use crate::errors::PortalError;
use crate::repositories::exams;
use crate::schemas::exam::{Exam, ExamDraft, Question, QuestionDraft};
use crate::store::RecordStore;

/// Validates a draft and shapes it into a storable exam record. Rejections
/// carry field-level messages; nothing is written on failure. A draft that
/// omits the duration gets the configured default, and no draft may exceed
/// the configured maximum.
pub fn build(settings: &ExamSettings, draft: ExamDraft) -> Result<Exam, PortalError> {
    draft.validate()?;

    let duration_minutes =
        draft.duration_minutes.unwrap_or(settings.default_duration_minutes);
    if duration_minutes > settings.max_duration_minutes {
        return Err(PortalError::single_field(
            "duration_minutes",
            format!("duration must not exceed {} minutes", settings.max_duration_minutes),
        ));
    }

    let questions =
        draft.questions.into_iter().map(into_question).collect::<Result<Vec<_>, _>>()?;

    Ok(Exam {
        course_id: draft.course_id,
        course_code: draft.course_code,
        course_title: draft.course_title,
        credit_unit: draft.credit_unit,
        departments: draft.departments,
        semester: draft.semester,
        session: draft.session,
        duration_minutes,
        questions,
        created_at: format_primitive(primitive_now_utc()),
    })
}

/// The builder's accept path: validate, then write/overwrite the exam record
/// keyed by course identifier.
pub async fn create(
    store: &dyn RecordStore,
    settings: &ExamSettings,
    draft: ExamDraft,
) -> Result<Exam, PortalError> {
    let exam = build(settings, draft)?;
    exams::save(store, &exam).await?;
    Ok(exam)
}

/// Replaces a draft's questions with AI-generated ones, the way the editor
/// swaps the question list in after a successful generation.
pub fn apply_generated(draft: &mut ExamDraft, generated: Vec<QuestionDraft>) {
    draft.questions = generated;
}

fn into_question(draft: QuestionDraft) -> Result<Question, PortalError> {
    let options: [String; 4] = draft
        .options
        .try_into()
        .map_err(|_| PortalError::single_field("options", "exactly four options are required"))?;

    Ok(Question {
        question_text: draft.question_text,
        options,
        correct_answer: draft.correct_answer,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::PortalError;
    use crate::repositories;
    use crate::schemas::exam::AnswerOption;
    use crate::store::MemoryStore;
    use crate::test_support;

    fn settings() -> ExamSettings {
        test_support::sample_exam_settings()
    }

    #[test]
    fn build_produces_a_storable_record() {
        let exam = build(&settings(), test_support::sample_draft("cs101", 2)).expect("build");
        assert_eq!(exam.course_id, "cs101");
        assert_eq!(exam.questions.len(), 2);
        assert!(!exam.created_at.is_empty());
    }

    #[test]
    fn build_reports_field_level_messages() {
        let mut draft = test_support::sample_draft("cs101", 1);
        draft.session = "next year".to_string();
        draft.duration_minutes = Some(0);

        let err = build(&settings(), draft).expect_err("invalid");
        let PortalError::Validation(messages) = err else {
            panic!("expected validation error");
        };
        assert!(messages.iter().any(|message| message.field.contains("session")));
        assert!(messages.iter().any(|message| message.field.contains("duration_minutes")));
    }

    #[test]
    fn build_rejects_a_draft_without_questions() {
        let mut draft = test_support::sample_draft("cs101", 1);
        draft.questions.clear();
        assert!(matches!(build(&settings(), draft), Err(PortalError::Validation(_))));
    }

    #[test]
    fn omitted_duration_gets_the_configured_default() {
        let mut draft = test_support::sample_draft("cs101", 1);
        draft.duration_minutes = None;

        let exam = build(&settings(), draft).expect("build");
        assert_eq!(exam.duration_minutes, settings().default_duration_minutes);
    }

    #[test]
    fn duration_above_the_configured_maximum_is_rejected() {
        let mut draft = test_support::sample_draft("cs101", 1);
        draft.duration_minutes = Some(settings().max_duration_minutes + 1);

        let err = build(&settings(), draft).expect_err("too long");
        let PortalError::Validation(messages) = err else {
            panic!("expected validation error");
        };
        assert!(messages.iter().any(|message| message.field == "duration_minutes"));
    }

    #[tokio::test]
    async fn create_overwrites_the_previous_exam() {
        let store = MemoryStore::new();
        create(&store, &settings(), test_support::sample_draft("cs101", 1))
            .await
            .expect("create");

        let mut edited = test_support::sample_draft("cs101", 3);
        edited.duration_minutes = Some(90);
        create(&store, &settings(), edited).await.expect("replace");

        let stored =
            repositories::exams::fetch_by_course(&store, "cs101").await.expect("fetch");
        assert_eq!(stored.questions.len(), 3);
        assert_eq!(stored.duration_minutes, 90);
    }

    #[test]
    fn apply_generated_replaces_the_question_list() {
        let mut draft = test_support::sample_draft("cs101", 1);
        let generated = vec![QuestionDraft {
            question_text: "Generated?".to_string(),
            options: vec!["w".into(), "x".into(), "y".into(), "z".into()],
            correct_answer: AnswerOption::D,
        }];

        apply_generated(&mut draft, generated);
        assert_eq!(draft.questions.len(), 1);
        assert_eq!(draft.questions[0].question_text, "Generated?");
    }
}
