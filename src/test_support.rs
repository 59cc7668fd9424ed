use crate::core::config::ExamSettings;
use crate::schemas::exam::{AnswerOption, Exam, ExamDraft, Question, QuestionDraft, Semester};
use crate::schemas::result::{ExamResult, Grade};
use crate::schemas::user::{LecturerSignup, Student, StudentSignup};

const LETTERS: [AnswerOption; 4] =
    [AnswerOption::A, AnswerOption::B, AnswerOption::C, AnswerOption::D];

/// Questions whose correct answers cycle A, B, C, D by index.
pub(crate) fn sample_questions(count: usize) -> Vec<Question> {
    (0..count)
        .map(|index| Question {
            question_text: format!("Question {}?", index + 1),
            options: [
                "option one".to_string(),
                "option two".to_string(),
                "option three".to_string(),
                "option four".to_string(),
            ],
            correct_answer: LETTERS[index % 4],
        })
        .collect()
}

pub(crate) fn sample_exam(course_id: &str, questions: usize, duration_minutes: u32) -> Exam {
    Exam {
        course_id: course_id.to_string(),
        course_code: "CSC 101".to_string(),
        course_title: "Introduction to Computer Science".to_string(),
        credit_unit: 3,
        departments: vec!["1".to_string()],
        semester: Semester::Harmattan,
        session: "2024/2025".to_string(),
        duration_minutes,
        questions: sample_questions(questions),
        created_at: "2025-01-02T10:20:30Z".to_string(),
    }
}

pub(crate) fn sample_draft(course_id: &str, questions: usize) -> ExamDraft {
    ExamDraft {
        course_id: course_id.to_string(),
        course_code: "CSC 101".to_string(),
        course_title: "Introduction to Computer Science".to_string(),
        credit_unit: 3,
        departments: vec!["1".to_string()],
        semester: Semester::Harmattan,
        session: "2024/2025".to_string(),
        duration_minutes: Some(60),
        questions: (0..questions)
            .map(|index| QuestionDraft {
                question_text: format!("Question {}?", index + 1),
                options: vec![
                    "option one".to_string(),
                    "option two".to_string(),
                    "option three".to_string(),
                    "option four".to_string(),
                ],
                correct_answer: LETTERS[index % 4],
            })
            .collect(),
    }
}

pub(crate) fn sample_exam_settings() -> ExamSettings {
    ExamSettings { default_duration_minutes: 60, max_duration_minutes: 480 }
}

pub(crate) fn sample_lecturer_signup(lecturer_id: &str) -> LecturerSignup {
    LecturerSignup {
        lecturer_id: lecturer_id.to_string(),
        full_name: "Dr. Eze Nwosu".to_string(),
        department: "1".to_string(),
        courses: vec!["cs101".to_string()],
        password: "lectern".to_string(),
    }
}

pub(crate) fn sample_student(reg_number: &str) -> Student {
    Student {
        reg_number: reg_number.to_string(),
        full_name: "Ada Obi".to_string(),
        department: "1".to_string(),
        level: 200,
        password: "secret".to_string(),
    }
}

pub(crate) fn sample_signup(reg_number: &str) -> StudentSignup {
    StudentSignup {
        reg_number: reg_number.to_string(),
        full_name: "Ada Obi".to_string(),
        department: "1".to_string(),
        level: 200,
        password: "secret".to_string(),
    }
}

pub(crate) fn sample_result(reg_number: &str, score: u8) -> ExamResult {
    ExamResult {
        id: uuid::Uuid::new_v4().to_string(),
        student_name: "Ada Obi".to_string(),
        reg_number: reg_number.to_string(),
        score,
        grade: Grade::from_percentage(score),
        submitted_at: "2025-01-02T10:20:30Z".to_string(),
    }
}
