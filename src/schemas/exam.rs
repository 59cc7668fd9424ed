use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// Answer designator referring to option position within a question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AnswerOption {
    A,
    B,
    C,
    D,
}

impl AnswerOption {
    pub fn index(self) -> usize {
        match self {
            Self::A => 0,
            Self::B => 1,
            Self::C => 2,
            Self::D => 3,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
        }
    }

    pub fn from_letter(letter: &str) -> Option<Self> {
        match letter.trim() {
            "A" => Some(Self::A),
            "B" => Some(Self::B),
            "C" => Some(Self::C),
            "D" => Some(Self::D),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Semester {
    Rain,
    Harmattan,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    #[serde(alias = "questionText")]
    pub question_text: String,
    pub options: [String; 4],
    #[serde(alias = "correctAnswer")]
    pub correct_answer: AnswerOption,
}

/// A stored exam definition, keyed by course identifier. Immutable once a
/// session starts; an edit replaces the whole record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Exam {
    #[serde(alias = "course")]
    pub course_id: String,
    #[serde(alias = "courseCode")]
    pub course_code: String,
    #[serde(alias = "courseTitle")]
    pub course_title: String,
    #[serde(alias = "creditUnit")]
    pub credit_unit: u32,
    pub departments: Vec<String>,
    pub semester: Semester,
    pub session: String,
    #[serde(alias = "duration")]
    pub duration_minutes: u32,
    pub questions: Vec<Question>,
    #[serde(alias = "createdAt")]
    pub created_at: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct QuestionDraft {
    #[serde(alias = "questionText")]
    #[validate(length(min = 1, message = "question text is required"))]
    pub question_text: String,
    #[validate(custom(function = validate_options))]
    pub options: Vec<String>,
    #[serde(alias = "correctAnswer")]
    pub correct_answer: AnswerOption,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ExamDraft {
    #[serde(alias = "course")]
    #[validate(length(min = 1, message = "please select a course"))]
    pub course_id: String,
    #[serde(alias = "courseCode")]
    #[validate(length(min = 1, message = "course code is required"))]
    pub course_code: String,
    #[serde(alias = "courseTitle")]
    #[validate(length(min = 1, message = "course title is required"))]
    pub course_title: String,
    #[serde(alias = "creditUnit")]
    #[validate(range(min = 1, message = "credit unit must be positive"))]
    pub credit_unit: u32,
    #[validate(length(min = 1, message = "select at least one department"))]
    pub departments: Vec<String>,
    pub semester: Semester,
    #[validate(custom(function = validate_session_label))]
    pub session: String,
    /// Omitted durations fall back to the configured default; the builder
    /// fills it in.
    #[serde(default, alias = "duration")]
    #[validate(range(min = 1, message = "duration must be at least 1 minute"))]
    pub duration_minutes: Option<u32>,
    #[validate(length(min = 1, message = "at least one question is required"), nested)]
    pub questions: Vec<QuestionDraft>,
}

fn validate_options(options: &Vec<String>) -> Result<(), ValidationError> {
    if options.len() != 4 {
        let mut error = ValidationError::new("options");
        error.message = Some("exactly four options are required".into());
        return Err(error);
    }

    if options.iter().any(|option| option.trim().is_empty()) {
        let mut error = ValidationError::new("options");
        error.message = Some("options must not be empty".into());
        return Err(error);
    }

    Ok(())
}

/// Session labels follow the `YYYY/YYYY` academic-year format.
fn validate_session_label(session: &str) -> Result<(), ValidationError> {
    let bytes = session.as_bytes();
    let valid = bytes.len() == 9
        && bytes[..4].iter().all(u8::is_ascii_digit)
        && bytes[4] == b'/'
        && bytes[5..].iter().all(u8::is_ascii_digit);

    if valid {
        Ok(())
    } else {
        let mut error = ValidationError::new("session");
        error.message = Some("invalid session format (e.g., 2024/2025)".into());
        Err(error)
    }
}
