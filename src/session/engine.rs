use std::collections::HashMap;

use crate::errors::PortalError;
use crate::schemas::exam::{AnswerOption, Exam, Question};
use crate::store::keys;

use super::grading::{self, GradeSummary};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    Active,
    Finished,
}

/// One in-progress attempt at one exam. Owned by a single caller; dropped
/// when the attempt ends. The machine guarantees grading runs exactly once,
/// on the `Active -> Finished` transition, whichever path triggers it.
#[derive(Debug)]
pub struct ExamSession {
    exam: Exam,
    current_index: usize,
    answers: HashMap<usize, AnswerOption>,
    remaining_seconds: u32,
    phase: SessionPhase,
}

impl ExamSession {
    /// A session over a question-less exam has no current question and no
    /// gradeable state, so such a record is rejected here as well as at the
    /// repository boundary.
    pub fn new(exam: Exam) -> Result<Self, PortalError> {
        if exam.questions.is_empty() {
            return Err(PortalError::Malformed {
                key: keys::exam(&exam.course_id),
                detail: "exam has no questions".to_string(),
            });
        }

        let remaining_seconds = exam.duration_minutes.saturating_mul(60);
        Ok(Self {
            exam,
            current_index: 0,
            answers: HashMap::new(),
            remaining_seconds,
            phase: SessionPhase::Active,
        })
    }

    pub fn exam(&self) -> &Exam {
        &self.exam
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn is_finished(&self) -> bool {
        self.phase == SessionPhase::Finished
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn question_count(&self) -> usize {
        self.exam.questions.len()
    }

    pub fn current_question(&self) -> &Question {
        &self.exam.questions[self.current_index]
    }

    pub fn answer_for_current(&self) -> Option<AnswerOption> {
        self.answers.get(&self.current_index).copied()
    }

    pub fn remaining_seconds(&self) -> u32 {
        self.remaining_seconds
    }

    /// Records (or overwrites) the choice for the current question. Does not
    /// advance the index.
    pub fn select_answer(&mut self, option: AnswerOption) {
        if self.is_finished() {
            return;
        }
        self.answers.insert(self.current_index, option);
    }

    /// No-op at the last question; the caller submits from there instead.
    pub fn advance(&mut self) {
        if self.is_finished() {
            return;
        }
        if self.current_index + 1 < self.exam.questions.len() {
            self.current_index += 1;
        }
    }

    pub fn retreat(&mut self) {
        if self.is_finished() {
            return;
        }
        self.current_index = self.current_index.saturating_sub(1);
    }

    /// One elapsed second. Reaching zero finishes the session through the
    /// grading path, however many questions remain unanswered.
    pub fn tick(&mut self) -> Option<GradeSummary> {
        if self.is_finished() {
            return None;
        }

        self.remaining_seconds = self.remaining_seconds.saturating_sub(1);
        if self.remaining_seconds == 0 {
            return Some(self.finish());
        }
        None
    }

    /// Drives `tick` from any clock source, decoupled from wall time.
    pub fn elapse(&mut self, seconds: u32) -> Option<GradeSummary> {
        for _ in 0..seconds {
            if let Some(summary) = self.tick() {
                return Some(summary);
            }
        }
        None
    }

    /// Explicit submission, permitted at any question index. Returns `None`
    /// if the session already finished, so grading can never run twice.
    pub fn submit(&mut self) -> Option<GradeSummary> {
        if self.is_finished() {
            return None;
        }
        Some(self.finish())
    }

    fn finish(&mut self) -> GradeSummary {
        self.phase = SessionPhase::Finished;
        grading::grade(&self.exam.questions, &self.answers)
    }
}
