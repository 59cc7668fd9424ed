use std::collections::HashMap;

use crate::schemas::exam::{AnswerOption, Question};
use crate::schemas::result::Grade;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GradeSummary {
    pub correct: usize,
    pub total: usize,
    pub percentage: u8,
    pub grade: Grade,
}

/// Compares every question against the recorded answers. An unanswered
/// question scores the same as a wrong one.
pub fn grade(questions: &[Question], answers: &HashMap<usize, AnswerOption>) -> GradeSummary {
    let total = questions.len();
    let correct = questions
        .iter()
        .enumerate()
        .filter(|(index, question)| answers.get(index) == Some(&question.correct_answer))
        .count();

    let percentage = percentage(correct, total);
    GradeSummary { correct, total, percentage, grade: Grade::from_percentage(percentage) }
}

/// Nearest integer, ties rounded away from zero.
pub fn percentage(correct: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    (100.0 * correct as f64 / total as f64).round() as u8
}
