use anyhow::{anyhow, Context};
use reqwest::Client;
use serde::Deserialize;
use serde_json::{json, Value};
use std::time::Duration;

use crate::core::config::Settings;
use crate::errors::PortalError;
use crate::schemas::exam::{AnswerOption, QuestionDraft};

const GENERATION_SYSTEM_PROMPT: &str = r#"You are an expert in generating multiple-choice exam questions from course content.

Generate exactly the requested number of questions from the course content supplied by the user.
Each question must have four options (A, B, C, D) and a clearly indicated correct answer.

Respond with strict JSON of the shape:
{
  "questions": [
    {
      "questionText": "What is the capital of France?",
      "options": ["A. London", "B. Paris", "C. Rome", "D. Berlin"],
      "correctAnswer": "B"
    }
  ]
}
"#;

#[derive(Debug, Clone)]
pub struct GenerateRequest {
    pub course_content: String,
    /// Defaults to the configured count when `None`.
    pub number_of_questions: Option<u32>,
}

#[derive(Debug, Deserialize)]
struct GeneratedBatch {
    questions: Vec<GeneratedQuestion>,
}

#[derive(Debug, Deserialize)]
struct GeneratedQuestion {
    #[serde(alias = "questionText")]
    question_text: String,
    options: Vec<String>,
    #[serde(alias = "correctAnswer")]
    correct_answer: String,
}

#[derive(Debug, Clone)]
pub struct QuestionGenService {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
    max_tokens: u32,
    default_question_count: u32,
    max_question_count: u32,
}

impl QuestionGenService {
    pub fn from_settings(settings: &Settings) -> anyhow::Result<Self> {
        let timeout = Duration::from_secs(settings.ai().ai_request_timeout);
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(30))
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            api_key: settings.ai().openai_api_key.clone(),
            base_url: settings.ai().openai_base_url.trim_end_matches('/').to_string(),
            model: settings.ai().ai_model.clone(),
            max_tokens: settings.ai().ai_max_tokens,
            default_question_count: settings.ai().default_question_count,
            max_question_count: settings.ai().max_question_count,
        })
    }

    /// Drafts questions from pasted course text. The returned drafts are
    /// shape-validated but still editable; a bad AI response is a recoverable
    /// error and the caller falls back to manual entry.
    pub async fn generate(
        &self,
        request: GenerateRequest,
    ) -> Result<Vec<QuestionDraft>, PortalError> {
        if request.course_content.trim().is_empty() {
            return Err(PortalError::single_field(
                "course_content",
                "course content cannot be empty",
            ));
        }

        let count = request
            .number_of_questions
            .unwrap_or(self.default_question_count)
            .clamp(1, self.max_question_count);

        let user_prompt = format!(
            "Generate {count} multiple-choice questions based on the following course content.\n\n\
             Course content:\n{}",
            request.course_content
        );

        let payload = json!({
            "model": self.model,
            "messages": [
                {"role": "system", "content": GENERATION_SYSTEM_PROMPT},
                {"role": "user", "content": user_prompt}
            ],
            "max_completion_tokens": self.max_tokens,
            "response_format": {"type": "json_object"}
        });

        tracing::info!(count, "Sending AI question generation request");

        let url = format!("{}/chat/completions", self.base_url);
        let mut last_error = None;
        let mut body = Value::Null;

        for attempt in 0..=3 {
            let response =
                self.client.post(&url).bearer_auth(&self.api_key).json(&payload).send().await;

            match response {
                Ok(resp) => {
                    let status = resp.status();
                    body = resp.json().await.unwrap_or(Value::Null);
                    if status.is_success() {
                        last_error = None;
                        break;
                    }
                    last_error = Some(anyhow!("OpenAI API error: {body}"));
                }
                Err(err) => {
                    last_error = Some(anyhow!(err).context("Failed to call OpenAI API"));
                }
            }

            if attempt < 3 {
                tokio::time::sleep(Duration::from_secs(2_u64.pow(attempt as u32))).await;
            }
        }

        if let Some(err) = last_error {
            return Err(PortalError::generation(err, "AI question generation request failed"));
        }

        let content = body
            .get("choices")
            .and_then(|choices| choices.get(0))
            .and_then(|choice| choice.get("message"))
            .and_then(|message| message.get("content"))
            .and_then(|value| value.as_str())
            .ok_or_else(|| {
                PortalError::generation(
                    anyhow!("missing response content"),
                    "AI response had no content",
                )
            })?;

        let drafts = parse_generated(content)
            .map_err(|err| PortalError::generation(err, "AI returned malformed questions"))?;

        tracing::info!(generated = drafts.len(), "AI question generation completed");
        Ok(drafts)
    }
}

/// Validates the returned shape before it is offered for edit: a `questions`
/// array where every entry has text, exactly four options, and an `A`..`D`
/// designator. Display prefixes like `"A. "` are stripped from options.
fn parse_generated(content: &str) -> anyhow::Result<Vec<QuestionDraft>> {
    let batch: GeneratedBatch =
        serde_json::from_str(content).context("response is not the expected JSON shape")?;

    if batch.questions.is_empty() {
        return Err(anyhow!("response contained no questions"));
    }

    batch
        .questions
        .into_iter()
        .enumerate()
        .map(|(index, question)| {
            if question.question_text.trim().is_empty() {
                return Err(anyhow!("question {index} has empty text"));
            }
            if question.options.len() != 4 {
                return Err(anyhow!(
                    "question {index} has {} options, expected 4",
                    question.options.len()
                ));
            }

            let correct_answer = AnswerOption::from_letter(&question.correct_answer)
                .ok_or_else(|| {
                    anyhow!("question {index} has invalid designator '{}'", question.correct_answer)
                })?;

            let letters = ["A", "B", "C", "D"];
            let options: Vec<String> = question
                .options
                .iter()
                .zip(letters)
                .map(|(option, letter)| strip_option_prefix(option, letter))
                .collect();

            if options.iter().any(|option| option.is_empty()) {
                return Err(anyhow!("question {index} has an empty option"));
            }

            Ok(QuestionDraft { question_text: question.question_text, options, correct_answer })
        })
        .collect()
}

fn strip_option_prefix(option: &str, letter: &str) -> String {
    let trimmed = option.trim();
    for prefix in [format!("{letter}."), format!("{letter})")] {
        if let Some(rest) = trimmed.strip_prefix(&prefix) {
            return rest.trim().to_string();
        }
    }
    trimmed.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_letter_prefixes() {
        assert_eq!(strip_option_prefix("A. London", "A"), "London");
        assert_eq!(strip_option_prefix("B) Paris", "B"), "Paris");
        assert_eq!(strip_option_prefix("Rome", "C"), "Rome");
    }

    #[test]
    fn parses_a_well_formed_batch() {
        let content = r#"{
            "questions": [{
                "questionText": "What is the capital of France?",
                "options": ["A. London", "B. Paris", "C. Rome", "D. Berlin"],
                "correctAnswer": "B"
            }]
        }"#;

        let drafts = parse_generated(content).expect("parse");
        assert_eq!(drafts.len(), 1);
        assert_eq!(drafts[0].options[1], "Paris");
        assert_eq!(drafts[0].correct_answer, AnswerOption::B);
    }

    #[test]
    fn rejects_wrong_option_count() {
        let content = r#"{
            "questions": [{
                "questionText": "Pick one",
                "options": ["A. yes", "B. no"],
                "correctAnswer": "A"
            }]
        }"#;
        assert!(parse_generated(content).is_err());
    }

    #[test]
    fn rejects_bad_designator() {
        let content = r#"{
            "questions": [{
                "questionText": "Pick one",
                "options": ["A. 1", "B. 2", "C. 3", "D. 4"],
                "correctAnswer": "E"
            }]
        }"#;
        assert!(parse_generated(content).is_err());
    }

    #[test]
    fn rejects_empty_batches_and_non_json() {
        assert!(parse_generated("{\"questions\": []}").is_err());
        assert!(parse_generated("not json at all").is_err());
    }
}
