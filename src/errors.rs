use thiserror::Error;
use validator::{ValidationErrors, ValidationErrorsKind};

use crate::store::StoreError;

/// One field-level validation message, addressed by a dotted path
/// (e.g. `questions[2].options[0]`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldMessage {
    pub field: String,
    pub message: String,
}

#[derive(Debug, Error)]
pub enum PortalError {
    #[error("{resource} not found for '{key}'")]
    NotFound { resource: &'static str, key: String },
    #[error("validation failed: {}", render_fields(.0))]
    Validation(Vec<FieldMessage>),
    #[error("stored record at '{key}' is malformed: {detail}")]
    Malformed { key: String, detail: String },
    #[error("question generation failed: {0}")]
    Generation(#[source] anyhow::Error),
    #[error("current user could not be resolved; result not recorded")]
    IdentityUnresolved,
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl PortalError {
    pub fn not_found(resource: &'static str, key: impl Into<String>) -> Self {
        Self::NotFound { resource, key: key.into() }
    }

    /// Log the underlying error with context and return a `Generation` variant.
    pub(crate) fn generation(err: anyhow::Error, context: &str) -> Self {
        tracing::error!(error = %err, "{context}");
        Self::Generation(err)
    }

    pub fn single_field(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation(vec![FieldMessage { field: field.into(), message: message.into() }])
    }
}

impl From<ValidationErrors> for PortalError {
    fn from(errors: ValidationErrors) -> Self {
        let mut messages = Vec::new();
        flatten_validation_errors("", &errors, &mut messages);
        messages.sort_by(|a, b| a.field.cmp(&b.field));
        Self::Validation(messages)
    }
}

fn flatten_validation_errors(prefix: &str, errors: &ValidationErrors, out: &mut Vec<FieldMessage>) {
    for (field, kind) in errors.errors() {
        let path = if prefix.is_empty() { field.to_string() } else { format!("{prefix}.{field}") };
        match kind {
            ValidationErrorsKind::Field(field_errors) => {
                for error in field_errors {
                    let message = error
                        .message
                        .as_ref()
                        .map(|msg| msg.to_string())
                        .unwrap_or_else(|| error.code.to_string());
                    out.push(FieldMessage { field: path.clone(), message });
                }
            }
            ValidationErrorsKind::Struct(nested) => {
                flatten_validation_errors(&path, nested, out);
            }
            ValidationErrorsKind::List(items) => {
                for (index, nested) in items {
                    flatten_validation_errors(&format!("{path}[{index}]"), nested, out);
                }
            }
        }
    }
}

fn render_fields(messages: &[FieldMessage]) -> String {
    messages
        .iter()
        .map(|item| format!("{}: {}", item.field, item.message))
        .collect::<Vec<_>>()
        .join("; ")
}
