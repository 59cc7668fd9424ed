use thiserror::Error;

#[derive(Debug, Clone)]
pub struct Settings {
    pub(super) runtime: RuntimeSettings,
    pub(super) ai: AiSettings,
    pub(super) store: StoreSettings,
    pub(super) exam: ExamSettings,
    pub(super) telemetry: TelemetrySettings,
}

#[derive(Debug, Clone)]
pub struct RuntimeSettings {
    pub environment: Environment,
    pub strict_config: bool,
}

#[derive(Debug, Clone)]
pub struct AiSettings {
    pub openai_api_key: String,
    pub openai_base_url: String,
    pub ai_model: String,
    pub ai_max_tokens: u32,
    pub ai_request_timeout: u64,
    pub default_question_count: u32,
    pub max_question_count: u32,
}

#[derive(Debug, Clone)]
pub struct StoreSettings {
    pub data_dir: String,
}

#[derive(Debug, Clone)]
pub struct ExamSettings {
    pub default_duration_minutes: u32,
    pub max_duration_minutes: u32,
}

#[derive(Debug, Clone)]
pub struct TelemetrySettings {
    pub log_level: String,
    pub json: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
    Staging,
    Test,
}

impl Environment {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Development => "development",
            Self::Production => "production",
            Self::Staging => "staging",
            Self::Test => "test",
        }
    }

    pub(super) fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {field}: {value}")]
    InvalidValue { field: &'static str, value: String },
    #[error("missing required secret for {0}")]
    MissingSecret(&'static str),
}
