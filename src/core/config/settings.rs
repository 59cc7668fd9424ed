use super::parsing::{env_optional, env_or_default, parse_bool, parse_environment, parse_u32, parse_u64};
use super::types::{
    AiSettings, ConfigError, ExamSettings, RuntimeSettings, Settings, StoreSettings,
    TelemetrySettings,
};

impl Settings {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment =
            parse_environment(env_optional("EXAMHALL_ENV").or_else(|| env_optional("ENVIRONMENT")));
        let strict_config =
            env_optional("EXAMHALL_STRICT_CONFIG").map(|value| parse_bool(&value)).unwrap_or(false)
                || environment.is_production();

        let openai_api_key = env_or_default("OPENAI_API_KEY", "");
        let openai_base_url = env_or_default("OPENAI_BASE_URL", "https://api.openai.com/v1");
        let ai_model = env_or_default("AI_MODEL", "gpt-4o-mini");
        let ai_max_tokens = parse_u32("AI_MAX_TOKENS", env_or_default("AI_MAX_TOKENS", "4000"))?;
        let ai_request_timeout =
            parse_u64("AI_REQUEST_TIMEOUT", env_or_default("AI_REQUEST_TIMEOUT", "120"))?;
        let default_question_count = parse_u32(
            "AI_DEFAULT_QUESTION_COUNT",
            env_or_default("AI_DEFAULT_QUESTION_COUNT", "5"),
        )?;
        let max_question_count =
            parse_u32("AI_MAX_QUESTION_COUNT", env_or_default("AI_MAX_QUESTION_COUNT", "50"))?;

        let data_dir = env_or_default("EXAMHALL_DATA_DIR", ".examhall-data");

        let default_duration_minutes = parse_u32(
            "DEFAULT_EXAM_DURATION_MINUTES",
            env_or_default("DEFAULT_EXAM_DURATION_MINUTES", "60"),
        )?;
        let max_duration_minutes = parse_u32(
            "MAX_EXAM_DURATION_MINUTES",
            env_or_default("MAX_EXAM_DURATION_MINUTES", "480"),
        )?;

        let log_level = env_or_default("EXAMHALL_LOG_LEVEL", "info");
        let json = env_optional("EXAMHALL_LOG_JSON").map(|value| parse_bool(&value)).unwrap_or(false);

        let settings = Self {
            runtime: RuntimeSettings { environment, strict_config },
            ai: AiSettings {
                openai_api_key,
                openai_base_url,
                ai_model,
                ai_max_tokens,
                ai_request_timeout,
                default_question_count,
                max_question_count,
            },
            store: StoreSettings { data_dir },
            exam: ExamSettings { default_duration_minutes, max_duration_minutes },
            telemetry: TelemetrySettings { log_level, json },
        };

        settings.validate()?;
        Ok(settings)
    }

    pub fn runtime(&self) -> &RuntimeSettings {
        &self.runtime
    }

    pub fn ai(&self) -> &AiSettings {
        &self.ai
    }

    pub fn store(&self) -> &StoreSettings {
        &self.store
    }

    pub fn exam(&self) -> &ExamSettings {
        &self.exam
    }

    pub fn telemetry(&self) -> &TelemetrySettings {
        &self.telemetry
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.ai.default_question_count == 0
            || self.ai.default_question_count > self.ai.max_question_count
        {
            return Err(ConfigError::InvalidValue {
                field: "AI_DEFAULT_QUESTION_COUNT",
                value: self.ai.default_question_count.to_string(),
            });
        }

        if self.exam.default_duration_minutes == 0
            || self.exam.default_duration_minutes > self.exam.max_duration_minutes
        {
            return Err(ConfigError::InvalidValue {
                field: "DEFAULT_EXAM_DURATION_MINUTES",
                value: self.exam.default_duration_minutes.to_string(),
            });
        }

        if self.store.data_dir.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "EXAMHALL_DATA_DIR",
                value: String::from("<empty>"),
            });
        }

        if !(self.runtime.strict_config || self.runtime.environment.is_production()) {
            return Ok(());
        }

        if self.ai.openai_api_key.is_empty() {
            return Err(ConfigError::MissingSecret("OPENAI_API_KEY"));
        }
        if self.ai.openai_base_url.is_empty() {
            return Err(ConfigError::MissingSecret("OPENAI_BASE_URL"));
        }

        Ok(())
    }
}
