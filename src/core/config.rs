mod parsing;
mod settings;
mod types;

pub use types::{
    AiSettings, ConfigError, Environment, ExamSettings, RuntimeSettings, Settings, StoreSettings,
    TelemetrySettings,
};
