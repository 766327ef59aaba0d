use config::{ConfigBuilder, ConfigError, Environment, builder::DefaultState};
use serde::Deserialize;
use std::env;

// Top-level configuration, one field per section
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub app: AppConfig,
    pub theater: TheaterConfig,
}

// Process settings
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub environment: String,
    pub rust_log: String,
    pub log_format: LogFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    Json,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TheaterConfig {
    pub name: String,
}

impl Config {
    /// Defaults, then `CINEMA__SECTION__KEY` variables, then plain `RUST_LOG`.
    pub fn from_env() -> Result<Self, ConfigError> {
        let builder = Self::defaults()?
            .add_source(Environment::with_prefix("CINEMA").separator("__"))
            .set_override_option("app.rust_log", env::var("RUST_LOG").ok())?;
        Self::from_builder(builder)
    }

    pub fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        config::Config::builder()
            .set_default("app.environment", "development")?
            .set_default("app.rust_log", "cinema_system=info")?
            .set_default("app.log_format", "pretty")?
            .set_default("theater.name", "LKH Cinema")
    }

    pub fn from_builder(builder: ConfigBuilder<DefaultState>) -> Result<Self, ConfigError> {
        builder.build()?.try_deserialize()
    }
}
