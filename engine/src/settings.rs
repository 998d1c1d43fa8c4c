use std::path::PathBuf;

use config::{Config, ConfigError, File};
use demand_core::{ShipType, TimeInterval};
use postgres::PsqlSettings;
use serde::Deserialize;

#[derive(Deserialize, Debug)]
pub struct Settings {
    pub log_level: LogLevel,
    pub postgres: PsqlSettings,
    pub environment: Environment,
    pub analysis: AnalysisSettings,
    pub output: OutputSettings,
}

#[derive(Deserialize, Debug, Clone)]
pub struct AnalysisSettings {
    pub port_name: String,
    /// Bounding box extents in decimal degrees.
    pub box_width: f64,
    pub box_height: f64,
    pub ship_types: Vec<ShipType>,
    pub intervals: Vec<TimeInterval>,
    /// Reindex each series over its full range before persisting it,
    /// inserting zero-count buckets. Off by default, the aggregation is
    /// sparse.
    #[serde(default)]
    pub fill_gaps: bool,
}

#[derive(Deserialize, Debug, Clone)]
pub struct OutputSettings {
    pub directory: PathBuf,
}

impl Settings {
    pub fn new() -> Result<Settings, ConfigError> {
        let environment: Environment = std::env::var("APP_ENVIRONMENT")
            .unwrap()
            .try_into()
            .expect("Failed to parse APP_ENVIRONMENT.");

        let builder = Config::builder()
            .add_source(
                File::with_name(&format!("config/{}", environment.as_str().to_lowercase()))
                    .required(true),
            )
            .add_source(config::Environment::with_prefix("PORT_DEMAND").separator("__"))
            .set_override("environment", environment.as_str())?;

        let config = builder.build()?;

        config.try_deserialize()
    }
}

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Local,
    Development,
    Production,
    Test,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Local => "Local",
            Environment::Development => "Development",
            Environment::Production => "Production",
            Environment::Test => "Test",
        }
    }
}

impl TryFrom<String> for Environment {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.as_str() {
            "Local" | "local" => Ok(Environment::Local),
            "Development" | "development" => Ok(Environment::Development),
            "Production" | "production" => Ok(Environment::Production),
            "Test" | "test" => Ok(Environment::Test),
            _ => Err(format!("'{value}' is not a valid environment")),
        }
    }
}

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<&LogLevel> for tracing::Level {
    fn from(value: &LogLevel) -> Self {
        match value {
            LogLevel::Error => tracing::Level::ERROR,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Trace => tracing::Level::TRACE,
        }
    }
}
