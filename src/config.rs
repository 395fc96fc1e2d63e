use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;

/// Fallback registration backend when nothing is configured
pub const DEFAULT_REGISTRATION_BASE_URL: &str = "http://192.168.100.118:8000";

#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    pub registration: RegistrationSettings,
    pub logging: LoggingSettings,
    pub demo: DemoSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct RegistrationSettings {
    pub base_url: String,
    pub timeout_ms: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingSettings {
    pub level: String,
    pub format: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DemoSettings {
    pub seed: u64,
    pub days: u32,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let environment = env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string());

        Self::builder_with_defaults()?
            // Add configuration file if it exists
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{environment}")).required(false))
            .add_source(File::with_name("config/local").required(false))
            // Add environment variables with prefix
            .add_source(Environment::with_prefix("DAIRY_INSIGHTS").separator("__"))
            .build()?
            .try_deserialize()
    }

    /// Load defaults overlaid with a single configuration file
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        Self::builder_with_defaults()?
            .add_source(File::with_name(path))
            .build()?
            .try_deserialize()
    }

    fn builder_with_defaults(
    ) -> Result<config::ConfigBuilder<config::builder::DefaultState>, ConfigError> {
        Config::builder()
            .set_default("registration.base_url", DEFAULT_REGISTRATION_BASE_URL)?
            .set_default("registration.timeout_ms", 10_000)?
            .set_default("logging.level", "info")?
            .set_default("logging.format", "pretty")?
            .set_default(
                "demo.seed",
                crate::domain::metrics::constants::demo_generation::DEFAULT_SEED,
            )?
            .set_default(
                "demo.days",
                i64::from(crate::domain::metrics::constants::demo_generation::DEFAULT_DAYS),
            )
    }
}
