use crate::domain::metrics::MetricsError;
use crate::registration::RegistrationError;
use thiserror::Error;

/// Dairy Insights application error types
#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Metrics error: {0}")]
    Metrics(#[from] MetricsError),

    #[error("Registration error: {0}")]
    Registration(#[from] RegistrationError),
}

pub type Result<T> = std::result::Result<T, Error>;
