//! Cross-cutting infrastructure: logging setup and log message text

pub mod log_messages;
pub mod telemetry;
