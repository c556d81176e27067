//! Environment configuration.
//!
//! Values come from the process environment, optionally seeded from a `.env`
//! file in the working directory. CLI flags take precedence over anything
//! read here.

use crate::cli::OutputFormat;
use crate::error::AppError;

pub const ENV_LOG: &str = "SALARY_LOG";
pub const ENV_FORMAT: &str = "SALARY_FORMAT";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// `tracing` filter directive, e.g. `debug` or `salary_bracket=trace`.
    pub log_filter: Option<String>,
    pub default_format: OutputFormat,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_filter: None,
            default_format: OutputFormat::Text,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup (the environment in production).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let log_filter = lookup(ENV_LOG)
            .or_else(|| lookup("RUST_LOG"))
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        let default_format = match lookup(ENV_FORMAT) {
            None => OutputFormat::Text,
            Some(raw) => parse_format(&raw)?,
        };

        Ok(Self {
            log_filter,
            default_format,
        })
    }
}

fn parse_format(raw: &str) -> Result<OutputFormat, AppError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "" | "text" => Ok(OutputFormat::Text),
        "json" => Ok(OutputFormat::Json),
        other => Err(AppError::input(format!(
            "Invalid {ENV_FORMAT}='{other}' (expected 'text' or 'json')."
        ))),
    }
}
