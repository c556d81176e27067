//! `tracing` subscriber setup.
//!
//! Events go to stderr so JSON and CSV on stdout stay machine-readable.

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::config::{AppConfig, ENV_LOG};
use crate::error::AppError;

const DEFAULT_FILTER: &str = "warn";

pub fn init(config: &AppConfig) -> Result<(), AppError> {
    let filter = build_filter(config)?;
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .try_init();
    Ok(())
}

/// Filter from the configured directive, or `warn` when none is set.
fn build_filter(config: &AppConfig) -> Result<EnvFilter, AppError> {
    match config.log_filter.as_deref() {
        None => Ok(EnvFilter::new(DEFAULT_FILTER)),
        Some(directive) => EnvFilter::try_new(directive).map_err(|e| {
            AppError::input(format!(
                "Invalid log filter '{directive}' from {ENV_LOG}/RUST_LOG: {e}."
            ))
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_filter(directive: Option<&str>) -> AppConfig {
        AppConfig {
            log_filter: directive.map(str::to_string),
            ..AppConfig::default()
        }
    }

    #[test]
    fn unset_filter_defaults_to_warn() {
        let filter = build_filter(&with_filter(None)).unwrap();
        assert_eq!(filter.to_string(), "warn");
    }

    #[test]
    fn valid_directives_are_accepted() {
        assert!(build_filter(&with_filter(Some("debug"))).is_ok());
        assert!(build_filter(&with_filter(Some("salary_bracket=trace,warn"))).is_ok());
    }

    #[test]
    fn bad_directive_is_an_input_error() {
        let err = build_filter(&with_filter(Some("salary_bracket=loud"))).unwrap_err();
        assert_eq!(err.exit_code(), 2);
        assert!(err.message().contains("salary_bracket=loud"));
        assert!(err.message().contains("SALARY_LOG"));
    }
}
