//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Reject ignore patterns that are not valid regular expressions
//! - Reject unknown log levels
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: LoggingConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use thiserror::Error;

use crate::adapter::ignore::IgnorePattern;
use crate::config::schema::LoggingConfig;

/// A single semantic problem with a configuration document.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("config.IGNORED_ERROR_REGEX: {0}")]
    IgnoredErrorRegex(String),

    #[error("observability.log_level: unknown level {0:?}")]
    LogLevel(String),
}

pub fn validate_config(config: &LoggingConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if let Err(e) = IgnorePattern::parse(config.config.ignored_error_regex.as_deref()) {
        errors.push(ValidationError::IgnoredErrorRegex(e.to_string()));
    }

    if config.observability.log_level.parse::<tracing::Level>().is_err() {
        errors.push(ValidationError::LogLevel(config.observability.log_level.clone()));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
