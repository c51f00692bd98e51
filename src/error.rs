//! Error types shared by the registry and the adapters.

use thiserror::Error;

/// Errors raised by the logging facade and its adapters.
#[derive(Debug, Error)]
pub enum LoggingError {
    /// `configure_logging_service` was called without a service.
    #[error("the logging service is required")]
    ServiceRequired,

    /// A delegated call was made before any service was configured.
    #[error("you must first configure the logging service")]
    NotConfigured,

    /// The configured ignore pattern is not a valid regular expression.
    #[error("invalid ignored error pattern {pattern:?}: {source}")]
    InvalidIgnorePattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// A tracing allow-list entry could not be built.
    #[error("invalid tracing url: {0}")]
    InvalidTracingUrl(String),

    /// Feature flag evaluations could not be parsed.
    #[error("Unable to parse feature flags: {0}")]
    FeatureFlags(String),

    /// Runtime version metadata could not be collected.
    #[error("Unable to collect runtime version metadata: {0}")]
    Metadata(String),
}

/// Result type for logging operations.
pub type LoggingResult<T> = Result<T, LoggingError>;
