//! Pluggable client-side logging and telemetry facade.

pub mod adapter;
pub mod config;
pub mod error;
pub mod observability;
pub mod record;
pub mod registry;
pub mod vendor;

pub use adapter::{ConsoleLoggingService, DatadogLoggingService};
pub use error::{LoggingError, LoggingResult};
pub use record::{ApiClientError, AttributeValue, CustomAttributes, ErrorRecord, LogRecord};
pub use registry::{LoggingContext, LoggingService};
