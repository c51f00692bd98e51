//! Process-wide logging service slot and free-function shim.
//!
//! # Design Decisions
//! - The slot is an `ArcSwapOption`, so readers never block and a configure
//!   or reset is a single atomic pointer swap
//! - Every free function fails with `LoggingError::NotConfigured` until a
//!   service is installed; nothing is buffered
//! - Arguments are passed through untouched

use arc_swap::ArcSwapOption;
use std::sync::Arc;

use crate::error::{LoggingError, LoggingResult};
use crate::observability::metrics;
use crate::record::{ApiClientError, AttributeValue, CustomAttributes, ErrorRecord, LogRecord};
use crate::registry::context::LoggingContext;
use crate::registry::service::LoggingService;

static ACTIVE: ArcSwapOption<LoggingContext> = ArcSwapOption::const_empty();

/// Install `service` as the process-wide logging service.
///
/// Replaces any previously configured service.
pub fn configure_logging_service(
    service: Option<Arc<dyn LoggingService>>,
) -> LoggingResult<LoggingContext> {
    let Some(service) = service else {
        metrics::record_registry_event("rejected");
        return Err(LoggingError::ServiceRequired);
    };

    let context = LoggingContext::new(service);
    ACTIVE.store(Some(Arc::new(context.clone())));
    metrics::record_registry_event("configured");
    tracing::debug!("Logging service configured");
    Ok(context)
}

/// Clear the configured service.
pub fn reset_logging_service() {
    ACTIVE.store(None);
    metrics::record_registry_event("reset");
    tracing::debug!("Logging service reset");
}

/// The currently configured service.
pub fn logging_service() -> LoggingResult<LoggingContext> {
    ACTIVE
        .load_full()
        .map(|context| context.as_ref().clone())
        .ok_or(LoggingError::NotConfigured)
}

pub fn log_info(record: impl Into<LogRecord>, attributes: CustomAttributes) -> LoggingResult<()> {
    logging_service()?.log_info(record, attributes);
    Ok(())
}

pub fn log_error(error: impl Into<ErrorRecord>, attributes: CustomAttributes) -> LoggingResult<()> {
    logging_service()?.log_error(error, attributes);
    Ok(())
}

pub fn log_api_client_error(error: &ApiClientError, attributes: CustomAttributes) -> LoggingResult<()> {
    logging_service()?.log_api_client_error(error, attributes);
    Ok(())
}

pub fn process_api_client_error(error: &ApiClientError) -> LoggingResult<ErrorRecord> {
    Ok(logging_service()?.process_api_client_error(error))
}

pub fn log_api_error_response(error: &ApiClientError, attributes: CustomAttributes) -> LoggingResult<()> {
    logging_service()?.log_api_error_response(error, attributes);
    Ok(())
}

pub fn set_custom_attribute(name: &str, value: impl Into<AttributeValue>) -> LoggingResult<()> {
    logging_service()?.set_custom_attribute(name, value);
    Ok(())
}
