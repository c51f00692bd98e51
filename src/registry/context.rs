//! Explicitly owned logging context.

use std::fmt;
use std::sync::Arc;

use crate::record::{ApiClientError, AttributeValue, CustomAttributes, ErrorRecord, LogRecord};
use crate::registry::service::LoggingService;

/// A handle to one configured logging service.
///
/// Cheap to clone; hand it to the components that log instead of relying
/// on the process-wide slot.
#[derive(Clone)]
pub struct LoggingContext {
    service: Arc<dyn LoggingService>,
}

impl LoggingContext {
    pub fn new(service: Arc<dyn LoggingService>) -> Self {
        Self { service }
    }

    /// The service every call is delegated to.
    pub fn service(&self) -> &Arc<dyn LoggingService> {
        &self.service
    }

    pub fn log_info(&self, record: impl Into<LogRecord>, attributes: CustomAttributes) {
        self.service.log_info(record.into(), attributes);
    }

    pub fn log_error(&self, error: impl Into<ErrorRecord>, attributes: CustomAttributes) {
        self.service.log_error(error.into(), attributes);
    }

    pub fn log_api_client_error(&self, error: &ApiClientError, attributes: CustomAttributes) {
        self.service.log_api_client_error(error, attributes);
    }

    pub fn process_api_client_error(&self, error: &ApiClientError) -> ErrorRecord {
        self.service.process_api_client_error(error)
    }

    pub fn log_api_error_response(&self, error: &ApiClientError, attributes: CustomAttributes) {
        self.service.log_api_error_response(error, attributes);
    }

    pub fn set_custom_attribute(&self, name: &str, value: impl Into<AttributeValue>) {
        self.service.set_custom_attribute(name, value.into());
    }
}

impl<S: LoggingService + 'static> From<Arc<S>> for LoggingContext {
    fn from(service: Arc<S>) -> Self {
        Self::new(service)
    }
}

impl fmt::Debug for LoggingContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoggingContext").finish_non_exhaustive()
    }
}
