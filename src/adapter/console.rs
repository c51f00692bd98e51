//! Logging service that writes through `tracing` only.
//!
//! Useful for local development and for hosts without vendor credentials.

use std::sync::Mutex;

use crate::adapter::ignore::{IgnorePattern, IGNORED_ERROR};
use crate::observability::metrics;
use crate::record::{ApiClientError, AttributeValue, CustomAttributes, ErrorRecord, LogRecord};
use crate::registry::LoggingService;

#[derive(Debug, Default)]
pub struct ConsoleLoggingService {
    ignore_pattern: Option<IgnorePattern>,
    global: Mutex<CustomAttributes>,
}

impl ConsoleLoggingService {
    pub fn new(ignore_pattern: Option<IgnorePattern>) -> Self {
        Self {
            ignore_pattern,
            global: Mutex::new(CustomAttributes::new()),
        }
    }

    /// Global attributes merged under the given call attributes.
    fn with_global(&self, attributes: &CustomAttributes) -> CustomAttributes {
        match self.global.lock() {
            Ok(global) => global.merged(attributes),
            Err(_) => attributes.clone(),
        }
    }
}

impl LoggingService for ConsoleLoggingService {
    fn log_info(&self, record: LogRecord, attributes: CustomAttributes) {
        let merged = self.with_global(&record.custom_attributes.merged(&attributes));
        metrics::record_log_event("info");
        tracing::info!(target: "console", attributes = ?merged, "{}", record.message);
    }

    fn log_error(&self, error: ErrorRecord, attributes: CustomAttributes) {
        let merged = self.with_global(&error.custom_attributes.merged(&attributes));
        let ignored = self
            .ignore_pattern
            .as_ref()
            .is_some_and(|pattern| pattern.is_match(&error.message));

        if ignored {
            metrics::record_log_event("ignored");
            tracing::info!(target: "console", attributes = ?merged, "{}: {}", IGNORED_ERROR, error.message);
        } else {
            metrics::record_log_event("error");
            tracing::error!(target: "console", attributes = ?merged, "{}", error);
        }
    }

    fn log_api_client_error(&self, error: &ApiClientError, attributes: CustomAttributes) {
        self.log_error(self.process_api_client_error(error), attributes);
    }

    fn set_custom_attribute(&self, name: &str, value: AttributeValue) {
        if let Ok(mut global) = self.global.lock() {
            global.insert(name, value);
        }
    }
}
