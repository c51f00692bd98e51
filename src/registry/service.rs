//! The logging service capability set.

use crate::record::{ApiClientError, AttributeValue, CustomAttributes, ErrorRecord, LogRecord};

/// Operations every logging backend must provide.
///
/// `log_info`, `log_error` and `log_api_client_error` are required; the
/// remaining operations have defaults expressed in terms of those.
pub trait LoggingService: Send + Sync {
    /// Log an informational record, merging `attributes` over the record's own.
    fn log_info(&self, record: LogRecord, attributes: CustomAttributes);

    /// Log an application error, merging `attributes` over the error's own.
    fn log_error(&self, error: ErrorRecord, attributes: CustomAttributes);

    /// Log a failure reported by an HTTP API client.
    fn log_api_client_error(&self, error: &ApiClientError, attributes: CustomAttributes);

    /// Turn an API client failure into a loggable error record.
    fn process_api_client_error(&self, error: &ApiClientError) -> ErrorRecord {
        error.to_error_record()
    }

    /// Log an API error response.
    fn log_api_error_response(&self, error: &ApiClientError, attributes: CustomAttributes) {
        self.log_api_client_error(error, attributes);
    }

    /// Attach an attribute to every subsequent record. Ignored by default.
    fn set_custom_attribute(&self, _name: &str, _value: AttributeValue) {}
}
