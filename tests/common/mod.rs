//! Shared utilities for integration tests.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use rum_logging::config::{AdapterConfig, DatadogSettings};
use rum_logging::vendor::recording::Recorder;
use rum_logging::{ApiClientError, AttributeValue, CustomAttributes, DatadogLoggingService, ErrorRecord, LogRecord, LoggingService};

static REGISTRY_LOCK: Mutex<()> = Mutex::new(());

/// Serialize tests that touch the process-wide logging slot.
#[allow(dead_code)]
pub fn registry_lock() -> MutexGuard<'static, ()> {
    REGISTRY_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Settings as if `vars` were the whole environment.
#[allow(dead_code)]
pub fn settings(vars: &[(&str, &str)]) -> DatadogSettings {
    let env: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    DatadogSettings::from_lookup(|key| env.get(key).cloned())
}

#[allow(dead_code)]
pub const CREDENTIALS: [(&str, &str); 2] = [
    ("DATADOG_APPLICATION_ID", "test-app-id"),
    ("DATADOG_CLIENT_TOKEN", "test-client-token"),
];

/// A Datadog adapter wired to a fresh recorder.
#[allow(dead_code)]
pub fn datadog(config: AdapterConfig, vars: &[(&str, &str)]) -> (DatadogLoggingService, Recorder) {
    let recorder = Recorder::new();
    let service = DatadogLoggingService::builder(recorder.rum(), recorder.logs())
        .config(config)
        .settings(settings(vars))
        .build()
        .unwrap();
    (service, recorder)
}

/// One call observed by `SpyService`.
#[allow(dead_code)]
#[derive(Debug, Clone, PartialEq)]
pub enum SpyCall {
    Info(LogRecord, CustomAttributes),
    Error(ErrorRecord, CustomAttributes),
    ApiClientError(ApiClientError, CustomAttributes),
    ProcessApiClientError(ApiClientError),
    ApiErrorResponse(ApiClientError, CustomAttributes),
    CustomAttribute(String, AttributeValue),
}

/// A logging service that records every call verbatim.
#[allow(dead_code)]
#[derive(Debug, Default)]
pub struct SpyService {
    calls: Mutex<Vec<SpyCall>>,
}

#[allow(dead_code)]
impl SpyService {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn calls(&self) -> Vec<SpyCall> {
        self.calls.lock().unwrap().clone()
    }

    fn push(&self, call: SpyCall) {
        self.calls.lock().unwrap().push(call);
    }
}

impl LoggingService for SpyService {
    fn log_info(&self, record: LogRecord, attributes: CustomAttributes) {
        self.push(SpyCall::Info(record, attributes));
    }

    fn log_error(&self, error: ErrorRecord, attributes: CustomAttributes) {
        self.push(SpyCall::Error(error, attributes));
    }

    fn log_api_client_error(&self, error: &ApiClientError, attributes: CustomAttributes) {
        self.push(SpyCall::ApiClientError(error.clone(), attributes));
    }

    fn process_api_client_error(&self, error: &ApiClientError) -> ErrorRecord {
        self.push(SpyCall::ProcessApiClientError(error.clone()));
        ErrorRecord::new("processed")
    }

    fn log_api_error_response(&self, error: &ApiClientError, attributes: CustomAttributes) {
        self.push(SpyCall::ApiErrorResponse(error.clone(), attributes));
    }

    fn set_custom_attribute(&self, name: &str, value: AttributeValue) {
        self.push(SpyCall::CustomAttribute(name.to_string(), value));
    }
}
