//! Datadog-backed logging service.
//!
//! # Responsibilities
//! - Initialize the RUM and logs SDKs from environment-derived settings
//! - Route info records to the logs SDK
//! - Split errors into ignored (info sink) and reportable (error sink)
//! - Keep custom attributes identical across both SDKs
//!
//! # Design Decisions
//! - Initialization is skipped, not failed, without an application id and
//!   client token
//! - Failures while computing optional enrichments (tracing allow-list,
//!   feature flags, runtime versions) go to the error sink; construction
//!   still succeeds
//! - The tracing allow-list is an injected strategy resolved once

use serde_json::Value;
use std::fmt;
use std::sync::Arc;

use crate::adapter::feature_flags::parse_feature_flags;
use crate::adapter::ignore::{IgnorePattern, IGNORED_ERROR};
use crate::adapter::metadata::{collect_runtime_versions, RUNTIME_VERSIONS_KEY};
use crate::adapter::tracing_urls::{self, TracingUrlPattern, TracingUrlStrategy};
use crate::config::{AdapterConfig, DatadogSettings};
use crate::error::LoggingResult;
use crate::observability::metrics;
use crate::record::{ApiClientError, AttributeValue, CustomAttributes, ErrorRecord, LogRecord};
use crate::registry::LoggingService;
use crate::vendor::{LogsInitOptions, LogsSdk, PrivacyLevel, RumInitOptions, RumSdk};

/// Attribute name routed to the user-identity API instead of global context.
pub const USER_ID_ATTRIBUTE: &str = "userId";

/// Logging service forwarding to Datadog RUM and browser logs.
pub struct DatadogLoggingService {
    rum: Arc<dyn RumSdk>,
    logs: Arc<dyn LogsSdk>,
    ignore_pattern: Option<IgnorePattern>,
    settings: DatadogSettings,
    allowed_tracing_urls: Vec<TracingUrlPattern>,
    initialized: bool,
}

/// Builder for [`DatadogLoggingService`].
pub struct DatadogLoggingServiceBuilder {
    rum: Arc<dyn RumSdk>,
    logs: Arc<dyn LogsSdk>,
    config: AdapterConfig,
    ignore_pattern: Option<IgnorePattern>,
    settings: Option<DatadogSettings>,
    tracing_urls: TracingUrlStrategy,
}

impl DatadogLoggingServiceBuilder {
    /// Adapter options; `IGNORED_ERROR_REGEX` is compiled at `build`.
    pub fn config(mut self, config: AdapterConfig) -> Self {
        self.config = config;
        self
    }

    /// A precompiled ignore pattern; takes precedence over `config`.
    pub fn ignore_pattern(mut self, pattern: impl Into<IgnorePattern>) -> Self {
        self.ignore_pattern = Some(pattern.into());
        self
    }

    /// Use these settings instead of reading the process environment.
    pub fn settings(mut self, settings: DatadogSettings) -> Self {
        self.settings = Some(settings);
        self
    }

    /// Replace the tracing allow-list strategy.
    pub fn tracing_urls<F>(mut self, strategy: F) -> Self
    where
        F: Fn(&DatadogSettings) -> LoggingResult<Vec<TracingUrlPattern>> + Send + Sync + 'static,
    {
        self.tracing_urls = Arc::new(strategy);
        self
    }

    /// Validate the options and initialize the vendor SDKs.
    pub fn build(self) -> LoggingResult<DatadogLoggingService> {
        let ignore_pattern = match self.ignore_pattern {
            Some(pattern) => Some(pattern),
            None => IgnorePattern::parse(self.config.ignored_error_regex.as_deref())?,
        };

        let mut service = DatadogLoggingService {
            rum: self.rum,
            logs: self.logs,
            ignore_pattern,
            settings: self.settings.unwrap_or_else(DatadogSettings::from_env),
            allowed_tracing_urls: Vec::new(),
            initialized: false,
        };
        service.initialize(&self.tracing_urls);
        Ok(service)
    }
}

impl DatadogLoggingService {
    pub fn builder(rum: Arc<dyn RumSdk>, logs: Arc<dyn LogsSdk>) -> DatadogLoggingServiceBuilder {
        DatadogLoggingServiceBuilder {
            rum,
            logs,
            config: AdapterConfig::default(),
            ignore_pattern: None,
            settings: None,
            tracing_urls: tracing_urls::default_strategy(),
        }
    }

    /// Build with `config`, settings from the environment and the default
    /// tracing allow-list.
    pub fn new(rum: Arc<dyn RumSdk>, logs: Arc<dyn LogsSdk>, config: AdapterConfig) -> LoggingResult<Self> {
        Self::builder(rum, logs).config(config).build()
    }

    /// The allow-list is resolved even when initialization is skipped.
    fn initialize(&mut self, tracing_urls: &TracingUrlStrategy) {
        self.allowed_tracing_urls = match tracing_urls(&self.settings) {
            Ok(urls) => urls,
            Err(e) => {
                self.send_error(
                    &ErrorRecord::new(format!("Unable to compute allowed tracing urls: {}", e)),
                    None,
                );
                Vec::new()
            }
        };

        if !self.settings.has_credentials() {
            tracing::info!("Datadog application id or client token missing, skipping initialization");
            return;
        }

        let settings = &self.settings;
        self.rum.init(&RumInitOptions {
            application_id: settings.application_id.clone().unwrap_or_default(),
            client_token: settings.client_token.clone().unwrap_or_default(),
            site: settings.site.clone(),
            service: settings.service.clone(),
            env: settings.env.clone(),
            version: settings.version.clone(),
            session_sample_rate: settings.session_sample_rate,
            session_replay_sample_rate: settings.session_replay_sample_rate,
            trace_sample_rate: settings.trace_sample_rate,
            trace_context_injection: settings.trace_context_injection,
            allowed_tracing_urls: self.allowed_tracing_urls.clone(),
            track_user_interactions: true,
            track_resources: true,
            track_long_tasks: true,
            default_privacy_level: PrivacyLevel::MaskUserInput,
        });
        self.logs.init(&LogsInitOptions {
            client_token: settings.client_token.clone().unwrap_or_default(),
            site: settings.site.clone(),
            env: settings.env.clone(),
            service: settings.service.clone(),
            version: settings.version.clone(),
            forward_errors_to_logs: true,
            session_sample_rate: settings.logs_session_sample_rate,
        });
        self.initialized = true;

        tracing::info!(
            service = %settings.service,
            env = %settings.env,
            version = %settings.version,
            allowed_tracing_urls = self.allowed_tracing_urls.len(),
            "Datadog initialized"
        );

        self.report_feature_flags();
        self.report_runtime_versions();
    }

    fn report_feature_flags(&self) {
        let Some(raw) = &self.settings.feature_flags else {
            return;
        };
        match parse_feature_flags(raw) {
            Ok(flags) => {
                for (key, value) in flags {
                    self.rum.add_feature_flag_evaluation(&key, value);
                }
            }
            Err(e) => self.send_error(&ErrorRecord::new(e.to_string()), None),
        }
    }

    fn report_runtime_versions(&self) {
        let collected = collect_runtime_versions(&self.settings);
        if let Some(e) = collected.error {
            self.send_error(&ErrorRecord::new(e.to_string()), None);
        }
        let versions = Value::Object(collected.versions);
        self.logs.set_global_context_property(RUNTIME_VERSIONS_KEY, versions.clone());
        self.rum.set_global_context_property(RUNTIME_VERSIONS_KEY, versions);
    }

    /// Whether the vendor SDKs were initialized.
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub fn settings(&self) -> &DatadogSettings {
        &self.settings
    }

    pub fn ignore_pattern(&self) -> Option<&IgnorePattern> {
        self.ignore_pattern.as_ref()
    }

    /// URL patterns whose requests receive trace headers.
    pub fn allowed_tracing_urls(&self) -> &[TracingUrlPattern] {
        &self.allowed_tracing_urls
    }

    pub fn allows_tracing(&self, url: &str) -> bool {
        tracing_urls::allows_tracing(&self.allowed_tracing_urls, url)
    }

    fn send_browser_log(&self, action: &str, message: &str, attributes: Option<&CustomAttributes>) {
        if self.settings.development_mode {
            tracing::info!(target: "console", action, attributes = ?attributes, "{}", message);
        }
        metrics::record_log_event("ignored");
        self.logs.info(&format!("{}: {}", action, message), attributes);
    }

    fn send_error(&self, error: &ErrorRecord, attributes: Option<&CustomAttributes>) {
        if self.settings.development_mode {
            tracing::error!(target: "console", attributes = ?attributes, "{}", error);
        }
        metrics::record_log_event("error");
        self.logs.error(error, attributes);
    }
}

impl LoggingService for DatadogLoggingService {
    fn log_info(&self, record: LogRecord, attributes: CustomAttributes) {
        let merged = record.custom_attributes.merged(&attributes);
        if self.settings.development_mode {
            tracing::info!(target: "console", attributes = ?merged, "{}", record.message);
        }
        metrics::record_log_event("info");
        self.logs.info(&record.message, Some(&merged));
    }

    fn log_error(&self, error: ErrorRecord, attributes: CustomAttributes) {
        let merged = error.custom_attributes.merged(&attributes).into_non_empty();

        let ignored = self
            .ignore_pattern
            .as_ref()
            .is_some_and(|pattern| pattern.is_match(&error.message));

        if ignored {
            self.send_browser_log(IGNORED_ERROR, &error.message, merged.as_ref());
        } else {
            self.send_error(&error, merged.as_ref());
        }
    }

    fn log_api_client_error(&self, error: &ApiClientError, attributes: CustomAttributes) {
        let record = self.process_api_client_error(error);
        self.log_error(record, attributes);
    }

    fn set_custom_attribute(&self, name: &str, value: AttributeValue) {
        let value = value.to_json();
        if name == USER_ID_ATTRIBUTE {
            self.logs.set_user_property("id", value.clone());
            self.rum.set_user_property("id", value);
            return;
        }
        self.logs.set_global_context_property(name, value.clone());
        self.rum.set_global_context_property(name, value);
    }
}

impl fmt::Debug for DatadogLoggingService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatadogLoggingService")
            .field("ignore_pattern", &self.ignore_pattern)
            .field("initialized", &self.initialized)
            .field("allowed_tracing_urls", &self.allowed_tracing_urls)
            .finish_non_exhaustive()
    }
}
