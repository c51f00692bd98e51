//! Vendor settings derived from the environment.
//!
//! # Responsibilities
//! - Read every `DATADOG_*` variable once, at adapter construction
//! - Apply the documented defaults and fallback chains
//!
//! # Design Decisions
//! - Lookup is injectable (`from_lookup`) so tests never touch the real env
//! - Nothing here fails: unparseable values fall back to defaults, since
//!   telemetry setup must never break the host application
//! - Sample rates are clamped to 0..=100

use crate::vendor::TraceContextInjection;

pub const DEFAULT_VERSION: &str = "1.0.0";
pub const DEFAULT_TRACE_SAMPLE_RATE: u32 = 20;
pub const MAX_SAMPLE_RATE: u32 = 100;

/// Everything the Datadog adapter reads from the environment.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DatadogSettings {
    pub application_id: Option<String>,
    pub client_token: Option<String>,
    pub site: String,
    pub service: String,
    pub env: String,
    pub version: String,
    pub session_sample_rate: u32,
    pub session_replay_sample_rate: u32,
    pub logs_session_sample_rate: u32,
    pub trace_sample_rate: u32,
    pub trace_context_injection: TraceContextInjection,
    pub has_default_allowed_tracing_urls: bool,
    /// Raw JSON object of feature flag evaluations.
    pub feature_flags: Option<String>,
    /// Raw JSON object of extra runtime versions.
    pub runtime_versions: Option<String>,
    /// Mirror every sink call to the local console.
    pub development_mode: bool,
}

impl DatadogSettings {
    /// Read settings from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read settings through `lookup`, which returns a variable's value.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|value| !value.is_empty());

        let version = var("DATADOG_VERSION")
            .or_else(|| var("APP_VERSION"))
            .unwrap_or_else(|| DEFAULT_VERSION.to_string());

        let trace_context_injection = var("DATADOG_TRACE_CONTEXT_INJECTION")
            .and_then(|value| match value.parse() {
                Ok(mode) => Some(mode),
                Err(e) => {
                    tracing::warn!(error = %e, "Falling back to sampled trace context injection");
                    None
                }
            })
            .unwrap_or_default();

        Self {
            application_id: var("DATADOG_APPLICATION_ID"),
            client_token: var("DATADOG_CLIENT_TOKEN"),
            site: var("DATADOG_SITE").unwrap_or_default(),
            service: var("DATADOG_SERVICE").unwrap_or_default(),
            env: var("DATADOG_ENV").unwrap_or_default(),
            version,
            session_sample_rate: sample_rate(var("DATADOG_SESSION_SAMPLE_RATE"), 0),
            session_replay_sample_rate: sample_rate(var("DATADOG_SESSION_REPLAY_SAMPLE_RATE"), 0),
            logs_session_sample_rate: sample_rate(var("DATADOG_LOGS_SESSION_SAMPLE_RATE"), 0),
            trace_sample_rate: sample_rate(var("DATADOG_TRACE_SAMPLE_RATE"), DEFAULT_TRACE_SAMPLE_RATE),
            trace_context_injection,
            has_default_allowed_tracing_urls: var("DATADOG_HAS_DEFAULT_ALLOWED_TRACING_URLS")
                .map(|value| is_truthy(&value))
                .unwrap_or(false),
            feature_flags: var("DATADOG_FEATURE_FLAGS"),
            runtime_versions: var("DATADOG_RUNTIME_VERSIONS"),
            development_mode: var("NODE_ENV")
                .or_else(|| var("APP_ENV"))
                .is_some_and(|value| value == "development"),
        }
    }

    /// Both the application id and the client token are present.
    pub fn has_credentials(&self) -> bool {
        self.application_id.is_some() && self.client_token.is_some()
    }
}

/// Parse the leading digits of `value`, the way front-end code parses env
/// integers; anything without leading digits yields `default`.
fn sample_rate(value: Option<String>, default: u32) -> u32 {
    let Some(value) = value else {
        return default;
    };
    let digits: String = value.trim().chars().take_while(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return default;
    }
    // Digit strings only fail to parse on overflow.
    let rate = digits.parse::<u64>().unwrap_or(u64::MAX);
    if rate > u64::from(MAX_SAMPLE_RATE) {
        tracing::warn!(rate, "Sample rate above 100, clamping");
        return MAX_SAMPLE_RATE;
    }
    rate as u32
}

/// `true`, `1`, `yes` and `on`, in any case.
pub fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "true" | "1" | "yes" | "on"
    )
}
