//! Distributed-trace URL allow-list.
//!
//! # Responsibilities
//! - Represent the URL patterns eligible for trace header injection
//! - Provide the default allow-list strategy
//!
//! # Design Decisions
//! - The list is resolved once, at adapter construction, by an injected
//!   strategy; callers customise it by supplying their own strategy
//! - Prefix entries must be absolute URLs so typos fail at construction

use regex::Regex;
use std::fmt;
use std::sync::Arc;
use url::Url;

use crate::config::DatadogSettings;
use crate::error::{LoggingError, LoggingResult};

/// Root domain covered by the default allow-list.
pub const DEFAULT_TRACING_ROOT_DOMAIN: &str = "edx.org";

/// Any subdomain of the root domain over https, followed by a path,
/// port, query, fragment or nothing.
const DEFAULT_TRACING_PATTERN: &str = r"(?i)^https://([a-z0-9-]+\.)+edx\.org(/|:|\?|#|$)";

/// Computes the allow-list from the environment-derived settings.
pub type TracingUrlStrategy =
    Arc<dyn Fn(&DatadogSettings) -> LoggingResult<Vec<TracingUrlPattern>> + Send + Sync>;

/// One allow-list entry.
#[derive(Debug, Clone)]
pub enum TracingUrlPattern {
    /// Matches URLs starting with this string.
    Prefix(String),
    /// Matches URLs the expression finds a match in.
    Pattern(Regex),
}

impl TracingUrlPattern {
    pub fn prefix(prefix: impl Into<String>) -> LoggingResult<Self> {
        let prefix = prefix.into();
        Url::parse(&prefix).map_err(|e| LoggingError::InvalidTracingUrl(format!("{}: {}", prefix, e)))?;
        Ok(Self::Prefix(prefix))
    }

    pub fn pattern(pattern: &str) -> LoggingResult<Self> {
        Regex::new(pattern)
            .map(Self::Pattern)
            .map_err(|e| LoggingError::InvalidTracingUrl(format!("{}: {}", pattern, e)))
    }

    pub fn matches(&self, url: &str) -> bool {
        match self {
            Self::Prefix(prefix) => url.starts_with(prefix.as_str()),
            Self::Pattern(regex) => regex.is_match(url),
        }
    }
}

impl fmt::Display for TracingUrlPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Prefix(prefix) => write!(f, "{}", prefix),
            Self::Pattern(regex) => write!(f, "/{}/", regex.as_str()),
        }
    }
}

/// The built-in strategy: empty unless
/// `DATADOG_HAS_DEFAULT_ALLOWED_TRACING_URLS` is set.
pub fn default_allowed_tracing_urls(settings: &DatadogSettings) -> LoggingResult<Vec<TracingUrlPattern>> {
    if !settings.has_default_allowed_tracing_urls {
        return Ok(Vec::new());
    }
    Ok(vec![TracingUrlPattern::pattern(DEFAULT_TRACING_PATTERN)?])
}

pub fn default_strategy() -> TracingUrlStrategy {
    Arc::new(default_allowed_tracing_urls)
}

/// Whether `url` matches any entry of `allowed`.
pub fn allows_tracing(allowed: &[TracingUrlPattern], url: &str) -> bool {
    allowed.iter().any(|pattern| pattern.matches(url))
}
