//! Runtime version metadata attached as global context.

use serde_json::{Map, Value};

use crate::adapter::feature_flags::parse_object;
use crate::config::DatadogSettings;
use crate::error::LoggingError;

/// Global context key the metadata object is stored under.
pub const RUNTIME_VERSIONS_KEY: &str = "runtime_versions";

/// Version of this crate.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Collected metadata plus the problem hit while collecting it, if any.
///
/// Built-in entries survive a malformed `DATADOG_RUNTIME_VERSIONS`.
#[derive(Debug)]
pub struct RuntimeVersions {
    pub versions: Map<String, Value>,
    pub error: Option<LoggingError>,
}

pub fn collect_runtime_versions(settings: &DatadogSettings) -> RuntimeVersions {
    let mut versions = Map::new();
    let mut error = None;

    if let Some(raw) = &settings.runtime_versions {
        match parse_object(raw) {
            Ok(extra) => versions.extend(extra),
            Err(e) => error = Some(LoggingError::Metadata(e)),
        }
    }

    versions.insert("sdk".to_string(), Value::from(SDK_VERSION));
    versions.insert("app".to_string(), Value::from(settings.version.as_str()));

    RuntimeVersions { versions, error }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_builtin_entries() {
        let settings = DatadogSettings {
            version: "3.1.0".into(),
            ..Default::default()
        };
        let collected = collect_runtime_versions(&settings);
        assert!(collected.error.is_none());
        assert_eq!(collected.versions.get("app"), Some(&json!("3.1.0")));
        assert_eq!(collected.versions.get("sdk"), Some(&json!(SDK_VERSION)));
    }

    #[test]
    fn test_extra_entries_cannot_override_builtins() {
        let settings = DatadogSettings {
            version: "3.1.0".into(),
            runtime_versions: Some(r#"{"react": "17.0.2", "app": "spoofed"}"#.into()),
            ..Default::default()
        };
        let collected = collect_runtime_versions(&settings);
        assert_eq!(collected.versions.get("react"), Some(&json!("17.0.2")));
        assert_eq!(collected.versions.get("app"), Some(&json!("3.1.0")));
    }

    #[test]
    fn test_malformed_extra_keeps_builtins() {
        let settings = DatadogSettings {
            runtime_versions: Some("17.0.2".into()),
            ..Default::default()
        };
        let collected = collect_runtime_versions(&settings);
        assert_eq!(collected.versions.len(), 2);
        let err = collected.error.unwrap();
        assert!(err.to_string().starts_with("Unable to collect runtime version metadata: "));
    }
}
