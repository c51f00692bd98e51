//! Metrics collection.
//!
//! # Metrics
//! - `logging_events_total` (counter): routed events by sink
//!   (`info`, `ignored`, `error`)
//! - `logging_registry_events_total` (counter): registry changes by event
//!   (`configured`, `reset`, `rejected`)
//!
//! # Design Decisions
//! - Recording goes through the `metrics` facade; the host installs an
//!   exporter if it wants one, otherwise updates are no-ops

/// Count one event routed to `sink`.
pub fn record_log_event(sink: &'static str) {
    metrics::counter!("logging_events_total", "sink" => sink).increment(1);
}

/// Count one change to the process-wide registry.
pub fn record_registry_event(event: &'static str) {
    metrics::counter!("logging_registry_events_total", "event" => event).increment(1);
}
