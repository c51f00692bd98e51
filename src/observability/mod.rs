//! Observability for the logging facade itself.
//!
//! # Data Flow
//! ```text
//! registry + adapters produce:
//!     → logging.rs (the process's own structured log events)
//!     → metrics.rs (counters per sink and registry change)
//! ```
//!
//! # Design Decisions
//! - This crate never installs a metrics exporter
//! - Development console output and the tracing vendor SDK share the
//!   subscriber configured here

pub mod logging;
pub mod metrics;
