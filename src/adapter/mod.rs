//! Logging service adapters.
//!
//! # Data Flow
//! ```text
//! LoggingService call
//!     → attribute merge (record attributes, then call-site attributes)
//!     → ignore.rs classification (errors only)
//!     → vendor surface (info / error / context)
//! ```
//!
//! # Design Decisions
//! - Adapters compose vendor surfaces rather than inheriting behaviour
//! - Customisation points (ignore pattern, tracing allow-list) are
//!   resolved at construction time

pub mod console;
pub mod datadog;
pub mod feature_flags;
pub mod ignore;
pub mod metadata;
pub mod tracing_urls;

pub use console::ConsoleLoggingService;
pub use datadog::{DatadogLoggingService, DatadogLoggingServiceBuilder};
pub use ignore::{IgnorePattern, IGNORED_ERROR};
pub use tracing_urls::{TracingUrlPattern, TracingUrlStrategy};
