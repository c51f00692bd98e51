//! Logging service registry.
//!
//! # Data Flow
//! ```text
//! bootstrap
//!     → build an adapter (Datadog, console, ...)
//!     → LoggingContext::new(adapter)          (owned, passed to call sites)
//!       or configure_logging_service(adapter)  (process-wide slot)
//!
//! call site
//!     → LoggingContext method / free function
//!     → LoggingService implementation
//! ```
//!
//! # Design Decisions
//! - The capability set is the `LoggingService` trait, checked at compile time
//! - `LoggingContext` is the primary API; the global slot is a thin shim
//! - Missing configuration is a programming error surfaced as `LoggingError`

pub mod context;
pub mod global;
pub mod service;

pub use context::LoggingContext;
pub use global::{
    configure_logging_service, log_api_client_error, log_api_error_response, log_error, log_info,
    logging_service, process_api_client_error, reset_logging_service, set_custom_attribute,
};
pub use service::LoggingService;

/// Older names for [`log_api_client_error`] and [`process_api_client_error`].
pub use global::{log_api_client_error as log_axios_error, process_api_client_error as process_axios_error};
