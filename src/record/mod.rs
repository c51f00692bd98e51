//! Log record data model.
//!
//! # Data Flow
//! ```text
//! caller
//!     → LogRecord / ErrorRecord / ApiClientError (message + own attributes)
//!     → merged with call-site CustomAttributes (call site wins)
//!     → adapter sink
//! ```

pub mod api_error;
pub mod attributes;
pub mod log_record;

pub use api_error::{ApiClientError, ApiRequest, ApiResponse};
pub use attributes::{AttributeValue, CustomAttributes};
pub use log_record::{ErrorRecord, LogRecord};
