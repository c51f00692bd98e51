//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → LoggingConfig (validated, immutable)
//!
//! environment (DATADOG_*, APP_VERSION, NODE_ENV, APP_ENV)
//!     → settings.rs (read once, defaults applied)
//!     → DatadogSettings
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks
//! - Environment settings never fail; file config does

pub mod loader;
pub mod schema;
pub mod settings;
pub mod validation;

pub use loader::{load_config, parse_config, ConfigError};
pub use schema::{AdapterConfig, LogFormat, LoggingConfig, ObservabilityConfig};
pub use settings::DatadogSettings;
