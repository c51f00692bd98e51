//! rum-logging command line.
//!
//! Configures the process-wide logging service the way an application
//! bootstrap would, then pushes records through it.
//!
//! ```text
//! environment (DATADOG_*)  ─┐
//! --config rum-logging.toml ─┼─▶ DatadogLoggingService ─▶ tracing vendor SDK
//!                            │   (or ConsoleLoggingService without credentials)
//!                            └─▶ configure_logging_service
//!                                    ▲
//! subcommand ─▶ registry free functions
//! ```

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use url::Url;

use rum_logging::adapter::tracing_urls::{allows_tracing, default_allowed_tracing_urls};
use rum_logging::adapter::IgnorePattern;
use rum_logging::config::validation::validate_config;
use rum_logging::config::{load_config, ConfigError, DatadogSettings, LoggingConfig};
use rum_logging::observability::logging::init_logging;
use rum_logging::registry;
use rum_logging::vendor::tracing_sdk::{TracingLogs, TracingRum};
use rum_logging::{
    AttributeValue, ConsoleLoggingService, DatadogLoggingService, LoggingError, LoggingService,
};

#[derive(Parser)]
#[command(name = "rum-logging")]
#[command(about = "Send records through the configured logging service", long_about = None)]
struct Cli {
    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override observability.log_level
    #[arg(short, long)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Log an informational message
    Info {
        message: String,
        /// key=value attribute, repeatable
        #[arg(short = 'a', long = "attr", value_parser = parse_attribute)]
        attributes: Vec<(String, AttributeValue)>,
    },
    /// Log an error
    Error {
        message: String,
        /// key=value attribute, repeatable
        #[arg(short = 'a', long = "attr", value_parser = parse_attribute)]
        attributes: Vec<(String, AttributeValue)>,
    },
    /// Set a custom attribute on every subsequent record
    Attribute { name: String, value: String },
    /// Show the tracing allow-list
    TracingUrls {
        /// Report whether this URL would receive trace headers
        #[arg(long)]
        check: Option<String>,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => LoggingConfig::default(),
    };
    if let Some(level) = cli.log_level {
        config.observability.log_level = level;
        validate_config(&config).map_err(ConfigError::Validation)?;
    }

    init_logging(&config.observability);

    let settings = DatadogSettings::from_env();

    match cli.command {
        Commands::Info { message, attributes } => {
            configure(&config, settings)?;
            registry::log_info(message, attributes.into_iter().collect())?;
        }
        Commands::Error { message, attributes } => {
            configure(&config, settings)?;
            registry::log_error(message, attributes.into_iter().collect())?;
        }
        Commands::Attribute { name, value } => {
            configure(&config, settings)?;
            registry::set_custom_attribute(&name, parse_value(&value))?;
        }
        Commands::TracingUrls { check } => show_tracing_urls(&settings, check.as_deref())?,
    }

    Ok(())
}

/// Install the Datadog adapter, or the console adapter without credentials.
fn configure(config: &LoggingConfig, settings: DatadogSettings) -> Result<(), LoggingError> {
    let service: Arc<dyn LoggingService> = if settings.has_credentials() {
        Arc::new(
            DatadogLoggingService::builder(Arc::new(TracingRum), Arc::new(TracingLogs))
                .config(config.config.clone())
                .settings(settings)
                .build()?,
        )
    } else {
        tracing::info!("Datadog credentials not set, logging to console");
        let pattern = IgnorePattern::parse(config.config.ignored_error_regex.as_deref())?;
        Arc::new(ConsoleLoggingService::new(pattern))
    };
    registry::configure_logging_service(Some(service))?;
    Ok(())
}

fn show_tracing_urls(settings: &DatadogSettings, check: Option<&str>) -> Result<(), Box<dyn std::error::Error>> {
    let allowed = default_allowed_tracing_urls(settings)?;
    if allowed.is_empty() {
        println!("(no allowed tracing urls)");
    }
    for pattern in &allowed {
        println!("{}", pattern);
    }

    if let Some(url) = check {
        Url::parse(url).map_err(|e| LoggingError::InvalidTracingUrl(format!("{}: {}", url, e)))?;
        let verdict = if allows_tracing(&allowed, url) { "traced" } else { "not traced" };
        println!("{}: {}", url, verdict);
    }
    Ok(())
}

fn parse_attribute(raw: &str) -> Result<(String, AttributeValue), String> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected key=value, got {:?}", raw))?;
    if key.is_empty() {
        return Err("attribute name must not be empty".to_string());
    }
    Ok((key.to_string(), parse_value(value)))
}

fn parse_value(raw: &str) -> AttributeValue {
    if raw == "null" {
        return AttributeValue::Null;
    }
    if let Ok(b) = raw.parse::<bool>() {
        return AttributeValue::Bool(b);
    }
    if let Ok(i) = raw.parse::<i64>() {
        return AttributeValue::Int(i);
    }
    if let Ok(f) = raw.parse::<f64>() {
        return AttributeValue::Float(f);
    }
    AttributeValue::String(raw.to_string())
}
