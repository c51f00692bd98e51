//! Informational and error records.

use super::attributes::{AttributeValue, CustomAttributes};

/// An informational log entry: a message plus the attributes it carries.
///
/// A plain string converts into a record with no attributes of its own.
#[derive(Debug, Clone, PartialEq)]
pub struct LogRecord {
    pub message: String,
    pub custom_attributes: CustomAttributes,
}

impl LogRecord {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            custom_attributes: CustomAttributes::new(),
        }
    }

    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<AttributeValue>) -> Self {
        self.custom_attributes.insert(key, value);
        self
    }

    pub fn with_attributes(mut self, attributes: CustomAttributes) -> Self {
        self.custom_attributes = attributes;
        self
    }
}

impl From<&str> for LogRecord {
    fn from(message: &str) -> Self {
        LogRecord::new(message)
    }
}

impl From<String> for LogRecord {
    fn from(message: String) -> Self {
        LogRecord::new(message)
    }
}

impl From<ErrorRecord> for LogRecord {
    fn from(error: ErrorRecord) -> Self {
        Self {
            message: error.message,
            custom_attributes: error.custom_attributes,
        }
    }
}

/// An application error handed to `log_error`.
///
/// `name` is `None` for errors that were logged as a bare message.
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorRecord {
    pub name: Option<String>,
    pub message: String,
    pub custom_attributes: CustomAttributes,
}

impl ErrorRecord {
    /// An error object with the generic `Error` name.
    pub fn new(message: impl Into<String>) -> Self {
        Self::named("Error", message)
    }

    pub fn named(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            message: message.into(),
            custom_attributes: CustomAttributes::new(),
        }
    }

    /// A bare message with no error object around it.
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            name: None,
            message: message.into(),
            custom_attributes: CustomAttributes::new(),
        }
    }

    /// Capture a Rust error, recording its source chain as `errorCause`.
    pub fn from_error(error: &(dyn std::error::Error + 'static)) -> Self {
        let mut record = Self::new(error.to_string());
        let causes: Vec<String> = std::iter::successors(error.source(), |e| e.source())
            .map(|e| e.to_string())
            .collect();
        if !causes.is_empty() {
            record.custom_attributes.insert("errorCause", causes.join(": "));
        }
        record
    }

    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<AttributeValue>) -> Self {
        self.custom_attributes.insert(key, value);
        self
    }

    pub fn with_attributes(mut self, attributes: CustomAttributes) -> Self {
        self.custom_attributes = attributes;
        self
    }

    pub fn is_bare_message(&self) -> bool {
        self.name.is_none()
    }
}

impl From<&str> for ErrorRecord {
    fn from(message: &str) -> Self {
        ErrorRecord::message(message)
    }
}

impl From<String> for ErrorRecord {
    fn from(message: String) -> Self {
        ErrorRecord::message(message)
    }
}

impl std::fmt::Display for ErrorRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.name {
            Some(name) => write!(f, "{}: {}", name, self.message),
            None => write!(f, "{}", self.message),
        }
    }
}
