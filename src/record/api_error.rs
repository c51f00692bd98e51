//! HTTP API client failures and their conversion into error records.
//!
//! # Classification
//! - `api-response-error`: the server answered with an error status
//! - `api-request-error`: the request went out but no response came back
//! - `api-request-config-error`: the request was never sent

use super::attributes::CustomAttributes;
use super::log_record::ErrorRecord;

pub const API_RESPONSE_ERROR: &str = "api-response-error";
pub const API_REQUEST_ERROR: &str = "api-request-error";
pub const API_REQUEST_CONFIG_ERROR: &str = "api-request-config-error";

/// The request half of a failed API call.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: String,
    pub url: String,
}

/// The response half of a failed API call.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: Option<String>,
}

/// A failure reported by an HTTP API client.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiClientError {
    pub message: String,
    pub request: Option<ApiRequest>,
    pub response: Option<ApiResponse>,
    pub custom_attributes: CustomAttributes,
}

impl ApiClientError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            request: None,
            response: None,
            custom_attributes: CustomAttributes::new(),
        }
    }

    pub fn with_request(mut self, method: impl Into<String>, url: impl Into<String>) -> Self {
        self.request = Some(ApiRequest {
            method: method.into(),
            url: url.into(),
        });
        self
    }

    pub fn with_response(mut self, status: u16, body: Option<String>) -> Self {
        self.response = Some(ApiResponse { status, body });
        self
    }

    pub fn with_attributes(mut self, attributes: CustomAttributes) -> Self {
        self.custom_attributes = attributes;
        self
    }

    /// The `httpErrorType` this failure is classified as.
    pub fn error_type(&self) -> &'static str {
        match (&self.response, &self.request) {
            (Some(_), _) => API_RESPONSE_ERROR,
            (None, Some(_)) => API_REQUEST_ERROR,
            (None, None) => API_REQUEST_CONFIG_ERROR,
        }
    }

    /// Convert into an error record carrying the HTTP details as attributes.
    ///
    /// Attributes already present on the error win over the derived ones.
    pub fn to_error_record(&self) -> ErrorRecord {
        let mut derived = CustomAttributes::new()
            .with("httpErrorType", self.error_type())
            .with("httpErrorMessage", self.message.as_str());

        if let Some(request) = &self.request {
            derived.insert("httpErrorRequestUrl", request.url.as_str());
            derived.insert("httpErrorRequestMethod", request.method.as_str());
        }

        let message = match &self.response {
            Some(response) => {
                derived.insert("httpErrorStatus", response.status);
                derived.insert("httpErrorResponseData", response.body.clone());
                format!(
                    "API Client Error (Response): {} - see custom attributes for details",
                    response.status
                )
            }
            None if self.request.is_some() => format!(
                "API Client Error (Request): {} (possible local connectivity issue)",
                self.message
            ),
            None => format!("API Client Error (Config): {}", self.message),
        };

        ErrorRecord::named("ApiClientError", message)
            .with_attributes(derived.merged(&self.custom_attributes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::AttributeValue;

    #[test]
    fn test_response_error() {
        let err = ApiClientError::new("Request failed with status code 503")
            .with_request("GET", "https://api.example.com/courses")
            .with_response(503, Some("{\"detail\":\"down\"}".into()));

        let record = err.to_error_record();
        assert_eq!(err.error_type(), API_RESPONSE_ERROR);
        assert_eq!(
            record.message,
            "API Client Error (Response): 503 - see custom attributes for details"
        );
        let attrs = &record.custom_attributes;
        assert_eq!(attrs.get("httpErrorStatus"), Some(&AttributeValue::Int(503)));
        assert_eq!(
            attrs.get("httpErrorRequestUrl"),
            Some(&AttributeValue::from("https://api.example.com/courses"))
        );
        assert_eq!(attrs.get("httpErrorRequestMethod"), Some(&AttributeValue::from("GET")));
    }

    #[test]
    fn test_request_error() {
        let err = ApiClientError::new("Network Error").with_request("POST", "https://api.example.com");
        let record = err.to_error_record();
        assert_eq!(err.error_type(), API_REQUEST_ERROR);
        assert!(record.message.contains("possible local connectivity issue"));
        assert!(record.custom_attributes.get("httpErrorStatus").is_none());
    }

    #[test]
    fn test_config_error_keeps_own_attributes() {
        let err = ApiClientError::new("bad base url")
            .with_attributes(CustomAttributes::new().with("httpErrorType", "custom").with("page", "home"));
        let record = err.to_error_record();
        assert_eq!(record.message, "API Client Error (Config): bad base url");
        assert_eq!(
            record.custom_attributes.get("httpErrorType"),
            Some(&AttributeValue::from("custom"))
        );
        assert_eq!(record.custom_attributes.get("page"), Some(&AttributeValue::from("home")));
    }
}
