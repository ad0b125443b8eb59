//! Error types for the Contact Manager API.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use thiserror::Error;

/// Errors that can occur when talking to the document store gateway.
#[derive(Error, Debug)]
pub enum StoreError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    HttpError(String),

    /// Gateway returned an error status code
    #[error("store error (status {status}): {message}")]
    ApiError { status: u16, message: String },

    /// Failed to parse a JSON payload
    #[error("JSON parse error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Network timeout
    #[error("Request timeout")]
    Timeout,

    /// Resource not found
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Authentication failed
    #[error("Authentication failed")]
    Unauthorized,

    /// Write conflicted with an existing document
    #[error("Document conflict: {0}")]
    Conflict(String),

    /// Request units exhausted
    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    /// Invalid request
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Generic store error with context
    #[error("Store error: {0}")]
    Other(String),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is missing
    #[error("Missing required environment variable: {0}")]
    MissingVar(String),

    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },

    /// Failed to load .env file
    #[error("Failed to load .env file: {0}")]
    DotenvError(String),

    /// Generic configuration error
    #[error("Configuration error: {0}")]
    Other(String),
}

/// Failure modes of the create-contact operation.
///
/// Parse failures and persistence failures are kept apart so the HTTP layer
/// can answer 400 for the former and an opaque 500 for the latter.
#[derive(Error, Debug)]
pub enum CreateContactError {
    /// Request body could not be parsed into the contact input shape
    #[error("malformed contact payload: {0}")]
    MalformedInput(#[source] serde_json::Error),

    /// The store rejected or failed the write
    #[error("creating contact failed: {0}")]
    Persistence(#[from] StoreError),
}

/// Convenience type alias for Results with StoreError
pub type StoreResult<T> = Result<T, StoreError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = StoreError::NotFound("container".to_string());
        assert_eq!(err.to_string(), "Resource not found: container");

        let err = ConfigError::MissingVar("STORE_ENDPOINT".to_string());
        assert_eq!(
            err.to_string(),
            "Missing required environment variable: STORE_ENDPOINT"
        );

        let err = StoreError::RateLimitExceeded;
        assert_eq!(err.to_string(), "Rate limit exceeded");
    }

    #[test]
    fn test_api_error_variants() {
        let err = StoreError::ApiError {
            status: 503,
            message: "Service unavailable".to_string(),
        };
        assert!(err.to_string().contains("503"));
        assert!(err.to_string().contains("Service unavailable"));
    }

    #[test]
    fn test_create_contact_error_from_store_error() {
        let err = CreateContactError::from(StoreError::RateLimitExceeded);
        assert!(matches!(err, CreateContactError::Persistence(_)));
        assert!(err.to_string().contains("Rate limit exceeded"));
    }

    #[test]
    fn test_malformed_input_carries_parser_message() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = CreateContactError::MalformedInput(parse_err);
        assert!(err.to_string().starts_with("malformed contact payload"));
    }
}
