//! Error types for the mail endpoint crate.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use thiserror::Error;

/// Errors raised while building or mutating an [`EmailEndpoint`](crate::EmailEndpoint).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EndpointError {
    /// A non-blank address did not match the accepted address pattern
    #[error("Invalid parameter format: {param}")]
    InvalidFormat { param: &'static str },
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with EndpointError
pub type EndpointResult<T> = Result<T, EndpointError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = EndpointError::InvalidFormat { param: "address" };
        assert_eq!(err.to_string(), "Invalid parameter format: address");

        let err = ConfigError::InvalidValue {
            var: "ENDPOINT_OUTPUT_FORMAT".to_string(),
            reason: "Must be one of: text, json".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid value for ENDPOINT_OUTPUT_FORMAT: Must be one of: text, json"
        );
    }

    #[test]
    fn test_invalid_format_carries_param() {
        let err = EndpointError::InvalidFormat { param: "value" };
        match err {
            EndpointError::InvalidFormat { param } => assert_eq!(param, "value"),
        }
    }
}
