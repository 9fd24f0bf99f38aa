// src/error.rs
use std::fmt;

/// Error types for the structured-payoff library
#[derive(Debug, Clone, PartialEq)]
pub enum PayoffError {
    /// Invalid parameter values
    InvalidParameters {
        parameter: String,
        value: f64,
        constraint: String,
    },

    /// Invalid configuration (non-numeric fields)
    InvalidConfiguration { field: String, reason: String },

    /// Unsupported operation, e.g. a payoff for a product kind with no rule
    UnsupportedOperation { operation: String, context: String },

    /// Backend rejected the session credentials (HTTP 401)
    Unauthorized,

    /// Backend answered with a non-success status
    HttpStatus { status: u16, body: String },

    /// Backend body did not match the expected schema
    MalformedResponse { reason: String },
}

impl fmt::Display for PayoffError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PayoffError::InvalidParameters {
                parameter,
                value,
                constraint,
            } => {
                write!(
                    f,
                    "Invalid parameter '{}' = {}: {}",
                    parameter, value, constraint
                )
            }
            PayoffError::InvalidConfiguration { field, reason } => {
                write!(f, "Invalid configuration for '{}': {}", field, reason)
            }
            PayoffError::UnsupportedOperation { operation, context } => {
                write!(
                    f,
                    "Unsupported operation '{}' in context: {}",
                    operation, context
                )
            }
            PayoffError::Unauthorized => {
                write!(f, "Unauthorized: session is no longer valid")
            }
            PayoffError::HttpStatus { status, body } => {
                write!(f, "Backend returned HTTP {}: {}", status, body)
            }
            PayoffError::MalformedResponse { reason } => {
                write!(f, "Malformed backend response: {}", reason)
            }
        }
    }
}

impl std::error::Error for PayoffError {}

/// Result type alias for structured-payoff operations
pub type PayoffResult<T> = Result<T, PayoffError>;

/// Validation utilities
pub mod validation {
    use super::{PayoffError, PayoffResult};

    /// Validate that a parameter is positive
    pub fn validate_positive(name: &str, value: f64) -> PayoffResult<()> {
        if value <= 0.0 {
            Err(PayoffError::InvalidParameters {
                parameter: name.to_string(),
                value,
                constraint: "must be positive (> 0)".to_string(),
            })
        } else {
            Ok(())
        }
    }

    /// Validate that a parameter is within the half-open range `[min, max)`
    pub fn validate_half_open_range(
        name: &str,
        value: f64,
        min: f64,
        max: f64,
    ) -> PayoffResult<()> {
        if value < min || value >= max {
            Err(PayoffError::InvalidParameters {
                parameter: name.to_string(),
                value,
                constraint: format!("must be in range [{}, {})", min, max),
            })
        } else {
            Ok(())
        }
    }

    /// Validate that a value is finite and not NaN
    pub fn validate_finite(name: &str, value: f64) -> PayoffResult<()> {
        if !value.is_finite() {
            Err(PayoffError::InvalidParameters {
                parameter: name.to_string(),
                value,
                constraint: "must be finite (not NaN or infinite)".to_string(),
            })
        } else {
            Ok(())
        }
    }

    /// Validate that a text field has visible content
    pub fn validate_not_blank(field: &str, value: &str) -> PayoffResult<()> {
        if value.trim().is_empty() {
            Err(PayoffError::InvalidConfiguration {
                field: field.to_string(),
                reason: "must not be empty".to_string(),
            })
        } else {
            Ok(())
        }
    }

    /// Validate a month count
    pub fn validate_months(field: &str, months: u32) -> PayoffResult<()> {
        if months == 0 {
            Err(PayoffError::InvalidConfiguration {
                field: field.to_string(),
                reason: "must be greater than 0".to_string(),
            })
        } else if months > 600 {
            Err(PayoffError::InvalidConfiguration {
                field: field.to_string(),
                reason: "exceeds maximum allowed (600 months)".to_string(),
            })
        } else {
            Ok(())
        }
    }
}
