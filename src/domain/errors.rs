//! Domain error types
//!
//! This module defines the error hierarchy for margin reports.
//! Errors are domain-specific and don't expose third-party HTTP types.

use thiserror::Error;

/// Main report error type
///
/// Every fallible operation in the crate returns this error. A report run
/// never recovers from any of these; the row stream yields the error once
/// and ends.
#[derive(Debug, Error)]
pub enum ReportError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Remote platform errors
    #[error("Connect error: {0}")]
    Connect(#[from] ConnectError),

    /// The pricing lookup returned no price point
    #[error("No price point found for item {item_global_id} in price list version {price_list_version}")]
    PricePointNotFound {
        price_list_version: String,
        item_global_id: String,
    },

    /// A remote record is missing a field or carries a value of the wrong shape
    #[error("Malformed {record}: field '{field}' {reason}")]
    MalformedRecord {
        /// Record description, e.g. `request PR-1234`
        record: String,
        /// Dotted path of the offending field
        field: String,
        reason: String,
    },

    /// Report input parameters cannot be turned into a query
    #[error("Invalid report parameters: {0}")]
    InvalidParameters(String),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),
}

impl ReportError {
    /// Shorthand for a [`ReportError::MalformedRecord`]
    pub fn malformed(
        record: impl Into<String>,
        field: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        ReportError::MalformedRecord {
            record: record.into(),
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// Remote platform errors
///
/// Errors that occur when talking to the commerce platform API.
/// These errors don't expose `reqwest` types.
#[derive(Debug, Error)]
pub enum ConnectError {
    /// Failed to reach the API
    #[error("Failed to connect to API: {0}")]
    ConnectionFailed(String),

    /// Response could not be decoded
    #[error("Invalid response from server: {0}")]
    InvalidResponse(String),

    /// Resource not found (404)
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Server error (5xx)
    #[error("Server error: {status} - {message}")]
    ServerError { status: u16, message: String },

    /// Client error (4xx)
    #[error("Client error: {status} - {message}")]
    ClientError { status: u16, message: String },

    /// Timeout
    #[error("Request timeout: {0}")]
    Timeout(String),
}

// Conversion from std::io::Error
impl From<std::io::Error> for ReportError {
    fn from(err: std::io::Error) -> Self {
        ReportError::Io(err.to_string())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for ReportError {
    fn from(err: serde_json::Error) -> Self {
        ReportError::Serialization(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for ReportError {
    fn from(err: toml::de::Error) -> Self {
        ReportError::Configuration(format!("TOML parse error: {err}"))
    }
}
