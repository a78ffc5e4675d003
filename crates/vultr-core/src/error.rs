//! Error types for Vultr operations.
//!
//! Requests themselves never fail: every outcome is a [`crate::VultrResponse`]. These
//! errors cover client construction and the opt-in typed conversions
//! ([`crate::VultrResponse::into_result`], [`crate::VultrResponse::json`]).

use reqwest::StatusCode;
use serde::Serialize;
use thiserror::Error;

/// Main error type for Vultr operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Invalid endpoint or URL
    #[error("Invalid endpoint: {0}")]
    InvalidEndpoint(String),

    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    HttpError(String),

    /// Operation timed out
    #[error("Request timed out: {0}")]
    Timeout(String),

    /// Vultr is unavailable or returned a server error
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Bad request
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// The API key was rejected
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Rate limit exceeded
    #[error("Rate limited: {0}")]
    RateLimited(String),

    /// Conflict error
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Failed to parse a Vultr response
    #[error("Failed to parse Vultr response: {0}")]
    ParseError(String),

    /// Error reported by the API that has no more specific mapping
    #[error("Vultr API error: {0}")]
    ApiError(String),

    /// Operation not available in the selected API generation
    #[error("Unsupported operation: {0}")]
    Unsupported(String),
}

/// Specialized result type for Vultr operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Serializable `{"error": {"code", "message"}}` body for hosts that relay failures.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ErrorResponse {
    /// Code and message.
    pub error: ErrorInfo,
}

/// Code and message of an [`ErrorResponse`].
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ErrorInfo {
    /// One of the [`Error::error_code`] values.
    pub code: String,
    /// Display form of the error.
    pub message: String,
}

impl Error {
    /// Stable upper-case code, e.g. `NOT_FOUND`.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::ConfigError(_) => "CONFIG_ERROR",
            Self::InvalidEndpoint(_) => "INVALID_ENDPOINT",
            Self::HttpError(_) => "HTTP_ERROR",
            Self::Timeout(_) => "TIMEOUT",
            Self::ServiceUnavailable(_) => "SERVICE_UNAVAILABLE",
            Self::NotFound(_) => "NOT_FOUND",
            Self::BadRequest(_) => "BAD_REQUEST",
            Self::Unauthorized(_) => "UNAUTHORIZED",
            Self::RateLimited(_) => "RATE_LIMITED",
            Self::Conflict(_) => "CONFLICT",
            Self::ParseError(_) => "PARSE_ERROR",
            Self::ApiError(_) => "API_ERROR",
            Self::Unsupported(_) => "UNSUPPORTED",
        }
    }

    /// Wrap the code and display message for serialization.
    #[must_use]
    pub fn into_error_response(self) -> ErrorResponse {
        ErrorResponse {
            error: ErrorInfo {
                code: self.error_code().to_string(),
                message: self.to_string(),
            },
        }
    }

    /// Returns true if the caller may reasonably try the request again later.
    ///
    /// The client itself never retries.
    #[must_use]
    pub const fn is_transient(&self) -> bool {
        matches!(
            self,
            Self::Timeout(_) | Self::ServiceUnavailable(_) | Self::RateLimited(_)
        )
    }
}

/// Map an error-classified HTTP status and message onto the error taxonomy.
#[must_use]
pub fn map_status_to_error(status: StatusCode, message: String) -> Error {
    match status {
        StatusCode::NOT_FOUND => Error::NotFound(message),
        StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => Error::BadRequest(message),
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Error::Unauthorized(message),
        StatusCode::CONFLICT => Error::Conflict(message),
        StatusCode::TOO_MANY_REQUESTS => Error::RateLimited(message),
        StatusCode::REQUEST_TIMEOUT | StatusCode::GATEWAY_TIMEOUT => Error::Timeout(message),
        StatusCode::BAD_GATEWAY | StatusCode::SERVICE_UNAVAILABLE => {
            Error::ServiceUnavailable(message)
        }
        status if status.is_server_error() => {
            Error::ServiceUnavailable(format!("Vultr server error {}: {message}", status.as_u16()))
        }
        _ => Error::ApiError(message),
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout(err.to_string())
        } else if err.is_connect() {
            Self::ServiceUnavailable(err.to_string())
        } else {
            Self::HttpError(err.to_string())
        }
    }
}

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Self {
        Self::InvalidEndpoint(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::ParseError(err.to_string())
    }
}

impl From<validator::ValidationErrors> for Error {
    fn from(err: validator::ValidationErrors) -> Self {
        Self::ConfigError(err.to_string())
    }
}
