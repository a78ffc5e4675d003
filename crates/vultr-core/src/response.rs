//! The response envelope returned by every Vultr command.
//!
//! A [`VultrResponse`] wraps the raw body and HTTP status of one call and derives
//! everything else from them: the `success`/`error` classification, the decoded payload
//! and a normalized error detail. Construction never fails; empty or malformed bodies
//! degrade to a missing payload and an error-shaped detail.
//!
//! The two API generations classify differently:
//!
//! - **v2**: any HTTP status of 300 or above is an error, whatever the body says.
//! - **v1**: the HTTP status is ignored. A non-empty body that does not decode into an
//!   object (v1 answers failures with a bare text message) is an error; everything else,
//!   including an empty body, is a success.

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};
use std::fmt;

use crate::error::{map_status_to_error, Error, Result};
use crate::types::ApiVersion;

/// Message used when the server could not be reached at all.
pub const TRANSPORT_ERROR_MESSAGE: &str =
    "An internal error occurred, or the server did not respond to the request.";

/// Fallback label when neither the body nor the reason-phrase table names the error.
pub const DEFAULT_ERROR_MESSAGE: &str = "Internal Server Error";

/// HTTP status used for synthesized transport failures.
pub const TRANSPORT_ERROR_STATUS: u16 = 500;

/// HTTP status used for operations missing from the selected API generation.
pub const UNSUPPORTED_STATUS: u16 = 501;

/// Outcome classification of a response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseStatus {
    /// The call succeeded.
    Success,
    /// The call failed; see [`VultrResponse::errors`].
    Error,
}

impl ResponseStatus {
    /// Returns the status as the lowercase string `success` or `error`.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for ResponseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Normalized error extracted from a response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorDetail {
    /// Human-readable message, suitable for showing to an operator.
    pub error: String,
    /// HTTP status code (v2 only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
}

impl From<ErrorDetail> for Error {
    fn from(detail: ErrorDetail) -> Self {
        match detail.status {
            Some(code) => {
                let status =
                    StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
                map_status_to_error(status, detail.error)
            }
            None => Error::ApiError(detail.error),
        }
    }
}

/// Decoded form of a raw body.
#[derive(Debug, Clone, PartialEq)]
enum Payload {
    Empty,
    Json(Value),
    Malformed,
}

impl Payload {
    fn decode(raw: &str) -> Self {
        if raw.is_empty() {
            return Self::Empty;
        }

        match serde_json::from_str::<Value>(raw) {
            Ok(Value::Array(items)) => Self::Json(Value::Object(index_keyed(items))),
            Ok(value) => Self::Json(value),
            Err(_) => Self::Malformed,
        }
    }

    fn value(&self) -> Option<&Value> {
        match self {
            Self::Json(Value::Null) | Self::Empty | Self::Malformed => None,
            Self::Json(value) => Some(value),
        }
    }

    fn is_object(&self) -> bool {
        matches!(self, Self::Json(Value::Object(_)))
    }
}

// Top-level arrays become objects keyed "0", "1", … so every payload is object-shaped.
fn index_keyed(items: Vec<Value>) -> Map<String, Value> {
    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| (index.to_string(), item))
        .collect()
}

/// Immutable envelope around one Vultr API response.
#[derive(Debug, Clone, PartialEq)]
pub struct VultrResponse {
    version: ApiVersion,
    raw: String,
    http_status: u16,
    payload: Payload,
    unsupported: Option<String>,
}

impl VultrResponse {
    /// Wrap a raw body and HTTP status.
    ///
    /// Never fails: the body is decoded eagerly and decoding problems are folded into the
    /// classification.
    #[must_use]
    pub fn new(version: ApiVersion, raw: impl Into<String>, http_status: u16) -> Self {
        let raw = raw.into();
        let payload = Payload::decode(&raw);
        Self {
            version,
            raw,
            http_status,
            payload,
            unsupported: None,
        }
    }

    /// Envelope standing in for a call that never produced an HTTP response.
    ///
    /// v2 gets a 500-shaped JSON error; v1 gets an empty body with no status, which is
    /// what a failed legacy call has always looked like to callers.
    #[must_use]
    pub fn transport_failure(version: ApiVersion) -> Self {
        match version {
            ApiVersion::V2 => {
                let body = json!({
                    "error": TRANSPORT_ERROR_MESSAGE,
                    "status": TRANSPORT_ERROR_STATUS,
                });
                Self::new(version, body.to_string(), TRANSPORT_ERROR_STATUS)
            }
            ApiVersion::V1 => Self::new(version, String::new(), 0),
        }
    }

    /// Envelope for an operation that the selected API generation does not offer.
    #[must_use]
    pub fn unsupported(version: ApiVersion, action: &str) -> Self {
        let message = format!("The {action} operation is not available in the {version} API");
        let envelope = match version {
            ApiVersion::V2 => {
                let body = json!({ "error": message, "status": UNSUPPORTED_STATUS });
                Self::new(version, body.to_string(), UNSUPPORTED_STATUS)
            }
            // A bare message is exactly how v1 reports failures.
            ApiVersion::V1 => Self::new(version, message, 0),
        };
        Self {
            unsupported: Some(action.to_string()),
            ..envelope
        }
    }

    /// The `family.operation` name when this envelope stands in for an operation the API
    /// generation does not offer.
    #[must_use]
    pub fn unsupported_action(&self) -> Option<&str> {
        self.unsupported.as_deref()
    }

    /// Classify the response as `success` or `error`.
    #[must_use]
    pub fn status(&self) -> ResponseStatus {
        let failed = match self.version {
            ApiVersion::V2 => self.http_status >= 300,
            ApiVersion::V1 => !self.payload.is_object() && !self.raw.is_empty(),
        };

        if failed {
            ResponseStatus::Error
        } else {
            ResponseStatus::Success
        }
    }

    /// Returns true when [`Self::status`] is `success`.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status() == ResponseStatus::Success
    }

    /// The decoded JSON payload; `None` for an empty or undecodable body.
    ///
    /// Top-level arrays are presented as objects keyed by position.
    #[must_use]
    pub fn response(&self) -> Option<&Value> {
        self.payload.value()
    }

    /// Normalized error detail, if the response carries one.
    #[must_use]
    pub fn errors(&self) -> Option<ErrorDetail> {
        match self.version {
            ApiVersion::V1 => (self.status() == ResponseStatus::Error).then(|| ErrorDetail {
                error: self.raw.clone(),
                status: None,
            }),
            ApiVersion::V2 => self.v2_errors(),
        }
    }

    fn v2_errors(&self) -> Option<ErrorDetail> {
        if !self.payload.is_object() && !self.raw.is_empty() {
            return Some(ErrorDetail {
                error: self.raw.clone(),
                status: Some(self.http_status),
            });
        }

        if self.http_status < 300 {
            return None;
        }

        let message = self
            .payload
            .value()
            .and_then(|payload| payload.get("error"))
            .and_then(|error| match error {
                Value::Null => None,
                Value::String(text) => Some(text.clone()),
                other => Some(other.to_string()),
            })
            .or_else(|| reason_phrase(self.http_status).map(str::to_string))
            .unwrap_or_else(|| DEFAULT_ERROR_MESSAGE.to_string());

        Some(ErrorDetail {
            error: message,
            status: Some(self.http_status),
        })
    }

    /// The original, unparsed body.
    #[must_use]
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The HTTP status code (0 when no response was received on v1).
    #[must_use]
    pub const fn http_status(&self) -> u16 {
        self.http_status
    }

    /// The API generation this response was produced by.
    #[must_use]
    pub const fn version(&self) -> ApiVersion {
        self.version
    }

    /// Continuation cursor for the next page of a v2 list response.
    ///
    /// Reads `meta.links.next`, falling back to `meta.cursor`. Empty cursors mean there
    /// are no more pages.
    #[must_use]
    pub fn next_cursor(&self) -> Option<String> {
        let meta = self.response()?.get("meta")?;
        meta.get("links")
            .and_then(|links| links.get("next"))
            .or_else(|| meta.get("cursor"))
            .and_then(Value::as_str)
            .filter(|cursor| !cursor.is_empty())
            .map(str::to_string)
    }

    /// Convert into a `Result`, mapping error envelopes onto [`Error`].
    ///
    /// A successful response with no body yields `Value::Null`.
    ///
    /// # Errors
    ///
    /// Returns the mapped error when the response is classified as `error`.
    pub fn into_result(self) -> Result<Value> {
        if let Some(err) = self.failure() {
            return Err(err);
        }

        match self.payload {
            Payload::Json(value) => Ok(value),
            Payload::Empty | Payload::Malformed => Ok(Value::Null),
        }
    }

    /// Deserialize the whole payload into a typed model.
    ///
    /// # Errors
    ///
    /// Returns the mapped error for error envelopes, or [`Error::ParseError`] when the
    /// payload does not match `T`.
    pub fn json<T>(&self) -> Result<T>
    where
        T: DeserializeOwned,
    {
        if let Some(err) = self.failure() {
            return Err(err);
        }

        let value = self.response().cloned().unwrap_or(Value::Null);
        serde_json::from_value(value).map_err(|err| {
            Error::ParseError(format!("Failed to parse Vultr response: {err}"))
        })
    }

    /// Deserialize one top-level field of the payload (e.g. `instance`, `plans`).
    ///
    /// # Errors
    ///
    /// Returns the mapped error for error envelopes, or [`Error::ParseError`] when the
    /// field is missing or does not match `T`.
    pub fn json_field<T>(&self, field: &str) -> Result<T>
    where
        T: DeserializeOwned,
    {
        if let Some(err) = self.failure() {
            return Err(err);
        }

        let value = self
            .response()
            .and_then(|payload| payload.get(field))
            .cloned()
            .ok_or_else(|| Error::ParseError(format!("Response has no `{field}` field")))?;

        serde_json::from_value(value).map_err(|err| {
            Error::ParseError(format!("Failed to parse `{field}` from Vultr response: {err}"))
        })
    }

    fn failure(&self) -> Option<Error> {
        if let Some(action) = &self.unsupported {
            return Some(Error::Unsupported(action.clone()));
        }
        if self.status() == ResponseStatus::Error {
            self.errors().map(Error::from)
        } else {
            None
        }
    }
}

/// Reason phrase for an HTTP error status.
///
/// Covers the standard 4xx/5xx codes plus the nonstandard ones emitted by proxies and
/// CDNs in front of the API. Used only when an error body names no message.
#[must_use]
pub const fn reason_phrase(status: u16) -> Option<&'static str> {
    let phrase = match status {
        400 => "Bad Request",
        401 => "Unauthorized",
        402 => "Payment Required",
        403 => "Forbidden",
        404 => "Not Found",
        405 => "Method Not Allowed",
        406 => "Not Acceptable",
        407 => "Proxy Authentication Required",
        408 => "Request Timeout",
        409 => "Conflict",
        410 => "Gone",
        411 => "Length Required",
        412 => "Precondition Failed",
        413 => "Payload Too Large",
        414 => "URI Too Long",
        415 => "Unsupported Media Type",
        416 => "Range Not Satisfiable",
        417 => "Expectation Failed",
        418 => "I'm a teapot",
        419 => "Authentication Timeout",
        420 => "Enhance Your Calm",
        421 => "Misdirected Request",
        422 => "Unprocessable Entity",
        423 => "Locked",
        424 => "Failed Dependency",
        425 => "Too Early",
        426 => "Upgrade Required",
        428 => "Precondition Required",
        429 => "Too Many Requests",
        431 => "Request Header Fields Too Large",
        440 => "Login Time-out",
        444 => "No Response",
        449 => "Retry With",
        450 => "Blocked by Windows Parental Controls",
        451 => "Unavailable For Legal Reasons",
        494 => "Request Header Too Large",
        495 => "SSL Certificate Error",
        496 => "SSL Certificate Required",
        497 => "HTTP Request Sent to HTTPS Port",
        498 => "Invalid Token",
        499 => "Client Closed Request",
        500 => "Internal Server Error",
        501 => "Not Implemented",
        502 => "Bad Gateway",
        503 => "Service Unavailable",
        504 => "Gateway Timeout",
        505 => "HTTP Version Not Supported",
        506 => "Variant Also Negotiates",
        507 => "Insufficient Storage",
        508 => "Loop Detected",
        509 => "Bandwidth Limit Exceeded",
        510 => "Not Extended",
        511 => "Network Authentication Required",
        520 => "Unknown Error",
        521 => "Web Server Is Down",
        522 => "Connection Timed Out",
        523 => "Origin Is Unreachable",
        524 => "A Timeout Occurred",
        525 => "SSL Handshake Failed",
        526 => "Invalid SSL Certificate",
        527 => "Railgun Error",
        598 => "Network Read Timeout Error",
        599 => "Network Connect Timeout Error",
        _ => return None,
    };
    Some(phrase)
}
