//! Error types for the mini-app API client.

use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

/// Substituted when an error body carries no usable `message` field.
const NO_MESSAGE_FALLBACK: &str = "No error message provided by server.";

/// Errors that can occur when talking to the mini-app backend.
///
/// Every failed call produces exactly one of these two variants: `Net` when
/// connectivity could not be established before any HTTP response was
/// obtained, `Sdk` for everything else.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The host was unreachable or the connection timed out. Wraps the
    /// transport cause; callers own any retry policy.
    #[error("Network request failed")]
    Net(#[source] reqwest::Error),
    /// An HTTP-level error, a malformed or missing body, or an
    /// application-level error such as an unknown mini-app id.
    #[error("{message}")]
    Sdk {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl Error {
    pub(crate) fn sdk(message: impl Into<String>) -> Self {
        Error::Sdk {
            message: message.into(),
            source: None,
        }
    }

    pub(crate) fn sdk_with_source(
        message: impl Into<String>,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Error::Sdk {
            message: message.into(),
            source: Some(source.into()),
        }
    }

    /// A mandated body was absent, whatever the status code said.
    pub(crate) fn internal_server_error() -> Self {
        Error::sdk("Internal server error.")
    }
}

/// Error body returned on authorization failures (401, 403).
#[derive(Serialize, Deserialize)]
struct AuthErrorResponse {
    code: Option<String>,
    message: Option<String>,
}

/// Error body returned on every other failing status.
#[derive(Serialize, Deserialize)]
struct HttpErrorResponse {
    code: Option<i64>,
    message: Option<String>,
}

/// The two error-body shapes the backend produces, selected solely by
/// status code, never by inspecting the payload.
enum ErrorPayload {
    Auth(AuthErrorResponse),
    Http(HttpErrorResponse),
}

impl ErrorPayload {
    fn decode(status: StatusCode, body: &[u8]) -> Result<Self, serde_json::Error> {
        match status.as_u16() {
            401 | 403 => serde_json::from_slice(body).map(ErrorPayload::Auth),
            _ => serde_json::from_slice(body).map(ErrorPayload::Http),
        }
    }

    fn message(&self) -> Option<&str> {
        match self {
            ErrorPayload::Auth(payload) => payload.message.as_deref(),
            ErrorPayload::Http(payload) => payload.message.as_deref(),
        }
    }
}

/// Renders a failing response body as `"HTTP {code} {status text}: {message}"`.
///
/// A body that is not valid JSON for the shape selected by `status` is
/// returned as the decoding error itself, for the executor's generic catch.
pub(crate) fn decode_error_message(
    status: StatusCode,
    body: &[u8],
) -> Result<String, serde_json::Error> {
    let payload = ErrorPayload::decode(status, body)?;
    let message = match payload.message() {
        Some(message) if !message.trim().is_empty() => message,
        _ => NO_MESSAGE_FALLBACK,
    };
    Ok(format!(
        "HTTP {} {}: {}",
        status.as_u16(),
        status.canonical_reason().unwrap_or("Unknown Status"),
        message
    ))
}
