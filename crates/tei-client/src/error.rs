//! Client error taxonomy and non-200 response translation.

use reqwest::StatusCode;
use tei_types::{ErrorPayload, ValidationError};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by [`crate::Client`] and [`crate::blocking::Client`].
///
/// Every failure is terminal for the call that produced it; the client
/// never retries. Each variant carries the server-supplied message (or
/// the underlying source error) so a caller can decide on retry/backoff
/// externally — [`Error::Transport`] is the usual candidate.
#[derive(Debug, Error)]
pub enum Error {
    /// Rejected input, either locally before any request was sent or by
    /// the server's own validation (HTTP 422).
    #[error("input validation error: {0}")]
    Validation(String),
    /// HTTP 400.
    #[error("bad request: {0}")]
    BadRequest(String),
    /// HTTP 413: input exceeds the server's maximum size.
    #[error("input is too large: {0}")]
    InputTooLarge(String),
    /// HTTP 424: the compute backend failed.
    #[error("backend error: {0}")]
    Backend(String),
    /// HTTP 429: the server is shedding load.
    #[error("server is overloaded: {0}")]
    Overloaded(String),
    /// Any other non-200 status, with the raw status and message.
    #[error("unknown error ({status}): {message}")]
    Unknown { status: u16, message: String },
    /// A 200 response whose body could not be decoded.
    #[error("failed to decode response: {0}")]
    Decoding(#[from] serde_json::Error),
    /// Network-level failure: connection refused, DNS, timeout.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

impl From<ValidationError> for Error {
    fn from(err: ValidationError) -> Self {
        Error::Validation(err.to_string())
    }
}

/// Translates a non-200 response into the typed taxonomy.
///
/// The payload's `error_type` label wins over the status code; the
/// status is the fallback. A body that is not a decodable
/// [`ErrorPayload`] maps to [`Error::Unknown`] carrying the raw body.
pub(crate) fn parse_error(status: StatusCode, body: &str) -> Error {
    let payload: ErrorPayload = match serde_json::from_str(body) {
        Ok(payload) => payload,
        Err(_) => {
            return Error::Unknown {
                status: status.as_u16(),
                message: body.to_string(),
            }
        }
    };
    match payload.error_type.as_deref() {
        Some("validation") => Error::Validation(payload.error),
        Some("backend") => Error::Backend(payload.error),
        Some("overloaded") => Error::Overloaded(payload.error),
        _ => match status.as_u16() {
            400 => Error::BadRequest(payload.error),
            413 => Error::InputTooLarge(payload.error),
            422 => Error::Validation(payload.error),
            424 => Error::Backend(payload.error),
            429 => Error::Overloaded(payload.error),
            status => Error::Unknown {
                status,
                message: payload.error,
            },
        },
    }
}
