use reqwest::StatusCode;
use thiserror::Error;

use crate::models::{ErrorResponse, GENERIC_ERROR_MESSAGE};

/// The single failure kind surfaced by the API client.
///
/// Transport failures, undecodable bodies and backend-reported errors all end
/// up here with a message fit for display. The status is kept when a response
/// was actually received.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ApiError {
    message: String,
    status: Option<u16>,
}

impl ApiError {
    /// Error with a caller-supplied message and no status.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status: None,
        }
    }

    /// Translates a non-2xx response, preferring the body's `error` field.
    #[must_use]
    pub fn from_response(status: StatusCode, body: &str) -> Self {
        Self {
            message: ErrorResponse::message_from_body(body)
                .unwrap_or_else(|| GENERIC_ERROR_MESSAGE.to_string()),
            status: Some(status.as_u16()),
        }
    }

    /// The request never produced a usable response.
    #[must_use]
    pub fn transport() -> Self {
        Self::new(GENERIC_ERROR_MESSAGE)
    }

    /// A 2xx response whose body did not match the expected shape.
    #[must_use]
    pub fn undecodable(status: StatusCode) -> Self {
        Self {
            message: GENERIC_ERROR_MESSAGE.to_string(),
            status: Some(status.as_u16()),
        }
    }

    /// Message fit for display.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// HTTP status, when a response was received.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        self.status
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) => Self::from_response(status, ""),
            None => Self::transport(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backend_message_wins() {
        let error = ApiError::from_response(StatusCode::UNAUTHORIZED, r#"{"error":"Invalid token"}"#);

        assert_eq!(error.message(), "Invalid token");
        assert_eq!(error.to_string(), "Invalid token");
        assert_eq!(error.status(), Some(401));
    }

    #[test]
    fn unparsable_body_falls_back() {
        let error = ApiError::from_response(StatusCode::INTERNAL_SERVER_ERROR, "<h1>Bad gateway</h1>");

        assert_eq!(error.message(), "Something went wrong");
        assert_eq!(error.status(), Some(500));
    }

    #[test]
    fn transport_and_decode_share_the_fallback() {
        assert_eq!(ApiError::transport().message(), GENERIC_ERROR_MESSAGE);
        assert_eq!(ApiError::transport().status(), None);
        assert_eq!(ApiError::undecodable(StatusCode::OK).message(), GENERIC_ERROR_MESSAGE);
    }
}
