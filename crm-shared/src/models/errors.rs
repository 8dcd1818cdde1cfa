//! Backend error bodies.

use serde::{Deserialize, Serialize};

/// Message shown when the backend gives no usable explanation.
pub const GENERIC_ERROR_MESSAGE: &str = "Something went wrong";

/// Error body returned by the backend on non-2xx responses.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct ErrorResponse {
    /// Human readable failure description.
    #[serde(default)]
    pub error: Option<String>,
}

impl ErrorResponse {
    /// Extracts the displayable message from a raw response body.
    ///
    /// Bodies that are not JSON, lack an `error` field, or carry a blank one
    /// yield `None` so callers can fall back to [`GENERIC_ERROR_MESSAGE`].
    #[must_use]
    pub fn message_from_body(body: &str) -> Option<String> {
        serde_json::from_str::<Self>(body)
            .ok()
            .and_then(|response| response.error)
            .filter(|message| !message.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_from_error_field() {
        assert_eq!(
            ErrorResponse::message_from_body(r#"{"error":"Invalid token"}"#),
            Some("Invalid token".to_string())
        );
    }

    #[test]
    fn test_message_ignores_other_shapes() {
        assert_eq!(ErrorResponse::message_from_body("<html>502</html>"), None);
        assert_eq!(ErrorResponse::message_from_body(""), None);
        assert_eq!(ErrorResponse::message_from_body(r#"{"message":"nope"}"#), None);
        assert_eq!(ErrorResponse::message_from_body(r#"{"error":"   "}"#), None);
        assert_eq!(ErrorResponse::message_from_body(r#"{"error":42}"#), None);
    }
}
