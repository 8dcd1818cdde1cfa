//! Credential exchange and profile payloads for `/auth`.

use serde::{Deserialize, Serialize};

use super::UserProfile;

/// Credentials for `POST /auth/login`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginRequest {
    /// Account email.
    pub email: String,
    /// Plain-text password, sent over TLS only.
    pub password: String,
}

/// Payload for `POST /auth/signup`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SignupRequest {
    /// Account email.
    pub email: String,
    /// Chosen password.
    pub password: String,
    /// Optional display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Third-party identity token exchanged at `POST /auth/google`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GoogleLoginRequest {
    /// ID token issued by Google Sign-In.
    pub id_token: String,
}

/// Token and profile issued by every credential exchange.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AuthResponse {
    /// Profile of the signed-in account.
    pub user: UserProfile,
    /// Bearer token for later requests.
    pub token: String,
}

/// Body of `GET /auth/me` and `PUT /auth/profile`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MeResponse {
    /// Current profile.
    pub user: UserProfile,
}

/// Payload for `PUT /auth/change-password`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordRequest {
    /// Password being replaced.
    pub current_password: String,
    /// Replacement password.
    pub new_password: String,
}

/// Acknowledgement returned by mutations without a richer body.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct MessageResponse {
    /// Human readable confirmation, if any.
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::UserRole;

    #[test]
    fn test_auth_response_decodes() {
        let json = r#"{
            "token": "jwt-abc",
            "user": {"id": "42", "email": "c@example.com", "role": "CUSTOMER", "isProfileComplete": false}
        }"#;
        let response: AuthResponse = serde_json::from_str(json).unwrap();

        assert_eq!(response.token, "jwt-abc");
        assert_eq!(response.user.role, Some(UserRole::Customer));
        assert!(!response.user.is_profile_complete);
    }

    #[test]
    fn test_wire_field_names() {
        let google = GoogleLoginRequest {
            id_token: "g-token".to_string(),
        };
        assert_eq!(serde_json::to_string(&google).unwrap(), r#"{"idToken":"g-token"}"#);

        let change = ChangePasswordRequest {
            current_password: "old-pass".to_string(),
            new_password: "new-pass".to_string(),
        };
        let json = serde_json::to_string(&change).unwrap();
        assert!(json.contains("\"currentPassword\":\"old-pass\""));
        assert!(json.contains("\"newPassword\":\"new-pass\""));
    }

    #[test]
    fn test_signup_omits_missing_name() {
        let request = SignupRequest {
            email: "a@example.com".to_string(),
            password: "secret123".to_string(),
            name: None,
        };
        assert!(!serde_json::to_string(&request).unwrap().contains("name"));
    }

    #[test]
    fn test_message_response_tolerates_empty_object() {
        let response: MessageResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(response.message, None);
    }
}
