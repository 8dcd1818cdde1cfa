//! Accounts and roles.

use serde::{Deserialize, Deserializer, Serialize};
use std::{fmt, str::FromStr};
use strum_macros::EnumIter;

use super::Timestamp;

/// Role assigned to an account. Fixed for the lifetime of a session.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, EnumIter)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    /// Full access, including admin management.
    SuperAdmin,
    /// Staff access to customers, catalogue and documents.
    Admin,
    /// Self-service access to their own products and documents.
    Customer,
}

impl UserRole {
    /// Return the wire representation used by the backend.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::SuperAdmin => "SUPER_ADMIN",
            Self::Admin => "ADMIN",
            Self::Customer => "CUSTOMER",
        }
    }

    /// Staff roles manage customers, products and documents.
    #[must_use]
    pub fn is_staff(self) -> bool {
        matches!(self, Self::SuperAdmin | Self::Admin)
    }

    /// Human readable label for badges.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::SuperAdmin => "Super admin",
            Self::Admin => "Admin",
            Self::Customer => "Customer",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = &'static str;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "SUPER_ADMIN" => Ok(Self::SuperAdmin),
            "ADMIN" => Ok(Self::Admin),
            "CUSTOMER" => Ok(Self::Customer),
            _ => Err("unknown user role"),
        }
    }
}

/// Unknown role strings decode to `None` instead of failing the whole profile.
fn lenient_role<'de, D>(deserializer: D) -> Result<Option<UserRole>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.and_then(|value| value.parse().ok()))
}

/// Profile of the signed-in account as returned by `/auth/*`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    /// Backend identifier.
    pub id: String,
    /// Login email.
    pub email: String,
    /// Display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Avatar URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_picture: Option<String>,
    /// Contact number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    /// Country of residence.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    /// City of residence.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    /// False until onboarding has been finished.
    #[serde(default)]
    pub is_profile_complete: bool,
    /// `None` when the backend sent a role this client does not know.
    #[serde(default, deserialize_with = "lenient_role")]
    pub role: Option<UserRole>,
    /// Account creation time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Timestamp>,
}

impl UserProfile {
    /// Name to show in headers, falling back to the email address.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or(&self.email)
    }

    /// Up to two uppercase initials for avatar placeholders.
    #[must_use]
    pub fn initials(&self) -> String {
        self.display_name()
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .take(2)
            .flat_map(char::to_uppercase)
            .collect()
    }
}

/// Partial profile update for `PUT /auth/profile`. Absent fields are left untouched server-side.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    /// New display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New avatar URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_picture: Option<String>,
    /// New contact number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    /// New country.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    /// New city.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    fn sample_json(role: &str) -> String {
        format!(
            r#"{{"id":"u-1","email":"ada@example.com","name":"Ada Lovelace","isProfileComplete":true,"role":"{role}","createdAt":"2025-01-02T03:04:05Z"}}"#
        )
    }

    #[test]
    fn user_role_roundtrip() {
        for role in UserRole::iter() {
            assert_eq!(role.to_string(), role.as_str());
            assert_eq!(UserRole::from_str(role.as_str()).unwrap(), role);
            let json = serde_json::to_string(&role).unwrap();
            assert_eq!(json, format!("\"{}\"", role.as_str()));
        }
    }

    #[test]
    fn user_role_invalid() {
        assert!(UserRole::from_str("guest").is_err());
        assert!(UserRole::from_str("admin").is_err());
    }

    #[test]
    fn staff_roles() {
        assert!(UserRole::SuperAdmin.is_staff());
        assert!(UserRole::Admin.is_staff());
        assert!(!UserRole::Customer.is_staff());
    }

    #[test]
    fn profile_decodes_backend_shape() {
        let profile: UserProfile = serde_json::from_str(&sample_json("ADMIN")).unwrap();

        assert_eq!(profile.id, "u-1");
        assert_eq!(profile.role, Some(UserRole::Admin));
        assert!(profile.is_profile_complete);
        assert!(profile.created_at.is_some());
        assert_eq!(profile.phone_number, None);
    }

    #[test]
    fn unknown_role_decodes_to_none() {
        let profile: UserProfile = serde_json::from_str(&sample_json("AUDITOR")).unwrap();
        assert_eq!(profile.role, None);

        let missing: UserProfile =
            serde_json::from_str(r#"{"id":"u-2","email":"x@example.com"}"#).unwrap();
        assert_eq!(missing.role, None);
        assert!(!missing.is_profile_complete);
    }

    #[test]
    fn display_name_falls_back_to_email() {
        let mut profile: UserProfile = serde_json::from_str(&sample_json("CUSTOMER")).unwrap();
        assert_eq!(profile.display_name(), "Ada Lovelace");
        assert_eq!(profile.initials(), "AL");

        profile.name = Some("  ".to_string());
        assert_eq!(profile.display_name(), "ada@example.com");
    }

    #[test]
    fn profile_update_skips_absent_fields() {
        let update = ProfileUpdate {
            city: Some("Lagos".to_string()),
            ..ProfileUpdate::default()
        };

        assert_eq!(serde_json::to_string(&update).unwrap(), r#"{"city":"Lagos"}"#);
    }
}
