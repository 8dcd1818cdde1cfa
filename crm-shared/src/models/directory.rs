//! Account management payloads for the `/users` family of endpoints.

use serde::{Deserialize, Serialize};

use super::UserProfile;

/// New admin or customer account created by staff.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AccountInput {
    /// Login email.
    pub email: String,
    /// Initial password.
    pub password: String,
    /// Display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Contact number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    /// Country of residence.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    /// City of residence.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
}

/// Partial edit of an existing account.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AccountUpdate {
    /// New login email.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// New display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
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

impl From<&UserProfile> for AccountUpdate {
    fn from(user: &UserProfile) -> Self {
        Self {
            email: Some(user.email.clone()),
            name: user.name.clone(),
            phone_number: user.phone_number.clone(),
            country: user.country.clone(),
            city: user.city.clone(),
        }
    }
}

/// Body of the account listing endpoints.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct UserListResponse {
    /// Accounts in server order.
    #[serde(default)]
    pub users: Vec<UserProfile>,
}

impl UserListResponse {
    /// Case-insensitive filter over name, email, country and city.
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<UserProfile> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return self.users.clone();
        }
        self.users
            .iter()
            .filter(|user| {
                [
                    Some(user.email.as_str()),
                    user.name.as_deref(),
                    user.country.as_deref(),
                    user.city.as_deref(),
                ]
                .into_iter()
                .flatten()
                .any(|field| field.to_lowercase().contains(&needle))
            })
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing() -> UserListResponse {
        serde_json::from_str(
            r#"{"users":[
                {"id":"1","email":"ada@example.com","name":"Ada","city":"London","role":"CUSTOMER"},
                {"id":"2","email":"grace@example.com","name":"Grace","country":"USA","role":"CUSTOMER"}
            ]}"#,
        )
        .unwrap()
    }

    #[test]
    fn search_matches_any_field() {
        let users = listing();

        assert_eq!(users.search("london").len(), 1);
        assert_eq!(users.search("GRACE").len(), 1);
        assert_eq!(users.search("example.com").len(), 2);
        assert!(users.search("paris").is_empty());
    }

    #[test]
    fn blank_search_returns_everything() {
        assert_eq!(listing().search("  ").len(), 2);
    }

    #[test]
    fn missing_users_key_is_empty() {
        let empty: UserListResponse = serde_json::from_str("{}").unwrap();
        assert!(empty.users.is_empty());
    }

    #[test]
    fn account_update_from_profile() {
        let users = listing();
        let update = AccountUpdate::from(&users.users[0]);

        assert_eq!(update.email.as_deref(), Some("ada@example.com"));
        assert_eq!(update.city.as_deref(), Some("London"));
        assert_eq!(update.country, None);
    }
}
