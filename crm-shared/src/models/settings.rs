//! Organisation-wide settings.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Organisation settings behind `GET/PUT /settings`.
///
/// Fields the console does not edit are kept in `extra` and sent back
/// untouched on update.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    /// Organisation name shown in the header.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    /// Where customers send questions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub support_email: Option<String>,
    /// ISO currency code for prices.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    /// IANA time zone name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
    /// Whether activity is also emailed.
    #[serde(default)]
    pub email_notifications: bool,
    /// Fields this client does not know about.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_fields_survive_roundtrip() {
        let json = r#"{"companyName":"Acme","emailNotifications":true,"theme":"dark","maxSeats":5}"#;
        let mut settings: Settings = serde_json::from_str(json).unwrap();
        settings.company_name = Some("Acme Ltd".to_string());

        let value = serde_json::to_value(&settings).unwrap();
        assert_eq!(value["companyName"], "Acme Ltd");
        assert_eq!(value["theme"], "dark");
        assert_eq!(value["maxSeats"], 5);
        assert_eq!(value["emailNotifications"], true);
    }
}
