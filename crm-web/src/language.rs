use std::collections::HashMap;

pub const DEFAULT_LANGUAGE: &str = "en";

/// Information about a supported language
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct LanguageInfo {
    pub code: &'static str,
    pub translation: &'static str,
    pub native_name: &'static str,
}

/// Get a map of supported languages
pub fn supported_languages() -> HashMap<&'static str, LanguageInfo> {
    HashMap::from([(
        DEFAULT_LANGUAGE,
        LanguageInfo {
            code: DEFAULT_LANGUAGE,
            translation: include_str!("../translations/en.json"),
            native_name: "English",
        },
    )])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_language_is_bundled() {
        let languages = supported_languages();
        let english = &languages[DEFAULT_LANGUAGE];

        assert_eq!(english.code, "en");
        assert_eq!(english.native_name, "English");
    }

    #[test]
    fn test_translations_are_valid_json() {
        for info in supported_languages().values() {
            let parsed: serde_json::Value = serde_json::from_str(info.translation).unwrap();
            assert!(parsed.is_object(), "{} must be a JSON object", info.code);
        }
    }

    fn lookup<'a>(root: &'a serde_json::Value, key: &str) -> Option<&'a serde_json::Value> {
        key.split('.').try_fold(root, |node, part| node.get(part))
    }

    #[test]
    fn test_generated_keys_are_translated() {
        use shared::access::Page;
        use shared::models::RangeType;
        use shared::validation::ValidationError;
        use strum::IntoEnumIterator;

        let english: serde_json::Value =
            serde_json::from_str(supported_languages()[DEFAULT_LANGUAGE].translation).unwrap();
        let validation = [
            ValidationError::Required,
            ValidationError::InvalidEmail,
            ValidationError::PasswordTooShort,
            ValidationError::PasswordsDoNotMatch,
            ValidationError::InvalidPhone,
            ValidationError::InvalidPrice,
            ValidationError::InvalidQuantity,
            ValidationError::InvalidDateRange,
        ];

        let keys = Page::iter()
            .map(|page| page.title_key().to_string())
            .chain(validation.iter().map(|error| error.message_key().to_string()))
            .chain(RangeType::iter().map(|range| format!("analytics.ranges.{}", range.as_str())));
        for key in keys {
            assert!(
                lookup(&english, &key).is_some_and(serde_json::Value::is_string),
                "missing translation for {key}"
            );
        }
    }
}
