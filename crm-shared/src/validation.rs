//! Form validation shared by every screen that accepts user input.
//!
//! Each validator is a pure function so forms can check a field on blur and
//! again on submit without touching the network.

use chrono::NaiveDate;
use thiserror::Error;

/// Shortest password accepted by signup and password changes.
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Validation errors that can occur during form validation.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Error)]
pub enum ValidationError {
    /// Field is required but empty
    #[error("This field is required")]
    Required,
    /// Email address is missing a local part, an `@` or a dotted domain
    #[error("Enter a valid email address")]
    InvalidEmail,
    /// Password is shorter than [`MIN_PASSWORD_LENGTH`]
    #[error("Password must be at least 8 characters")]
    PasswordTooShort,
    /// Confirmation differs from the password
    #[error("Passwords do not match")]
    PasswordsDoNotMatch,
    /// Phone number has letters or too few digits
    #[error("Enter a valid phone number")]
    InvalidPhone,
    /// Price is not a finite, non-negative number
    #[error("Enter a valid price")]
    InvalidPrice,
    /// Quantity is not a whole, non-negative number
    #[error("Enter a whole number")]
    InvalidQuantity,
    /// Start date falls after the end date
    #[error("Start date must not be after end date")]
    InvalidDateRange,
}

impl ValidationError {
    /// Translation key for the message shown under the field.
    #[must_use]
    pub fn message_key(self) -> &'static str {
        match self {
            Self::Required => "validation.required",
            Self::InvalidEmail => "validation.invalid_email",
            Self::PasswordTooShort => "validation.password_too_short",
            Self::PasswordsDoNotMatch => "validation.passwords_do_not_match",
            Self::InvalidPhone => "validation.invalid_phone",
            Self::InvalidPrice => "validation.invalid_price",
            Self::InvalidQuantity => "validation.invalid_quantity",
            Self::InvalidDateRange => "validation.invalid_date_range",
        }
    }
}

/// # Errors
/// [`ValidationError::Required`] when blank.
pub fn validate_required(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::Required);
    }
    Ok(())
}

/// Validates an email address.
///
/// The check is structural only: one `@`, a non-empty local part and a
/// domain containing a dot that is neither leading nor trailing.
///
/// # Errors
/// [`ValidationError::Required`] or [`ValidationError::InvalidEmail`].
pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    let trimmed = email.trim();
    validate_required(trimmed)?;

    let Some((local, domain)) = trimmed.split_once('@') else {
        return Err(ValidationError::InvalidEmail);
    };
    let domain_ok = domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !domain.contains('@');
    if local.is_empty() || !domain_ok || trimmed.contains(char::is_whitespace) {
        return Err(ValidationError::InvalidEmail);
    }

    Ok(())
}

/// # Errors
/// [`ValidationError::Required`] or [`ValidationError::PasswordTooShort`].
pub fn validate_password(password: &str) -> Result<(), ValidationError> {
    if password.trim().is_empty() {
        return Err(ValidationError::Required);
    }

    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(ValidationError::PasswordTooShort);
    }

    Ok(())
}

/// # Errors
/// [`ValidationError::Required`] or [`ValidationError::PasswordsDoNotMatch`].
pub fn validate_confirm_password(
    confirm_password: &str,
    password: &str,
) -> Result<(), ValidationError> {
    if confirm_password.trim().is_empty() {
        return Err(ValidationError::Required);
    }

    if confirm_password != password {
        return Err(ValidationError::PasswordsDoNotMatch);
    }

    Ok(())
}

/// Optional phone number: digits with the usual separators and an optional
/// leading `+`, between 7 and 15 digits.
///
/// # Errors
/// [`ValidationError::InvalidPhone`].
pub fn validate_phone(phone: &str) -> Result<(), ValidationError> {
    let trimmed = phone.trim();
    if trimmed.is_empty() {
        return Ok(());
    }

    let body = trimmed.strip_prefix('+').unwrap_or(trimmed);
    let allowed = body
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, ' ' | '-' | '(' | ')' | '.'));
    let digits = body.chars().filter(char::is_ascii_digit).count();
    if !allowed || !(7..=15).contains(&digits) {
        return Err(ValidationError::InvalidPhone);
    }

    Ok(())
}

/// Parses a price field.
///
/// # Errors
/// [`ValidationError::Required`] or [`ValidationError::InvalidPrice`].
pub fn parse_price(value: &str) -> Result<f64, ValidationError> {
    let trimmed = value.trim();
    validate_required(trimmed)?;

    match trimmed.parse::<f64>() {
        Ok(price) if price.is_finite() && price >= 0.0 => Ok(price),
        _ => Err(ValidationError::InvalidPrice),
    }
}

/// Parses an optional stock count; blank means unset.
///
/// # Errors
/// [`ValidationError::InvalidQuantity`] for anything but a non-negative integer.
pub fn parse_quantity(value: &str) -> Result<Option<u32>, ValidationError> {
    match value.trim() {
        "" => Ok(None),
        trimmed => trimmed
            .parse()
            .map(Some)
            .map_err(|_| ValidationError::InvalidQuantity),
    }
}

/// # Errors
/// [`ValidationError::InvalidDateRange`] when `start` is after `end`.
pub fn validate_date_range(
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
) -> Result<(), ValidationError> {
    match (start, end) {
        (Some(start), Some(end)) if start > end => Err(ValidationError::InvalidDateRange),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_required() {
        assert_eq!(validate_required("  "), Err(ValidationError::Required));
        assert_eq!(validate_required("x"), Ok(()));
    }

    #[test]
    fn test_validate_email() {
        assert_eq!(validate_email(""), Err(ValidationError::Required));
        assert_eq!(validate_email("no-at-sign"), Err(ValidationError::InvalidEmail));
        assert_eq!(validate_email("@example.com"), Err(ValidationError::InvalidEmail));
        assert_eq!(validate_email("a@localhost"), Err(ValidationError::InvalidEmail));
        assert_eq!(validate_email("a@b@c.com"), Err(ValidationError::InvalidEmail));
        assert_eq!(validate_email("a b@c.com"), Err(ValidationError::InvalidEmail));
        assert_eq!(validate_email(" admin@example.com "), Ok(()));
    }

    #[test]
    fn test_validate_password() {
        assert_eq!(validate_password("   "), Err(ValidationError::Required));
        assert_eq!(validate_password("short"), Err(ValidationError::PasswordTooShort));
        assert_eq!(validate_password("longenough"), Ok(()));
    }

    #[test]
    fn test_validate_confirm_password() {
        assert_eq!(
            validate_confirm_password("", "secret123"),
            Err(ValidationError::Required)
        );
        assert_eq!(
            validate_confirm_password("secret124", "secret123"),
            Err(ValidationError::PasswordsDoNotMatch)
        );
        assert_eq!(validate_confirm_password("secret123", "secret123"), Ok(()));
    }

    #[test]
    fn test_validate_phone() {
        assert_eq!(validate_phone(""), Ok(()));
        assert_eq!(validate_phone("+1 (555) 123-4567"), Ok(()));
        assert_eq!(validate_phone("12345"), Err(ValidationError::InvalidPhone));
        assert_eq!(validate_phone("555-CALL-NOW"), Err(ValidationError::InvalidPhone));
    }

    #[test]
    fn test_parse_price() {
        assert_eq!(parse_price("19.99"), Ok(19.99));
        assert_eq!(parse_price("0"), Ok(0.0));
        assert_eq!(parse_price(""), Err(ValidationError::Required));
        assert_eq!(parse_price("-1"), Err(ValidationError::InvalidPrice));
        assert_eq!(parse_price("NaN"), Err(ValidationError::InvalidPrice));
        assert_eq!(parse_price("abc"), Err(ValidationError::InvalidPrice));
    }

    #[test]
    fn test_parse_quantity() {
        assert_eq!(parse_quantity(" 12 "), Ok(Some(12)));
        assert_eq!(parse_quantity(""), Ok(None));
        assert_eq!(parse_quantity("-1"), Err(ValidationError::InvalidQuantity));
        assert_eq!(parse_quantity("1.5"), Err(ValidationError::InvalidQuantity));
    }

    #[test]
    fn test_validate_date_range() {
        let early = NaiveDate::from_ymd_opt(2024, 1, 1);
        let late = NaiveDate::from_ymd_opt(2024, 2, 1);

        assert_eq!(validate_date_range(early, late), Ok(()));
        assert_eq!(validate_date_range(early, None), Ok(()));
        assert_eq!(
            validate_date_range(late, early),
            Err(ValidationError::InvalidDateRange)
        );
    }

    #[test]
    fn test_every_error_has_a_message_key() {
        let all = [
            ValidationError::Required,
            ValidationError::InvalidEmail,
            ValidationError::PasswordTooShort,
            ValidationError::PasswordsDoNotMatch,
            ValidationError::InvalidPhone,
            ValidationError::InvalidPrice,
            ValidationError::InvalidQuantity,
            ValidationError::InvalidDateRange,
        ];
        for error in all {
            assert!(error.message_key().starts_with("validation."));
            assert!(!error.to_string().is_empty());
        }
    }
}
