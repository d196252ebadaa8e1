//! Sign-up validation rules, applied in a fixed order. The first rule that
//! fails wins.

use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;

pub const PASSWORD_MIN_LEN: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Name is required")]
    NameRequired,
    #[error("Email is required")]
    EmailRequired,
    #[error("Please enter a valid email address")]
    EmailInvalid,
    #[error("Password must be at least 8 characters long")]
    PasswordTooShort,
    #[error("Passwords do not match")]
    PasswordMismatch,
}

/// Loose shape check: something, `@`, something, `.`, something. Not anchored.
pub fn is_valid_email(email: &str) -> bool {
    lazy_static! {
        static ref EMAIL_RE: Regex = Regex::new(r"\S+@\S+\.\S+").expect("email regex compiles");
    }
    EMAIL_RE.is_match(email)
}

/// Rules shared by the form and the sign-up endpoint.
pub fn validate_registration(name: &str, email: &str, password: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::NameRequired);
    }
    if email.trim().is_empty() {
        return Err(ValidationError::EmailRequired);
    }
    if !is_valid_email(email) {
        return Err(ValidationError::EmailInvalid);
    }
    // length as a browser reports it: UTF-16 code units
    if password.encode_utf16().count() < PASSWORD_MIN_LEN {
        return Err(ValidationError::PasswordTooShort);
    }
    Ok(())
}

/// Full form check: the registration rules, then the confirmation.
pub fn validate_sign_up(
    name: &str,
    email: &str,
    password: &str,
    confirm_password: &str,
) -> Result<(), ValidationError> {
    validate_registration(name, email, password)?;
    if password != confirm_password {
        return Err(ValidationError::PasswordMismatch);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_well_formed_input() {
        assert_eq!(validate_sign_up("Ada", "ada@example.com", "password1", "password1"), Ok(()));
    }

    #[test]
    fn blank_name_is_rejected_first() {
        for name in ["", "   ", "\t\n"] {
            assert_eq!(
                validate_sign_up(name, "", "x", "y"),
                Err(ValidationError::NameRequired)
            );
        }
    }

    #[test]
    fn blank_email_is_required_before_format() {
        assert_eq!(
            validate_sign_up("Ada", "  ", "password1", "password1"),
            Err(ValidationError::EmailRequired)
        );
    }

    #[test]
    fn malformed_emails() {
        for email in ["ada", "ada@example", "ada.example.com", "@example.com", "ada@.com", "ada@ example.com"] {
            assert_eq!(
                validate_registration("Ada", email, "password1"),
                Err(ValidationError::EmailInvalid),
                "{email}"
            );
        }
    }

    #[test]
    fn email_pattern_is_a_search_not_a_full_match() {
        assert!(is_valid_email("Ada <ada@example.com>"));
        assert!(is_valid_email("a@b.c"));
    }

    #[test]
    fn short_passwords_are_rejected() {
        assert_eq!(
            validate_registration("Ada", "ada@example.com", "1234567"),
            Err(ValidationError::PasswordTooShort)
        );
        assert_eq!(validate_registration("Ada", "ada@example.com", "12345678"), Ok(()));
        // counted in UTF-16 units, not bytes
        assert_eq!(
            validate_registration("Ada", "ada@example.com", "ééééééé"),
            Err(ValidationError::PasswordTooShort)
        );
    }

    #[test]
    fn astral_characters_count_twice() {
        // four emoji are eight UTF-16 units
        assert_eq!(
            validate_sign_up("Ada", "ada@example.com", "😀😀😀😀", "😀😀😀😀"),
            Ok(())
        );
        assert_eq!(
            validate_registration("Ada", "ada@example.com", "😀😀😀"),
            Err(ValidationError::PasswordTooShort)
        );
    }

    #[test]
    fn mismatch_is_checked_last() {
        assert_eq!(
            validate_sign_up("Ada", "ada@example.com", "password1", "password2"),
            Err(ValidationError::PasswordMismatch)
        );
        assert_eq!(
            validate_sign_up("Ada", "ada@example.com", "short", "other"),
            Err(ValidationError::PasswordTooShort)
        );
    }
}
