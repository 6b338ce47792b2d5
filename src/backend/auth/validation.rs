/**
 * Credential Validation Rules
 *
 * Username and password constraints checked before any database access.
 * Failures surface as `SharedError::ValidationError` (400) with the
 * offending field name.
 */

use crate::shared::SharedError;

/// Minimum password length
pub const MIN_PASSWORD_LEN: usize = 8;

/// Validate username format
///
/// Usernames must be:
/// - 3-30 characters long
/// - Contain only alphanumeric characters and underscores
/// - Start with a letter
pub fn validate_username(username: &str) -> Result<(), SharedError> {
    let valid = username.len() >= 3
        && username.len() <= 30
        && username
            .chars()
            .next()
            .is_some_and(|c| c.is_ascii_alphabetic())
        && username
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_');

    if valid {
        Ok(())
    } else {
        Err(SharedError::validation(
            "username",
            "Username must be 3-30 chars, start with a letter, and contain only letters, numbers, and underscores",
        ))
    }
}

/// Validate password length
///
/// Counts characters, not bytes, so multibyte passwords are measured the
/// way users perceive them.
pub fn validate_password(password: &str) -> Result<(), SharedError> {
    if password.chars().count() >= MIN_PASSWORD_LEN {
        Ok(())
    } else {
        Err(SharedError::validation(
            "password",
            "Password must be at least 8 characters",
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_usernames() {
        for name in ["abc", "user_1", "Alice", "a23456789012345678901234567890"] {
            assert!(validate_username(name).is_ok(), "{name} should be valid");
        }
    }

    #[test]
    fn test_invalid_usernames() {
        for name in [
            "",
            "ab",                              // too short
            "1user",                           // starts with a digit
            "_user",                           // starts with underscore
            "user name",                       // whitespace
            "user@mail",                       // symbol
            "a234567890123456789012345678901", // 31 chars
        ] {
            assert!(validate_username(name).is_err(), "{name:?} should fail");
        }
    }

    #[test]
    fn test_password_length() {
        assert!(validate_password("12345678").is_ok());
        assert!(validate_password("1234567").is_err());
        assert!(validate_password("").is_err());
    }

    #[test]
    fn test_password_length_counts_chars_not_bytes() {
        // Four 2-byte characters: 8 bytes but only 4 characters.
        assert!(validate_password("αβγδ").is_err());
        // Eight 2-byte characters pass.
        assert!(validate_password("αβγδεζηθ").is_ok());
    }

    #[test]
    fn test_validation_error_names_field() {
        match validate_password("short") {
            Err(SharedError::ValidationError { field, .. }) => assert_eq!(field, "password"),
            other => panic!("Expected ValidationError, got {other:?}"),
        }
    }
}
