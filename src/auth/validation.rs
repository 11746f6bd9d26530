//! Input validation helpers for registration and password changes.

use crate::constants::PASSWORD_MIN_LENGTH;

/// Basic but solid email format check: one `@` with a non-empty local part,
/// a `.` inside the domain with characters on both sides, and no whitespace
/// anywhere. No domain restriction.
pub fn is_valid_email(email: &str) -> bool {
    let email = email.trim();
    if email.is_empty() || email.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }

    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i < domain.len() - 1)
}

/// Password strength policy: at least 6 characters with at least one
/// uppercase letter, one lowercase letter, one digit, and one
/// non-alphanumeric character.
pub fn is_strong_password(password: &str) -> bool {
    if password.trim().is_empty() || password.chars().count() < PASSWORD_MIN_LENGTH {
        return false;
    }

    let has_upper = password.chars().any(char::is_uppercase);
    let has_lower = password.chars().any(char::is_lowercase);
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    let has_special = password.chars().any(|c| !c.is_alphanumeric());

    has_upper && has_lower && has_digit && has_special
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_emails() {
        assert!(is_valid_email("name@example.com"));
        assert!(is_valid_email("  name@example.com  "));
        assert!(is_valid_email("a.b@sub.example.co"));
    }

    #[test]
    fn test_invalid_emails() {
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("plainaddress"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("name@example"));
        assert!(!is_valid_email("name@.com"));
        assert!(!is_valid_email("name@com."));
        assert!(!is_valid_email("na me@example.com"));
        assert!(!is_valid_email("name@@example.com"));
    }

    #[test]
    fn test_strong_passwords() {
        assert!(is_strong_password("Abc12!"));
        assert!(is_strong_password("Sup3r-Secret"));
    }

    #[test]
    fn test_weak_passwords() {
        assert!(!is_strong_password(""));
        assert!(!is_strong_password("A1!b"));          // too short
        assert!(!is_strong_password("abc12!"));        // no uppercase
        assert!(!is_strong_password("ABC12!"));        // no lowercase
        assert!(!is_strong_password("Abcdef!"));       // no digit
        assert!(!is_strong_password("Abc123"));        // no special
    }
}
