//! Special character rule - requires at least one non-alphanumeric character.

use secrecy::{ExposeSecret, SecretString};

/// Checks that the password contains at least one special character.
///
/// A special character is anything outside the alphanumeric ranges,
/// which matches how the checklist describes the rule to the user.
///
/// # Returns
/// - `true` if at least one non-alphanumeric character is present
/// - `false` otherwise (the empty password included)
pub fn special_char_rule(password: &SecretString) -> bool {
    password
        .expose_secret()
        .chars()
        .any(|c| !c.is_alphanumeric())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_special_rule_letters_and_digits_only() {
        let pwd = SecretString::new("OnlyLetters123".to_string().into());
        assert!(!special_char_rule(&pwd));
    }

    #[test]
    fn test_special_rule_single_special() {
        let pwd = SecretString::new("OnlyLetters123!".to_string().into());
        assert!(special_char_rule(&pwd));
    }

    #[test]
    fn test_special_rule_whitespace_counts() {
        let pwd = SecretString::new("pass word".to_string().into());
        assert!(special_char_rule(&pwd));
    }

    #[test]
    fn test_special_rule_empty() {
        let pwd = SecretString::new("".to_string().into());
        assert!(!special_char_rule(&pwd));
    }
}
