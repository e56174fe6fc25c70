//! Repeat rule - rejects runs of identical consecutive characters.

use secrecy::{ExposeSecret, SecretString};

// A run of 4 identical characters fails the rule.
const MAX_RUN: usize = 3;

/// Checks that no character repeats 4 or more times consecutively.
///
/// Scans codepoint by codepoint, the same unit the length rule counts.
///
/// # Returns
/// - `true` if every run of identical characters is 3 long or shorter
/// - `false` if any run reaches 4, or the password is empty
pub fn no_repeat_rule(password: &SecretString) -> bool {
    let pwd = password.expose_secret();
    if pwd.is_empty() {
        return false;
    }

    let mut run = 0;
    let mut prev: Option<char> = None;
    for c in pwd.chars() {
        if prev == Some(c) {
            run += 1;
            if run > MAX_RUN {
                return false;
            }
        } else {
            run = 1;
        }
        prev = Some(c);
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repeat_rule_run_of_four() {
        let pwd = SecretString::new("aaaa1234".to_string().into());
        assert!(!no_repeat_rule(&pwd));
    }

    #[test]
    fn test_repeat_rule_run_of_three() {
        let pwd = SecretString::new("aaa1234".to_string().into());
        assert!(no_repeat_rule(&pwd));
    }

    #[test]
    fn test_repeat_rule_run_in_the_middle() {
        let pwd = SecretString::new("ab1111cd".to_string().into());
        assert!(!no_repeat_rule(&pwd));
    }

    #[test]
    fn test_repeat_rule_run_at_the_end() {
        let pwd = SecretString::new("abcd!!!!".to_string().into());
        assert!(!no_repeat_rule(&pwd));
    }

    #[test]
    fn test_repeat_rule_interrupted_runs() {
        // Three a's, a break, then three more - never four in a row
        let pwd = SecretString::new("aaabaaa".to_string().into());
        assert!(no_repeat_rule(&pwd));
    }

    #[test]
    fn test_repeat_rule_empty() {
        let pwd = SecretString::new("".to_string().into());
        assert!(!no_repeat_rule(&pwd));
    }
}
