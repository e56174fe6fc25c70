//! Password policy evaluator - derives the checklist flags from a password.

use secrecy::SecretString;

use crate::rules::{length_rule, no_repeat_rule, special_char_rule};

/// Which password policy rules the current password satisfies.
///
/// Purely derived from the password content; the checklist UI renders
/// these and must never toggle them independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PolicyFlags {
    /// Length is between 8 and 15 characters inclusive.
    pub length_ok: bool,
    /// At least one non-alphanumeric character is present.
    pub special_char_ok: bool,
    /// No character repeats 4 or more times consecutively.
    pub no_repeat_ok: bool,
}

impl PolicyFlags {
    /// True when every rule is satisfied.
    pub fn all_satisfied(self) -> bool {
        self.length_ok && self.special_char_ok && self.no_repeat_ok
    }
}

/// Evaluates the sign-up password policy and returns the checklist flags.
///
/// Pure and synchronous; meant to run on every password keystroke.
/// The empty password satisfies no rule.
///
/// # Arguments
/// * `password` - The candidate password
///
/// # Returns
/// A `PolicyFlags` with one entry per rule.
pub fn evaluate_password_policy(password: &SecretString) -> PolicyFlags {
    PolicyFlags {
        length_ok: length_rule(password),
        special_char_ok: special_char_rule(password),
        no_repeat_ok: no_repeat_rule(password),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eval(pwd: &str) -> PolicyFlags {
        evaluate_password_policy(&SecretString::new(pwd.to_string().into()))
    }

    #[test]
    fn test_evaluate_empty_password_fails_every_rule() {
        assert_eq!(eval(""), PolicyFlags::default());
    }

    #[test]
    fn test_evaluate_length_boundaries() {
        assert!(!eval("abcde1!").length_ok); // 7
        assert!(eval("abcdef1!").length_ok); // 8
        assert!(eval("abcdefghijkl12!").length_ok); // 15
        assert!(!eval("abcdefghijklm12!").length_ok); // 16
    }

    #[test]
    fn test_evaluate_special_char_flips_on_one_character() {
        assert!(!eval("Alphanum123").special_char_ok);
        assert!(eval("Alphanum123#").special_char_ok);
    }

    #[test]
    fn test_evaluate_repeat_boundary() {
        assert!(!eval("aaaa1234").no_repeat_ok);
        assert!(eval("aaa1234").no_repeat_ok);
    }

    #[test]
    fn test_evaluate_all_rules_satisfied() {
        let flags = eval("Conc3rt!Go");
        assert!(flags.length_ok);
        assert!(flags.special_char_ok);
        assert!(flags.no_repeat_ok);
        assert!(flags.all_satisfied());
    }

    #[test]
    fn test_evaluate_rules_are_independent() {
        // Long enough and varied, but carries a run of four
        let flags = eval("good!!!!pass");
        assert!(flags.length_ok);
        assert!(flags.special_char_ok);
        assert!(!flags.no_repeat_ok);
        assert!(!flags.all_satisfied());
    }
}
