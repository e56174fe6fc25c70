//! Length rule - checks that the password length falls inside the allowed band.

use secrecy::{ExposeSecret, SecretString};

const MIN_LENGTH: usize = 8;
const MAX_LENGTH: usize = 15;

/// Checks that the password is between 8 and 15 characters inclusive.
///
/// Length is counted in Unicode codepoints, the same unit the repeat
/// scan uses, so the two rules always agree on what a "character" is.
///
/// # Returns
/// - `true` if the length is within `[8, 15]`
/// - `false` otherwise (the empty password included)
pub fn length_rule(password: &SecretString) -> bool {
    let len = password.expose_secret().chars().count();
    (MIN_LENGTH..=MAX_LENGTH).contains(&len)
}
