//! Password policy rules
//!
//! Each rule checks a single aspect of the sign-up password policy and
//! reports whether the candidate password satisfies it.

mod length;
mod repeat;
mod special;

pub use length::length_rule;
pub use repeat::no_repeat_rule;
pub use special::special_char_rule;
