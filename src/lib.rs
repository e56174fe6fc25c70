//! Screen flow logic for a concert setlist browsing app
//!
//! This library provides the sign-up form flow (with its password
//! policy checklist) and the concert detail loader, decoupled from any
//! rendering, transport, or routing concern. The app wires real
//! adapters into the collaborator traits in [`ports`]; tests wire
//! scripted doubles.
//!
//! # Features
//!
//! - `async` (default): Enables the sign-up and concert-detail flows
//!   and the collaborator ports. Without it the crate is the pure
//!   password policy evaluator plus the data model.
//! - `tracing`: Enables logging via tracing crate
//!
//! # Example
//!
//! ```rust
//! use concert_flows::{evaluate_password_policy, PolicyFlags};
//! use secrecy::SecretString;
//!
//! let password = SecretString::new("Enc0re!Night".to_string().into());
//! let flags = evaluate_password_policy(&password);
//!
//! assert_eq!(
//!     flags,
//!     PolicyFlags {
//!         length_ok: true,
//!         special_char_ok: true,
//!         no_repeat_ok: true,
//!     }
//! );
//! ```

// Internal modules
mod model;
mod policy;
mod rules;

#[cfg(feature = "async")]
mod concert;
#[cfg(feature = "async")]
pub mod ports;
#[cfg(feature = "async")]
mod signup;

// Public API
pub use model::{ConcertRecord, Session};
pub use policy::{PolicyFlags, evaluate_password_policy};

#[cfg(feature = "async")]
pub use concert::{ConcertDetail, ConcertDetailLoader};
#[cfg(feature = "async")]
pub use ports::{AuthApi, AuthError, ConcertApi, FetchError, Navigator, Screen, SessionStore};
#[cfg(feature = "async")]
pub use signup::{
    Credentials, SignUpError, SignUpField, SignUpFlow, SignUpState, ValidationError,
};
