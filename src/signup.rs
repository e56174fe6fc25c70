//! Sign-up flow - form state machine behind the sign-up screen.

use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;

use crate::policy::{PolicyFlags, evaluate_password_policy};
use crate::ports::{AuthApi, Navigator, Screen, SessionStore};

/// Notice shown when the sign-up collaborator fails without a message.
const GENERIC_SIGNUP_ERROR: &str = "An unknown error occurred. Please try again.";

/// Lifecycle of one sign-up attempt.
///
/// `Editing` accepts field updates and `submit()`. A failed submission
/// returns to `Editing` with the fields intact; `Succeeded` is terminal
/// for the flow instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignUpState {
    Editing,
    Submitting,
    Succeeded,
}

/// Form fields addressable through [`SignUpFlow::update_field`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignUpField {
    Email,
    Nickname,
    Password,
    ConfirmPassword,
}

/// The form's current contents. Created per form session and discarded
/// with the flow after a successful submission.
#[derive(Debug)]
pub struct Credentials {
    pub email: String,
    pub nickname: String,
    pub password: SecretString,
    pub confirm_password: SecretString,
}

impl Default for Credentials {
    fn default() -> Self {
        Self {
            email: String::new(),
            nickname: String::new(),
            password: SecretString::new(String::new().into()),
            confirm_password: SecretString::new(String::new().into()),
        }
    }
}

impl Credentials {
    fn is_complete(&self) -> bool {
        !self.email.is_empty()
            && !self.nickname.is_empty()
            && !self.password.expose_secret().is_empty()
            && !self.confirm_password.expose_secret().is_empty()
    }

    fn passwords_match(&self) -> bool {
        self.password.expose_secret() == self.confirm_password.expose_secret()
    }
}

/// Local validation failures. Never reach the collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("all fields must be filled in")]
    MissingFields,
    #[error("password and confirmation do not match")]
    PasswordMismatch,
}

/// Everything `submit()` can surface to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SignUpError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// The collaborator rejected the sign-up; carries its message or a
    /// generic fallback.
    #[error("{0}")]
    Rejected(String),
    /// `submit()` was called outside `Editing`.
    #[error("sign-up is not accepting input in the current state")]
    NotEditing,
}

/// Orchestrates the sign-up form: field edits, validation, the signup
/// call, and the post-success hand-offs to the session store and the
/// navigator.
pub struct SignUpFlow<A, S, N> {
    auth: A,
    sessions: S,
    navigator: N,
    state: SignUpState,
    credentials: Credentials,
    flags: PolicyFlags,
}

impl<A, S, N> SignUpFlow<A, S, N>
where
    A: AuthApi,
    S: SessionStore,
    N: Navigator,
{
    pub fn new(auth: A, sessions: S, navigator: N) -> Self {
        Self {
            auth,
            sessions,
            navigator,
            state: SignUpState::Editing,
            credentials: Credentials::default(),
            flags: PolicyFlags::default(),
        }
    }

    pub fn state(&self) -> SignUpState {
        self.state
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Checklist flags for the current password. Derived only; there is
    /// no way to toggle them independently of the password content.
    pub fn policy_flags(&self) -> PolicyFlags {
        self.flags
    }

    /// Updates one form field.
    ///
    /// Ignored outside `Editing`. A password edit recomputes the
    /// checklist flags; other fields leave them untouched.
    pub fn update_field(&mut self, field: SignUpField, value: String) {
        if self.state != SignUpState::Editing {
            return;
        }
        match field {
            SignUpField::Email => self.credentials.email = value,
            SignUpField::Nickname => self.credentials.nickname = value,
            SignUpField::Password => {
                self.credentials.password = SecretString::new(value.into());
                self.flags = evaluate_password_policy(&self.credentials.password);
            }
            SignUpField::ConfirmPassword => {
                self.credentials.confirm_password = SecretString::new(value.into());
            }
        }
    }

    /// Logo press: leave the form and reset navigation to the home screen.
    pub fn go_home(&self) {
        self.navigator.reset_to(Screen::Home);
    }

    /// Validates the form and, if it passes, runs the sign-up call.
    ///
    /// Validation order: missing fields first, then password mismatch.
    /// Neither issues a collaborator call. On collaborator success the
    /// session is forwarded to the store and navigation to the login
    /// screen is signalled, each exactly once; on collaborator failure
    /// the flow returns to `Editing` with the fields preserved.
    pub async fn submit(&mut self) -> Result<(), SignUpError> {
        if self.state != SignUpState::Editing {
            return Err(SignUpError::NotEditing);
        }
        if !self.credentials.is_complete() {
            return Err(ValidationError::MissingFields.into());
        }
        if !self.credentials.passwords_match() {
            return Err(ValidationError::PasswordMismatch.into());
        }

        self.state = SignUpState::Submitting;
        let result = self
            .auth
            .signup(
                &self.credentials.email,
                &self.credentials.password,
                &self.credentials.nickname,
            )
            .await;

        match result {
            Ok(session) => {
                self.state = SignUpState::Succeeded;
                self.sessions.login(session);
                self.navigator.go_to(Screen::Login);
                Ok(())
            }
            Err(e) => {
                #[cfg(feature = "tracing")]
                tracing::error!("sign-up failed: {}", e);
                self.state = SignUpState::Editing;
                let message = e
                    .message
                    .unwrap_or_else(|| GENERIC_SIGNUP_ERROR.to_string());
                Err(SignUpError::Rejected(message))
            }
        }
    }
}
