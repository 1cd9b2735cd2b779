//! Authentication capability shared across the UI.
//!
//! # Design
//! - Views depend on the [`Authenticator`] trait, never on a concrete client.
//! - Outcomes are plain data; interpreting them is the login controller's job.
//! - Transport faults stay distinct from rejected credentials.

use async_trait::async_trait;
use scolaris_api_models::{LoginResponse, LoginStatusCode, UserProfile};
use thiserror::Error;

/// Identifier + secret pair captured by the login form.
#[derive(Clone, PartialEq, Eq, Default)]
pub struct Credentials {
    /// Email-shaped login name.
    pub identifier: String,
    /// Password.
    pub secret: String,
}

impl Credentials {
    /// Build a credential pair.
    #[must_use]
    pub fn new(identifier: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            secret: secret.into(),
        }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("identifier", &self.identifier)
            .field("secret", &"<redacted>")
            .finish()
    }
}

/// Result of a login attempt that reached the backend.
#[derive(Clone, Debug, PartialEq)]
pub enum LoginOutcome {
    /// Credentials accepted.
    Success {
        /// User record returned with the acceptance, if any.
        user: Option<UserProfile>,
        /// Bearer token, if the backend issued one.
        token: Option<String>,
    },
    /// Credentials refused or the account needs attention.
    Failure {
        /// Human-readable reason supplied by the backend.
        message: Option<String>,
        /// Machine-readable reason supplied by the backend.
        code: Option<LoginStatusCode>,
        /// Whether the backend asked for a password change.
        password_change_required: bool,
    },
}

impl From<LoginResponse> for LoginOutcome {
    fn from(response: LoginResponse) -> Self {
        if response.success {
            return Self::Success {
                user: response.user,
                token: response.token,
            };
        }
        let password_change_required = response.requires_password_change();
        Self::Failure {
            message: response.message,
            code: response.code,
            password_change_required,
        }
    }
}

/// Faults raised while talking to the authentication backend.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// The request never produced a response.
    #[error("authentication request failed: {0}")]
    Transport(String),
    /// The response body was not a login response.
    #[error("authentication response could not be decoded: {0}")]
    Decode(String),
    /// The backend answered with an error status and no usable body.
    #[error("authentication endpoint returned status {0}")]
    Status(u16),
}

/// Capability that checks credentials against the backend.
///
/// Futures are `?Send` because the browser runtime is single-threaded.
#[async_trait(?Send)]
pub trait Authenticator {
    /// Attempt to sign in with the given identifier and secret.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError`] when the backend cannot be reached or answers
    /// with something other than a login response.
    async fn login(&self, identifier: &str, secret: &str) -> Result<LoginOutcome, AuthError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use scolaris_api_models::PASSWORD_CHANGE_REQUIRED_MESSAGE;

    #[test]
    fn success_response_keeps_user_and_token() {
        let response = LoginResponse {
            success: true,
            token: Some("t".to_string()),
            user: Some(UserProfile {
                role: Some("etudiant".to_string()),
                ..UserProfile::default()
            }),
            ..LoginResponse::default()
        };
        match LoginOutcome::from(response) {
            LoginOutcome::Success { user, token } => {
                assert_eq!(token.as_deref(), Some("t"));
                assert_eq!(user.and_then(|u| u.role).as_deref(), Some("etudiant"));
            }
            LoginOutcome::Failure { .. } => panic!("expected success"),
        }
    }

    #[test]
    fn failure_response_flags_password_change() {
        let response = LoginResponse {
            success: false,
            message: Some(PASSWORD_CHANGE_REQUIRED_MESSAGE.to_string()),
            ..LoginResponse::default()
        };
        assert_eq!(
            LoginOutcome::from(response),
            LoginOutcome::Failure {
                message: Some(PASSWORD_CHANGE_REQUIRED_MESSAGE.to_string()),
                code: None,
                password_change_required: true,
            }
        );
    }

    #[test]
    fn credentials_debug_hides_secret() {
        let rendered = format!("{:?}", Credentials::new("a@univ.tn", "s3cret"));
        assert!(rendered.contains("a@univ.tn"));
        assert!(!rendered.contains("s3cret"));
    }
}
