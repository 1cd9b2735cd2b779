//! Login form state machine.
//!
//! # Design
//! - The form is plain data; the view owns it behind `Rc<RefCell<_>>` and
//!   re-renders after each transition.
//! - A submission is identified by a [`SubmissionTicket`]; resolutions for any
//!   other ticket are dropped.
//! - Interpreting an outcome is a pure function so every branch is testable
//!   without a browser.
//!
//! ```text
//! idle ──submit──▶ submitting ──finish──▶ idle (+error) | navigated away
//! ```

use crate::core::auth::{AuthError, Authenticator, Credentials, LoginOutcome};
use crate::core::routing::{ChangePasswordState, Destination, destination_for_tag};
use crate::core::store::Session;
use crate::i18n::TranslationBundle;
use scolaris_api_models::UserProfile;
use std::cell::Cell;
use std::rc::Rc;
use thiserror::Error;

/// Translation key for the generic connection failure.
pub const CONNECTION_ERROR_KEY: &str = "login.error_connection";
/// Text shown when the translation bundle lacks [`CONNECTION_ERROR_KEY`].
pub const CONNECTION_ERROR_DEFAULT: &str = "Erreur de connexion";

/// Why a submit request was refused before reaching the backend.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SubmitRejected {
    /// Identifier field is empty.
    #[error("identifier is required")]
    MissingIdentifier,
    /// Secret field is empty.
    #[error("password is required")]
    MissingSecret,
    /// A submission is already in flight.
    #[error("a login request is already in flight")]
    InFlight,
}

/// Error displayed inline under the form header.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoginError {
    /// Backend refused the credentials; carries its message when it sent one.
    Rejected(Option<String>),
    /// The backend could not be reached or answered garbage.
    Connection {
        /// Underlying fault, kept for logging only.
        cause: AuthError,
    },
}

impl LoginError {
    /// Text to render for this error; `None` when there is nothing to show.
    #[must_use]
    pub fn message(&self, bundle: &TranslationBundle) -> Option<String> {
        match self {
            Self::Rejected(message) => message.clone().filter(|text| !text.is_empty()),
            Self::Connection { .. } => {
                Some(bundle.text(CONNECTION_ERROR_KEY, CONNECTION_ERROR_DEFAULT))
            }
        }
    }
}

/// What the view must do once a submission resolves.
#[derive(Clone, Debug, PartialEq)]
pub enum LoginResolution {
    /// Record the session and navigate to a dashboard.
    Navigate {
        /// Dashboard chosen from the role table.
        destination: Destination,
        /// Session established by the successful login.
        session: Session,
    },
    /// Navigate to the password-change view with the typed identifier.
    ChangePassword(ChangePasswordState),
    /// Stay on the form and show an error.
    ShowError(LoginError),
}

/// Handle for one in-flight submission.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubmissionTicket {
    id: u64,
    credentials: Credentials,
}

impl SubmissionTicket {
    /// Monotonic submission number within the form instance.
    #[must_use]
    pub const fn id(&self) -> u64 {
        self.id
    }

    /// Credentials captured when the submission started.
    #[must_use]
    pub const fn credentials(&self) -> &Credentials {
        &self.credentials
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
enum LoginStatus {
    #[default]
    Idle,
    Submitting {
        submission: u64,
    },
}

/// Transient state of one login form instance.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct LoginFormState {
    credentials: Credentials,
    status: LoginStatus,
    error: Option<LoginError>,
    reset_notice_open: bool,
    issued: u64,
}

impl LoginFormState {
    /// Current identifier input.
    #[must_use]
    pub fn identifier(&self) -> &str {
        &self.credentials.identifier
    }

    /// Current secret input.
    #[must_use]
    pub fn secret(&self) -> &str {
        &self.credentials.secret
    }

    /// Whether a submission is in flight. Inputs and buttons are disabled while true.
    #[must_use]
    pub const fn is_submitting(&self) -> bool {
        matches!(self.status, LoginStatus::Submitting { .. })
    }

    /// Last failure, if any.
    #[must_use]
    pub const fn error(&self) -> Option<&LoginError> {
        self.error.as_ref()
    }

    /// Whether the forgot-password panel is visible.
    #[must_use]
    pub const fn reset_notice_open(&self) -> bool {
        self.reset_notice_open
    }

    /// Replace the identifier input. Ignored while submitting.
    pub fn set_identifier(&mut self, value: impl Into<String>) {
        if !self.is_submitting() {
            self.credentials.identifier = value.into();
        }
    }

    /// Replace the secret input. Ignored while submitting.
    pub fn set_secret(&mut self, value: impl Into<String>) {
        if !self.is_submitting() {
            self.credentials.secret = value.into();
        }
    }

    /// Start a submission: marks the form busy and clears the previous error.
    ///
    /// # Errors
    ///
    /// Returns [`SubmitRejected`] when a field is empty or a submission is
    /// already in flight; the state is left untouched.
    pub fn begin_submit(&mut self) -> Result<SubmissionTicket, SubmitRejected> {
        if self.is_submitting() {
            return Err(SubmitRejected::InFlight);
        }
        if self.credentials.identifier.is_empty() {
            return Err(SubmitRejected::MissingIdentifier);
        }
        if self.credentials.secret.is_empty() {
            return Err(SubmitRejected::MissingSecret);
        }
        self.issued += 1;
        self.status = LoginStatus::Submitting {
            submission: self.issued,
        };
        self.error = None;
        Ok(SubmissionTicket {
            id: self.issued,
            credentials: self.credentials.clone(),
        })
    }

    /// Settle the submission identified by `ticket`.
    ///
    /// Returns `false` and changes nothing when `ticket` is not the one in flight.
    pub fn finish(&mut self, ticket: &SubmissionTicket, resolution: &LoginResolution) -> bool {
        if self.status != (LoginStatus::Submitting { submission: ticket.id }) {
            return false;
        }
        self.status = LoginStatus::Idle;
        if let LoginResolution::ShowError(error) = resolution {
            self.error = Some(error.clone());
        }
        true
    }

    /// Reveal the forgot-password panel.
    ///
    /// Returns the identifier the reset notice refers to, or `None` while
    /// submitting.
    pub fn open_reset_notice(&mut self) -> Option<String> {
        if self.is_submitting() {
            return None;
        }
        self.reset_notice_open = true;
        Some(self.credentials.identifier.clone())
    }

    /// Hide the forgot-password panel. Field values are untouched.
    pub const fn dismiss_reset_notice(&mut self) {
        self.reset_notice_open = false;
    }
}

/// Interpret the result of a login call.
///
/// On success the role comes from the returned user record, or from
/// `known_user` when the response carries none.
#[must_use]
pub fn resolve_attempt(
    identifier: &str,
    result: Result<LoginOutcome, AuthError>,
    known_user: Option<&UserProfile>,
) -> LoginResolution {
    match result {
        Ok(LoginOutcome::Success { user, token }) => {
            let role = user
                .as_ref()
                .and_then(UserProfile::role_tag)
                .or_else(|| known_user.and_then(UserProfile::role_tag));
            let destination = destination_for_tag(role);
            let user = user.or_else(|| known_user.cloned());
            LoginResolution::Navigate {
                destination,
                session: Session { user, token },
            }
        }
        Ok(LoginOutcome::Failure {
            password_change_required: true,
            ..
        }) => LoginResolution::ChangePassword(ChangePasswordState {
            identifier: identifier.to_string(),
        }),
        Ok(LoginOutcome::Failure { message, .. }) => {
            LoginResolution::ShowError(LoginError::Rejected(message))
        }
        Err(cause) => LoginResolution::ShowError(LoginError::Connection { cause }),
    }
}

/// Run the capability for `ticket` and interpret the result.
pub async fn attempt_login<A>(
    authenticator: &A,
    ticket: &SubmissionTicket,
    known_user: Option<&UserProfile>,
) -> LoginResolution
where
    A: Authenticator + ?Sized,
{
    let credentials = ticket.credentials();
    let result = authenticator
        .login(&credentials.identifier, &credentials.secret)
        .await;
    resolve_attempt(&credentials.identifier, result, known_user)
}

/// Shared flag a view retires on unmount so pending continuations can bail out.
#[derive(Clone, Debug)]
pub struct Liveness(Rc<Cell<bool>>);

impl Liveness {
    /// New live flag.
    #[must_use]
    pub fn new() -> Self {
        Self(Rc::new(Cell::new(true)))
    }

    /// Whether the owning view is still mounted.
    #[must_use]
    pub fn is_live(&self) -> bool {
        self.0.get()
    }

    /// Mark the owning view as gone.
    pub fn retire(&self) {
        self.0.set(false);
    }
}

impl Default for Liveness {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for Liveness {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}
