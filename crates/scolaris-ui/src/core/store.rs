//! App-wide yewdux store slices.
//!
//! # Design
//! - Keep the signed-in session in one store instead of an ad-hoc auth context.
//! - The login flow writes the session; dashboards and the role fallback read it.

use scolaris_api_models::UserProfile;
use yewdux::store::Store;

/// Global application store for shared state.
#[derive(Clone, Debug, PartialEq, Store, Default)]
pub struct AppStore {
    /// Signed-in session, if any.
    pub session: Option<Session>,
}

impl AppStore {
    /// User record of the current session.
    #[must_use]
    pub fn known_user(&self) -> Option<&UserProfile> {
        self.session.as_ref().and_then(|session| session.user.as_ref())
    }
}

/// Session established by a successful login.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Session {
    /// Authenticated user record.
    pub user: Option<UserProfile>,
    /// Bearer token issued by the backend.
    pub token: Option<String>,
}

impl Session {
    /// Session restored from a persisted token, before the user record is known.
    #[must_use]
    pub const fn from_token(token: String) -> Self {
        Self {
            user: None,
            token: Some(token),
        }
    }
}
