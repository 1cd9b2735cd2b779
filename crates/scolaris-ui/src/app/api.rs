//! Authentication context shared by the views.
//!
//! # Design
//! - Create exactly one authenticator per app boot.
//! - Views see the capability trait only, so a test double can stand in.

use crate::core::auth::Authenticator;
use crate::services::api::ApiClient;
use std::rc::Rc;

/// Shared authentication capability for UI views.
#[derive(Clone)]
pub(crate) struct AuthCtx {
    pub(crate) authenticator: Rc<dyn Authenticator>,
}

impl AuthCtx {
    /// Create a context backed by the HTTP client at `base_url`.
    pub(crate) fn new(base_url: impl Into<String>) -> Self {
        Self {
            authenticator: Rc::new(ApiClient::new(base_url)),
        }
    }
}

impl PartialEq for AuthCtx {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.authenticator, &other.authenticator)
    }
}
