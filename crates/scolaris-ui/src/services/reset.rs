//! Placeholder password-reset delivery.

use crate::core::reset::PasswordResetNotifier;
use gloo::console;

/// Stand-in until the backend exposes a reset endpoint. Nothing is sent.
pub(crate) struct UnwiredResetNotifier;

impl PasswordResetNotifier for UnwiredResetNotifier {
    fn notify_reset_requested(&self, identifier: &str) {
        console::warn!(
            "password reset delivery is not wired; no email sent for",
            identifier
        );
    }
}
