//! Forgot-password hook.
//!
//! The login page only announces that a reset email would be sent; no backend
//! endpoint exists for it yet. The announcement goes through
//! [`PasswordResetNotifier`] so the missing delivery is an explicit seam.

use std::rc::Rc;

/// Receives forgot-password requests raised from the login form.
pub trait PasswordResetNotifier {
    /// A reset was requested for `identifier`.
    fn notify_reset_requested(&self, identifier: &str);
}

/// Shared notifier handle for view contexts.
#[derive(Clone)]
pub struct ResetNotifierCtx(
    /// Notifier implementation.
    pub Rc<dyn PasswordResetNotifier>,
);

impl PartialEq for ResetNotifierCtx {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

/// Open the reset panel on `form` and notify when it actually opened.
pub fn request_reset(
    form: &mut crate::core::login::LoginFormState,
    notifier: &dyn PasswordResetNotifier,
) -> bool {
    form.open_reset_notice().is_some_and(|identifier| {
        notifier.notify_reset_requested(&identifier);
        true
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::login::LoginFormState;
    use std::cell::RefCell;

    #[derive(Default)]
    struct Recorder(RefCell<Vec<String>>);

    impl PasswordResetNotifier for Recorder {
        fn notify_reset_requested(&self, identifier: &str) {
            self.0.borrow_mut().push(identifier.to_string());
        }
    }

    #[test]
    fn request_reset_notifies_with_typed_identifier() {
        let recorder = Recorder::default();
        let mut form = LoginFormState::default();
        form.set_identifier("sami@univ.tn");
        assert!(request_reset(&mut form, &recorder));
        assert!(form.reset_notice_open());
        assert_eq!(recorder.0.borrow().as_slice(), ["sami@univ.tn".to_string()]);
    }

    #[test]
    fn request_reset_is_silent_while_submitting() {
        let recorder = Recorder::default();
        let mut form = LoginFormState::default();
        form.set_identifier("sami@univ.tn");
        form.set_secret("x");
        let _ticket = form.begin_submit().expect("submit");
        assert!(!request_reset(&mut form, &recorder));
        assert!(recorder.0.borrow().is_empty());
    }
}
