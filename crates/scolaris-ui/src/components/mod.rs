//! Yew views for the login flow and its navigation targets.

pub(crate) mod change_password;
pub(crate) mod dashboard;
pub(crate) mod home;
pub(crate) mod login;
