//! Core, DOM-free primitives and helpers for the Web UI.
pub mod auth;
pub mod login;
pub mod reset;
pub mod routing;
pub mod store;
