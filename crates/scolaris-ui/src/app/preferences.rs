//! Persistence and environment helpers for the app shell.

use crate::core::store::Session;
use crate::i18n::{DEFAULT_LOCALE, LocaleCode};
use gloo::console;
use gloo::storage::{LocalStorage, Storage};
use gloo::utils::window;
use serde::Serialize;

pub(crate) const LOCALE_KEY: &str = "scolaris.locale";
pub(crate) const API_BASE_KEY: &str = "scolaris.api_base";
pub(crate) const SESSION_TOKEN_KEY: &str = "scolaris.session.token";

const DEFAULT_API_BASE: &str = "http://localhost:5000";

pub(crate) fn load_locale() -> LocaleCode {
    if let Ok(value) = LocalStorage::get::<String>(LOCALE_KEY) {
        if let Some(locale) = LocaleCode::from_lang_tag(&value) {
            return locale;
        }
    }
    if let Some(nav) = window().navigator().language() {
        if let Some(locale) = LocaleCode::from_lang_tag(&nav) {
            return locale;
        }
    }
    DEFAULT_LOCALE
}

pub(crate) fn persist_locale(locale: LocaleCode) {
    set_storage(LOCALE_KEY, locale.code());
}

/// API origin: explicit override first, then the page origin.
pub(crate) fn api_base_url() -> String {
    if let Ok(value) = LocalStorage::get::<String>(API_BASE_KEY) {
        let trimmed = value.trim();
        if !trimmed.is_empty() {
            return trimmed.to_string();
        }
    }
    window()
        .location()
        .origin()
        .ok()
        .filter(|origin| !origin.is_empty() && origin != "null")
        .unwrap_or_else(|| DEFAULT_API_BASE.to_string())
}

pub(crate) fn load_session_token() -> Option<String> {
    LocalStorage::get::<String>(SESSION_TOKEN_KEY)
        .ok()
        .filter(|token| !token.trim().is_empty())
}

pub(crate) fn persist_session(session: &Session) {
    match session.token.as_deref() {
        Some(token) => set_storage(SESSION_TOKEN_KEY, token),
        None => LocalStorage::delete(SESSION_TOKEN_KEY),
    }
}

fn set_storage<T: Serialize>(key: &'static str, value: T) {
    if let Err(err) = LocalStorage::set(key, value) {
        log_storage_error("set", key, &err.to_string());
    }
}

fn log_storage_error(operation: &'static str, key: &'static str, detail: &str) {
    console::error!("storage operation failed", operation, key, detail);
}
