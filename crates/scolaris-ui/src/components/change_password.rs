//! Landing view for accounts that must rotate their password.
//!
//! The login form pushes [`ChangePasswordState`] with the typed identifier;
//! direct visits render without it.

use crate::app::Route;
use crate::core::routing::ChangePasswordState;
use crate::i18n::{DEFAULT_LOCALE, TranslationBundle};
use yew::prelude::*;
use yew_router::prelude::{Link, use_location};

#[function_component(ChangePasswordPage)]
pub(crate) fn change_password_page() -> Html {
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE));
    let t = |key: &str| bundle.text(key, "");
    let identifier = use_location()
        .and_then(|location| location.state::<ChangePasswordState>())
        .map(|state| state.identifier.clone())
        .filter(|identifier| !identifier.trim().is_empty());

    html! {
        <div class="min-h-screen flex items-center justify-center p-4">
            <div class="card w-full max-w-md bg-base-100 shadow border border-base-200">
                <div class="card-body gap-4">
                    <h2 class="text-2xl font-semibold">{t("change_password.title")}</h2>
                    <p class="text-sm text-base-content/60">{t("change_password.body")}</p>
                    <p>
                        {t("change_password.account")}{" "}
                        <strong>{identifier.unwrap_or_else(|| t("change_password.unknown_account"))}</strong>
                    </p>
                    <Link<Route> to={Route::Login} classes="btn btn-ghost btn-sm">{t("change_password.back")}</Link<Route>>
                </div>
            </div>
        </div>
    }
}
