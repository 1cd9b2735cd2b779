//! Public landing page with the entry link to the login form.

use crate::app::Route;
use crate::i18n::{DEFAULT_LOCALE, TranslationBundle};
use yew::prelude::*;
use yew_router::prelude::Link;

#[function_component(HomePage)]
pub(crate) fn home_page() -> Html {
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE));
    let t = |key: &str| bundle.text(key, "");

    html! {
        <section class="hero min-h-[70vh]">
            <div class="hero-content text-center flex-col gap-4">
                <h1 class="text-4xl font-bold">{t("home.title")}</h1>
                <p class="max-w-md text-base-content/70">{t("home.body")}</p>
                <Link<Route> to={Route::Login} classes="btn btn-primary">{t("home.login")}</Link<Route>>
            </div>
        </section>
    }
}
