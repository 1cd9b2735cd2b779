//! Role dashboards reached after sign-in.
//!
//! Each role lands on its own route; the page body is shared until the
//! per-role features exist.

use crate::core::routing::Destination;
use crate::core::store::AppStore;
use crate::i18n::{DEFAULT_LOCALE, TranslationBundle};
use yew::prelude::*;
use yewdux::prelude::use_selector;

#[derive(Properties, PartialEq)]
pub(crate) struct RoleDashboardProps {
    pub(crate) destination: Destination,
}

#[function_component(RoleDashboard)]
pub(crate) fn role_dashboard(props: &RoleDashboardProps) -> Html {
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE));
    let t = |key: &str| bundle.text(key, "");
    let display_name = use_selector(|store: &AppStore| {
        store
            .known_user()
            .and_then(scolaris_api_models::UserProfile::display_name)
    });

    html! {
        <section class="p-6 grid gap-4">
            <h2 class="text-2xl font-semibold">{t(title_key(props.destination))}</h2>
            {if let Some(name) = (*display_name).clone() {
                html! { <p class="text-lg">{format!("{}, {name}", t("dashboard.welcome"))}</p> }
            } else { html!{} }}
            <div class="card bg-base-100 shadow border border-base-200">
                <div class="card-body">
                    <p class="text-base-content/60">{t("dashboard.body")}</p>
                </div>
            </div>
        </section>
    }
}

const fn title_key(destination: Destination) -> &'static str {
    match destination {
        Destination::StudentDashboard => "dashboard.student",
        Destination::TeacherDashboard => "dashboard.teacher",
        Destination::DirectorDashboard => "dashboard.director",
        Destination::AdminDashboard => "dashboard.admin",
        Destination::Dashboard
        | Destination::Home
        | Destination::Login
        | Destination::ChangePassword => "dashboard.generic",
    }
}
