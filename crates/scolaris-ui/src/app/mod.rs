use crate::app::api::AuthCtx;
use crate::components::change_password::ChangePasswordPage;
use crate::components::dashboard::RoleDashboard;
use crate::components::home::HomePage;
use crate::components::login::LoginPage;
use crate::core::reset::ResetNotifierCtx;
use crate::core::routing::Destination;
use crate::core::store::{AppStore, Session};
use crate::i18n::{DEFAULT_LOCALE, LocaleCode, TranslationBundle};
use crate::services::reset::UnwiredResetNotifier;
use preferences::{api_base_url, load_locale, load_session_token, persist_locale};
pub(crate) use routes::Route;
use std::rc::Rc;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::Dispatch;

pub(crate) mod api;
pub(crate) mod preferences;
mod routes;

#[function_component(ScolarisApp)]
fn scolaris_app() -> Html {
    let locale = use_state(load_locale);
    let dispatch = Dispatch::<AppStore>::new();
    let auth_ctx = use_memo(|_| AuthCtx::new(api_base_url()), ());
    let reset_ctx = use_memo(
        |_| ResetNotifierCtx(Rc::new(UnwiredResetNotifier)),
        (),
    );
    let bundle = {
        let locale = *locale;
        use_memo(move |_| TranslationBundle::new(locale), locale)
    };

    {
        let dispatch = dispatch.clone();
        use_effect_with_deps(
            move |_| {
                if let Some(token) = load_session_token() {
                    dispatch.reduce_mut(|store| {
                        if store.session.is_none() {
                            store.session = Some(Session::from_token(token.clone()));
                        }
                    });
                }
                || ()
            },
            (),
        );
    }

    let on_locale_change = {
        let locale = locale.clone();
        Callback::from(move |e: Event| {
            if let Some(select) = e.target_dyn_into::<web_sys::HtmlSelectElement>() {
                if let Some(next) = LocaleCode::from_lang_tag(&select.value()) {
                    persist_locale(next);
                    locale.set(next);
                }
            }
        })
    };

    html! {
        <ContextProvider<AuthCtx> context={(*auth_ctx).clone()}>
            <ContextProvider<ResetNotifierCtx> context={(*reset_ctx).clone()}>
                <ContextProvider<TranslationBundle> context={(*bundle).clone()}>
                    <BrowserRouter>
                        <main class="min-h-screen bg-base-200">
                            <Switch<Route> render={switch} />
                        </main>
                        <footer class="flex justify-center p-4">
                            <select class="select select-ghost select-sm" aria-label="Langue" onchange={on_locale_change}>
                                {for LocaleCode::all().iter().map(|lc| html! {
                                    <option value={lc.code()} selected={*lc == *locale}>{lc.label()}</option>
                                })}
                            </select>
                        </footer>
                    </BrowserRouter>
                </ContextProvider<TranslationBundle>>
            </ContextProvider<ResetNotifierCtx>>
        </ContextProvider<AuthCtx>>
    }
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <HomePage /> },
        Route::Login => html! { <LoginPage /> },
        Route::StudentDashboard => html! { <RoleDashboard destination={Destination::StudentDashboard} /> },
        Route::TeacherDashboard => html! { <RoleDashboard destination={Destination::TeacherDashboard} /> },
        Route::DirectorDashboard => html! { <RoleDashboard destination={Destination::DirectorDashboard} /> },
        Route::AdminDashboard => html! { <RoleDashboard destination={Destination::AdminDashboard} /> },
        Route::Dashboard => html! { <RoleDashboard destination={Destination::Dashboard} /> },
        Route::ChangePassword => html! { <ChangePasswordPage /> },
        Route::NotFound => html! { <NotFound /> },
    }
}

#[function_component(NotFound)]
fn not_found() -> Html {
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE));
    html! {
        <section class="hero min-h-[60vh]">
            <div class="hero-content text-center flex-col gap-3">
                <h2 class="text-2xl font-semibold">{bundle.text("not_found.title", "Page introuvable")}</h2>
                <p class="text-base-content/60">{bundle.text("not_found.body", "")}</p>
                <Link<Route> to={Route::Home} classes="btn btn-primary btn-sm">
                    {bundle.text("not_found.home", "Accueil")}
                </Link<Route>>
            </div>
        </section>
    }
}

/// Mount the application into `#root`, or the document body when absent.
pub fn run_app() {
    console_error_panic_hook::set_once();
    if let Some(root) = gloo::utils::document().get_element_by_id("root") {
        yew::Renderer::<ScolarisApp>::with_root(root).render();
    } else {
        yew::Renderer::<ScolarisApp>::new().render();
    }
}
