//! Login page.
//!
//! # Design
//! - Form state lives in [`LoginFormState`]; this view renders snapshots of it
//!   and forces a re-render after each transition.
//! - The authenticator and reset notifier come from context so tests and
//!   demos can swap them.
//! - A pending login that outlives the page is dropped via [`Liveness`].

use crate::app::Route;
use crate::app::api::AuthCtx;
use crate::app::preferences::{api_base_url, persist_session};
use crate::core::login::{
    LoginError, LoginFormState, LoginResolution, Liveness, attempt_login,
};
use crate::core::reset::{ResetNotifierCtx, request_reset};
use crate::core::store::AppStore;
use crate::i18n::{DEFAULT_LOCALE, TranslationBundle};
use crate::services::reset::UnwiredResetNotifier;
use gloo::console;
use std::rc::Rc;
use web_sys::HtmlInputElement;
use yew::platform::spawn_local;
use yew::prelude::*;
use yew_router::prelude::{Link, Navigator, use_navigator};
use yewdux::prelude::{Dispatch, use_store};

#[function_component(LoginPage)]
pub(crate) fn login_page() -> Html {
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE));
    let t = |key: &str| bundle.text(key, "");
    let auth = use_context::<AuthCtx>().unwrap_or_else(|| AuthCtx::new(api_base_url()));
    let reset = use_context::<ResetNotifierCtx>()
        .unwrap_or_else(|| ResetNotifierCtx(Rc::new(UnwiredResetNotifier)));
    let navigator = use_navigator();
    let (store, dispatch) = use_store::<AppStore>();
    let form = use_mut_ref(LoginFormState::default);
    let rerender = use_force_update();
    let liveness = use_memo(|_| Liveness::new(), ());

    {
        let liveness = (*liveness).clone();
        use_effect_with_deps(move |_| move || liveness.retire(), ());
    }

    let on_submit = {
        let form = form.clone();
        let rerender = rerender.clone();
        let liveness = (*liveness).clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let ticket = match form.borrow_mut().begin_submit() {
                Ok(ticket) => ticket,
                Err(reason) => {
                    console::debug!("login submit refused", reason.to_string());
                    return;
                }
            };
            rerender.force_update();

            let authenticator = auth.authenticator.clone();
            let known_user = store.known_user().cloned();
            let form = form.clone();
            let rerender = rerender.clone();
            let liveness = liveness.clone();
            let navigator = navigator.clone();
            let dispatch = dispatch.clone();
            spawn_local(async move {
                let resolution =
                    attempt_login(authenticator.as_ref(), &ticket, known_user.as_ref()).await;
                if !liveness.is_live() {
                    return;
                }
                if !form.borrow_mut().finish(&ticket, &resolution) {
                    return;
                }
                rerender.force_update();
                follow_resolution(resolution, navigator.as_ref(), &dispatch);
            });
        })
    };

    let on_identifier = {
        let form = form.clone();
        let rerender = rerender.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                form.borrow_mut().set_identifier(input.value());
                rerender.force_update();
            }
        })
    };

    let on_secret = {
        let form = form.clone();
        let rerender = rerender.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                form.borrow_mut().set_secret(input.value());
                rerender.force_update();
            }
        })
    };

    let on_forgot = {
        let form = form.clone();
        let rerender = rerender.clone();
        Callback::from(move |_: MouseEvent| {
            if request_reset(&mut form.borrow_mut(), reset.0.as_ref()) {
                rerender.force_update();
            }
        })
    };

    let on_dismiss_reset = {
        let form = form.clone();
        let rerender = rerender.clone();
        Callback::from(move |_: MouseEvent| {
            form.borrow_mut().dismiss_reset_notice();
            rerender.force_update();
        })
    };

    let snapshot = form.borrow().clone();
    let busy = snapshot.is_submitting();

    html! {
        <div class="login-page min-h-screen flex items-center justify-center p-4">
            <div class="card w-full max-w-md bg-base-100 shadow border border-base-200">
                <div class="card-body gap-4">
                    <div class="login-header text-center grid gap-1">
                        <Link<Route> to={Route::Home} classes="link link-hover text-sm justify-self-start">
                            {t("login.back_home")}
                        </Link<Route>>
                        <div class="text-4xl" aria-hidden="true">{"🔐"}</div>
                        <h2 class="text-2xl font-semibold">{t("login.title")}</h2>
                        <p class="text-sm text-base-content/60">{t("login.subtitle")}</p>
                    </div>

                    {if let Some(message) = snapshot.error().and_then(|error| error.message(&bundle)) {
                        html! { <div class="alert alert-error text-sm" role="alert">{message}</div> }
                    } else { html!{} }}

                    <form class="grid gap-3" onsubmit={on_submit}>
                        <label class="form-control gap-1">
                            <span class="label-text text-xs">{t("login.email_label")}</span>
                            <input
                                id="email"
                                class="input input-bordered w-full"
                                type="email"
                                value={snapshot.identifier().to_string()}
                                placeholder={t("login.email_placeholder")}
                                required={true}
                                disabled={busy}
                                oninput={on_identifier} />
                        </label>
                        <label class="form-control gap-1">
                            <span class="label-text text-xs">{t("login.password_label")}</span>
                            <input
                                id="password"
                                class="input input-bordered w-full"
                                type="password"
                                value={snapshot.secret().to_string()}
                                placeholder={t("login.password_placeholder")}
                                required={true}
                                disabled={busy}
                                oninput={on_secret} />
                        </label>
                        <div class="flex justify-center">
                            <button type="submit" class="btn btn-primary" disabled={busy}>
                                {if busy { t("login.submitting") } else { t("login.submit") }}
                            </button>
                        </div>
                    </form>

                    <div class="forgot-password-section grid gap-2 justify-items-center">
                        <button type="button" class="btn btn-link btn-sm" onclick={on_forgot} disabled={busy}>
                            {t("login.forgot")}
                        </button>
                        {if snapshot.reset_notice_open() {
                            html! {
                                <div class="alert alert-info text-sm flex-col">
                                    <p>
                                        {t("login.reset_notice")}{" "}
                                        <strong>{snapshot.identifier().to_string()}</strong>
                                    </p>
                                    <button type="button" class="btn btn-primary btn-sm" onclick={on_dismiss_reset}>
                                        {t("login.reset_ok")}
                                    </button>
                                </div>
                            }
                        } else { html!{} }}
                    </div>
                </div>
            </div>
        </div>
    }
}

fn follow_resolution(
    resolution: LoginResolution,
    navigator: Option<&Navigator>,
    dispatch: &Dispatch<AppStore>,
) {
    match resolution {
        LoginResolution::Navigate {
            destination,
            session,
        } => {
            persist_session(&session);
            dispatch.reduce_mut(|store| store.session = Some(session.clone()));
            if let Some(navigator) = navigator {
                navigator.push(&Route::from(destination));
            }
        }
        LoginResolution::ChangePassword(state) => {
            if let Some(navigator) = navigator {
                navigator.push_with_state(&Route::ChangePassword, state);
            }
        }
        LoginResolution::ShowError(LoginError::Connection { cause }) => {
            console::error!("login request failed", cause.to_string());
        }
        LoginResolution::ShowError(LoginError::Rejected(_)) => {}
    }
}
