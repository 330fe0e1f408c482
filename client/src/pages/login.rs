//! Sign-in page with password reset and OAuth entry points.
//!
//! SYSTEM CONTEXT
//! ==============
//! The only unguarded routes. A successful sign-in stores the bearer token,
//! flips [`AuthState`] to signed in, and moves on to the profile page. The
//! OAuth provider redirects back to `/oauth-redirect?token=...`, handled by
//! [`OAuthRedirectPage`].

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::components::snackbar::notify;
use crate::config::ClientConfig;
use crate::state::auth::AuthState;
use crate::state::notify::{Notification, NotifyState};
use crate::state::password_reset::{ResetForm, ResetStep};

#[cfg(any(test, feature = "hydrate"))]
use crate::net::error::SyncError;

/// Where a fresh session lands.
pub const HOME_PATH: &str = "/mypage/edit";

#[cfg(feature = "hydrate")]
const LOGIN_FAILED_TITLE: &str = "Sign-in failed";
#[cfg(any(test, feature = "hydrate"))]
const LOGIN_FAILED_MESSAGE: &str = "The email or password is incorrect.";

const OAUTH_PROVIDERS: [(&str, &str); 2] = [("google", "Sign in with Google"), ("naver", "Sign in with Naver")];

#[cfg(any(test, feature = "hydrate"))]
fn login_error_message(err: &SyncError) -> String {
    match err {
        SyncError::MissingToken => "The response did not include a valid token.".to_owned(),
        other => other.user_message(LOGIN_FAILED_MESSAGE),
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ViewMode {
    Login,
    PasswordReset,
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let notify_state = expect_context::<RwSignal<NotifyState>>();
    let config = expect_context::<ClientConfig>();
    let navigate = use_navigate();
    let query = use_query_map();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let login_failed = RwSignal::new(false);
    let mode = RwSignal::new(ViewMode::Login);
    let reset = RwSignal::new(ResetForm::default());
    let reset_error = RwSignal::new(None::<String>);

    // Email verification links land here with `?verified=true`.
    Effect::new(move || {
        if query.with(|q| q.get("verified").as_deref() == Some("true")) {
            notify(
                notify_state,
                Notification::success("Email verified", "Your email was verified. You can sign in now."),
            );
        }
    });

    let login_config = config.clone();
    let on_login = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        busy.set(true);
        #[cfg(feature = "hydrate")]
        {
            let config = login_config.clone();
            let navigate = navigate.clone();
            let (email_value, password_value) = (email.get_untracked(), password.get_untracked());
            leptos::task::spawn_local(async move {
                match crate::net::api::login(&config, email_value.trim(), &password_value).await {
                    Ok(token) => {
                        crate::util::auth::store_token(&token);
                        auth.set(AuthState::loaded(Some(token)));
                        notify(notify_state, Notification::success("Signed in", "Welcome back!"));
                        navigate(HOME_PATH, NavigateOptions::default());
                    }
                    Err(err) => {
                        leptos::logging::warn!("sign-in failed: {err}");
                        login_failed.set(true);
                        notify(notify_state, Notification::error(LOGIN_FAILED_TITLE, login_error_message(&err)));
                    }
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (&login_config, &navigate, auth);
    };

    let reset_config = config.clone();
    let on_send_code = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        if let Err(err) = reset.with_untracked(ResetForm::validate_request) {
            reset_error.set(Some(err.to_string()));
            return;
        }
        reset_error.set(None);
        busy.set(true);
        #[cfg(feature = "hydrate")]
        {
            let config = reset_config.clone();
            let email_value = reset.with_untracked(|r| r.email.trim().to_owned());
            leptos::task::spawn_local(async move {
                match crate::net::api::request_password_reset(&config, &email_value).await {
                    Ok(()) => {
                        reset.update(ResetForm::code_sent);
                        notify(
                            notify_state,
                            Notification::success("Code sent", crate::state::password_reset::CODE_SENT_MESSAGE),
                        );
                    }
                    Err(err) => {
                        reset_error.set(Some(err.user_message(crate::state::password_reset::SEND_FAILED_MESSAGE)));
                    }
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = &reset_config;
    };

    let verify_config = config.clone();
    let on_verify = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        if let Err(err) = reset.with_untracked(ResetForm::validate_verify) {
            reset_error.set(Some(err.to_string()));
            return;
        }
        reset_error.set(None);
        busy.set(true);
        #[cfg(feature = "hydrate")]
        {
            let config = verify_config.clone();
            let form = reset.get_untracked();
            leptos::task::spawn_local(async move {
                let result = crate::net::api::verify_password_reset(
                    &config,
                    form.email.trim(),
                    form.code.trim(),
                    &form.new_password,
                )
                .await;
                match result {
                    Ok(()) => {
                        reset.update(ResetForm::completed);
                        mode.set(ViewMode::Login);
                        notify(
                            notify_state,
                            Notification::success("Password changed", crate::state::password_reset::RESET_DONE_MESSAGE),
                        );
                    }
                    Err(err) => {
                        reset_error
                            .set(Some(err.user_message(crate::state::password_reset::VERIFY_FAILED_MESSAGE)));
                    }
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = &verify_config;
    };

    let oauth_buttons = OAUTH_PROVIDERS
        .iter()
        .map(|(provider, label)| {
            let href = config.oauth_url(provider);
            view! { <a class="login-button login-button--oauth" href=href>{*label}</a> }
        })
        .collect_view();

    let login_view = move || {
        view! {
            <form class="login-form" on:submit=on_login.clone()>
                <input
                    class="login-input"
                    type="email"
                    placeholder="Email"
                    prop:value=move || email.get()
                    on:input=move |ev| {
                        email.set(event_target_value(&ev));
                        login_failed.set(false);
                    }
                />
                <input
                    class="login-input"
                    type="password"
                    placeholder="Password"
                    prop:value=move || password.get()
                    on:input=move |ev| {
                        password.set(event_target_value(&ev));
                        login_failed.set(false);
                    }
                />
                <Show when=move || login_failed.get()>
                    <p class="login-message">
                        "Forgot your password? "
                        <a class="login-link" on:click=move |_| mode.set(ViewMode::PasswordReset)>
                            "Reset it"
                        </a>
                    </p>
                </Show>
                <button class="login-button" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Signing in…" } else { "Sign in" }}
                </button>
            </form>
        }
    };

    let reset_view = move || {
        let step = reset.with(|r| r.step);
        let form = match step {
            ResetStep::EnterEmail => view! {
                <form class="login-form" on:submit=on_send_code.clone()>
                    <input
                        class="login-input"
                        type="email"
                        placeholder="Registered email"
                        prop:value=move || reset.with(|r| r.email.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            reset.update(|r| r.email = value);
                            reset_error.set(None);
                        }
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Send code"
                    </button>
                </form>
            }
            .into_any(),
            ResetStep::EnterCodeAndPassword => view! {
                <form class="login-form" on:submit=on_verify.clone()>
                    <input
                        class="login-input"
                        type="text"
                        placeholder="Verification code"
                        prop:value=move || reset.with(|r| r.code.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            reset.update(|r| r.code = value);
                            reset_error.set(None);
                        }
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="New password"
                        prop:value=move || reset.with(|r| r.new_password.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            reset.update(|r| r.new_password = value);
                            reset_error.set(None);
                        }
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Confirm new password"
                        prop:value=move || reset.with(|r| r.confirm_password.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            reset.update(|r| r.confirm_password = value);
                            reset_error.set(None);
                        }
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Change password"
                    </button>
                </form>
            }
            .into_any(),
        };
        view! {
            {form}
            {move || reset_error.get().map(|msg| view! { <p class="login-message login-message--error">{msg}</p> })}
            <a
                class="login-link"
                on:click=move |_| {
                    reset.update(ResetForm::completed);
                    reset_error.set(None);
                    mode.set(ViewMode::Login);
                }
            >
                "Back to sign in"
            </a>
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Rentex"</h1>
                {move || match mode.get() {
                    ViewMode::Login => login_view().into_any(),
                    ViewMode::PasswordReset => reset_view().into_any(),
                }}
                <div class="login-divider"></div>
                {oauth_buttons}
            </div>
        </div>
    }
}

/// Landing route for the OAuth success redirect.
#[component]
pub fn OAuthRedirectPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let query = use_query_map();
    let navigate = use_navigate();

    Effect::new(move || {
        let token = query.with(|q| q.get("token")).filter(|t| !t.is_empty());
        match token {
            Some(token) => {
                crate::util::auth::store_token(&token);
                auth.set(AuthState::loaded(Some(token)));
                navigate(HOME_PATH, NavigateOptions { replace: true, ..NavigateOptions::default() });
            }
            None => navigate(
                crate::util::auth::SIGN_IN_PATH,
                NavigateOptions { replace: true, ..NavigateOptions::default() },
            ),
        }
    });

    view! { <p class="page-loading">"Signing you in…"</p> }
}
