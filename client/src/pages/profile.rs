//! Profile page: inline per-field editing and account withdrawal.
//!
//! SYSTEM CONTEXT
//! ==============
//! Loads `/users/me` once on mount into a [`FieldEditor`]. Each confirmed
//! field is sent on its own through [`FieldSync`]; the editor only commits
//! the value after the server accepts it.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::editable_field_row::EditableFieldRow;
use crate::components::snackbar::notify;
use crate::config::ClientConfig;
use crate::net::api::ProfileApi;
use crate::state::auth::AuthState;
use crate::state::field_editor::{EditError, FieldEditor};
use crate::state::notify::{Notification, NotifyState};
use crate::util::auth::install_unauth_redirect;
use crate::util::lifecycle::MountGuard;

#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;

#[cfg(feature = "hydrate")]
use crate::net::sync::{FieldSync, RecordDelete, RecordSource};
#[cfg(feature = "hydrate")]
use crate::state::profile::{PROFILE_RECORD_ID, WITHDRAW_CONFIRM_PROMPT, profile_editor};

#[cfg(feature = "hydrate")]
const LOAD_FAILED_MESSAGE: &str = "Could not load your profile.";

#[component]
pub fn ProfilePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let notify_state = expect_context::<RwSignal<NotifyState>>();
    let api = ProfileApi::new(expect_context::<ClientConfig>());
    let navigate = use_navigate();
    install_unauth_redirect(auth, navigate.clone());

    let guard = MountGuard::install();
    let editor = RwSignal::new(FieldEditor::default());
    let loading = RwSignal::new(true);
    let load_error = RwSignal::new(None::<String>);
    let withdrawing = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    {
        let api = api.clone();
        let guard = guard.clone();
        leptos::task::spawn_local(async move {
            let result = api.fetch_record(PROFILE_RECORD_ID).await;
            if !guard.is_mounted() {
                return;
            }
            match result {
                Ok(profile) => editor.set(profile_editor(&profile)),
                Err(err) => {
                    leptos::logging::warn!("profile load failed: {err}");
                    load_error.set(Some(err.user_message(LOAD_FAILED_MESSAGE)));
                }
            }
            loading.set(false);
        });
    }

    let confirm_api = api.clone();
    let confirm_guard = guard.clone();
    let on_confirm = Callback::new(move |()| {
        let update = match editor.try_update(FieldEditor::confirm) {
            Some(Ok(update)) => update,
            Some(Err(EditError::Invalid(message))) => {
                notify(notify_state, Notification::error("Check the value", message));
                return;
            }
            Some(Err(_)) | None => return,
        };
        #[cfg(feature = "hydrate")]
        {
            let api = confirm_api.clone();
            let guard = confirm_guard.clone();
            leptos::task::spawn_local(async move {
                let result = api.update_field(PROFILE_RECORD_ID, &update).await;
                if !guard.is_mounted() {
                    return;
                }
                if let Some(notification) = editor.try_update(|e| e.apply_outcome(update, result)) {
                    notify(notify_state, notification);
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (&confirm_api, &confirm_guard, update);
    });

    let on_withdraw = move |_| {
        if withdrawing.get_untracked() {
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            let confirmed = web_sys::window()
                .and_then(|w| w.confirm_with_message(WITHDRAW_CONFIRM_PROMPT).ok())
                .unwrap_or(false);
            if !confirmed {
                return;
            }
            withdrawing.set(true);
            let api = api.clone();
            let guard = guard.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let result = api.delete_record(PROFILE_RECORD_ID).await;
                match result {
                    Ok(()) => {
                        crate::util::auth::clear_token();
                        auth.set(AuthState::loaded(None));
                        notify(notify_state, Notification::success("Account deleted", "Your account was deleted."));
                        navigate(crate::util::auth::SIGN_IN_PATH, NavigateOptions::default());
                    }
                    Err(err) => {
                        notify(
                            notify_state,
                            Notification::error("Withdrawal failed", err.user_message("Could not delete your account.")),
                        );
                    }
                }
                if guard.is_mounted() {
                    withdrawing.set(false);
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (&api, &guard, &navigate);
    };

    let keys = move || editor.with(|e| e.fields().iter().map(|f| f.key).collect::<Vec<_>>());

    view! {
        <section class="page page--profile">
            <h1 class="page__title">"My profile"</h1>
            <Show when=move || loading.get()>
                <p class="page-loading">"Loading…"</p>
            </Show>
            {move || load_error.get().map(|msg| view! { <p class="page-error">{msg}</p> })}
            <div class="field-list">
                <For each=keys key=|key| *key let:key>
                    <EditableFieldRow editor=editor key=key on_confirm=on_confirm/>
                </For>
            </div>
            <button class="btn btn--danger" disabled=move || withdrawing.get() on:click=on_withdraw>
                "Delete account"
            </button>
        </section>
    }
}
