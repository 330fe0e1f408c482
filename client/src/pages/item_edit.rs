//! Partner item editor: scalar fields, thumbnail, and up to five detail images.
//!
//! SYSTEM CONTEXT
//! ==============
//! The loaded item seeds an [`ItemEdit`]. Saving sends one multipart `PUT`
//! whose JSON part lists the server images still shown and whose file parts
//! carry only what was attached here. A successful save drops the local
//! files and their previews straight away, then reloads the item to pick up
//! the server's new references.

use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::components::image_slots::{DetailImageSlots, ThumbnailPicker};
use crate::components::item_form_fields::ItemFormFields;
use crate::config::ClientConfig;
use crate::net::api::ItemApi;
use crate::state::auth::AuthState;
use crate::state::item_form::ItemEdit;
use crate::state::notify::NotifyState;
use crate::util::auth::install_unauth_redirect;
use crate::util::lifecycle::MountGuard;
use crate::util::local_image::LocalImage;

#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;

#[cfg(feature = "hydrate")]
use crate::components::snackbar::notify;
#[cfg(feature = "hydrate")]
use crate::net::sync::{MultipartSync, RecordDelete, RecordSource};
#[cfg(feature = "hydrate")]
use crate::state::notify::Notification;

pub const DELETE_CONFIRM_PROMPT: &str = "Delete this item? This cannot be undone.";
#[cfg(feature = "hydrate")]
const LOAD_FAILED_MESSAGE: &str = "Could not load the item.";
#[cfg(feature = "hydrate")]
const SAVE_FAILED_MESSAGE: &str = "Could not save the item.";

/// Signals a load writes into.
#[derive(Clone, Copy)]
#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
struct LoadTargets {
    edit: RwSignal<ItemEdit<LocalImage>, LocalStorage>,
    load_error: RwSignal<Option<String>>,
}

/// Fetch the item and replace the editor contents with the server's copy.
///
/// The response is dropped if the route has moved to another item meanwhile.
#[cfg(feature = "hydrate")]
async fn reload(api: &ItemApi, id: &str, route_id: Memo<String>, targets: LoadTargets, guard: &MountGuard) {
    let result = api.fetch_record(id).await;
    if !guard.is_mounted() || route_id.get_untracked() != id {
        return;
    }
    match result {
        Ok(detail) => {
            targets.edit.set(ItemEdit::loaded(id, &detail));
            targets.load_error.set(None);
        }
        Err(err) => {
            leptos::logging::warn!("item load failed: {err}");
            targets.load_error.set(Some(err.user_message(LOAD_FAILED_MESSAGE)));
        }
    }
}

#[component]
pub fn ItemEditPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let notify_state = expect_context::<RwSignal<NotifyState>>();
    let config = expect_context::<ClientConfig>();
    let api = ItemApi::new(config.clone());
    let navigate = use_navigate();
    install_unauth_redirect(auth, navigate.clone());

    let params = use_params_map();
    let route_id = Memo::new(move |_| params.with(|p| p.get("id")).unwrap_or_default());

    let guard = MountGuard::install();
    let edit = RwSignal::new_local(ItemEdit::<LocalImage>::default());
    let load_error = RwSignal::new(None::<String>);
    let saving = RwSignal::new(false);
    let targets = LoadTargets { edit, load_error };

    // Same-route navigation only swaps the params, so reload whenever the id changes.
    let load_api = api.clone();
    let load_guard = guard.clone();
    Effect::new(move |prev: Option<String>| {
        let id = route_id.get();
        if prev.as_deref() == Some(id.as_str()) {
            return id;
        }
        edit.set(ItemEdit::default());
        load_error.set(None);
        #[cfg(feature = "hydrate")]
        {
            let api = load_api.clone();
            let guard = load_guard.clone();
            let id = id.clone();
            leptos::task::spawn_local(async move {
                reload(&api, &id, route_id, targets, &guard).await;
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (&load_api, &load_guard, targets);
        id
    });

    let save_api = api.clone();
    let save_guard = guard.clone();
    let on_save = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if saving.get_untracked() {
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            let Some(id) = edit.with_untracked(|e| e.record_id().map(str::to_owned)) else {
                return;
            };
            let (form, files) = match edit.with_untracked(|e| e.submission(LocalImage::file)) {
                Ok(prepared) => prepared,
                Err(err) => {
                    notify(notify_state, Notification::error("Check the form", err.to_string()));
                    return;
                }
            };
            saving.set(true);
            let api = save_api.clone();
            let guard = save_guard.clone();
            leptos::task::spawn_local(async move {
                let result = api.update_record_multipart(&id, &form, files).await;
                if !guard.is_mounted() {
                    return;
                }
                match result {
                    Ok(()) => {
                        if edit.with_untracked(|e| e.is_for(&id)) {
                            edit.update(ItemEdit::mark_submitted);
                        }
                        notify(notify_state, Notification::success("Saved", "The item was updated."));
                        reload(&api, &id, route_id, targets, &guard).await;
                    }
                    Err(err) => {
                        leptos::logging::warn!("item save failed: {err}");
                        notify(notify_state, Notification::error("Save failed", err.user_message(SAVE_FAILED_MESSAGE)));
                    }
                }
                saving.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (&save_api, &save_guard, notify_state);
    };

    let on_delete = move |_| {
        if saving.get_untracked() {
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            let Some(id) = edit.with_untracked(|e| e.record_id().map(str::to_owned)) else {
                return;
            };
            let confirmed = web_sys::window()
                .and_then(|w| w.confirm_with_message(DELETE_CONFIRM_PROMPT).ok())
                .unwrap_or(false);
            if !confirmed {
                return;
            }
            saving.set(true);
            let api = api.clone();
            let guard = guard.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let result = api.delete_record(&id).await;
                if !guard.is_mounted() {
                    return;
                }
                match result {
                    Ok(()) => {
                        notify(notify_state, Notification::success("Deleted", "The item was deleted."));
                        navigate(super::item_new::NEW_ITEM_PATH, NavigateOptions::default());
                    }
                    Err(err) => {
                        notify(
                            notify_state,
                            Notification::error("Delete failed", err.user_message("Could not delete the item.")),
                        );
                        saving.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (&api, &guard, &navigate);
    };

    let ready = move || edit.with(|e| e.record_id().is_some());

    view! {
        <section class="page page--item-edit">
            <h1 class="page__title">"Edit item"</h1>
            {move || load_error.get().map(|msg| view! { <p class="page-error">{msg}</p> })}
            <form class="item-editor" on:submit=on_save>
                <div class="item-editor__images">
                    <span class="form-field__label">"Thumbnail"</span>
                    <ThumbnailPicker edit=edit api_base=config.api_base.clone()/>
                    <span class="form-field__label">"Detail images"</span>
                    <DetailImageSlots edit=edit api_base=config.api_base.clone()/>
                </div>
                <ItemFormFields edit=edit/>
                <div class="item-editor__actions">
                    <button class="btn btn--primary" type="submit" disabled=move || saving.get() || !ready()>
                        {move || if saving.get() { "Saving…" } else { "Save changes" }}
                    </button>
                    <button class="btn btn--danger" type="button" disabled=move || saving.get() || !ready() on:click=on_delete>
                        "Delete item"
                    </button>
                </div>
            </form>
        </section>
    }
}
