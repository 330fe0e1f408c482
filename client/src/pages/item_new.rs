//! New item registration form.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::image_slots::ThumbnailPicker;
use crate::components::item_form_fields::ItemFormFields;
use crate::components::snackbar::notify;
use crate::config::ClientConfig;
use crate::state::auth::AuthState;
use crate::state::item_form::ItemEdit;
use crate::state::notify::{Notification, NotifyState};
use crate::util::auth::install_unauth_redirect;
use crate::util::lifecycle::MountGuard;
use crate::util::local_image::LocalImage;

pub const NEW_ITEM_PATH: &str = "/partner/items/new";

#[component]
pub fn ItemNewPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let notify_state = expect_context::<RwSignal<NotifyState>>();
    let config = expect_context::<ClientConfig>();
    install_unauth_redirect(auth, use_navigate());

    let guard = MountGuard::install();
    let edit = RwSignal::new_local(ItemEdit::<LocalImage>::default());
    let saving = RwSignal::new(false);

    let submit_config = config.clone();
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if saving.get_untracked() {
            return;
        }
        if let Err(err) = edit.with_untracked(|e| e.form.validate()) {
            notify(notify_state, Notification::error("Check the form", err.to_string()));
            return;
        }
        saving.set(true);
        #[cfg(feature = "hydrate")]
        {
            let config = submit_config.clone();
            let guard = guard.clone();
            let (form, thumbnail) = edit.with_untracked(|e| (e.form.clone(), e.thumbnail.pending_upload().map(LocalImage::file)));
            leptos::task::spawn_local(async move {
                let result = crate::net::api::create_item(&config, &form, thumbnail).await;
                if !guard.is_mounted() {
                    return;
                }
                match result {
                    Ok(()) => {
                        notify(notify_state, Notification::success("Registered", "The item was registered."));
                        edit.set(ItemEdit::default());
                    }
                    Err(err) => {
                        leptos::logging::warn!("item create failed: {err}");
                        notify(
                            notify_state,
                            Notification::error("Registration failed", err.user_message("Could not register the item.")),
                        );
                    }
                }
                saving.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (&submit_config, &guard);
    };

    view! {
        <section class="page page--item-new">
            <h1 class="page__title">"Register an item"</h1>
            <form class="item-editor" on:submit=on_submit>
                <div class="item-editor__images">
                    <span class="form-field__label">"Thumbnail"</span>
                    <ThumbnailPicker edit=edit api_base=config.api_base.clone()/>
                </div>
                <ItemFormFields edit=edit/>
                <div class="item-editor__actions">
                    <button class="btn btn--primary" type="submit" disabled=move || saving.get()>
                        {move || if saving.get() { "Registering…" } else { "Register" }}
                    </button>
                </div>
            </form>
        </section>
    }
}
