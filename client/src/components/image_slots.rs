//! Thumbnail picker and detail-image grid for the item editor.
//!
//! SYSTEM CONTEXT
//! ==============
//! Renders [`ImageSet::display_sequence`] with a remove button per slot and
//! an upload tile while capacity remains. Server references go through the
//! display-URL transform; local files show their object-URL preview.

use leptos::prelude::*;

use crate::state::image_set::{ImageSet, ImageSource, ThumbnailSlot};
use crate::state::item_form::ItemEdit;
use crate::state::notify::NotifyState;
use crate::util::image_url::display_url;
use crate::util::local_image::LocalImage;

#[cfg(feature = "hydrate")]
use crate::components::snackbar::notify;
#[cfg(feature = "hydrate")]
use crate::state::notify::Notification;

/// Renderable copy of one slot. Keys carry the display index so rows
/// re-render with fresh indices after a removal.
#[derive(Clone, Debug, PartialEq, Eq)]
struct SlotView {
    key: String,
    index: usize,
    src: String,
    local: bool,
}

fn slot_views(images: &ImageSet<LocalImage>, api_base: &str) -> Vec<SlotView> {
    images
        .display_sequence()
        .into_iter()
        .map(|slot| match slot.content {
            ImageSource::Remote(reference) => SlotView {
                key: format!("remote-{}-{reference}", slot.display_index),
                index: slot.display_index,
                src: display_url(Some(reference), api_base),
                local: false,
            },
            ImageSource::Local(image) => SlotView {
                key: format!("local-{}-{}", slot.display_index, image.id()),
                index: slot.display_index,
                src: image.preview_url().to_owned(),
                local: true,
            },
        })
        .collect()
}

fn thumbnail_src(thumbnail: &ThumbnailSlot<LocalImage>, api_base: &str) -> String {
    match thumbnail {
        ThumbnailSlot::Local(image) => image.preview_url().to_owned(),
        ThumbnailSlot::Remote(reference) => display_url(Some(reference), api_base),
        ThumbnailSlot::Empty => display_url(None, api_base),
    }
}

#[component]
pub fn ThumbnailPicker(edit: RwSignal<ItemEdit<LocalImage>, LocalStorage>, api_base: String) -> impl IntoView {
    let src = move || edit.with(|e| thumbnail_src(&e.thumbnail, &api_base));

    let on_change = move |ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            let input = event_target::<web_sys::HtmlInputElement>(&ev);
            let picked = input.files().and_then(|list| list.get(0)).and_then(LocalImage::from_file);
            if let Some(image) = picked {
                edit.update(|e| e.thumbnail.replace(image));
            }
            input.set_value("");
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = ev;
    };

    view! {
        <label class="image-picker image-picker--thumbnail">
            <img class="image-picker__preview" src=src alt="Thumbnail"/>
            <input class="image-picker__input" type="file" accept="image/*" on:change=on_change/>
        </label>
    }
}

#[component]
pub fn DetailImageSlots(edit: RwSignal<ItemEdit<LocalImage>, LocalStorage>, api_base: String) -> impl IntoView {
    let notify_state = expect_context::<RwSignal<NotifyState>>();
    let slots = move || edit.with(|e| slot_views(&e.images, &api_base));
    let counter = move || edit.with(|e| format!("{} / {}", e.images.len(), e.images.max_slots()));
    let can_add = move || edit.with(|e| !e.images.is_full());

    let on_add = move |ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            let input = event_target::<web_sys::HtmlInputElement>(&ev);
            let picked = input.files().map(|list| LocalImage::from_file_list(&list)).unwrap_or_default();
            input.set_value("");
            if let Some(Err(err)) = edit.try_update(|e| e.images.add_local(picked)) {
                notify(notify_state, Notification::error("Too many images", err.to_string()));
            }
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (ev, notify_state);
    };

    view! {
        <div class="image-slots">
            <span class="image-slots__counter">{counter}</span>
            <For each=slots key=|slot| slot.key.clone() let:slot>
                <figure class="image-slots__slot" class:image-slots__slot--local=slot.local>
                    <img src=slot.src.clone() alt="Detail image"/>
                    <button
                        class="image-slots__remove"
                        title="Remove"
                        on:click=move |_| {
                            edit.update(|e| {
                                let _ = e.images.remove_at(slot.index);
                            });
                        }
                    >
                        "×"
                    </button>
                </figure>
            </For>
            <Show when=can_add>
                <label class="image-slots__add">
                    "+"
                    <input type="file" accept="image/*" multiple=true on:change=on_add/>
                </label>
            </Show>
        </div>
    }
}
