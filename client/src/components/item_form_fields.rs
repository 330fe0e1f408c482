//! Scalar item fields shared by the create and edit pages.
//!
//! Owns category loading: top-level categories once on mount, and the
//! sub-category list again whenever the chosen category changes.

use leptos::prelude::*;

use crate::config::ClientConfig;
use crate::net::types::{Category, ItemStatus};
use crate::state::item_form::{ItemEdit, ItemForm, parse_id_input, parse_number_input};
use crate::util::lifecycle::MountGuard;
use crate::util::local_image::LocalImage;

#[component]
pub fn ItemFormFields(edit: RwSignal<ItemEdit<LocalImage>, LocalStorage>) -> impl IntoView {
    let config = expect_context::<ClientConfig>();
    let guard = MountGuard::install();
    let categories = RwSignal::new(Vec::<Category>::new());
    let subcategories = RwSignal::new(Vec::<Category>::new());

    #[cfg(feature = "hydrate")]
    {
        let config = config.clone();
        let guard = guard.clone();
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_categories(&config).await {
                Ok(list) if guard.is_mounted() => categories.set(list),
                Ok(_) => {}
                Err(err) => leptos::logging::warn!("category load failed: {err}"),
            }
        });
    }

    Effect::new(move |prev: Option<Option<i64>>| {
        let category = edit.with(|e| e.form.category_id);
        if prev == Some(category) {
            return category;
        }
        subcategories.set(Vec::new());
        #[cfg(feature = "hydrate")]
        if let Some(category_id) = category {
            let config = config.clone();
            let guard = guard.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::fetch_subcategories(&config, category_id).await {
                    Ok(list) if guard.is_mounted() => subcategories.set(list),
                    Ok(_) => {}
                    Err(err) => leptos::logging::warn!("sub-category load failed: {err}"),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (&config, &guard);
        category
    });

    let text_input = move |label: &'static str, get: fn(&ItemForm) -> String, set: fn(&mut ItemForm, String)| {
        view! {
            <label class="form-field">
                <span class="form-field__label">{label}</span>
                <input
                    class="form-field__input"
                    type="text"
                    prop:value=move || edit.with(|e| get(&e.form))
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        edit.update(|e| set(&mut e.form, value));
                    }
                />
            </label>
        }
    };
    let number_input = move |label: &'static str, get: fn(&ItemForm) -> i64, set: fn(&mut ItemForm, i64)| {
        view! {
            <label class="form-field">
                <span class="form-field__label">{label}</span>
                <input
                    class="form-field__input"
                    type="number"
                    min="0"
                    prop:value=move || edit.with(|e| get(&e.form).to_string())
                    on:input=move |ev| {
                        if let Some(value) = parse_number_input(&event_target_value(&ev)) {
                            edit.update(|e| set(&mut e.form, value));
                        }
                    }
                />
            </label>
        }
    };

    view! {
        <div class="item-form">
            {text_input("Item name", |f| f.name.clone(), |f, v| f.name = v)}
            <label class="form-field">
                <span class="form-field__label">"Category"</span>
                <select
                    class="form-field__input"
                    on:change=move |ev| {
                        let id = parse_id_input(&event_target_value(&ev));
                        edit.update(|e| e.form.set_category(id));
                    }
                >
                    <option value="">"Select a category"</option>
                    <For each=move || categories.get() key=|c| c.id let:category>
                        <option
                            value=category.id.to_string()
                            selected=move || edit.with(|e| e.form.category_id == Some(category.id))
                        >
                            {category.name}
                        </option>
                    </For>
                </select>
            </label>
            <label class="form-field">
                <span class="form-field__label">"Sub-category"</span>
                <select
                    class="form-field__input"
                    disabled=move || subcategories.with(Vec::is_empty)
                    on:change=move |ev| {
                        let id = parse_id_input(&event_target_value(&ev));
                        edit.update(|e| e.form.sub_category_id = id);
                    }
                >
                    <option value="">"Select a sub-category"</option>
                    <For each=move || subcategories.get() key=|c| c.id let:category>
                        <option
                            value=category.id.to_string()
                            selected=move || edit.with(|e| e.form.sub_category_id == Some(category.id))
                        >
                            {category.name}
                        </option>
                    </For>
                </select>
            </label>
            {number_input("Daily price", |f| f.daily_price, |f, v| f.daily_price = v)}
            {number_input("Stock quantity", |f| f.stock_quantity, |f, v| f.stock_quantity = v)}
            {text_input("Summary", |f| f.description.clone(), |f, v| f.description = v)}
            <label class="form-field">
                <span class="form-field__label">"Detailed description"</span>
                <textarea
                    class="form-field__input form-field__input--multiline"
                    prop:value=move || edit.with(|e| e.form.detail_description.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        edit.update(|e| e.form.detail_description = value);
                    }
                ></textarea>
            </label>
            <label class="form-field">
                <span class="form-field__label">"Status"</span>
                <select
                    class="form-field__input"
                    on:change=move |ev| {
                        let status = ItemStatus::from_wire(&event_target_value(&ev));
                        edit.update(|e| e.form.status = status);
                    }
                >
                    {[ItemStatus::Available, ItemStatus::Unavailable]
                        .into_iter()
                        .map(|status| {
                            view! {
                                <option
                                    value=status.as_wire()
                                    selected=move || edit.with(|e| e.form.status == status)
                                >
                                    {status.as_wire()}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
            </label>
        </div>
    }
}
