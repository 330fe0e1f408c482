//! One row of the inline profile editor: label, value, and edit controls.
//!
//! The row is a pure view over a shared [`FieldEditor`]; it never holds its
//! own copy of the draft, so switching rows can't leave a stale buffer behind.

use leptos::prelude::*;

use crate::state::field_editor::{FieldEditor, FieldKind};
use crate::state::profile::empty_hint;

fn input_type(kind: FieldKind) -> &'static str {
    match kind {
        FieldKind::Phone => "tel",
        FieldKind::Number => "number",
        FieldKind::Text => "text",
    }
}

#[component]
pub fn EditableFieldRow(
    editor: RwSignal<FieldEditor>,
    key: &'static str,
    /// Fired when the user confirms this row's draft.
    on_confirm: Callback<()>,
) -> impl IntoView {
    let label = move || editor.with(|e| e.field(key).map(|f| f.label.clone()).unwrap_or_default());
    let kind = move || editor.with(|e| e.field(key).map(|f| f.kind).unwrap_or_default());
    let editing = move || editor.with(|e| e.is_editing(key));
    let submitting = move || editor.with(|e| e.is_pending(key));

    let view_value = move || {
        editor.with(|e| {
            e.field(key).map(|f| match empty_hint(&f.committed) {
                Some(hint) => view! { <span class="field-row__value field-row__value--empty">{hint}</span> }.into_any(),
                None => view! { <span class="field-row__value">{f.display_value()}</span> }.into_any(),
            })
        })
    };

    let on_input = move |ev| {
        let raw = event_target_value(&ev);
        editor.update(|e| {
            let _ = e.set_draft(&raw);
        });
    };
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| match ev.key().as_str() {
        "Enter" => {
            ev.prevent_default();
            on_confirm.run(());
        }
        "Escape" => {
            ev.prevent_default();
            editor.update(|e| {
                e.cancel();
            });
        }
        _ => {}
    };

    view! {
        <div class="field-row">
            <span class="field-row__label">{label}</span>
            <Show
                when=editing
                fallback=move || {
                    view! {
                        {view_value}
                        <button
                            class="btn field-row__edit"
                            disabled=submitting
                            on:click=move |_| {
                                editor.update(|e| {
                                    let _ = e.begin_edit(key);
                                });
                            }
                        >
                            "Edit"
                        </button>
                    }
                }
            >
                <input
                    class="field-row__input"
                    type=move || input_type(kind())
                    prop:value=move || editor.with(|e| e.draft().unwrap_or_default().to_owned())
                    disabled=submitting
                    on:input=on_input
                    on:keydown=on_keydown
                />
                <button class="btn btn--primary" disabled=submitting on:click=move |_| on_confirm.run(())>
                    {move || if submitting() { "Saving…" } else { "Save" }}
                </button>
                <button
                    class="btn"
                    disabled=submitting
                    on:click=move |_| {
                        editor.update(|e| {
                            e.cancel();
                        });
                    }
                >
                    "Cancel"
                </button>
            </Show>
        </div>
    }
}
