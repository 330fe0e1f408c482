//! Transient notification banner plus the helper that schedules its dismissal.

#[cfg(test)]
#[path = "snackbar_test.rs"]
mod snackbar_test;

use leptos::prelude::*;

use crate::state::notify::{Notification, NotifyState, Tone};

/// Show `notification` and clear it after [`crate::state::notify::AUTO_DISMISS_MS`]
/// unless something newer replaced it first.
pub fn notify(state: RwSignal<NotifyState>, notification: Notification) {
    let Some(seq) = state.try_update(|s| s.show(notification)) else {
        return;
    };
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(crate::state::notify::AUTO_DISMISS_MS).await;
        state.try_update(|s| s.expire(seq));
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = seq;
}

fn tone_class(tone: Tone) -> &'static str {
    match tone {
        Tone::Info => "snackbar snackbar--info",
        Tone::Success => "snackbar snackbar--success",
        Tone::Error => "snackbar snackbar--error",
    }
}

#[component]
pub fn Snackbar() -> impl IntoView {
    let state = expect_context::<RwSignal<NotifyState>>();

    move || {
        state.with(|s| s.current.clone()).map(|n| {
            view! {
                <div class=tone_class(n.tone) role="status">
                    <strong class="snackbar__title">{n.title}</strong>
                    <span class="snackbar__message">{n.message}</span>
                    <button class="snackbar__close" on:click=move |_| state.update(NotifyState::close)>
                        "×"
                    </button>
                </div>
            }
        })
    }
}
