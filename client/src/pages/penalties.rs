//! Penalty history with the accumulated total and rental-block status.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::config::ClientConfig;
use crate::state::auth::AuthState;
use crate::state::penalty::{BLOCK_THRESHOLD, PenaltySummary};
use crate::util::auth::install_unauth_redirect;
use crate::util::lifecycle::MountGuard;

#[component]
pub fn PenaltyPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let config = expect_context::<ClientConfig>();
    install_unauth_redirect(auth, use_navigate());

    let guard = MountGuard::install();
    let summary = RwSignal::new(PenaltySummary::default());
    let loading = RwSignal::new(true);
    let load_error = RwSignal::new(None::<String>);
    let updated_at = RwSignal::new(None::<String>);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let result = crate::net::api::fetch_penalties(&config).await;
        if !guard.is_mounted() {
            return;
        }
        match result {
            Ok(response) => {
                summary.set(PenaltySummary::from_response(&response));
                // JS reports the offset west-positive.
                let now = js_sys::Date::new_0();
                #[allow(clippy::cast_possible_truncation)]
                let (millis, offset) = (now.get_time() as i64, -(now.get_timezone_offset() as i32));
                updated_at.set(crate::state::penalty::updated_at_label(millis, offset));
            }
            Err(err) => {
                leptos::logging::warn!("penalty load failed: {err}");
                load_error.set(Some(err.user_message("Could not load your penalty history.")));
                summary.set(PenaltySummary::default());
            }
        }
        loading.set(false);
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = (config, guard);

    let header_class = move || {
        if summary.with(PenaltySummary::is_blocked) { "penalty-header penalty-header--blocked" } else { "penalty-header" }
    };
    let total_label = move || {
        if loading.get() { "Penalty points: loading…".to_owned() } else { format!("Penalty points: {}", summary.with(|s| s.total)) }
    };
    let rows = move || summary.with(|s| s.rows.iter().cloned().enumerate().collect::<Vec<_>>());

    view! {
        <section class="page page--penalties">
            <div class=header_class>
                <h1 class="page__title">{total_label}</h1>
                <Show when=move || summary.with(PenaltySummary::is_blocked)>
                    <span class="penalty-header__badge">
                        {format!("Rentals blocked ({BLOCK_THRESHOLD} or more points)")}
                    </span>
                </Show>
            </div>
            <Show when=move || !loading.get()>
                {move || updated_at.get().map(|stamp| view! { <p class="page-caption">{stamp}</p> })}
            </Show>
            {move || load_error.get().map(|msg| view! { <p class="page-error">{msg}</p> })}
            <Show
                when=move || loading.get() || summary.with(|s| !s.rows.is_empty())
                fallback=|| {
                    view! {
                        <div class="empty-state">
                            <strong>"No penalties"</strong>
                            <p>"Penalties assigned for late or damaged returns will appear here."</p>
                        </div>
                    }
                }
            >
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"Reason"</th>
                            <th>"Date"</th>
                            <th>"Note"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For each=rows key=|(idx, _)| *idx let:entry>
                            <tr>
                                <td>{entry.1.reason}</td>
                                <td class="data-table__center">{entry.1.date}</td>
                                <td>{entry.1.note}</td>
                            </tr>
                        </For>
                    </tbody>
                </table>
            </Show>
        </section>
    }
}
