//! Rental checkout: confirms dates and quantity, shows the total, and submits
//! the paid rental request.
//!
//! The checkout arrives as `?item=&start=&end=&qty=`; the item itself is
//! fetched so the price shown is the server's, not whatever the link carried.
//! A completed payment leaves the summary on screen as the receipt.

use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::components::snackbar::notify;
use crate::config::ClientConfig;
use crate::net::types::ItemDetail;
use crate::state::auth::AuthState;
use crate::state::notify::{Notification, NotifyState};
use crate::state::rental::{Checkout, PAY_DONE_MESSAGE, PayPhase};
use crate::util::auth::install_unauth_redirect;
use crate::util::image_url::display_url;
use crate::util::lifecycle::MountGuard;

#[component]
pub fn RentalPayPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let notify_state = expect_context::<RwSignal<NotifyState>>();
    let config = expect_context::<ClientConfig>();
    install_unauth_redirect(auth, use_navigate());

    let query = use_query_map();
    let checkout = Memo::new(move |_| query.with(|q| Checkout::from_query(|key| q.get(key))));

    let guard = MountGuard::install();
    let item = RwSignal::new(None::<ItemDetail>);
    let agreed = RwSignal::new(false);
    let phase = RwSignal::new(PayPhase::default());

    #[cfg(feature = "hydrate")]
    if let Some(item_id) = checkout.get_untracked().map(|c| c.item_id) {
        let config = config.clone();
        let guard = guard.clone();
        leptos::task::spawn_local(async move {
            let result = crate::net::api::fetch_public_item(&config, item_id).await;
            if !guard.is_mounted() {
                return;
            }
            match result {
                Ok(detail) => item.set(Some(detail)),
                Err(err) => notify(notify_state, Notification::error("Item unavailable", err.user_message("Could not load the item."))),
            }
        });
    }

    let pay_config = config.clone();
    let on_pay = move |_| {
        if !phase.get_untracked().can_pay(agreed.get_untracked(), item.with_untracked(Option::is_some)) {
            return;
        }
        let (Some(checkout), Some(price)) = (checkout.get_untracked(), item.with_untracked(|i| i.as_ref().map(|d| d.daily_price)))
        else {
            return;
        };
        phase.set(PayPhase::Paying);
        notify(notify_state, Notification::info("Processing payment", "Please wait a moment."));
        #[cfg(feature = "hydrate")]
        {
            let config = pay_config.clone();
            let guard = guard.clone();
            let request = checkout.request(price);
            leptos::task::spawn_local(async move {
                let result = crate::net::api::request_rental(&config, &request).await;
                if !guard.is_mounted() {
                    return;
                }
                phase.update(|p| *p = p.settle(result.is_ok()));
                match result {
                    Ok(()) => {
                        notify(notify_state, Notification::success("Payment complete", PAY_DONE_MESSAGE));
                    }
                    Err(err) => {
                        let message = err.user_message(crate::state::rental::PAY_FAILED_MESSAGE);
                        let blocked = crate::state::rental::is_penalty_block(&message);
                        notify(notify_state, Notification::error("Payment failed", message));
                        if !blocked {
                            if let Some(history) = web_sys::window().and_then(|w| w.history().ok()) {
                                let _ = history.back();
                            }
                        }
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (&pay_config, &guard, checkout, price);
    };

    let summary = move || {
        let checkout = checkout.get()?;
        let detail = item.get()?;
        let days = checkout.days();
        let amount = checkout.amount(detail.daily_price);
        let category = format!(
            "{} / {}",
            detail.category_name.as_deref().unwrap_or("-"),
            detail.sub_category_name.as_deref().unwrap_or("-")
        );
        Some(view! {
            <div class="checkout">
                <div class="checkout__item">
                    <img
                        class="checkout__thumbnail"
                        src=display_url(detail.thumbnail_url.as_deref(), &config.api_base)
                        alt=detail.name.clone().unwrap_or_default()
                    />
                    <h2>{detail.name.clone().unwrap_or_default()}</h2>
                    <p class="checkout__muted">{category}</p>
                    <p>{format!("Daily price: {}", detail.daily_price)}</p>
                </div>
                <div class="checkout__payment">
                    <p>{format!("Rental period: {} ~ {}", checkout.start_date, checkout.end_date)}</p>
                    <p>{format!("Days: {days}")}</p>
                    <p>{format!("Quantity: {}", checkout.quantity)}</p>
                    <p class="checkout__total">{format!("Total: {amount}")}</p>
                </div>
            </div>
        })
    };

    view! {
        <section class="page page--rental-pay">
            <Show
                when=move || checkout.with(Option::is_some)
                fallback=|| view! { <p class="page-error">"Invalid checkout link."</p> }
            >
                {summary.clone()}
                <Show when=move || phase.get() == PayPhase::Paid>
                    <p class="checkout__done">{PAY_DONE_MESSAGE}</p>
                </Show>
                <label class="checkbox">
                    <input
                        type="checkbox"
                        prop:checked=move || agreed.get()
                        on:change=move |ev| agreed.set(event_target_checked(&ev))
                    />
                    "I agree to proceed with the payment."
                </label>
                <button
                    class="btn btn--primary"
                    disabled=move || !phase.get().can_pay(agreed.get(), item.with(Option::is_some))
                    on:click=on_pay.clone()
                >
                    {move || match phase.get() {
                        PayPhase::Ready => "Pay",
                        PayPhase::Paying => "Paying…",
                        PayPhase::Paid => "Paid",
                    }}
                </button>
            </Show>
        </section>
    }
}
