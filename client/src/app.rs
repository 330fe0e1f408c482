//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::components::{A, Redirect, Route, Router, Routes};
use leptos_router::{ParamSegment, StaticSegment};

use crate::components::snackbar::Snackbar;
use crate::config::ClientConfig;
use crate::pages::item_edit::ItemEditPage;
use crate::pages::item_new::ItemNewPage;
use crate::pages::login::{HOME_PATH, LoginPage, OAuthRedirectPage};
use crate::pages::penalties::PenaltyPage;
use crate::pages::profile::ProfilePage;
use crate::pages::rental_pay::RentalPayPage;
use crate::state::auth::AuthState;
use crate::state::notify::NotifyState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides shared state contexts, reads the stored token once hydrated, and
/// sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    let notify = RwSignal::new(NotifyState::default());
    provide_context(auth);
    provide_context(notify);
    provide_context(ClientConfig::from_build_env());

    // Effects only run in the browser, so SSR keeps `loading` and never redirects.
    Effect::new(move || {
        auth.set(AuthState::loaded(crate::util::auth::load_token()));
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/rentex-admin.css"/>
        <Title text="Rentex Admin"/>

        <Router>
            <NavBar/>
            <main class="app-main">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=|| view! { <Redirect path=HOME_PATH/> }/>
                    <Route path=(StaticSegment("authentication"), StaticSegment("sign-in")) view=LoginPage/>
                    <Route path=StaticSegment("oauth-redirect") view=OAuthRedirectPage/>
                    <Route path=(StaticSegment("mypage"), StaticSegment("edit")) view=ProfilePage/>
                    <Route path=(StaticSegment("mypage"), StaticSegment("penalty")) view=PenaltyPage/>
                    <Route path=(StaticSegment("rentals"), StaticSegment("pay")) view=RentalPayPage/>
                    <Route
                        path=(StaticSegment("partner"), StaticSegment("items"), StaticSegment("new"))
                        view=ItemNewPage
                    />
                    <Route
                        path=(StaticSegment("partner"), StaticSegment("items"), ParamSegment("id"))
                        view=ItemEditPage
                    />
                </Routes>
            </main>
            <Snackbar/>
        </Router>
    }
}

/// Top navigation; shows the sign-out action only with a session.
#[component]
fn NavBar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    let on_sign_out = move |_| {
        crate::util::auth::clear_token();
        auth.set(AuthState::loaded(None));
    };

    view! {
        <nav class="nav-bar">
            <span class="nav-bar__brand">"Rentex"</span>
            <Show when=move || auth.with(AuthState::is_signed_in)>
                <A href="/mypage/edit">"Profile"</A>
                <A href="/mypage/penalty">"Penalties"</A>
                <A href="/partner/items/new">"New item"</A>
                <button class="btn nav-bar__sign-out" on:click=on_sign_out>"Sign out"</button>
            </Show>
        </nav>
    }
}
