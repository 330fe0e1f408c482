//! Bearer-token storage and the signed-out redirect guard.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session is a single string under `accessToken` in `localStorage`.
//! Every REST call reads it, and every guarded page installs the same
//! redirect so signed-out users land on the sign-in screen.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::auth::AuthState;

/// `localStorage` key holding the bearer token.
#[cfg(any(test, feature = "hydrate"))]
const TOKEN_KEY: &str = "accessToken";

pub const SIGN_IN_PATH: &str = "/authentication/sign-in";

/// Read the stored token, if any.
pub fn load_token() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
        storage.get_item(TOKEN_KEY).ok().flatten().filter(|t| !t.is_empty())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

pub fn store_token(token: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.set_item(TOKEN_KEY, token);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
    }
}

pub fn clear_token() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.remove_item(TOKEN_KEY);
        }
    }
}

/// `Authorization` header value for a stored token.
pub fn bearer_header(token: &str) -> String {
    format!("Bearer {token}")
}

/// Pull the token out of an `Authorization: Bearer ...` response header.
pub fn token_from_authorization(header: &str) -> Option<&str> {
    let token = header.trim().strip_prefix("Bearer ")?.trim();
    (!token.is_empty()).then_some(token)
}

/// Only redirect once storage has been checked; SSR stays in the loading state.
pub fn should_redirect_unauth(state: &AuthState) -> bool {
    !state.loading && !state.is_signed_in()
}

/// Redirect to the sign-in page whenever auth has loaded without a token.
pub fn install_unauth_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if should_redirect_unauth(&auth.get()) {
            navigate(SIGN_IN_PATH, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });
}
