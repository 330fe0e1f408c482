//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session is nothing more than a bearer token kept in `localStorage`.
//! Route guards read this state to decide when to bounce to the sign-in page.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

/// Authentication state tracking the stored token and whether it has been read yet.
#[derive(Clone, Debug)]
pub struct AuthState {
    pub token: Option<String>,
    /// True until the browser has checked storage. SSR never leaves this state.
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self { token: None, loading: true }
    }
}

impl AuthState {
    pub fn loaded(token: Option<String>) -> Self {
        Self { token: token.filter(|t| !t.is_empty()), loading: false }
    }

    pub fn is_signed_in(&self) -> bool {
        self.token.is_some()
    }
}
