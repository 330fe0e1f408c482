//! Client configuration resolved at build time.
//!
//! The WASM bundle cannot read the process environment, so the REST base URL
//! is baked in from `RENTEX_API_BASE` when the crate is compiled.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_BASE: &str = "http://localhost:8080/api";

/// Suffix stripped from the API base to reach the server root (uploads, OAuth).
const API_PATH_SUFFIX: &str = "/api";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    /// REST API base URL without a trailing slash.
    pub api_base: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::from_build_env()
    }
}

impl ClientConfig {
    /// Build config from `RENTEX_API_BASE`, falling back to [`DEFAULT_API_BASE`].
    pub fn from_build_env() -> Self {
        Self::with_api_base(option_env!("RENTEX_API_BASE").unwrap_or(DEFAULT_API_BASE))
    }

    pub fn with_api_base(raw: &str) -> Self {
        let trimmed = raw.trim();
        let base = if trimmed.is_empty() { DEFAULT_API_BASE } else { trimmed };
        Self { api_base: base.trim_end_matches('/').to_owned() }
    }

    /// Server origin: the API base with a trailing `/api` removed.
    pub fn server_base(&self) -> &str {
        server_base_of(&self.api_base)
    }

    /// Absolute URL for an API path such as `/users/me`.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.api_base)
    }

    /// Browser redirect target for an OAuth provider login.
    pub fn oauth_url(&self, provider: &str) -> String {
        format!("{}/oauth2/authorization/{provider}", self.server_base())
    }
}

pub(crate) fn server_base_of(api_base: &str) -> &str {
    let base = api_base.trim_end_matches('/');
    base.strip_suffix(API_PATH_SUFFIX).unwrap_or(base)
}
