//! REST adapters for the rental API.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, carrying the stored
//! bearer token on every request.
//! Server-side (SSR): stubs returning an error, since these endpoints are only
//! meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<_, SyncError>`. Non-success statuses are
//! classified by [`SyncError::from_status`] with whatever message the server
//! put in the body, so pages can show it verbatim.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

#[cfg(feature = "hydrate")]
use serde::Serialize;
#[cfg(feature = "hydrate")]
use serde::de::DeserializeOwned;

use super::error::SyncError;
use super::sync::{FieldSync, MultipartFiles, MultipartSync, RecordDelete, RecordSource};
use super::types::{Category, ItemDetail, PenaltyResponse, Profile, RentalRequest};
use crate::config::ClientConfig;
use crate::state::field_editor::FieldUpdate;
use crate::state::item_form::ItemForm;

/// Browser file handle uploaded as a multipart part.
#[cfg(feature = "hydrate")]
pub type UploadFile = web_sys::File;
/// Server builds never upload, so the handle collapses to unit.
#[cfg(not(feature = "hydrate"))]
pub type UploadFile = ();

#[cfg(not(feature = "hydrate"))]
const SERVER_UNAVAILABLE: &str = "not available on server";

#[cfg(any(test, feature = "hydrate"))]
const LOGIN_PATH: &str = "/auth/login";
#[cfg(any(test, feature = "hydrate"))]
const RESET_REQUEST_PATH: &str = "/auth/password-reset/request";
#[cfg(any(test, feature = "hydrate"))]
const RESET_VERIFY_PATH: &str = "/auth/password-reset/verify";
#[cfg(any(test, feature = "hydrate"))]
const NEW_ITEM_PATH: &str = "/partner/items/new";
#[cfg(any(test, feature = "hydrate"))]
const PENALTIES_PATH: &str = "/penalties/me";
#[cfg(any(test, feature = "hydrate"))]
const RENTAL_REQUEST_PATH: &str = "/rentals/request";
#[cfg(any(test, feature = "hydrate"))]
const CATEGORIES_PATH: &str = "/categories";

#[cfg(any(test, feature = "hydrate"))]
fn user_endpoint(id: &str) -> String {
    format!("/users/{id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn partner_item_endpoint(id: &str) -> String {
    format!("/partner/items/{id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn public_item_endpoint(id: i64) -> String {
    format!("/items/{id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn subcategories_endpoint(category_id: i64) -> String {
    format!("/categories/{category_id}/subcategories")
}

/// Find the session token in a login response.
///
/// The `Authorization: Bearer` header wins; older servers put the token in the
/// body as `accessToken`, `token`, or the bare body itself.
#[cfg(any(test, feature = "hydrate"))]
fn token_from_login_response(authorization: Option<&str>, body: &str) -> Option<String> {
    if let Some(token) = authorization.and_then(crate::util::auth::token_from_authorization) {
        return Some(token.to_owned());
    }
    let trimmed = body.trim();
    let token = match serde_json::from_str::<serde_json::Value>(trimmed) {
        Ok(serde_json::Value::Object(map)) => ["accessToken", "token"]
            .iter()
            .find_map(|key| map.get(*key).and_then(serde_json::Value::as_str))
            .map(str::to_owned),
        Ok(serde_json::Value::String(text)) => Some(text),
        Ok(_) => None,
        Err(_) if !trimmed.contains(char::is_whitespace) => Some(trimmed.to_owned()),
        Err(_) => None,
    };
    token.filter(|t| !t.trim().is_empty())
}

#[cfg(feature = "hydrate")]
fn with_auth(builder: gloo_net::http::RequestBuilder) -> gloo_net::http::RequestBuilder {
    match crate::util::auth::load_token() {
        Some(token) => builder.header("Authorization", &crate::util::auth::bearer_header(&token)),
        None => builder,
    }
}

#[cfg(feature = "hydrate")]
fn network_error(err: gloo_net::Error) -> SyncError {
    SyncError::Network(err.to_string())
}

#[cfg(feature = "hydrate")]
fn js_error(err: wasm_bindgen::JsValue) -> SyncError {
    SyncError::Encode(format!("{err:?}"))
}

/// Turn a non-success response into a classified error.
#[cfg(feature = "hydrate")]
async fn expect_ok(resp: gloo_net::http::Response) -> Result<gloo_net::http::Response, SyncError> {
    if resp.ok() {
        return Ok(resp);
    }
    let status = resp.status();
    let body = resp.text().await.unwrap_or_default();
    Err(SyncError::from_status(status, super::error::extract_server_message(&body)))
}

#[cfg(feature = "hydrate")]
async fn send(request: gloo_net::http::Request) -> Result<gloo_net::http::Response, SyncError> {
    let resp = request.send().await.map_err(network_error)?;
    expect_ok(resp).await
}

#[cfg(feature = "hydrate")]
async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, SyncError> {
    let request = with_auth(gloo_net::http::Request::get(url)).build().map_err(network_error)?;
    let resp = send(request).await?;
    resp.json::<T>().await.map_err(|e| SyncError::Network(format!("invalid response body: {e}")))
}

#[cfg(feature = "hydrate")]
async fn post_json<B: Serialize>(url: &str, body: &B) -> Result<gloo_net::http::Response, SyncError> {
    let request = with_auth(gloo_net::http::Request::post(url))
        .json(body)
        .map_err(|e| SyncError::Encode(e.to_string()))?;
    send(request).await
}

/// JSON value wrapped as an `application/json` blob part.
#[cfg(feature = "hydrate")]
fn json_blob<T: Serialize>(value: &T) -> Result<web_sys::Blob, SyncError> {
    let json = serde_json::to_string(value).map_err(|e| SyncError::Encode(e.to_string()))?;
    let parts = js_sys::Array::of1(&wasm_bindgen::JsValue::from_str(&json));
    let options = web_sys::BlobPropertyBag::new();
    options.set_type("application/json");
    web_sys::Blob::new_with_str_sequence_and_options(&parts, &options).map_err(js_error)
}

#[cfg(feature = "hydrate")]
fn append_file(form: &web_sys::FormData, name: &str, file: &web_sys::File) -> Result<(), SyncError> {
    form.append_with_blob_and_filename(name, file, &file.name()).map_err(js_error)
}

// =============================================================================
// Auth
// =============================================================================

/// Sign in with email and password, returning the session token.
///
/// # Errors
///
/// Returns the server's rejection, a transport failure, or
/// [`SyncError::MissingToken`] when the response carried no token.
pub async fn login(config: &ClientConfig, email: &str, password: &str) -> Result<String, SyncError> {
    #[cfg(feature = "hydrate")]
    {
        let body = super::types::LoginRequest { email, password };
        let resp = post_json(&config.endpoint(LOGIN_PATH), &body).await?;
        let authorization = resp.headers().get("authorization");
        let text = resp.text().await.unwrap_or_default();
        token_from_login_response(authorization.as_deref(), &text).ok_or(SyncError::MissingToken)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, email, password);
        Err(SyncError::Network(SERVER_UNAVAILABLE.to_owned()))
    }
}

/// Ask the server to email a password reset code.
///
/// # Errors
///
/// Returns the server's rejection or a transport failure.
pub async fn request_password_reset(config: &ClientConfig, email: &str) -> Result<(), SyncError> {
    #[cfg(feature = "hydrate")]
    {
        let body = serde_json::json!({ "email": email });
        post_json(&config.endpoint(RESET_REQUEST_PATH), &body).await.map(drop)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, email);
        Err(SyncError::Network(SERVER_UNAVAILABLE.to_owned()))
    }
}

/// Submit the emailed code together with the new password.
///
/// # Errors
///
/// Returns the server's rejection or a transport failure.
pub async fn verify_password_reset(
    config: &ClientConfig,
    email: &str,
    code: &str,
    new_password: &str,
) -> Result<(), SyncError> {
    #[cfg(feature = "hydrate")]
    {
        let body = super::types::PasswordResetVerify { email, code, new_password };
        post_json(&config.endpoint(RESET_VERIFY_PATH), &body).await.map(drop)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, email, code, new_password);
        Err(SyncError::Network(SERVER_UNAVAILABLE.to_owned()))
    }
}

// =============================================================================
// Catalog
// =============================================================================

/// Top-level item categories.
///
/// # Errors
///
/// Returns the server's rejection or a transport failure.
pub async fn fetch_categories(config: &ClientConfig) -> Result<Vec<Category>, SyncError> {
    #[cfg(feature = "hydrate")]
    {
        get_json(&config.endpoint(CATEGORIES_PATH)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = config;
        Err(SyncError::Network(SERVER_UNAVAILABLE.to_owned()))
    }
}

/// Sub-categories under `category_id`.
///
/// # Errors
///
/// Returns the server's rejection or a transport failure.
pub async fn fetch_subcategories(config: &ClientConfig, category_id: i64) -> Result<Vec<Category>, SyncError> {
    #[cfg(feature = "hydrate")]
    {
        get_json(&config.endpoint(&subcategories_endpoint(category_id))).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, category_id);
        Err(SyncError::Network(SERVER_UNAVAILABLE.to_owned()))
    }
}

/// Register a new item. The form goes out as the `dto` part, the optional
/// thumbnail as `thumbnail`.
///
/// # Errors
///
/// Returns an encoding failure, the server's rejection, or a transport failure.
pub async fn create_item(config: &ClientConfig, form: &ItemForm, thumbnail: Option<UploadFile>) -> Result<(), SyncError> {
    #[cfg(feature = "hydrate")]
    {
        let body = web_sys::FormData::new().map_err(js_error)?;
        body.append_with_blob("dto", &json_blob(form)?).map_err(js_error)?;
        if let Some(file) = thumbnail.as_ref() {
            append_file(&body, "thumbnail", file)?;
        }
        let request = with_auth(gloo_net::http::Request::post(&config.endpoint(NEW_ITEM_PATH)))
            .body(body)
            .map_err(network_error)?;
        send(request).await.map(drop)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, form, thumbnail);
        Err(SyncError::Network(SERVER_UNAVAILABLE.to_owned()))
    }
}

/// Public item detail, used by the checkout page.
///
/// # Errors
///
/// [`SyncError::NotFound`] for an unknown item, otherwise the server's
/// rejection or a transport failure.
pub async fn fetch_public_item(config: &ClientConfig, id: i64) -> Result<ItemDetail, SyncError> {
    #[cfg(feature = "hydrate")]
    {
        get_json(&config.endpoint(&public_item_endpoint(id))).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, id);
        Err(SyncError::Network(SERVER_UNAVAILABLE.to_owned()))
    }
}

// =============================================================================
// Penalties and rentals
// =============================================================================

/// Penalty history for the signed-in user.
///
/// # Errors
///
/// Returns the server's rejection or a transport failure.
pub async fn fetch_penalties(config: &ClientConfig) -> Result<PenaltyResponse, SyncError> {
    #[cfg(feature = "hydrate")]
    {
        get_json(&config.endpoint(PENALTIES_PATH)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = config;
        Err(SyncError::Network(SERVER_UNAVAILABLE.to_owned()))
    }
}

/// Submit a paid rental request.
///
/// # Errors
///
/// Returns the server's rejection (including penalty blocks) or a transport
/// failure.
pub async fn request_rental(config: &ClientConfig, request: &RentalRequest) -> Result<(), SyncError> {
    #[cfg(feature = "hydrate")]
    {
        post_json(&config.endpoint(RENTAL_REQUEST_PATH), request).await.map(drop)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, request);
        Err(SyncError::Network(SERVER_UNAVAILABLE.to_owned()))
    }
}

// =============================================================================
// Record adapters
// =============================================================================

/// Profile adapter: `GET`, `PATCH` and `DELETE` on `/users/{id}`.
#[derive(Clone, Debug)]
pub struct ProfileApi {
    config: ClientConfig,
}

impl ProfileApi {
    pub fn new(config: ClientConfig) -> Self {
        Self { config }
    }
}

impl RecordSource for ProfileApi {
    type Record = Profile;

    async fn fetch_record(&self, id: &str) -> Result<Profile, SyncError> {
        #[cfg(feature = "hydrate")]
        {
            get_json(&self.config.endpoint(&user_endpoint(id))).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&self.config, id);
            Err(SyncError::Network(SERVER_UNAVAILABLE.to_owned()))
        }
    }
}

impl FieldSync for ProfileApi {
    async fn update_field(&self, id: &str, update: &FieldUpdate) -> Result<(), SyncError> {
        #[cfg(feature = "hydrate")]
        {
            let request = with_auth(gloo_net::http::Request::patch(&self.config.endpoint(&user_endpoint(id))))
                .json(&update.payload())
                .map_err(|e| SyncError::Encode(e.to_string()))?;
            send(request).await.map(drop)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&self.config, id, update);
            Err(SyncError::Network(SERVER_UNAVAILABLE.to_owned()))
        }
    }
}

impl RecordDelete for ProfileApi {
    async fn delete_record(&self, id: &str) -> Result<(), SyncError> {
        #[cfg(feature = "hydrate")]
        {
            let request = with_auth(gloo_net::http::Request::delete(&self.config.endpoint(&user_endpoint(id))))
                .build()
                .map_err(network_error)?;
            send(request).await.map(drop)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&self.config, id);
            Err(SyncError::Network(SERVER_UNAVAILABLE.to_owned()))
        }
    }
}

/// Partner item adapter on `/partner/items/{id}`.
#[derive(Clone, Debug)]
pub struct ItemApi {
    config: ClientConfig,
}

impl ItemApi {
    pub fn new(config: ClientConfig) -> Self {
        Self { config }
    }
}

impl RecordSource for ItemApi {
    type Record = ItemDetail;

    async fn fetch_record(&self, id: &str) -> Result<ItemDetail, SyncError> {
        #[cfg(feature = "hydrate")]
        {
            get_json(&self.config.endpoint(&partner_item_endpoint(id))).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&self.config, id);
            Err(SyncError::Network(SERVER_UNAVAILABLE.to_owned()))
        }
    }
}

impl MultipartSync for ItemApi {
    type Payload = ItemForm;
    type File = UploadFile;

    /// `PUT` with parts `item` (JSON), optional `thumbnail`, and one
    /// `detailImages` part per new file.
    async fn update_record_multipart(
        &self,
        id: &str,
        payload: &ItemForm,
        files: MultipartFiles<UploadFile>,
    ) -> Result<(), SyncError> {
        #[cfg(feature = "hydrate")]
        {
            let body = web_sys::FormData::new().map_err(js_error)?;
            body.append_with_blob("item", &json_blob(payload)?).map_err(js_error)?;
            if let Some(thumbnail) = files.thumbnail.as_ref() {
                append_file(&body, "thumbnail", thumbnail)?;
            }
            for file in &files.attachments {
                append_file(&body, "detailImages", file)?;
            }
            let request = with_auth(gloo_net::http::Request::put(&self.config.endpoint(&partner_item_endpoint(id))))
                .body(body)
                .map_err(network_error)?;
            send(request).await.map(drop)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&self.config, id, payload, files);
            Err(SyncError::Network(SERVER_UNAVAILABLE.to_owned()))
        }
    }
}

impl RecordDelete for ItemApi {
    async fn delete_record(&self, id: &str) -> Result<(), SyncError> {
        #[cfg(feature = "hydrate")]
        {
            let request = with_auth(gloo_net::http::Request::delete(&self.config.endpoint(&partner_item_endpoint(id))))
                .build()
                .map_err(network_error)?;
            send(request).await.map(drop)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&self.config, id);
            Err(SyncError::Network(SERVER_UNAVAILABLE.to_owned()))
        }
    }
}
