use super::*;

// =============================================================================
// Endpoint paths
// =============================================================================

#[test]
fn record_endpoints_format_expected_paths() {
    assert_eq!(user_endpoint("me"), "/users/me");
    assert_eq!(partner_item_endpoint("42"), "/partner/items/42");
    assert_eq!(public_item_endpoint(7), "/items/7");
    assert_eq!(subcategories_endpoint(3), "/categories/3/subcategories");
}

#[test]
fn endpoints_join_onto_api_base() {
    let config = ClientConfig::with_api_base("https://rent.example.com/api/");
    assert_eq!(config.endpoint(LOGIN_PATH), "https://rent.example.com/api/auth/login");
    assert_eq!(config.endpoint(NEW_ITEM_PATH), "https://rent.example.com/api/partner/items/new");
    assert_eq!(config.endpoint(PENALTIES_PATH), "https://rent.example.com/api/penalties/me");
    assert_eq!(config.endpoint(RESET_REQUEST_PATH), "https://rent.example.com/api/auth/password-reset/request");
    assert_eq!(config.endpoint(RESET_VERIFY_PATH), "https://rent.example.com/api/auth/password-reset/verify");
    assert_eq!(config.endpoint(RENTAL_REQUEST_PATH), "https://rent.example.com/api/rentals/request");
    assert_eq!(config.endpoint(CATEGORIES_PATH), "https://rent.example.com/api/categories");
}

// =============================================================================
// Login token extraction
// =============================================================================

#[test]
fn login_token_prefers_authorization_header() {
    let token = token_from_login_response(Some("Bearer header.jwt"), r#"{"accessToken":"body.jwt"}"#);
    assert_eq!(token.as_deref(), Some("header.jwt"));
}

#[test]
fn login_token_falls_back_to_body_fields() {
    assert_eq!(token_from_login_response(None, r#"{"accessToken":"a"}"#).as_deref(), Some("a"));
    assert_eq!(token_from_login_response(Some("Basic x"), r#"{"token":"t"}"#).as_deref(), Some("t"));
    assert_eq!(token_from_login_response(None, r#""quoted""#).as_deref(), Some("quoted"));
    assert_eq!(token_from_login_response(None, "raw.jwt.value").as_deref(), Some("raw.jwt.value"));
}

#[test]
fn login_token_missing_everywhere_is_none() {
    assert_eq!(token_from_login_response(None, r#"{"user":"x"}"#), None);
    assert_eq!(token_from_login_response(None, ""), None);
    assert_eq!(token_from_login_response(None, "Login ok"), None);
    assert_eq!(token_from_login_response(None, r#"{"token":""}"#), None);
}
