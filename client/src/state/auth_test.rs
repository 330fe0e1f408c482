use super::*;

#[test]
fn auth_state_default_is_loading_without_token() {
    let state = AuthState::default();
    assert!(state.loading);
    assert!(!state.is_signed_in());
}

#[test]
fn loaded_with_token_is_signed_in() {
    let state = AuthState::loaded(Some("abc".to_owned()));
    assert!(!state.loading);
    assert!(state.is_signed_in());
}

#[test]
fn loaded_treats_empty_token_as_signed_out() {
    let state = AuthState::loaded(Some(String::new()));
    assert!(!state.is_signed_in());
}
