use super::*;

#[test]
fn notify_state_default_is_empty() {
    let state = NotifyState::default();
    assert!(state.current.is_none());
    assert_eq!(state.seq, 0);
}

#[test]
fn show_replaces_current_and_bumps_seq() {
    let mut state = NotifyState::default();
    let first = state.show(Notification::info("Payment", "Processing..."));
    let second = state.show(Notification::success("Payment", "Done"));
    assert_eq!(first + 1, second);
    assert_eq!(state.current.as_ref().map(|n| n.tone), Some(Tone::Success));
}

#[test]
fn expire_ignores_stale_sequence() {
    let mut state = NotifyState::default();
    let stale = state.show(Notification::info("a", "a"));
    let fresh = state.show(Notification::error("b", "b"));

    state.expire(stale);
    assert_eq!(state.current.as_ref().map(|n| n.title.as_str()), Some("b"));

    state.expire(fresh);
    assert!(state.current.is_none());
}

#[test]
fn close_clears_regardless_of_seq() {
    let mut state = NotifyState::default();
    state.show(Notification::error("x", "y"));
    state.close();
    assert!(state.current.is_none());
}
