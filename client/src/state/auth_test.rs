use super::*;

fn ana() -> User {
    User { id: "sid-1".to_owned(), name: "Ana".to_owned() }
}

#[test]
fn pending_is_loading_and_signed_out() {
    let state = AuthState::pending();
    assert!(state.loading);
    assert!(state.user.is_none());
    assert_eq!(state.greeting(), None);
}

#[test]
fn resolve_with_user_signs_in() {
    let mut state = AuthState::pending();
    state.resolve(Some(ana()));
    assert!(!state.loading);
    assert_eq!(state.user, Some(ana()));
    assert_eq!(state.greeting().as_deref(), Some("Hello, Ana"));
}

#[test]
fn resolve_without_user_finishes_loading() {
    let mut state = AuthState::pending();
    state.resolve(None);
    assert_eq!(state, AuthState { user: None, loading: false });
}
