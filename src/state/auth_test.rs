use super::*;

#[test]
fn auth_state_default_has_no_user() {
    let state = AuthState::default();
    assert!(state.user.is_none());
    assert!(!state.loading);
}

#[test]
fn signed_out_requires_settled_fetch() {
    let mut state = AuthState {
        user: None,
        loading: true,
    };
    assert!(!state.signed_out());
    state.loading = false;
    assert!(state.signed_out());
}

#[test]
fn signed_out_is_false_with_user_present() {
    let state = AuthState {
        user: Some(User {
            current_user_id: Some(1),
            username: "jordan".to_owned(),
        }),
        loading: false,
    };
    assert!(!state.signed_out());
}
