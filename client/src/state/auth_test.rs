use super::*;

fn user(id: &str) -> SessionUser {
    SessionUser { id: id.to_owned(), name: Some("Ada".to_owned()), ..SessionUser::default() }
}

#[test]
fn default_is_loading() {
    let state = AuthState::default();
    assert_eq!(state.status, SessionStatus::Loading);
    assert_eq!(state.gate(), Gate::Loading);
    assert!(state.user_id().is_none());
}

#[test]
fn resolved_without_user_asks_for_sign_in() {
    let state = AuthState::resolved(None);
    assert_eq!(state.status, SessionStatus::Unauthenticated);
    assert_eq!(state.gate(), Gate::SignIn);
}

#[test]
fn resolved_with_user_is_ready() {
    let state = AuthState::resolved(Some(user("u-1")));
    assert_eq!(state.status, SessionStatus::Authenticated);
    assert_eq!(state.gate(), Gate::Ready(user("u-1")));
    assert_eq!(state.user_id(), Some("u-1"));
}

#[test]
fn user_without_id_reports_missing_session_data() {
    let state = AuthState::resolved(Some(user("")));
    assert_eq!(state.gate(), Gate::MissingUser);
    assert!(state.user_id().is_none());
}
