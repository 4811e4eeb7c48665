use super::*;

#[test]
fn signed_out_session_is_empty_object() {
    let session: SessionResponse = serde_json::from_str("{}").expect("parse");
    assert_eq!(session, SessionResponse::default());
    assert!(session.user.is_none());
}

#[test]
fn signed_in_session_reads_camel_case_fields() {
    let raw = r#"{
        "user": {"id": "u-1", "name": "Ada", "email": "ada@example.com", "joinDate": "2024-01-02"},
        "expires": "2026-01-01T00:00:00Z"
    }"#;
    let session: SessionResponse = serde_json::from_str(raw).expect("parse");
    let user = session.user.expect("user");
    assert_eq!(user.id, "u-1");
    assert_eq!(user.join_date.as_deref(), Some("2024-01-02"));
    assert!(user.phone.is_none());
}

#[test]
fn user_without_id_still_parses() {
    let session: SessionResponse = serde_json::from_str(r#"{"user": {"name": "Ada"}}"#).expect("parse");
    assert_eq!(session.user.expect("user").id, "");
}

#[test]
fn display_name_and_initial_fall_back() {
    let anon = SessionUser::default();
    assert_eq!(anon.display_name(), "Cinematic Star");
    assert_eq!(anon.initial(), "U");

    let named = SessionUser { name: Some("grace".to_owned()), ..SessionUser::default() };
    assert_eq!(named.display_name(), "grace");
    assert_eq!(named.initial(), "G");
}
