use super::*;
use serde_json::json;

#[test]
fn condition_routes_and_query_values() {
    assert_eq!(Condition::New.path(), "/nuevos");
    assert_eq!(Condition::Used.path(), "/usados");
    assert_eq!(Condition::New.query_value(), "nuevo");
    assert_eq!(Condition::Used.query_value(), "usado");
    assert_eq!(Condition::Used.detail_path("abc"), "/usados/abc");
}

#[test]
fn login_response_accepts_token_aliases() {
    let resp: LoginResponse = serde_json::from_value(json!({ "accessToken": "t" })).unwrap();
    assert_eq!(resp.token, "t");
    assert_eq!(resp.user, None);
}

#[test]
fn login_response_into_session_keeps_string_user() {
    let resp: LoginResponse = serde_json::from_value(json!({ "token": "t", "user": "admin" })).unwrap();
    let session = resp.into_session();
    assert_eq!(session.token, "t");
    assert_eq!(session.user.as_deref(), Some("admin"));
}

#[test]
fn login_response_into_session_serializes_object_user() {
    let resp: LoginResponse =
        serde_json::from_value(json!({ "token": "t", "usuario": { "username": "admin" } })).unwrap();
    assert_eq!(resp.into_session().user.as_deref(), Some(r#"{"username":"admin"}"#));
}

#[test]
fn login_response_without_token_is_rejected() {
    assert!(serde_json::from_value::<LoginResponse>(json!({ "user": "admin" })).is_err());
}

#[test]
fn unwrap_vehicle_handles_nested_and_flat_bodies() {
    assert_eq!(unwrap_vehicle(json!({ "auto": { "id": "1" } })), json!({ "id": "1" }));
    assert_eq!(unwrap_vehicle(json!({ "id": "2", "data": "x" })), json!({ "id": "2", "data": "x" }));
    assert_eq!(unwrap_vehicle(json!(null)), json!(null));
}
