use super::*;

// =============================================================
// User
// =============================================================

#[test]
fn user_deserializes_camel_case_payload() {
    let raw = r#"{
        "id": 7,
        "username": "jdoe",
        "email": "jdoe@example.com",
        "fullName": "John Doe",
        "phone": "+1 555",
        "address": "1 Main St",
        "role": "RIDER"
    }"#;
    let user: User = serde_json::from_str(raw).unwrap();
    assert_eq!(user.id, 7);
    assert_eq!(user.full_name.as_deref(), Some("John Doe"));
    assert_eq!(user.role, Role::Rider);
}

#[test]
fn user_optional_fields_default_to_none() {
    let raw = r#"{"id":1,"username":"admin","email":"a@b.c","role":"ADMIN"}"#;
    let user: User = serde_json::from_str(raw).unwrap();
    assert!(user.full_name.is_none());
    assert!(user.phone.is_none());
    assert!(user.address.is_none());
}

#[test]
fn user_id_accepts_float_and_string_numbers() {
    let from_float: User = serde_json::from_str(r#"{"id":3.0,"username":"u","email":"e","role":"RIDER"}"#).unwrap();
    assert_eq!(from_float.id, 3);
    let from_string: User = serde_json::from_str(r#"{"id":"42","username":"u","email":"e","role":"RIDER"}"#).unwrap();
    assert_eq!(from_string.id, 42);
}

#[test]
fn user_without_role_is_rejected() {
    let result = serde_json::from_str::<User>(r#"{"id":1,"username":"u","email":"e"}"#);
    assert!(result.is_err());
}

#[test]
fn user_with_unknown_role_is_rejected() {
    let result = serde_json::from_str::<User>(r#"{"id":1,"username":"u","email":"e","role":"MANAGER"}"#);
    assert!(result.is_err());
}

#[test]
fn user_id_rejects_fractional_number() {
    let result = serde_json::from_str::<User>(r#"{"id":1.5,"username":"u","email":"e","role":"RIDER"}"#);
    assert!(result.is_err());
}

#[test]
fn user_serializes_full_name_as_camel_case() {
    let user = User {
        id: 1,
        username: "u".to_owned(),
        email: "e".to_owned(),
        full_name: Some("Full".to_owned()),
        phone: None,
        address: None,
        role: Role::Admin,
    };
    let value = serde_json::to_value(&user).unwrap();
    assert_eq!(value["fullName"], "Full");
    assert_eq!(value["role"], "ADMIN");
}

#[test]
fn display_name_prefers_full_name() {
    let mut user: User = serde_json::from_str(r#"{"id":1,"username":"jdoe","email":"e","role":"CUSTOMER"}"#).unwrap();
    assert_eq!(user.display_name(), "jdoe");
    user.full_name = Some("   ".to_owned());
    assert_eq!(user.display_name(), "jdoe");
    user.full_name = Some("John Doe".to_owned());
    assert_eq!(user.display_name(), "John Doe");
}

// =============================================================
// Role
// =============================================================

#[test]
fn role_parse_matches_wire_names() {
    for role in [Role::Admin, Role::Customer, Role::Employee, Role::Rider] {
        assert_eq!(Role::parse(role.as_str()), Some(role));
    }
    assert_eq!(Role::parse("MANAGER"), None);
}

#[test]
fn assignable_roles_exclude_admin() {
    assert_eq!(Role::ASSIGNABLE, [Role::Employee, Role::Rider, Role::Customer]);
}

// =============================================================
// OrderStatus
// =============================================================

#[test]
fn order_status_in_transit_uses_spaced_wire_name() {
    let json = serde_json::to_string(&OrderStatus::InTransit).unwrap();
    assert_eq!(json, "\"In Transit\"");
    let parsed: OrderStatus = serde_json::from_str("\"In Transit\"").unwrap();
    assert_eq!(parsed, OrderStatus::InTransit);
}

#[test]
fn order_status_labels_match_wire_names() {
    for status in OrderStatus::ALL {
        let json = serde_json::to_string(&status).unwrap();
        assert_eq!(json, format!("\"{}\"", status.label()));
    }
}

// =============================================================
// Payloads
// =============================================================

#[test]
fn new_user_serializes_camel_case() {
    let payload = NewUser {
        username: "rider1".to_owned(),
        password: "secret".to_owned(),
        email: "r@x.io".to_owned(),
        full_name: "Rider One".to_owned(),
        phone: String::new(),
        address: String::new(),
        role: Role::Rider,
    };
    let value = serde_json::to_value(&payload).unwrap();
    assert_eq!(value["fullName"], "Rider One");
    assert_eq!(value["role"], "RIDER");
    assert!(value.get("full_name").is_none());
}

#[test]
fn auth_response_parses_token_and_user() {
    let raw = r#"{"token":"abc","user":{"id":1,"username":"admin","email":"a@b.c","role":"ADMIN"}}"#;
    let resp: AuthResponse = serde_json::from_str(raw).unwrap();
    assert_eq!(resp.token, "abc");
    assert_eq!(resp.user.role, Role::Admin);
}
